//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers and policy defaults used
//! throughout the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Policy Defaults
// =============================================================================

/// Default bleed distance in millimeters (common print-shop trim tolerance)
pub const DEFAULT_BLEED_MM: f32 = 3.0;

/// Default upper bound on pages per signature when no explicit signature
/// size is requested. Inputs larger than this are split into 20-page
/// signatures plus a rounded-up tail.
pub const DEFAULT_SIGNATURE_CAP: usize = 20;

// =============================================================================
// Flyleaves
// =============================================================================

/// Pages per leaf (front and back sides)
pub const PAGES_PER_LEAF: usize = 2;
