//! Bleed compensation
//!
//! Scales a composed sheet's content about the sheet center so the printed
//! result overhangs every trim edge by at least the configured bleed
//! distance. The scale factor is isotropic: the tighter axis gets exactly
//! the requested bleed and the looser axis overscans, trading overscan for
//! guaranteed coverage on both axes.

use crate::transform::Transform;
use crate::types::Page;

/// Scale-about-center transform for a `sheet_width`×`sheet_height` sheet.
///
/// The conjugation order matters: translate the center to the origin,
/// scale, translate back. A bleed of 0 yields the identity.
pub(crate) fn bleed_transform(sheet_width: f32, sheet_height: f32, bleed_pt: f32) -> Transform {
    let sx = 1.0 + 2.0 * bleed_pt / sheet_width;
    let sy = 1.0 + 2.0 * bleed_pt / sheet_height;
    let s = sx.max(sy);

    let cx = sheet_width / 2.0;
    let cy = sheet_height / 2.0;
    Transform::translate(-cx, -cy)
        .then(Transform::scale(s))
        .then(Transform::translate(cx, cy))
}

/// Apply bleed compensation to a composed sheet, producing a fresh sheet
/// of the same nominal size with every placement scaled about the center.
pub(crate) fn compensate(sheet: Page, bleed_pt: f32) -> Page {
    if bleed_pt == 0.0 {
        return sheet;
    }

    let t = bleed_transform(sheet.width, sheet.height, bleed_pt);
    let placements = sheet
        .placements
        .iter()
        .map(|p| {
            let mut scaled = *p;
            scaled.transform = scaled.transform.then(t);
            scaled
        })
        .collect();

    Page {
        width: sheet.width,
        height: sheet.height,
        placements,
    }
}
