use thiserror::Error;

use crate::constants::mm_to_pt;
use crate::transform::Transform;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Rotation of a source page, restricted to quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Fold an arbitrary degree value into the supported set.
    ///
    /// Values outside {0, 90, 180, 270} (mod 360) are treated as unrotated
    /// rather than rejected, so malformed input degrades gracefully instead
    /// of aborting a whole batch.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => Rotation::Deg90,
            180 => Rotation::Deg180,
            270 => Rotation::Deg270,
            _ => Rotation::None,
        }
    }
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions in points
    pub fn dimensions_pt(self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }
}

/// Opaque handle to renderable page content.
///
/// The engine never inspects content; it only routes handles into output
/// placements. The caller's renderer resolves the handle when drawing
/// through the placement transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentRef(pub usize);

/// One input page as supplied by the caller's page source.
///
/// Dimensions and origin are in points. `rotation_degrees` is kept raw at
/// this boundary and folded into [`Rotation`] during normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePage {
    /// Page width in points (must be positive)
    pub width: f32,
    /// Page height in points (must be positive)
    pub height: f32,
    /// Lower-left origin offset (llx, lly) of the page box
    pub origin: (f32, f32),
    /// Declared rotation in degrees
    pub rotation_degrees: i32,
    /// Handle to the page's renderable content
    pub content: ContentRef,
}

impl SourcePage {
    /// Create an unrotated page with origin at (0, 0)
    pub fn new(width: f32, height: f32, content: ContentRef) -> Self {
        Self {
            width,
            height,
            origin: (0.0, 0.0),
            rotation_degrees: 0,
            content,
        }
    }
}

/// One placed piece of content on an output page: draw `content` through
/// `transform`, clipped to the page box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub content: ContentRef,
    pub transform: Transform,
}

/// An output page (normalized page or composed sheet).
///
/// Pages are immutable values: each pipeline stage creates new ones and
/// hands them forward, never mutating a page after creation. A blank page
/// has no placements.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Content placements, in draw order
    pub placements: Vec<Placement>,
}

impl Page {
    /// Create a blank page of the given size
    pub fn blank(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            placements: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Statistics about an imposition run
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionStatistics {
    /// Total number of source pages (flyleaves included)
    pub source_pages: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Planned size of each signature, in order
    pub pages_per_signature: Vec<usize>,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Total number of composed output sheets
    pub output_sheets: usize,
}
