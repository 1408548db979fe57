//! Page normalization
//!
//! Maps an arbitrary input page (any size, origin offset, quarter-turn
//! rotation) onto a canonical target page by translation and rotation
//! only. Oversized content is cropped by the renderer's page-box clip,
//! undersized content is surrounded by blank margin; nothing is rescaled,
//! so physical content size is preserved.

use crate::transform::Transform;
use crate::types::*;

/// Post-rotation visual extents of a page
fn visual_extents(width: f32, height: f32, rotation: Rotation) -> (f32, f32) {
    match rotation {
        Rotation::None | Rotation::Deg180 => (width, height),
        Rotation::Deg90 | Rotation::Deg270 => (height, width),
    }
}

/// Rotation recipe: rotate about the origin, then translate so the rotated
/// content's lower-left corner lands back at (0, 0).
///
/// Kept as a closed table per quarter turn; the rotate/translate order
/// within each recipe is load-bearing.
fn rotation_recipe(width: f32, height: f32, rotation: Rotation) -> Transform {
    let rotate = Transform::rotate(rotation);
    match rotation {
        Rotation::None => Transform::IDENTITY,
        Rotation::Deg90 => rotate.then(Transform::translate(height, 0.0)),
        Rotation::Deg180 => rotate.then(Transform::translate(width, height)),
        Rotation::Deg270 => rotate.then(Transform::translate(0.0, width)),
    }
}

/// Normalize one source page onto a blank `target_width`×`target_height`
/// page: eliminate the origin offset, apply the rotation recipe, and
/// center the rotated extents on the target.
pub(crate) fn normalize_page(src: &SourcePage, target_width: f32, target_height: f32) -> Page {
    let rotation = Rotation::from_degrees(src.rotation_degrees);
    let (rw, rh) = visual_extents(src.width, src.height, rotation);

    let (llx, lly) = src.origin;
    let transform = Transform::translate(-llx, -lly)
        .then(rotation_recipe(src.width, src.height, rotation))
        .then(Transform::translate(
            (target_width - rw) / 2.0,
            (target_height - rh) / 2.0,
        ));

    Page {
        width: target_width,
        height: target_height,
        placements: vec![Placement {
            content: src.content,
            transform,
        }],
    }
}
