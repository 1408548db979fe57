//! Sheet composition for center-fold booklets
//!
//! Pairs the pages of one signature in saddle-stitch nesting order and
//! merges each pair side by side onto a double-wide sheet, so the folded
//! and stapled stack reads sequentially 1..N:
//!
//! ```text
//! 8-page signature:
//!
//! sheet 0: [ 8 | 1 ]    sheet 1: [ 2 | 7 ]
//! sheet 2: [ 6 | 3 ]    sheet 3: [ 4 | 5 ]
//! ```

use crate::transform::Transform;
use crate::types::Page;

/// Left/right page pair for sheet `i` of an `n`-page signature.
///
/// Even sheets take the tail page on the left and the head page on the
/// right; odd sheets swap sides. Returns indices into the signature slice.
pub(crate) fn pair_for_sheet(i: usize, n: usize) -> (usize, usize) {
    debug_assert!(n % 4 == 0 && i < n / 2);
    if i % 2 == 0 {
        (n - 1 - i, i)
    } else {
        (i, n - 1 - i)
    }
}

/// Merge one left/right page pair onto a `sheet_width`×`sheet_height`
/// sheet. The left page keeps its placements; the right page's placements
/// shift by the target page width, so its left edge starts exactly where
/// the left page ends.
fn merge_pair(
    left: &Page,
    right: &Page,
    page_width: f32,
    sheet_width: f32,
    sheet_height: f32,
) -> Page {
    let shift = Transform::translate(page_width, 0.0);

    let mut placements = Vec::with_capacity(left.placements.len() + right.placements.len());
    placements.extend(left.placements.iter().copied());
    placements.extend(right.placements.iter().map(|p| {
        let mut shifted = *p;
        shifted.transform = shifted.transform.then(shift);
        shifted
    }));

    Page {
        width: sheet_width,
        height: sheet_height,
        placements,
    }
}

/// Compose one padded signature (length a multiple of 4) into its `N/2`
/// output sheets, in pair order `i = 0, 1, 2, ...`.
pub(crate) fn compose_signature(
    pages: &[Page],
    page_width: f32,
    sheet_width: f32,
    sheet_height: f32,
) -> Vec<Page> {
    let n = pages.len();
    debug_assert!(n % 4 == 0);

    (0..n / 2)
        .map(|i| {
            let (left, right) = pair_for_sheet(i, n);
            merge_pair(
                &pages[left],
                &pages[right],
                page_width,
                sheet_width,
                sheet_height,
            )
        })
        .collect()
}
