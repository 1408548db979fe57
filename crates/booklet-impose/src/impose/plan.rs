//! Signature planning
//!
//! Splits the normalized page stream into signatures (groups whose size is
//! a multiple of 4) and pads each group with blank pages up to its planned
//! size. The planner only computes sizes; padding is a separate step.

use crate::types::*;

/// Round up to the next multiple of 4 (0 stays 0)
fn round_up_to_multiple_of_4(n: usize) -> usize {
    n.div_ceil(4) * 4
}

/// Compute the ordered list of signature sizes for `total_pages`.
///
/// With a user-requested size every signature is exactly that size and the
/// final one is padded up to it. Otherwise small inputs become a single
/// signature rounded up to a multiple of 4, and larger inputs are split
/// into `cap`-page signatures with a rounded-up tail; the cap itself must
/// be a positive multiple of 4 since full buckets are emitted at exactly
/// that size.
///
/// Every returned size is a positive multiple of 4 and the sizes sum to at
/// least `total_pages`. Zero pages yield an empty plan.
pub fn plan_signatures(
    total_pages: usize,
    user_size: Option<usize>,
    cap: usize,
) -> Result<Vec<usize>> {
    if let Some(size) = user_size {
        if size == 0 || size % 4 != 0 {
            return Err(ImposeError::InvalidArgument(
                "Signature size must be a positive multiple of 4".to_string(),
            ));
        }
        let count = total_pages.div_ceil(size);
        return Ok(vec![size; count]);
    }

    if cap == 0 || cap % 4 != 0 {
        return Err(ImposeError::InvalidArgument(
            "Signature cap must be a positive multiple of 4".to_string(),
        ));
    }

    if total_pages == 0 {
        return Ok(Vec::new());
    }

    if total_pages <= cap {
        return Ok(vec![round_up_to_multiple_of_4(total_pages)]);
    }

    let mut sizes = vec![cap; total_pages / cap];
    let remainder = total_pages % cap;
    if remainder > 0 {
        sizes.push(round_up_to_multiple_of_4(remainder));
    }
    Ok(sizes)
}

/// Pad the normalized page stream so each planned signature slice is full.
///
/// Consumes real pages in order and appends blank `width`×`height` pages at
/// the tail of each signature that comes up short.
pub(crate) fn pad_to_plan(pages: Vec<Page>, plan: &[usize], width: f32, height: f32) -> Vec<Page> {
    let total: usize = plan.iter().sum();
    let mut padded = pages;
    padded.reserve(total.saturating_sub(padded.len()));

    let mut cursor = 0;
    for &size in plan {
        let boundary = cursor + size;
        // Blanks land at the tail of the final partial signature; earlier
        // signatures are always full.
        while padded.len() < boundary {
            padded.push(Page::blank(width, height));
        }
        cursor = boundary;
    }
    padded
}
