//! Booklet imposition pipeline
//!
//! This module orchestrates the imposition process:
//! 1. Normalize every source page onto the target page size
//! 2. Add flyleaves (each flyleaf = 1 leaf = 2 pages)
//! 3. Plan signatures and pad them with blank pages
//! 4. Compose each signature's page pairs onto double-wide sheets
//! 5. Apply bleed compensation to every composed sheet
//!
//! All geometry lives in the stage modules; the driver only sequences them.

mod bleed;
mod compose;
mod normalize;
mod plan;

pub use plan::plan_signatures;

use crate::constants::PAGES_PER_LEAF;
use crate::options::ImposeOptions;
use crate::types::*;

/// Main imposition entry point.
///
/// Consumes an ordered page sequence and produces the ordered sequence of
/// composed sheets. The caller's renderer draws each sheet by resolving
/// its placements; this function performs no I/O.
pub async fn impose(pages: &[SourcePage], options: &ImposeOptions) -> Result<Vec<Page>> {
    options.validate()?;

    let pages = pages.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&pages, &options)).await?
}

fn impose_sync(pages: &[SourcePage], options: &ImposeOptions) -> Result<Vec<Page>> {
    let (page_width, page_height) = options.page_dimensions_pt();
    let (sheet_width, sheet_height) = options.sheet_dimensions_pt();
    let bleed_pt = options.bleed_pt();

    // Normalization of the full input happens before any slicing; fold
    // order depends on the complete sequence.
    let normalized: Vec<Page> = pages
        .iter()
        .map(|p| normalize::normalize_page(p, page_width, page_height))
        .collect();

    let normalized = add_flyleaves(
        normalized,
        options.front_flyleaves,
        options.back_flyleaves,
        page_width,
        page_height,
    );

    let plan = plan_signatures(normalized.len(), options.signature_size, options.signature_cap)?;
    let padded = plan::pad_to_plan(normalized, &plan, page_width, page_height);

    let mut output = Vec::with_capacity(padded.len() / 2);
    let mut cursor = 0;
    for &size in &plan {
        let signature = &padded[cursor..cursor + size];
        cursor += size;

        let sheets = compose::compose_signature(signature, page_width, sheet_width, sheet_height);
        output.extend(sheets.into_iter().map(|s| bleed::compensate(s, bleed_pt)));
    }

    Ok(output)
}

/// Insert blank leaves before and after the normalized page stream
fn add_flyleaves(
    pages: Vec<Page>,
    front: usize,
    back: usize,
    width: f32,
    height: f32,
) -> Vec<Page> {
    if front == 0 && back == 0 {
        return pages;
    }

    let mut result = Vec::with_capacity(pages.len() + (front + back) * PAGES_PER_LEAF);
    for _ in 0..front * PAGES_PER_LEAF {
        result.push(Page::blank(width, height));
    }
    result.extend(pages);
    for _ in 0..back * PAGES_PER_LEAF {
        result.push(Page::blank(width, height));
    }
    result
}
