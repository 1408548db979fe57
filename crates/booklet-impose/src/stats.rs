use crate::constants::PAGES_PER_LEAF;
use crate::impose::plan_signatures;
use crate::options::ImposeOptions;
use crate::types::*;

/// Calculate statistics for an imposition run without executing it.
///
/// Shares the signature planner with the pipeline so the reported numbers
/// cannot drift from what `impose` actually produces.
pub fn calculate_statistics(
    source_pages: usize,
    options: &ImposeOptions,
) -> Result<ImpositionStatistics> {
    options.validate()?;

    let total_pages =
        source_pages + (options.front_flyleaves + options.back_flyleaves) * PAGES_PER_LEAF;

    let plan = plan_signatures(total_pages, options.signature_size, options.signature_cap)?;
    let padded: usize = plan.iter().sum();

    Ok(ImpositionStatistics {
        source_pages: total_pages,
        signatures: plan.len(),
        blank_pages_added: padded - total_pages,
        output_sheets: padded / 2,
        pages_per_signature: plan,
    })
}
