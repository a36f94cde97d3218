use super::ui;
use crate::core::{Converter, SyncOutcome};
use anyhow::Result;

pub fn format_outcome(outcome: &SyncOutcome) -> String {
    let style_type = match outcome {
        SyncOutcome::Updated { .. } => ui::StyleType::TotalValue,
        SyncOutcome::Skipped => ui::StyleType::Subtle,
        SyncOutcome::Failed { .. } => ui::StyleType::Error,
    };
    ui::style_text(&outcome.to_string(), style_type)
}

/// Refreshes the cached rates and reports what happened.
pub async fn run(converter: &Converter) -> Result<()> {
    let spinner = ui::new_spinner("Syncing exchange rates");
    let outcome = converter.sync_rates().await;
    spinner.finish_and_clear();

    println!("{}", format_outcome(&outcome?));
    Ok(())
}
