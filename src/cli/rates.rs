use super::ui;
use crate::core::{AllowedCurrencies, RateSnapshot, RateStore};
use anyhow::Result;
use comfy_table::Cell;

/// Allowed currencies that have a cached rate, in allowed-list order.
pub fn rate_rows<'a>(
    allowed: &'a AllowedCurrencies,
    snapshot: &RateSnapshot,
) -> Vec<(&'a str, f64)> {
    allowed
        .iter()
        .filter_map(|code| snapshot.rate(code).map(|rate| (code, rate)))
        .collect()
}

pub fn display_rates(allowed: &AllowedCurrencies, snapshot: Option<&RateSnapshot>) -> String {
    let rows = snapshot.map_or_else(Vec::new, |s| rate_rows(allowed, s));

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Exchange rates", ui::StyleType::Title)
    );

    if rows.is_empty() {
        output.push_str(&ui::style_text("No currencies found.", ui::StyleType::Error));
        if allowed.is_empty() {
            output.push_str(&format!(
                "\n{}",
                ui::style_text(
                    "Add currencies with `ccv settings add <CODE>`",
                    ui::StyleType::Subtle
                )
            ));
        }
    } else {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Rate")]);
        for (code, rate) in rows {
            table.add_row(vec![Cell::new(code), ui::number_cell(format!("{rate}"))]);
        }
        output.push_str(&table.to_string());
    }

    if let Some(fetched_at) = snapshot.and_then(RateSnapshot::fetched_at) {
        output.push_str(&format!(
            "\n\n{} {}",
            ui::style_text("Last updated:", ui::StyleType::TotalLabel),
            ui::style_text(
                &fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                ui::StyleType::Subtle
            )
        ));
    }

    output
}

pub async fn run(store: &dyn RateStore) -> Result<()> {
    let allowed = store.allowed_currencies().await?;
    let snapshot = store.rates().await?;

    println!("{}", display_rates(&allowed, snapshot.as_ref()));
    Ok(())
}
