use super::ui;
use crate::core::Converter;
use anyhow::Result;

/// Shown when a conversion is unavailable.
pub const CONVERSION_FAILED: &str = "Something went wrong";

/// Rounds to cents for display; the converter itself never rounds.
pub fn format_conversion(result: Option<f64>, to: &str) -> String {
    match result {
        Some(value) => format!("{value:.2} {to}"),
        None => CONVERSION_FAILED.to_string(),
    }
}

pub async fn run(converter: &Converter, amount: f64, from: &str, to: &str) -> Result<()> {
    let from = from.trim().to_uppercase();
    let to = to.trim().to_uppercase();

    let result = converter.convert(amount, &from, &to).await?;
    let text = format_conversion(result, &to);
    let style_type = if result.is_some() {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };

    println!("{}", ui::style_text(&text, style_type));
    Ok(())
}
