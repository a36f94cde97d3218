use super::ui;
use crate::core::RateStore;
use anyhow::{Result, bail};
use tracing::info;

/// Changes to the stored settings.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsCommand {
    Show,
    SetKey(String),
    Add(Vec<String>),
    Remove(String),
    Move { code: String, position: usize },
}

/// Hides all but the first four characters of a key.
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if visible.len() == key.len() {
        "*".repeat(key.chars().count())
    } else {
        format!("{visible}{}", "*".repeat(8))
    }
}

async fn show(store: &dyn RateStore) -> Result<String> {
    let key = store.credential().await?;
    let allowed = store.allowed_currencies().await?;
    let rates = store.rates().await?;

    let key_text = match key.as_deref() {
        Some(key) if !key.trim().is_empty() => mask_key(key),
        _ => ui::style_text("not set", ui::StyleType::Error),
    };
    let allowed_text = if allowed.is_empty() {
        ui::style_text("none", ui::StyleType::Subtle)
    } else {
        allowed.iter().collect::<Vec<_>>().join(", ")
    };
    let cached = rates.map_or(0, |r| r.len());

    Ok(format!(
        "{} {}\n{} {}\n{} {}",
        ui::style_text("API key:", ui::StyleType::TotalLabel),
        key_text,
        ui::style_text("Allowed currencies:", ui::StyleType::TotalLabel),
        allowed_text,
        ui::style_text("Cached rates:", ui::StyleType::TotalLabel),
        cached
    ))
}

/// Applies a settings command and returns the text to show.
pub async fn apply(store: &dyn RateStore, command: SettingsCommand) -> Result<String> {
    match command {
        SettingsCommand::Show => show(store).await,
        SettingsCommand::SetKey(key) => {
            store.set_credential(key).await?;
            info!("API key updated");
            Ok("API key saved".to_string())
        }
        SettingsCommand::Add(codes) => {
            let mut allowed = store.allowed_currencies().await?;
            let added: Vec<String> = codes
                .iter()
                .filter(|code| allowed.add(code))
                .map(|code| code.trim().to_uppercase())
                .collect();
            store.set_allowed_currencies(allowed).await?;
            if added.is_empty() {
                Ok("No new currencies added".to_string())
            } else {
                Ok(format!("Added {}", added.join(", ")))
            }
        }
        SettingsCommand::Remove(code) => {
            let mut allowed = store.allowed_currencies().await?;
            if !allowed.remove(&code) {
                bail!(
                    "Currency {} is not in the allowed list",
                    code.trim().to_uppercase()
                );
            }
            store.set_allowed_currencies(allowed).await?;
            Ok(format!("Removed {}", code.trim().to_uppercase()))
        }
        SettingsCommand::Move { code, position } => {
            let mut allowed = store.allowed_currencies().await?;
            if !allowed.move_to(&code, position) {
                bail!(
                    "Currency {} is not in the allowed list",
                    code.trim().to_uppercase()
                );
            }
            store.set_allowed_currencies(allowed.clone()).await?;
            Ok(format!(
                "Order: {}",
                allowed.iter().collect::<Vec<_>>().join(", ")
            ))
        }
    }
}

pub async fn run(store: &dyn RateStore, command: SettingsCommand) -> Result<()> {
    let output = apply(store, command).await?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryRateStore;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcdefghijkl"), "abcd********");
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key(""), "");
    }

    #[tokio::test]
    async fn test_set_key() {
        let store = MemoryRateStore::new();

        apply(&store, SettingsCommand::SetKey("fca_live_123".to_string()))
            .await
            .unwrap();

        assert_eq!(
            store.credential().await.unwrap().as_deref(),
            Some("fca_live_123")
        );
        let shown = apply(&store, SettingsCommand::Show).await.unwrap();
        assert!(shown.contains("fca_********"));
        assert!(!shown.contains("fca_live_123"));
    }

    #[tokio::test]
    async fn test_add_remove_and_move() {
        let store = MemoryRateStore::new();

        let output = apply(
            &store,
            SettingsCommand::Add(vec!["usd".into(), "EUR".into(), "USD".into(), " ".into()]),
        )
        .await
        .unwrap();
        assert_eq!(output, "Added USD, EUR");

        apply(&store, SettingsCommand::Add(vec!["AUD".into()]))
            .await
            .unwrap();
        let output = apply(
            &store,
            SettingsCommand::Move {
                code: "aud".into(),
                position: 0,
            },
        )
        .await
        .unwrap();
        assert_eq!(output, "Order: AUD, USD, EUR");

        apply(&store, SettingsCommand::Remove("usd".into()))
            .await
            .unwrap();
        let allowed = store.allowed_currencies().await.unwrap();
        assert_eq!(allowed.iter().collect::<Vec<_>>(), vec!["AUD", "EUR"]);
    }

    #[tokio::test]
    async fn test_remove_unknown_currency_fails() {
        let store = MemoryRateStore::new();

        let result = apply(&store, SettingsCommand::Remove("GBP".into())).await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Currency GBP is not in the allowed list"
        );
    }
}
