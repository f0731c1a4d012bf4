use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::assets;
use crate::models::Currency;

static DISPLAY_DENOM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 _-]+$").unwrap());
static BASE_DENOM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 _/-]+$").unwrap());
static IBC_REPRESENTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ibc/[A-F0-9]{64}$").unwrap());

/// A currency-set failure: the reason plus the serialized form (or denom) of
/// the offending currency, used as the failure identity in reports.
#[derive(Debug, PartialEq, Eq)]
pub struct CurrencyIssue {
    pub identity: Option<String>,
    pub reason: String,
}

impl CurrencyIssue {
    fn new(identity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            reason: reason.into(),
        }
    }
}

/// One pass over the ordered currency list: each currency is validated on
/// its own, the main-currency count is tracked, and non-empty denom values
/// must be unique within the list. Scanning stops at the first bad currency.
pub fn currency_set(currencies: &[Currency], chain_dir: &Path) -> Result<(), CurrencyIssue> {
    let mut found_main = false;
    let mut base_denoms = HashSet::new();
    let mut display_denoms = HashSet::new();
    let mut ibc_representations = HashSet::new();

    for currency in currencies {
        if let Err(reason) = single_currency(currency, chain_dir) {
            let identity =
                serde_json::to_string(currency).unwrap_or_else(|_| format!("{currency:?}"));
            return Err(CurrencyIssue::new(identity, reason));
        }

        if currency.currency_type == "main" {
            if found_main {
                return Err(CurrencyIssue::new(
                    currency.base_denom.clone(),
                    "duplicated main currency found",
                ));
            }
            found_main = true;
        }

        if !currency.base_denom.is_empty() && !base_denoms.insert(currency.base_denom.clone()) {
            return Err(CurrencyIssue::new(
                currency.base_denom.clone(),
                format!("duplicated base denom found: {}", currency.base_denom),
            ));
        }
        if !currency.display_denom.is_empty()
            && !display_denoms.insert(currency.display_denom.clone())
        {
            return Err(CurrencyIssue::new(
                currency.display_denom.clone(),
                format!("duplicated display denom found: {}", currency.display_denom),
            ));
        }
        if !currency.ibc_representation.is_empty()
            && !ibc_representations.insert(currency.ibc_representation.clone())
        {
            return Err(CurrencyIssue::new(
                currency.ibc_representation.clone(),
                format!(
                    "duplicated IBC representation found: {}",
                    currency.ibc_representation
                ),
            ));
        }
    }

    if !found_main {
        return Err(CurrencyIssue {
            identity: None,
            reason: "at least one main currency is required".into(),
        });
    }
    Ok(())
}

fn single_currency(currency: &Currency, chain_dir: &Path) -> Result<(), String> {
    if currency.display_denom.is_empty() {
        return Err("display denom is required".into());
    }
    if currency.display_denom.trim() != currency.display_denom {
        return Err("display denom must not have leading or trailing spaces".into());
    }
    if currency.display_denom.contains("  ") {
        return Err("display denom must not have consecutive spaces".into());
    }
    if !DISPLAY_DENOM_RE.is_match(&currency.display_denom) {
        return Err("display denom must be alphanumeric, space, underscore, or dash".into());
    }

    if currency.base_denom.is_empty() {
        return Err("base denom is required".into());
    }
    if currency.base_denom.trim() != currency.base_denom {
        return Err("base denom must not have leading or trailing spaces".into());
    }
    if currency.base_denom.contains("  ") {
        return Err("base denom must not have consecutive spaces".into());
    }
    if currency.base_denom.contains("//") {
        return Err("base denom must not have consecutive slashes".into());
    }
    if currency.base_denom.contains("--") {
        return Err("base denom must not have consecutive dashes".into());
    }
    if currency.base_denom.contains("__") {
        return Err("base denom must not have consecutive underscores".into());
    }
    if !BASE_DENOM_RE.is_match(&currency.base_denom) {
        return Err("base denom must be alphanumeric, space, underscore, dash, or slash".into());
    }

    if !currency.ibc_representation.is_empty() {
        if currency.ibc_representation.trim() != currency.ibc_representation {
            return Err("IBC representation must not have leading or trailing spaces".into());
        }
        if !IBC_REPRESENTATION_RE.is_match(&currency.ibc_representation) {
            return Err("IBC representation must match format ibc/<64 uppercase hex chars>".into());
        }
    }

    if !currency.bridge_denom.is_empty() {
        if currency.bridge_denom.trim() != currency.bridge_denom {
            return Err("bridge denom must not have leading or trailing spaces".into());
        }
        if currency.bridge_denom.contains("  ") {
            return Err("bridge denom must not have consecutive spaces".into());
        }
        if currency.bridge_denom.contains("//") {
            return Err("bridge denom must not have consecutive slashes".into());
        }
        if currency.bridge_denom.contains("--") {
            return Err("bridge denom must not have consecutive dashes".into());
        }
        if currency.bridge_denom.contains("__") {
            return Err("bridge denom must not have consecutive underscores".into());
        }
        if !BASE_DENOM_RE.is_match(&currency.bridge_denom) {
            return Err(
                "bridge denom must be alphanumeric, space, underscore, dash, or slash".into(),
            );
        }
    }

    if currency.decimals < 0 {
        return Err("decimals must be non-negative".into());
    }
    if currency.decimals > 18 {
        return Err("decimals must not exceed 18".into());
    }

    assets::logo(&currency.logo, chain_dir)
        .map_err(|reason| format!("bad currency logo: {reason}"))?;

    match currency.currency_type.as_str() {
        "main" | "regular" => Ok(()),
        other => Err(format!("not recognized currency type: {other}")),
    }
}
