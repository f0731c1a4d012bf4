//! Field-level predicates shared by the rule battery.
//!
//! Every predicate is pure and returns the reason text on failure; callers
//! decide how to contextualize it.

use once_cell::sync::Lazy;
use regex::Regex;

static ALNUM_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+$").unwrap());
static COSMOS_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+-[0-9]+$").unwrap());
pub(crate) static COSMOS_EVM_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+_[0-9]+-[0-9]+$").unwrap());
static DASHED_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+-[a-z0-9]+$").unwrap());
static PROHIBITED_NAME_CHARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>/\\%]").unwrap());
static BECH32_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+$").unwrap());

/// Chain id shape rules. `evm_rollapp` selects the strict `name_N-M` form;
/// otherwise any of the four accepted shapes passes.
pub fn chain_id(id: &str, evm_rollapp: bool) -> Result<(), String> {
    if id.is_empty() {
        return Err("chain id can not be empty".into());
    }
    if id.len() < 3 {
        return Err("chain id is too short".into());
    }
    if id.contains("--") {
        return Err("chain id must not have consecutive dashes".into());
    }
    if id.contains("__") {
        return Err("chain id must not have consecutive underscores".into());
    }
    if id.to_lowercase() != id {
        return Err("chain id must be lowercase".into());
    }
    if !id.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err("chain id must start with a letter".into());
    }

    if evm_rollapp {
        if COSMOS_EVM_ID_RE.is_match(id) {
            return Ok(());
        }
        return Err("chain id must have format <alphanumeric>_<number>-<number>".into());
    }

    if ALNUM_ID_RE.is_match(id)
        || COSMOS_ID_RE.is_match(id)
        || COSMOS_EVM_ID_RE.is_match(id)
        || DASHED_ID_RE.is_match(id)
    {
        Ok(())
    } else {
        Err("chain id does not match any accepted format".into())
    }
}

pub fn chain_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("chain name can not be empty".into());
    }
    if name.trim() != name {
        return Err("chain name must not have leading or trailing spaces".into());
    }
    if name.contains("  ") {
        return Err("chain name must not have consecutive spaces".into());
    }
    // < > to prevent xss; / \ % to prevent path traversal and conflict
    if PROHIBITED_NAME_CHARS_RE.is_match(name) {
        return Err("chain name contains prohibited characters: <, >, /, \\, %".into());
    }
    Ok(())
}

pub fn bech32_prefix(prefix: &str) -> Result<(), String> {
    if prefix.is_empty() {
        return Err("bech32 prefix can not be empty".into());
    }
    if prefix.trim() != prefix {
        return Err("bech32 prefix must not have leading or trailing spaces".into());
    }
    if prefix.to_lowercase() != prefix {
        return Err("bech32 prefix must be lowercase".into());
    }
    if prefix.contains(' ') {
        return Err("bech32 prefix must not contain spaces".into());
    }
    // '1' is the bech32 separator
    if prefix.contains('1') {
        return Err("bech32 prefix must not contain '1'".into());
    }
    if !BECH32_PREFIX_RE.is_match(prefix) {
        return Err("bech32 prefix must be lowercase alphanumeric".into());
    }
    Ok(())
}

pub fn url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("url can not be empty".into());
    }
    if url.trim() != url {
        return Err("url must not have leading or trailing spaces".into());
    }
    if url.contains(' ') {
        return Err("url must not contain spaces".into());
    }
    Ok(())
}

/// Required-URL rule for a whole set. An empty set is fine (the field is
/// optional), and a lone empty string is the "present but blank" sentinel.
pub fn urls(urls: &[String]) -> Result<(), String> {
    if urls.len() == 1 && urls[0].is_empty() {
        return Ok(());
    }
    for candidate in urls {
        url(candidate)?;
    }
    Ok(())
}

/// Looser rule for website/faucet style fields: empty allowed, no whitespace.
pub fn optional_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Ok(());
    }
    if url.trim() != url {
        return Err("url must not have leading or trailing spaces".into());
    }
    if url.contains(' ') {
        return Err("url must not contain spaces".into());
    }
    Ok(())
}

pub fn coin_type(value: i64) -> Result<(), String> {
    if value < 0 {
        return Err("coin type must be non-negative".into());
    }
    if value > 255 {
        return Err("coin type must not exceed 255".into());
    }
    Ok(())
}
