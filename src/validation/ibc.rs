use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::IbcRecord;

static CHANNEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^channel-[0-9]+$").unwrap());
static ALLOWED_DENOM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_/-]+$").unwrap());

pub fn validate(ibc: &IbcRecord) -> Result<(), String> {
    // "-" is accepted as a deliberate no-channel marker
    if !ibc.channel.is_empty() && ibc.channel != "-" && !CHANNEL_RE.is_match(&ibc.channel) {
        return Err("IBC channel must match format channel-<number>".into());
    }
    if !ibc.hub_channel.is_empty() && !CHANNEL_RE.is_match(&ibc.hub_channel) {
        return Err("IBC hub channel must match format channel-<number>".into());
    }
    if !ibc.hub_channel.is_empty() && ibc.channel.is_empty() {
        return Err("IBC channel is required if hub channel is set".into());
    }
    if ibc.timeout < 0 {
        return Err("IBC timeout must not be negative".into());
    }

    let mut seen = HashSet::new();
    for denom in &ibc.allowed_denoms {
        if denom.is_empty() {
            return Err("IBC allowed denom must not be empty".into());
        }
        if denom.trim() != denom {
            return Err("IBC allowed denom must not have leading or trailing spaces".into());
        }
        if denom.contains(' ') {
            return Err("IBC allowed denom must not contain spaces".into());
        }
        if denom.contains("//") {
            return Err("IBC allowed denom must not contain consecutive slashes".into());
        }
        if denom.contains("--") {
            return Err("IBC allowed denom must not contain consecutive dashes".into());
        }
        if denom.contains("__") {
            return Err("IBC allowed denom must not contain consecutive underscores".into());
        }
        if !ALLOWED_DENOM_RE.is_match(denom) {
            return Err("IBC allowed denom must be alphanumeric, dash, underscore, or slash".into());
        }
        if !seen.insert(denom.as_str()) {
            return Err(format!("duplicated IBC allowed denom found: {denom}"));
        }
    }
    Ok(())
}
