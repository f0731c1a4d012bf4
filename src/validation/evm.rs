use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::COSMOS_EVM_ID_RE;
use crate::models::{ChainRecord, EvmRecord};

static EVM_HEX_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").unwrap());

/// EVM hex chain id format, plus the numeric cross-check against the
/// cosmos-style chain id when the record qualifies for one.
///
/// Malformed numeric literals on either side are validation failures, never
/// a crash of the whole run.
pub fn hex_chain_id(record: &ChainRecord, evm: &EvmRecord) -> Result<(), String> {
    if !EVM_HEX_ID_RE.is_match(&evm.chain_id) {
        return Err("EVM hex chain id must be 0x followed by hexadecimal characters".into());
    }

    let cross_check = record.is_rollapp() || COSMOS_EVM_ID_RE.is_match(&record.chain_id);
    if !cross_check {
        return Ok(());
    }

    let parts: Vec<&str> = record.chain_id.split('_').collect();
    if parts.len() != 2 {
        return Err("chain id must have format <alphanumeric>_<number>-<number>".into());
    }
    let decimal_part = parts[1].split('-').next().unwrap_or_default();
    let from_cosmos: i64 = decimal_part.parse().map_err(|_| {
        format!(
            "cannot parse numeric chain id from cosmos chain id {}",
            record.chain_id
        )
    })?;
    let from_evm = i64::from_str_radix(evm.chain_id.trim_start_matches("0x"), 16)
        .map_err(|_| format!("cannot parse EVM hex chain id {}", evm.chain_id))?;

    if from_cosmos != from_evm {
        return Err(format!(
            "EVM hex chain id {from_evm} must match with the chain id from cosmos chain id {from_cosmos}"
        ));
    }
    Ok(())
}
