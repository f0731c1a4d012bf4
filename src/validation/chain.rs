//! Cross-field record checks and the ordered rule battery.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{assets, currency, evm, fields, gas, ibc};
use crate::models::ChainRecord;

pub const BUILTIN_CHAIN_TYPES: [&str; 5] = ["RollApp", "Regular", "EVM", "Hub", "Solana"];
pub const ALLOWED_DA: [&str; 3] = ["Avail", "Celestia", "local"];

static AVAIL_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^5[A-Za-z0-9]+$").unwrap());

pub fn da(record: &ChainRecord) -> Result<(), String> {
    if !record.is_rollapp() {
        if !record.da.is_empty() {
            return Err("DA must be empty for non-RollApp chains".into());
        }
        return Ok(());
    }
    if record.da.is_empty() {
        return Err("DA is required for RollApp chains".into());
    }
    if ALLOWED_DA.contains(&record.da.as_str()) {
        Ok(())
    } else {
        Err("DA must be one of: 'Avail', 'Celestia', 'local'".into())
    }
}

pub fn avail_address(address: &str, da: &str) -> Result<(), String> {
    if da != "Avail" {
        if !address.is_empty() {
            return Err("avail address is only allowed when DA is Avail".into());
        }
        return Ok(());
    }
    if address.is_empty() {
        return Ok(());
    }
    if address.contains(' ') {
        return Err("avail address must not contain spaces".into());
    }
    if !address.starts_with('5') {
        return Err("avail address must start with 5".into());
    }
    if !AVAIL_ADDRESS_RE.is_match(address) {
        return Err("avail address must be 5 followed by alphanumeric characters".into());
    }
    if address.len() != 48 {
        return Err("avail address must be 48 characters long".into());
    }
    Ok(())
}

/// The tag must literally match a built-in type or one of the caller-supplied
/// additions.
pub fn chain_type(tag: &str, additional_allowed: &[String]) -> Result<(), String> {
    if tag.is_empty() {
        return Err("chain type is required".into());
    }
    if BUILTIN_CHAIN_TYPES.contains(&tag) {
        return Ok(());
    }
    if additional_allowed.iter().any(|allowed| allowed == tag) {
        return Ok(());
    }
    Err(format!(
        "not recognized chain type: {tag} (consider providing it via --addition-chain-types-allowed)"
    ))
}

/// Input handed to every rule in the battery.
pub struct RuleInput<'a> {
    pub record: &'a ChainRecord,
    pub chain_dir: &'a Path,
    pub additional_chain_types: &'a [String],
}

/// A named record-level check producing at most one violation message.
pub struct Rule {
    pub name: &'static str,
    run: fn(&RuleInput) -> Option<String>,
}

/// Run every rule in order and collect the violations. Rules never
/// short-circuit each other; one bad field still lets the rest report.
pub fn validate_record(input: &RuleInput) -> Vec<String> {
    BATTERY.iter().filter_map(|rule| (rule.run)(input)).collect()
}

pub static BATTERY: &[Rule] = &[
    Rule { name: "chain-id", run: rule_chain_id },
    Rule { name: "chain-name", run: rule_chain_name },
    Rule { name: "rpc-urls", run: rule_rpc_urls },
    Rule { name: "rest-urls", run: rule_rest_urls },
    Rule { name: "be-rpc-urls", run: rule_be_rpc_urls },
    Rule { name: "bech32-prefix", run: rule_bech32_prefix },
    Rule { name: "website", run: rule_website },
    Rule { name: "da", run: rule_da },
    Rule { name: "evm-presence", run: rule_evm_presence },
    Rule { name: "evm-rpc-urls", run: rule_evm_rpc_urls },
    Rule { name: "evm-chain-id", run: rule_evm_chain_id },
    Rule { name: "currencies", run: rule_currencies },
    Rule { name: "coin-type", run: rule_coin_type },
    Rule { name: "gas-adjustment", run: rule_gas_adjustment },
    Rule { name: "faucet-url", run: rule_faucet_url },
    Rule { name: "ibc", run: rule_ibc },
    Rule { name: "gas-price-steps", run: rule_gas_price_steps },
    Rule { name: "logo", run: rule_logo },
    Rule { name: "chain-type", run: rule_chain_type },
    Rule { name: "goldberg", run: rule_goldberg },
    Rule { name: "avail-address", run: rule_avail_address },
];

fn rule_chain_id(input: &RuleInput) -> Option<String> {
    let record = input.record;
    // the strict id form applies only when an EVM block is actually present
    let evm_rollapp = record.is_rollapp() && record.evm.is_some();
    fields::chain_id(&record.chain_id, evm_rollapp)
        .err()
        .map(|reason| format!("Bad chain id \"{}\": {reason}", record.chain_id))
}

fn rule_chain_name(input: &RuleInput) -> Option<String> {
    fields::chain_name(&input.record.chain_name)
        .err()
        .map(|reason| format!("Bad chain name \"{}\": {reason}", input.record.chain_name))
}

fn rule_rpc_urls(input: &RuleInput) -> Option<String> {
    match input.record.rpc_urls() {
        Err(err) => Some(format!("Failed to get RPC urls: {err}")),
        Ok(urls) => fields::urls(&urls)
            .err()
            .map(|reason| format!("Bad RPC urls {urls:?}: {reason}")),
    }
}

fn rule_rest_urls(input: &RuleInput) -> Option<String> {
    match input.record.rest_urls() {
        Err(err) => Some(format!("Failed to get REST urls: {err}")),
        Ok(urls) => fields::urls(&urls)
            .err()
            .map(|reason| format!("Bad REST urls {urls:?}: {reason}")),
    }
}

fn rule_be_rpc_urls(input: &RuleInput) -> Option<String> {
    match input.record.be_rpc_urls() {
        Err(err) => Some(format!("Failed to get Be RPC urls: {err}")),
        Ok(urls) => fields::urls(&urls)
            .err()
            .map(|reason| format!("Bad Be RPC urls {urls:?}: {reason}")),
    }
}

fn rule_bech32_prefix(input: &RuleInput) -> Option<String> {
    let record = input.record;
    if record.bech32_prefix.is_empty() {
        if record.is_rollapp() {
            return Some("Bech32 prefix is required for RollApp chains".into());
        }
        return None;
    }
    fields::bech32_prefix(&record.bech32_prefix)
        .err()
        .map(|reason| format!("Bad Bech32 prefix \"{}\": {reason}", record.bech32_prefix))
}

fn rule_website(input: &RuleInput) -> Option<String> {
    fields::optional_url(&input.record.website)
        .err()
        .map(|reason| format!("Bad website url \"{}\": {reason}", input.record.website))
}

fn rule_da(input: &RuleInput) -> Option<String> {
    da(input.record)
        .err()
        .map(|reason| format!("Bad DA \"{}\": {reason}", input.record.da))
}

fn rule_evm_presence(input: &RuleInput) -> Option<String> {
    let record = input.record;
    if record.coin_type == 60 && record.is_rollapp() && record.evm.is_none() {
        return Some("\"evm\" is required for RollApp EVM chains".into());
    }
    None
}

fn rule_evm_rpc_urls(input: &RuleInput) -> Option<String> {
    let evm = input.record.evm.as_ref()?;
    match evm.rpc_urls() {
        Err(err) => Some(format!("Failed to get EVM RPC urls: {err}")),
        Ok(urls) => fields::urls(&urls)
            .err()
            .map(|reason| format!("Bad EVM RPC urls {urls:?}: {reason}")),
    }
}

fn rule_evm_chain_id(input: &RuleInput) -> Option<String> {
    let evm_record = input.record.evm.as_ref()?;
    evm::hex_chain_id(input.record, evm_record)
        .err()
        .map(|reason| format!("Bad EVM hex chain id \"{}\": {reason}", evm_record.chain_id))
}

fn rule_currencies(input: &RuleInput) -> Option<String> {
    let record = input.record;
    if record.currencies.is_empty() {
        return Some("Currencies is required".into());
    }
    match currency::currency_set(&record.currencies, input.chain_dir) {
        Ok(()) => None,
        Err(issue) => Some(match issue.identity {
            Some(identity) => format!("Bad currencies: {identity}: {}", issue.reason),
            None => format!("Bad currencies: {}", issue.reason),
        }),
    }
}

fn rule_coin_type(input: &RuleInput) -> Option<String> {
    let record = input.record;
    if record.is_evm_rollapp() {
        if record.coin_type != 60 {
            return Some("Coin type must be 60 for EVM RollApp chains".into());
        }
        return None;
    }
    fields::coin_type(record.coin_type)
        .err()
        .map(|reason| format!("Bad coin type {}: {reason}", record.coin_type))
}

fn rule_gas_adjustment(input: &RuleInput) -> Option<String> {
    gas::adjustment(input.record.gas_adjustment)
        .err()
        .map(|reason| format!("Bad gas adjustment {}: {reason}", input.record.gas_adjustment))
}

fn rule_faucet_url(input: &RuleInput) -> Option<String> {
    fields::optional_url(&input.record.faucet_url)
        .err()
        .map(|reason| format!("Bad faucet url \"{}\": {reason}", input.record.faucet_url))
}

fn rule_ibc(input: &RuleInput) -> Option<String> {
    let ibc_record = input.record.ibc.as_ref()?;
    ibc::validate(ibc_record)
        .err()
        .map(|reason| format!("Bad IBC: {reason}"))
}

fn rule_gas_price_steps(input: &RuleInput) -> Option<String> {
    let steps = input.record.gas_price_steps.as_ref()?;
    gas::price_steps(steps)
        .err()
        .map(|reason| format!("Bad gas price steps: {reason}"))
}

fn rule_logo(input: &RuleInput) -> Option<String> {
    assets::logo(&input.record.logo, input.chain_dir)
        .err()
        .map(|reason| format!("Bad chain logo \"{}\": {reason}", input.record.logo))
}

fn rule_chain_type(input: &RuleInput) -> Option<String> {
    chain_type(&input.record.chain_type, input.additional_chain_types)
        .err()
        .map(|reason| format!("Bad chain type: {reason}"))
}

fn rule_goldberg(input: &RuleInput) -> Option<String> {
    let record = input.record;
    if record.goldberg && record.da != "Avail" {
        return Some("Goldberg when set, DA must be Avail".into());
    }
    None
}

fn rule_avail_address(input: &RuleInput) -> Option<String> {
    let record = input.record;
    avail_address(&record.avail_address, &record.da)
        .err()
        .map(|reason| format!("Bad avail address \"{}\": {reason}", record.avail_address))
}
