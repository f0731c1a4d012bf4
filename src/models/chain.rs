use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A URL field that may be written as a single string or a list of strings.
///
/// The `Raw` fallback keeps a badly typed field from failing the whole record
/// decode; the mismatch surfaces when the field's rule asks for the urls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlSet {
    Single(String),
    Multiple(Vec<String>),
    Raw(serde_json::Value),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlSetError {
    #[error("url must be string, got {0}")]
    BadElement(&'static str),
    #[error("url must be string or list of strings, got {0}")]
    BadValue(&'static str),
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Normalize an optional URL field to an ordered list of strings.
///
/// Absent and `null` fields normalize to an empty list, not an error.
fn normalize_urls(field: &Option<UrlSet>) -> Result<Vec<String>, UrlSetError> {
    match field {
        None => Ok(Vec::new()),
        Some(UrlSet::Single(url)) => Ok(vec![url.clone()]),
        Some(UrlSet::Multiple(urls)) => Ok(urls.clone()),
        Some(UrlSet::Raw(serde_json::Value::Array(items))) => {
            // a list that is not all strings: name the first offending element
            let mut urls = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(url) => urls.push(url.clone()),
                    other => return Err(UrlSetError::BadElement(json_type_name(other))),
                }
            }
            Ok(urls)
        }
        Some(UrlSet::Raw(other)) => Err(UrlSetError::BadValue(json_type_name(other))),
    }
}

/// One chain's registry record, as stored in `<chain>/<chain>.json`.
///
/// Missing fields decode to their empty value and unknown fields are
/// ignored, so partially filled records still reach the rule battery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainRecord {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc: Option<UrlSet>,
    pub rest: Option<UrlSet>,
    pub be_rpc: Option<UrlSet>,
    pub bech32_prefix: String,
    pub website: String,
    pub da: String,
    pub evm: Option<EvmRecord>,
    pub currencies: Vec<Currency>,
    pub coin_type: i64,
    pub gas_adjustment: f64,
    pub faucet_url: String,
    pub ibc: Option<IbcRecord>,
    pub gas_price_steps: Option<GasPriceSteps>,
    pub logo: String,
    #[serde(rename = "type")]
    pub chain_type: String,
    pub active: bool,
    pub analytics: bool,
    pub collect_data: bool,
    pub goldberg: bool,
    pub avail_address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvmRecord {
    pub chain_id: String,
    pub rpc: Option<UrlSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currency {
    pub display_denom: String,
    pub base_denom: String,
    pub ibc_representation: String,
    pub bridge_denom: String,
    pub decimals: i64,
    pub logo: String,
    #[serde(rename = "type")]
    pub currency_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IbcRecord {
    pub timeout: i64,
    pub hub_channel: String,
    pub channel: String,
    pub allowed_denoms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GasPriceSteps {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

impl ChainRecord {
    /// Decode a record from the raw bytes of its JSON file.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn rpc_urls(&self) -> Result<Vec<String>, UrlSetError> {
        normalize_urls(&self.rpc)
    }

    pub fn rest_urls(&self) -> Result<Vec<String>, UrlSetError> {
        normalize_urls(&self.rest)
    }

    pub fn be_rpc_urls(&self) -> Result<Vec<String>, UrlSetError> {
        normalize_urls(&self.be_rpc)
    }

    /// RollApp chains settle through a DA backend. A record with a `da`
    /// value but no `type` tag is treated as a RollApp as well.
    pub fn is_rollapp(&self) -> bool {
        self.chain_type.eq_ignore_ascii_case("RollApp")
            || (!self.da.is_empty() && self.chain_type.is_empty())
    }

    pub fn is_evm_rollapp(&self) -> bool {
        self.is_rollapp() && (self.evm.is_some() || self.coin_type == 60)
    }

    pub fn is_da_avail(&self) -> bool {
        self.da.eq_ignore_ascii_case("Avail")
    }
}

impl EvmRecord {
    pub fn rpc_urls(&self) -> Result<Vec<String>, UrlSetError> {
        normalize_urls(&self.rpc)
    }
}
