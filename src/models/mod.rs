pub mod chain;
pub mod tier;

// Re-export commonly used types
pub use chain::{ChainRecord, Currency, EvmRecord, GasPriceSteps, IbcRecord, UrlSet, UrlSetError};
pub use tier::Tier;
