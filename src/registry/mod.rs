pub mod walker;

pub use walker::TierWalker;
