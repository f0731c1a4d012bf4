use std::collections::HashMap;

/// Chain-id uniqueness within one tier: id to the first chain directory seen
/// with it. Dropped when the tier's walk ends, so the same id may appear
/// once per tier.
#[derive(Debug, Default)]
pub struct ChainIdTracker {
    seen: HashMap<String, String>,
}

impl ChainIdTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `chain_id` for `chain_dir`; returns the previous owner if the
    /// id was already claimed.
    pub fn claim(&mut self, chain_id: &str, chain_dir: &str) -> Option<String> {
        if let Some(existing) = self.seen.get(chain_id) {
            return Some(existing.clone());
        }
        self.seen
            .insert(chain_id.to_string(), chain_dir.to_string());
        None
    }
}
