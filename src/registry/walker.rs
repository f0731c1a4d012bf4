//! Tier directory walking: locate each chain's record file and feed it
//! through the rule battery.

use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::RegistryError;
use crate::models::{ChainRecord, Tier};
use crate::validation::{ChainIdTracker, Reporter, RuleInput, validate_record};

/// Expected record path: `<repo>/<tier>/<chain>/<chain>.json`.
pub struct TierWalker<'a> {
    repo_dir: &'a Path,
    additional_chain_types: &'a [String],
}

enum ChainOutcome {
    Continue,
    AbortTier,
}

impl<'a> TierWalker<'a> {
    pub fn new(repo_dir: &'a Path, additional_chain_types: &'a [String]) -> Self {
        Self {
            repo_dir,
            additional_chain_types,
        }
    }

    /// Validate every chain in `tier`, in lexical directory order.
    ///
    /// A missing or unusable tier directory is fatal for the whole run. A
    /// structural failure inside the tier (missing record file, unreadable
    /// file, malformed JSON) is recorded and ends this tier's scan only.
    pub fn walk_tier(&self, tier: Tier, reporter: &mut Reporter) -> Result<(), RegistryError> {
        let tier_dir = self.repo_dir.join(tier.dir_name());
        if !tier_dir.exists() {
            return Err(RegistryError::Structural(format!(
                "[group:{tier}] Validation failed! Missing required directory {} at {}",
                tier.dir_name(),
                tier_dir.display()
            )));
        }
        if !tier_dir.is_dir() {
            return Err(RegistryError::Structural(format!(
                "[group:{tier}] Validation failed! Expected target path is not a directory: {}",
                tier_dir.display()
            )));
        }

        let mut tracker = ChainIdTracker::new();
        let mut chains = 0usize;

        for entry in WalkDir::new(&tier_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    reporter.record(
                        tier,
                        None,
                        None,
                        &format!("Failed to walk {}: {err}", tier_dir.display()),
                    )?;
                    return Ok(());
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            let chain_dir_name = entry.file_name().to_string_lossy().into_owned();
            chains += 1;

            match self.validate_chain(tier, entry.path(), &chain_dir_name, &mut tracker, reporter)?
            {
                ChainOutcome::Continue => {}
                ChainOutcome::AbortTier => return Ok(()),
            }
        }

        info!("tier {tier} walked, {chains} chains");
        Ok(())
    }

    fn validate_chain(
        &self,
        tier: Tier,
        chain_dir: &Path,
        chain_dir_name: &str,
        tracker: &mut ChainIdTracker,
        reporter: &mut Reporter,
    ) -> Result<ChainOutcome, RegistryError> {
        let record_file = chain_dir.join(format!("{chain_dir_name}.json"));
        if !record_file.is_file() {
            reporter.record(
                tier,
                Some(chain_dir_name),
                None,
                &format!("Missing required file {}", record_file.display()),
            )?;
            return Ok(ChainOutcome::AbortTier);
        }

        debug!("validating {}", record_file.display());

        let bytes = match std::fs::read(&record_file) {
            Ok(bytes) => bytes,
            Err(err) => {
                reporter.record(
                    tier,
                    Some(chain_dir_name),
                    Some(record_file.as_path()),
                    &format!("Failed to read chain record file: {err}"),
                )?;
                return Ok(ChainOutcome::AbortTier);
            }
        };
        let record = match ChainRecord::from_json_bytes(&bytes) {
            Ok(record) => record,
            Err(err) => {
                reporter.record(
                    tier,
                    Some(chain_dir_name),
                    Some(record_file.as_path()),
                    &format!("Failed to decode chain record file: {err}"),
                )?;
                return Ok(ChainOutcome::AbortTier);
            }
        };

        if let Some(first_seen) = tracker.claim(&record.chain_id, chain_dir_name) {
            reporter.record(
                tier,
                Some(chain_dir_name),
                Some(record_file.as_path()),
                &format!(
                    "Duplicated chain id found: {} in {} and {}",
                    record.chain_id, first_seen, chain_dir_name
                ),
            )?;
            // the rest of the battery is pointless for a duplicate
            return Ok(ChainOutcome::Continue);
        }

        let input = RuleInput {
            record: &record,
            chain_dir,
            additional_chain_types: self.additional_chain_types,
        };
        for message in validate_record(&input) {
            reporter.record(tier, Some(chain_dir_name), Some(record_file.as_path()), &message)?;
        }
        Ok(ChainOutcome::Continue)
    }
}
