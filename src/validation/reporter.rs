use std::path::Path;

use crate::RegistryError;
use crate::models::Tier;

/// Collects violation lines for the whole run.
///
/// Every violation is printed to stderr the moment it is recorded and kept
/// for the end-of-run list. With `stop_on_first` set, the first recorded
/// violation trips [`RegistryError::Halted`].
#[derive(Debug)]
pub struct Reporter {
    stop_on_first: bool,
    issues: Vec<String>,
}

impl Reporter {
    pub fn new(stop_on_first: bool) -> Self {
        Self {
            stop_on_first,
            issues: Vec::new(),
        }
    }

    pub fn record(
        &mut self,
        tier: Tier,
        chain: Option<&str>,
        file: Option<&Path>,
        message: &str,
    ) -> Result<(), RegistryError> {
        let mut line = format!("ERR: [group:{tier}]");
        if let Some(chain) = chain {
            line.push_str(&format!(" [chain:{chain}]"));
        }
        line.push_str(" Validation failed! ");
        line.push_str(message);

        eprintln!("{line}");
        if let Some(file) = file {
            eprintln!("File: {}", file.display());
            line.push_str(&format!(", File: {}", file.display()));
        }
        eprintln!();

        self.issues.push(line);

        if self.stop_on_first {
            return Err(RegistryError::Halted);
        }
        Ok(())
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
