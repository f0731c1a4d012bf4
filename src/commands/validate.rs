use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use chainreg::RegistryError;
use chainreg::models::Tier;
use chainreg::registry::TierWalker;
use chainreg::validation::Reporter;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the chain-registry repository
    pub repo_dir: PathBuf,

    /// Validate mainnet records only
    #[arg(long)]
    pub mainnet: bool,

    /// Validate testnet records only
    #[arg(long)]
    pub testnet: bool,

    /// Validate devnet records only
    #[arg(long)]
    pub devnet: bool,

    /// Validate internal-devnet records only
    #[arg(long)]
    pub internal_devnet: bool,

    /// Stop on first error
    #[arg(short = 'e', long)]
    pub stop_on_error: bool,

    /// Allow additional chain types
    #[arg(long = "addition-chain-types-allowed", value_name = "TYPE")]
    pub addition_chain_types_allowed: Vec<String>,
}

impl ValidateArgs {
    /// Tier flags narrow the run; no flag at all means every tier.
    fn selected_tiers(&self) -> Vec<Tier> {
        let mut tiers = Vec::new();
        if self.mainnet {
            tiers.push(Tier::Mainnet);
        }
        if self.testnet {
            tiers.push(Tier::Testnet);
        }
        if self.devnet {
            tiers.push(Tier::Devnet);
        }
        if self.internal_devnet {
            tiers.push(Tier::InternalDevnet);
        }
        if tiers.is_empty() {
            tiers.extend(Tier::ALL);
        }
        tiers
    }
}

/// Run the `validate` subcommand; returns the number of issues found.
pub fn validate_command(args: &ValidateArgs) -> Result<usize> {
    let tiers = args.selected_tiers();

    let mut banner = String::from("Going to validate");
    for tier in &tiers {
        banner.push(' ');
        banner.push_str(tier.dir_name());
    }
    println!("{banner}");

    let repo_dir = args
        .repo_dir
        .canonicalize()
        .with_context(|| {
            format!(
                "provided chain-registry repository path does not exist: {}",
                args.repo_dir.display()
            )
        })?;
    if !repo_dir.is_dir() {
        return Err(RegistryError::Structural(format!(
            "provided chain-registry repository path is not a directory: {}",
            repo_dir.display()
        ))
        .into());
    }

    let mut reporter = Reporter::new(args.stop_on_error);
    let walker = TierWalker::new(&repo_dir, &args.addition_chain_types_allowed);

    for tier in tiers {
        println!("Validating group {tier} ...");
        walker.walk_tier(tier, &mut reporter)?;
    }

    let issues = reporter.issues();
    if !issues.is_empty() {
        eprintln!("Errors:");
        for issue in issues {
            eprintln!("> {issue}");
        }
        eprintln!("Total {} issues found!", issues.len());
    }
    Ok(issues.len())
}
