use clap::{Parser, Subcommand};

use chainreg::RegistryError;

mod commands;

use commands::{ValidateArgs, validate_command};

#[derive(Parser)]
#[command(
    name = "chainreg",
    about = "A CLI tool that validates chain-registry metadata records",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate chain-registry records
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate(args) => validate_command(&args),
    };

    match result {
        Ok(0) => println!("Passed!"),
        Ok(_) => std::process::exit(1),
        Err(err) => {
            // Halted means the failure is already on stderr
            match err.downcast_ref::<RegistryError>() {
                Some(RegistryError::Halted) => {}
                _ => eprintln!("ERR: {err:#}"),
            }
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("chainreg=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("chainreg=info"), // -v: info messages
        _ => EnvFilter::new("chainreg=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
