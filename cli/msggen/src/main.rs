//! msggen CLI: generate ROS message files with constants from C++ enums.
//!
//! Converts the enums in Ruckig's `input_parameter.hpp` to one `.msg` file
//! per enum. Probably brittle, but saves a bit of work when those enums get
//! updated.

mod commands;
mod config;

use std::process;

use clap::{Parser, Subcommand};

use config::MsggenConfig;

#[derive(Parser)]
#[command(
    name = "msggen",
    version,
    about = "Generate ROS message files with constants from C++ enums"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one .msg file per enum found in the header
    Generate {
        /// Directory to write (updated) msg files to
        #[arg(long, value_name = "DIR")]
        msg_dir: Option<String>,
        /// Path to Ruckig's input_parameter.hpp
        header: String,
    },
    /// List the enums found in the header without writing anything
    List {
        /// Output format (text, json)
        #[arg(long)]
        export: Option<String>,
        /// Path to Ruckig's input_parameter.hpp
        header: String,
    },
    /// Check that the msg files on disk match the header
    Check {
        /// Directory containing the generated msg files
        #[arg(long, value_name = "DIR")]
        msg_dir: Option<String>,
        /// Path to Ruckig's input_parameter.hpp
        header: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = MsggenConfig::find_and_load(&cwd)?.unwrap_or_default();

    match cli.command {
        Commands::Generate { msg_dir, header } => {
            commands::generate::run(&cwd, &config, msg_dir.as_deref(), &header)
        }
        Commands::List { export, header } => {
            commands::list::run(&cwd, &config, export.as_deref(), &header)
        }
        Commands::Check { msg_dir, header } => {
            commands::check::run(&cwd, &config, msg_dir.as_deref(), &header)
        }
    }
}

/// Map failure causes to stable process exit codes so calling automation
/// can tell them apart: 2 no enums, 3 no recognized enums, 4 reserved-name
/// collision, 5 unsupported base type, 1 everything else (environment,
/// I/O, scan errors).
fn exit_code(err: &anyhow::Error) -> i32 {
    use msggen_emit::EmitError;

    match err.downcast_ref::<EmitError>() {
        Some(EmitError::NoEnums) => 2,
        Some(EmitError::NoKnownEnums) => 3,
        Some(EmitError::ReservedName { .. }) => 4,
        Some(EmitError::UnsupportedType { .. }) => 5,
        _ => 1,
    }
}
