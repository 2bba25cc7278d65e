mod artfile;
mod config;
mod gallery;
mod utils;
mod width;
mod commands {
    pub mod check;
    pub mod clean;
}
use clap::{Parser, Subcommand};
use colored::*;
use std::process;

#[derive(Parser)]
#[command(name = "tdfkit")]
#[command(about = "Maintenance toolkit for TheDraw font art galleries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (print per-file details)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (suppress banners and spinners)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report previews whose art renders wider than 80 columns
    Check {
        /// Gallery directory (falls back to TDFKIT_GALLERY, tdfkit.toml, then '.')
        dir: Option<String>,
    },
    /// Delete previews whose art content is entirely blank
    Clean {
        /// Gallery directory (falls back to TDFKIT_GALLERY, tdfkit.toml, then '.')
        dir: Option<String>,
    },
}

pub struct TdfkitContext {
    pub verbose: bool,
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let ctx = TdfkitContext {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Check { dir } => commands::check::run(dir, &ctx),
        Commands::Clean { dir } => commands::clean::run(dir, &ctx),
    };

    if let Err(e) = result {
        if !ctx.quiet {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            if ctx.verbose {
                for cause in e.chain().skip(1) {
                    eprintln!("  Caused by: {}", cause);
                }
            }
        }
        process::exit(1);
    }
}
