//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Scaffold a standardized directory layout for research projects
#[derive(Parser, Debug)]
#[command(name = "rscaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project (directory created inside base_path)
    #[arg(required_unless_present = "completions")]
    pub project_name: Option<String>,

    /// Directory in which the project is created (default: config base_dir, then cwd)
    #[arg(value_hint = ValueHint::DirPath)]
    pub base_path: Option<PathBuf>,

    /// Show what would be created without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
