use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;
mod surface;

use output::OutputFormat;

/// buildreg - register XML build definitions with a project configuration
#[derive(Parser)]
#[command(name = "breg")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Register build definition files with the project configuration
  Add {
    /// Files to register
    files: Vec<PathBuf>,

    /// Project root directory (default: current directory)
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Directory excluded from registration (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "DIR")]
    exclude: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },

  /// Check whether a file is an eligible build definition
  Check {
    /// File to check
    file: PathBuf,

    /// Project root directory (default: current directory)
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Directory excluded from registration (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "DIR")]
    exclude: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },

  /// Show tool and project information
  Info {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    project: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Initialize logging
  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  match cli.command {
    Commands::Add {
      files,
      project,
      exclude,
      format,
    } => cmd::cmd_add(&files, project.as_deref(), exclude, format),
    Commands::Check {
      file,
      project,
      exclude,
      format,
    } => cmd::cmd_check(&file, project.as_deref(), exclude, format),
    Commands::Info { project } => cmd::cmd_info(project.as_deref()),
  }
}
