use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::{OutputFormat, print_error};

/// frontbuild - compose task runner configuration from build descriptors
#[derive(Parser)]
#[command(name = "fb")]
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
  /// Discover build descriptors and print the composed runner configuration
  Compose {
    /// Template root to search for descriptors
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Basename of build descriptor files
    #[arg(short, long)]
    descriptor: Option<String>,

    /// Do not lint the descriptors themselves
    #[arg(long)]
    no_self_lint: bool,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
  },

  /// Copy the style version into the style variables
  VersionBump {
    /// Template root holding the style variables
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Versions file to read the style version from
    #[arg(long)]
    versions_ini: Option<PathBuf>,

    /// Style variables file to rewrite
    #[arg(long)]
    style_variables: Option<PathBuf>,
  },

  /// Touch files after a delay so watchers pick them up
  Touch {
    /// Files to touch
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Delay before touching (e.g. 500ms, 1s)
    #[arg(long, default_value = "1s", value_parser = humantime::parse_duration)]
    delay: Duration,

    /// Create files that do not exist
    #[arg(long)]
    create: bool,
  },

  /// Show the effective settings
  Info {
    /// Template root
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Compose {
      root,
      descriptor,
      no_self_lint,
      output,
      format,
    } => cmd::cmd_compose(cmd::ComposeArgs {
      root,
      descriptor,
      self_lint: !no_self_lint,
      output,
      format,
    }),
    Commands::VersionBump {
      root,
      versions_ini,
      style_variables,
    } => cmd::cmd_version_bump(&root, versions_ini, style_variables),
    Commands::Touch { files, delay, create } => cmd::cmd_touch(files, delay, create),
    Commands::Info { root, format } => cmd::cmd_info(&root, format),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
