//! Command-line interface for clap
//!
//! Parses the root path, extension tokens and options, layers them over the
//! configuration, and drives a single combine run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

mod output;

pub use output::Output;

use crate::combine::{CombineReport, Combiner};
use crate::config::{ClapConfig, ConfigOverrides};

/// 👏 Clap slaps all your files into one!
#[derive(Parser, Debug)]
#[command(
    name = "clap",
    version,
    about = "👏 Clap slaps all your files into one!",
    long_about = "👏 Clap slaps all your files into one!\n\n\
                  Concatenates every file under PATH into a single output file, each one \
                  preceded by a `=== <path> ===` line. Give extensions to include only \
                  matching files (`go` and `.go` are the same).",
    arg_required_else_help = true
)]
pub struct Cli {
    /// File or directory to combine
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Extensions to include, with or without the leading dot (all files when omitted)
    #[arg(value_name = "EXTENSIONS")]
    pub extensions: Vec<String>,

    /// Output file name, resolved under PATH when relative [default: clap.file]
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Use custom configuration file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Descend into symlinked directories
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Skip files matched by .gitignore and .ignore files
    #[arg(long = "gitignore")]
    pub use_gitignore: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute one combine run
    pub fn run(self) -> Result<CombineReport> {
        setup_logging(self.verbose, self.quiet);

        let mut output = Output::new(self.verbose > 0, self.quiet);
        let config = ClapConfig::load(self.config.as_deref(), &self.overrides())?;
        let filter = config.filter();

        output.verbose(&format!("Including extensions: {filter}"));

        let report = Combiner::new(config.combine_options()).combine(
            &self.path,
            &filter,
            Path::new(&config.output),
            &mut output,
        )?;

        output.verbose(&format!(
            "{} files included, {} skipped, {} bytes",
            report.files_included, report.files_skipped, report.bytes_written
        ));
        output.success(&format!(
            "Content written to {}",
            report.output_path.display()
        ));

        Ok(report)
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output: self.output.clone(),
            extensions: self.extensions.clone(),
            follow_links: self.follow_links,
            use_gitignore: self.use_gitignore,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // Keep ignore/globset quiet unless tracing everything
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn,ignore=warn,globset=warn"),
        1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_extensions_and_output() {
        let cli = Cli::try_parse_from(["clap", "-o", "out.txt", "src", "go", ".MD"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("src"));
        assert_eq!(cli.extensions, vec!["go", ".MD"]);
        assert_eq!(cli.output.as_deref(), Some("out.txt"));

        let overrides = cli.overrides();
        assert_eq!(overrides.output.as_deref(), Some("out.txt"));
        assert_eq!(overrides.extensions.len(), 2);
    }

    #[test]
    fn test_no_extensions_means_accept_all() {
        let cli = Cli::try_parse_from(["clap", "."]).unwrap();
        assert!(cli.extensions.is_empty());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(Cli::try_parse_from(["clap"]).is_err());
    }
}
