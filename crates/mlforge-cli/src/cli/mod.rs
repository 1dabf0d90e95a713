//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
///
/// The whole command surface is one optional positional argument: the
/// project name.  Everything else is observability plumbing.
#[derive(Debug, Parser)]
#[command(
    name    = "mlforge",
    bin_name = "mlforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} ML project structure generator",
    long_about = "Mlforge generates the standard directory and file skeleton \
                  for a machine-learning project: data folders, notebook \
                  slots, Python stub modules, stub tests, and configuration.",
    after_help = "EXAMPLES:\n\
        \x20 mlforge churn-model       # create ./churn-model/\n\
        \x20 mlforge                   # create ./ml_project/ (default name)\n\
        \x20 mlforge -v experiment01   # with progress logging",
)]
pub struct Cli {
    /// Project name.  Becomes the root directory of the generated skeleton.
    #[arg(value_name = "NAME", help = "Project name (default: ml_project)")]
    pub name: Option<String>,

    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_name() {
        let cli = Cli::parse_from(["mlforge", "demo"]);
        assert_eq!(cli.name.as_deref(), Some("demo"));
    }

    #[test]
    fn parse_without_name() {
        let cli = Cli::parse_from(["mlforge"]);
        assert!(cli.name.is_none());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["mlforge", "-vv", "demo"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["mlforge", "--quiet", "--verbose", "demo"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_flag_takes_a_path() {
        let cli = Cli::parse_from(["mlforge", "-c", "custom.toml", "demo"]);
        assert_eq!(
            cli.global.config.as_deref(),
            Some(std::path::Path::new("custom.toml"))
        );
    }
}
