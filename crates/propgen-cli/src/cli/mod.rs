use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `propgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "propgen",
    version,
    about = "Generate a props type file for a UI component"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Component name or docs/registry URL
    pub component: String,

    /// Print the inferred dependency profile as JSON and exit
    #[arg(long)]
    pub deps_only: bool,

    /// Keep component files created by the installer
    #[arg(long)]
    pub no_cleanup: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the static registry entry for the component as JSON and exit
    #[arg(long)]
    pub inspect_registry: bool,

    /// External record identifier stamped into the generated header
    #[arg(long, value_name = "ID")]
    pub record: Option<String>,

    /// Host project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Output directory override
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Never invoke the component installer or the package manager
    #[arg(long)]
    pub skip_install: bool,

    /// Print a machine-readable run summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn component_is_required() {
        assert!(Cli::try_parse_from(["propgen"]).is_err());
    }

    #[test]
    fn flags_parse_around_the_positional() {
        let cli = Cli::try_parse_from([
            "propgen",
            "--deps-only",
            "accordion",
            "--record",
            "rec_7",
            "--out-dir",
            "types",
            "-v",
        ])
        .expect("cli should parse");

        assert_eq!(cli.component, "accordion");
        assert!(cli.deps_only);
        assert!(cli.verbose);
        assert!(!cli.no_cleanup);
        assert_eq!(cli.record.as_deref(), Some("rec_7"));
        assert_eq!(cli.out_dir.as_deref(), Some(std::path::Path::new("types")));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["propgen", "tabs", "-v", "-q"]).is_err());
    }

    #[test]
    fn url_positional_is_kept_verbatim() {
        let cli = Cli::try_parse_from([
            "propgen",
            "https://ui.shadcn.com/docs/components/tabs",
            "--inspect-registry",
            "--json",
        ])
        .expect("cli should parse");
        assert_eq!(cli.component, "https://ui.shadcn.com/docs/components/tabs");
        assert!(cli.inspect_registry);
        assert!(cli.json);
    }
}
