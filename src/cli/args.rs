//! Command line argument parsing for the optypo CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::util::levenshtein::DistanceUnit;

/// optypo - find likely typos in component option names
#[derive(Parser, Debug, Clone)]
#[command(name = "optypo")]
#[command(about = "Find likely typos in component option names")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OptypoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OptypoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the option keys of JSON component documents
    Check(CheckArgs),

    /// Suggest corrections for bare names
    Suggest(SuggestArgs),

    /// List preset groups and their option names
    Presets(PresetsArgs),

    /// Print the edit distance between two strings
    Distance(DistanceArgs),
}

/// Configuration flags shared by every command that classifies names
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (JSON: presets, custom, threshold, unit)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Preset to use; repeat for several. Replaces the configured presets
    #[arg(short, long = "preset", value_name = "PRESET")]
    pub presets: Vec<String>,

    /// Additional valid name; repeat for several. Appended to the configured names
    #[arg(long = "custom", value_name = "NAME")]
    pub custom: Vec<String>,

    /// Maximum edit distance reported as a typo
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Atomic unit for distance computation
    #[arg(long)]
    pub unit: Option<UnitArg>,

    /// Extra preset tables (JSON object of group name to option names)
    #[arg(long, value_name = "PRESETS_FILE")]
    pub presets_file: Option<PathBuf>,
}

/// Arguments for checking documents
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// JSON documents to check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Rewrite files, renaming keys that have exactly one suggestion
    #[arg(long)]
    pub apply: bool,

    /// Exit with status 2 if any finding is reported
    #[arg(long)]
    pub deny: bool,

    /// Classify on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Names to classify
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for listing presets
#[derive(Parser, Debug, Clone)]
pub struct PresetsArgs {
    /// Extra preset tables to include in the listing
    #[arg(long, value_name = "PRESETS_FILE")]
    pub presets_file: Option<PathBuf>,

    /// Print group names only
    #[arg(long)]
    pub names_only: bool,
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    pub left: String,

    /// Second string
    pub right: String,

    /// Atomic unit for distance computation
    #[arg(long, default_value = "code-point")]
    pub unit: UnitArg,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Distance unit as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitArg {
    /// Unicode code points
    CodePoint,
    /// Extended grapheme clusters
    Grapheme,
}

impl From<UnitArg> for DistanceUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::CodePoint => DistanceUnit::CodePoint,
            UnitArg::Grapheme => DistanceUnit::Grapheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_command() {
        let args = OptypoArgs::try_parse_from([
            "optypo",
            "check",
            "component.json",
            "other.json",
            "--preset",
            "vue",
            "--preset",
            "nuxt",
            "--custom",
            "apollo",
            "--threshold",
            "2",
            "--apply",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(
                check_args.files,
                vec![PathBuf::from("component.json"), PathBuf::from("other.json")]
            );
            assert_eq!(check_args.config.presets, vec!["vue", "nuxt"]);
            assert_eq!(check_args.config.custom, vec!["apollo"]);
            assert_eq!(check_args.config.threshold, Some(2));
            assert!(check_args.apply);
            assert!(!check_args.deny);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_requires_a_file() {
        assert!(OptypoArgs::try_parse_from(["optypo", "check"]).is_err());
    }

    #[test]
    fn test_suggest_command() {
        let args = OptypoArgs::try_parse_from([
            "optypo",
            "suggest",
            "dat",
            "methds",
            "--config",
            "optypo.json",
            "--unit",
            "grapheme",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.names, vec!["dat", "methds"]);
            assert_eq!(suggest_args.config.config, Some(PathBuf::from("optypo.json")));
            assert_eq!(suggest_args.config.unit, Some(UnitArg::Grapheme));
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_distance_command() {
        let args = OptypoArgs::try_parse_from(["optypo", "distance", "kitten", "sitting"]).unwrap();

        if let Command::Distance(distance_args) = args.command {
            assert_eq!(distance_args.left, "kitten");
            assert_eq!(distance_args.right, "sitting");
            assert_eq!(DistanceUnit::from(distance_args.unit), DistanceUnit::CodePoint);
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = OptypoArgs::try_parse_from(["optypo", "presets"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = OptypoArgs::try_parse_from(["optypo", "-vv", "presets"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = OptypoArgs::try_parse_from(["optypo", "--quiet", "presets"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            OptypoArgs::try_parse_from(["optypo", "presets", "--format", "json", "--pretty"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
