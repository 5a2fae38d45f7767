//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OptypoArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::classifier::{Finding, Suggestion};
use crate::spelling::source::KeyLocation;

/// Results rendered for people rather than machines.
pub trait HumanOutput {
    /// Render the result as display text.
    fn render_human(&self, verbosity: u8) -> String;
}

/// Findings for one checked document.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub candidates: usize,
    pub findings: Vec<Finding<KeyLocation>>,
    pub renamed: usize,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub files: Vec<FileReport>,
    pub total_findings: usize,
    pub inactive: bool,
}

/// Suggestions for one name.
#[derive(Debug, Serialize, Deserialize)]
pub struct NameReport {
    pub name: String,
    pub valid: bool,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestReport {
    pub names: Vec<NameReport>,
}

/// One preset group.
#[derive(Debug, Serialize, Deserialize)]
pub struct PresetGroup {
    pub name: String,
    pub options: Vec<String>,
}

/// Result structure for the presets command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PresetsReport {
    pub groups: Vec<PresetGroup>,
    #[serde(skip)]
    pub names_only: bool,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceReport {
    pub left: String,
    pub right: String,
    pub unit: String,
    pub distance: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &OptypoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human(args.verbosity()));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &OptypoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn render_finding<L: std::fmt::Display>(out: &mut String, prefix: &str, finding: &Finding<L>) {
    let _ = writeln!(out, "{prefix}{}: {}", finding.location, finding.message());
    for suggestion in &finding.suggestions {
        let _ = writeln!(
            out,
            "    {} (distance {})",
            suggestion.description(&finding.candidate),
            suggestion.distance
        );
    }
}

impl HumanOutput for CheckReport {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = String::new();

        if self.inactive && verbosity > 0 {
            out.push_str("No option names configured; nothing to check.\n");
        }

        for file in &self.files {
            for finding in &file.findings {
                render_finding(&mut out, &format!("{}:", file.path), finding);
            }
            if file.renamed > 0 {
                let _ = writeln!(out, "{}: renamed {} key(s)", file.path, file.renamed);
            }
        }

        if verbosity > 1 {
            let candidates: usize = self.files.iter().map(|f| f.candidates).sum();
            let _ = writeln!(
                out,
                "Checked {} option key(s) in {} file(s)",
                candidates,
                self.files.len()
            );
        }
        if verbosity > 0 {
            let _ = writeln!(out, "{} potential typo(s) found", self.total_findings);
        }

        out
    }
}

impl HumanOutput for SuggestReport {
    fn render_human(&self, _verbosity: u8) -> String {
        let mut out = String::new();
        for name in &self.names {
            if name.valid {
                let _ = writeln!(out, "{}: valid option", name.name);
            } else if name.suggestions.is_empty() {
                let _ = writeln!(out, "{}: no suggestions", name.name);
            } else {
                let options: Vec<String> = name
                    .suggestions
                    .iter()
                    .map(|s| format!("{} ({})", s.name, s.distance))
                    .collect();
                let _ = writeln!(out, "{}: did you mean {}?", name.name, options.join(", "));
            }
        }
        out
    }
}

impl HumanOutput for PresetsReport {
    fn render_human(&self, _verbosity: u8) -> String {
        let mut out = String::new();
        for group in &self.groups {
            if self.names_only {
                let _ = writeln!(out, "{}", group.name);
            } else {
                let _ = writeln!(out, "{} ({}):", group.name, group.options.len());
                for option in &group.options {
                    let _ = writeln!(out, "  {option}");
                }
            }
        }
        out
    }
}

impl HumanOutput for DistanceReport {
    fn render_human(&self, verbosity: u8) -> String {
        if verbosity > 1 {
            format!(
                "distance({:?}, {:?}) = {} ({}s)\n",
                self.left, self.right, self.distance, self.unit
            )
        } else {
            format!("{}\n", self.distance)
        }
    }
}
