//! Command implementations for the optypo CLI.

use std::fs;

use anyhow::Context;
use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;
use crate::util::levenshtein::DistanceUnit;

/// Exit status when `--deny` is set and findings were reported.
pub const EXIT_FINDINGS: i32 = 2;

/// Execute a CLI command, returning the process exit status.
pub fn execute_command(args: OptypoArgs) -> Result<i32> {
    match &args.command {
        Command::Check(check_args) => check_files(check_args, &args),
        Command::Suggest(suggest_args) => suggest_names(suggest_args, &args),
        Command::Presets(presets_args) => list_presets(presets_args, &args),
        Command::Distance(distance_args) => show_distance(distance_args, &args),
    }
}

/// Build the preset registry: built-in tables plus an optional extra file.
pub fn load_registry(presets_file: Option<&std::path::Path>) -> Result<PresetRegistry> {
    let mut registry = PresetRegistry::builtin();
    if let Some(path) = presets_file {
        debug!("Loading preset tables from: {}", path.display());
        registry.merge(PresetRegistry::load_from_file(path)?);
    }
    Ok(registry)
}

/// Combine the config file with command-line overrides.
pub fn load_config(config_args: &ConfigArgs) -> Result<TypoConfig> {
    let mut config = match &config_args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            TypoConfig::load_from_file(path)?
        }
        None => TypoConfig::default(),
    };

    if !config_args.presets.is_empty() {
        config.presets = config_args.presets.clone();
    }
    for name in &config_args.custom {
        if !config.custom.contains(name) {
            config.custom.push(name.clone());
        }
    }
    if let Some(threshold) = config_args.threshold {
        config.threshold = threshold;
    }
    if let Some(unit) = config_args.unit {
        config.unit = unit.into();
    }

    config.validate()?;
    Ok(config)
}

/// Resolve a classifier from command-line configuration.
pub fn build_classifier(config_args: &ConfigArgs) -> Result<TypoClassifier> {
    let registry = load_registry(config_args.presets_file.as_deref())?;
    let config = load_config(config_args)?;
    let classifier = TypoClassifier::from_config(&config, &registry)?;

    info!(
        "Checking against {} option names (threshold {}, unit {})",
        classifier.dictionary().len(),
        classifier.threshold(),
        classifier.unit()
    );

    Ok(classifier)
}

/// Classify one document and optionally apply unambiguous renames to it.
pub fn check_document(
    source: &mut JsonObjectSource,
    classifier: &TypoClassifier,
    apply: bool,
    parallel: bool,
) -> FileReport {
    let candidates = source.candidates();
    let findings = if parallel {
        classifier.par_classify(&candidates)
    } else {
        classifier.classify_all(&candidates)
    };

    let mut renamed = 0;
    if apply {
        for finding in findings.iter().filter(|f| f.is_unambiguous()) {
            for rename in finding.renames() {
                if source.apply(&rename) {
                    renamed += 1;
                } else {
                    warn!(
                        "Could not rename '{}' to '{}'",
                        rename.location, rename.replacement
                    );
                }
            }
        }
    }

    FileReport {
        path: String::new(),
        candidates: candidates.len(),
        findings,
        renamed,
    }
}

/// Check JSON component documents.
fn check_files(args: &CheckArgs, cli_args: &OptypoArgs) -> Result<i32> {
    let classifier = build_classifier(&args.config)?;
    let mut files = Vec::with_capacity(args.files.len());

    // An empty dictionary can never report anything; skip reading files.
    if !classifier.is_inactive() {
        for path in &args.files {
            debug!("Checking: {}", path.display());
            let mut source = JsonObjectSource::load_from_file(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut report = check_document(&mut source, &classifier, args.apply, args.parallel);
            report.path = path.display().to_string();

            if report.renamed > 0 {
                fs::write(path, source.to_json_pretty()? + "\n")
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("Rewrote {} ({} rename(s))", path.display(), report.renamed);
            }

            files.push(report);
        }
    }

    let total_findings = files.iter().map(|f| f.findings.len()).sum();
    let report = CheckReport {
        files,
        total_findings,
        inactive: classifier.is_inactive(),
    };
    output_result(&report, cli_args)?;

    if args.deny && total_findings > 0 {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(0)
    }
}

/// Suggest corrections for names given on the command line.
fn suggest_names(args: &SuggestArgs, cli_args: &OptypoArgs) -> Result<i32> {
    let classifier = build_classifier(&args.config)?;

    let names = args
        .names
        .iter()
        .map(|name| NameReport {
            name: name.clone(),
            valid: classifier.dictionary().contains(name),
            suggestions: classifier.suggest(name),
        })
        .collect();

    output_result(&SuggestReport { names }, cli_args)?;
    Ok(0)
}

/// List preset groups.
fn list_presets(args: &PresetsArgs, cli_args: &OptypoArgs) -> Result<i32> {
    let registry = load_registry(args.presets_file.as_deref())?;

    let groups = registry
        .iter()
        .map(|(name, options)| PresetGroup {
            name: name.to_string(),
            options: options.to_vec(),
        })
        .collect();

    output_result(
        &PresetsReport {
            groups,
            names_only: args.names_only,
        },
        cli_args,
    )?;
    Ok(0)
}

/// Print the distance between two strings.
fn show_distance(args: &DistanceArgs, cli_args: &OptypoArgs) -> Result<i32> {
    let unit: DistanceUnit = args.unit.into();
    let report = DistanceReport {
        left: args.left.clone(),
        right: args.right.clone(),
        unit: unit.name().to_string(),
        distance: unit.distance(&args.left, &args.right),
    };

    output_result(&report, cli_args)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn default_classifier() -> TypoClassifier {
        TypoClassifier::from_config(&TypoConfig::default(), &PresetRegistry::builtin()).unwrap()
    }

    #[test]
    fn test_check_document_reports_findings() {
        let mut source =
            JsonObjectSource::from_json(r#"{"name": "x", "dat": {}, "methds": {}, "computed": {}}"#)
                .unwrap();
        let report = check_document(&mut source, &default_classifier(), false, false);

        assert_eq!(report.candidates, 4);
        assert_eq!(report.renamed, 0);
        let names: Vec<&str> = report.findings.iter().map(|f| f.candidate.as_str()).collect();
        assert_eq!(names, vec!["dat", "methds"]);
    }

    #[test]
    fn test_check_document_applies_unambiguous_renames() {
        let mut source = JsonObjectSource::from_json(r#"{"dat": {}, "methds": {}}"#).unwrap();
        let report = check_document(&mut source, &default_classifier(), true, true);

        assert_eq!(report.renamed, 2);
        let keys: Vec<String> = source.candidates().into_iter().map(|c| c.name).collect();
        assert_eq!(keys, vec!["data", "methods"]);
    }

    #[test]
    fn test_load_config_overrides() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"presets": ["nuxt"], "custom": ["apollo"], "threshold": 3}}"#
        )
        .unwrap();
        temp_file.flush().unwrap();

        let config_args = ConfigArgs {
            config: Some(temp_file.path().to_path_buf()),
            presets: vec!["vue".to_string()],
            custom: vec!["pinia".to_string()],
            threshold: Some(2),
            unit: Some(UnitArg::Grapheme),
            presets_file: None,
        };

        let config = load_config(&config_args).unwrap();
        assert_eq!(config.presets, vec!["vue".to_string()]);
        assert_eq!(config.custom, vec!["apollo".to_string(), "pinia".to_string()]);
        assert_eq!(config.threshold, 2);
        assert_eq!(config.unit, DistanceUnit::Grapheme);
    }

    #[test]
    fn test_load_config_skips_custom_already_configured() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"custom": ["foo", "bar"]}}"#).unwrap();
        temp_file.flush().unwrap();

        let config_args = ConfigArgs {
            config: Some(temp_file.path().to_path_buf()),
            custom: vec!["foo".to_string(), "baz".to_string(), "baz".to_string()],
            ..Default::default()
        };

        let config = load_config(&config_args).unwrap();
        assert_eq!(config.custom, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_load_config_rejects_duplicate_custom_in_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"custom": ["foo", "foo"]}}"#).unwrap();
        temp_file.flush().unwrap();

        let config_args = ConfigArgs {
            config: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(load_config(&config_args).unwrap_err().is_config_error());
    }

    #[test]
    fn test_build_classifier_with_presets_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"pinia": ["state", "getters", "actions"]}}"#).unwrap();
        temp_file.flush().unwrap();

        let config_args = ConfigArgs {
            presets: vec!["pinia".to_string()],
            presets_file: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };

        let classifier = build_classifier(&config_args).unwrap();
        assert_eq!(classifier.dictionary().len(), 3);
        assert_eq!(classifier.suggest("getter"), vec![Suggestion::new("getters", 1)]);
    }

    #[test]
    fn test_build_classifier_unknown_preset() {
        let config_args = ConfigArgs {
            presets: vec!["pinia".to_string()],
            ..Default::default()
        };
        assert!(build_classifier(&config_args).is_err());
    }
}
