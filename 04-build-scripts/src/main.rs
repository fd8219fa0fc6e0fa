//! Rewrites version placeholders in a build file from a properties file of
//! pins, printing the result to stdout. Each property line holds
//! `prefix..key=version`; every `key:_` token in the target becomes
//! `key:version`. The target file is never written back.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Rewrite version placeholders from a properties file")]
struct Args {
    /// Properties file holding the version pins
    versions: PathBuf,
    /// File containing `<key>:_` placeholders
    target: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    print!("{}", refreshed(&args)?);
    Ok(())
}

fn refreshed(args: &Args) -> Result<String> {
    let properties = fs::read_to_string(&args.versions)
        .with_context(|| format!("reading versions from {}", args.versions.display()))?;
    let target = fs::read_to_string(&args.target)
        .with_context(|| format!("reading target {}", args.target.display()))?;

    let pins = version_pins(&properties);
    info!("applying {} version pins to {}", pins.len(), args.target.display());
    Ok(apply_pins(&target, pins))
}

/// Parses pin lines, skipping blanks, comments, and anything without a
/// `key=version` shape.
fn version_pins(properties: &str) -> Vec<(String, String)> {
    properties
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.split_once("..").map_or(line, |(_, rest)| rest);
            match line.split_once('=') {
                Some((key, version)) => Some((key.to_string(), version.to_string())),
                None => {
                    warn!("skipping malformed pin line {:?}", line);
                    None
                }
            }
        })
        .collect()
}

/// Substitutes `key:_` with `key:version` throughout `target`. Longer keys
/// are applied first: a key that is the tail of a longer key must not
/// capture that key's placeholder.
fn apply_pins(target: &str, mut pins: Vec<(String, String)>) -> String {
    pins.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    pins.into_iter().fold(target.to_string(), |text, (key, version)| {
        text.replace(&format!("{}:_", key), &format!("{}:{}", key, version))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_pins_and_skips_noise() {
        let properties = "\
# pins below

version.group..alpha=1.2.3
version.group..beta=4.5
not-a-pin-line
";

        assert_eq!(
            version_pins(properties),
            vec![
                ("alpha".to_string(), "1.2.3".to_string()),
                ("beta".to_string(), "4.5".to_string()),
            ]
        );
    }

    #[test]
    fn lines_without_the_marker_keep_their_whole_key() {
        assert_eq!(
            version_pins("alpha=1.2.3"),
            vec![("alpha".to_string(), "1.2.3".to_string())]
        );
    }

    #[test]
    fn substitutes_placeholders() {
        let pins = vec![("alpha".to_string(), "1.2.3".to_string())];

        assert_eq!(
            apply_pins("implementation(\"com.example:alpha:_\")", pins),
            "implementation(\"com.example:alpha:1.2.3\")"
        );
    }

    #[test]
    fn leaves_unpinned_placeholders_alone() {
        let pins = vec![("alpha".to_string(), "1.2.3".to_string())];

        assert_eq!(apply_pins("com.example:beta:_", pins), "com.example:beta:_");
    }

    #[test]
    fn a_key_that_ends_another_key_does_not_capture_its_placeholder() {
        // "core" ends "http-core", so naive shortest-first replacement
        // would rewrite the tail of "http-core:_".
        let pins = vec![
            ("core".to_string(), "1.0".to_string()),
            ("http-core".to_string(), "2.0".to_string()),
        ];

        assert_eq!(
            apply_pins("a:core:_ b:http-core:_", pins),
            "a:core:1.0 b:http-core:2.0"
        );
    }

    #[test]
    fn reads_both_files_and_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let versions = dir.path().join("versions.properties");
        let target = dir.path().join("libs.txt");

        let mut file = fs::File::create(&versions).unwrap();
        writeln!(file, "version.group..alpha=1.2.3").unwrap();
        fs::write(&target, "dep(\"com.example:alpha:_\")").unwrap();

        let args = Args {
            versions,
            target,
        };
        assert_eq!(refreshed(&args).unwrap(), "dep(\"com.example:alpha:1.2.3\")");
    }

    #[test]
    fn a_missing_file_names_the_path() {
        let args = Args {
            versions: PathBuf::from("/no/such/versions.properties"),
            target: PathBuf::from("/no/such/libs.txt"),
        };

        let error = refreshed(&args).unwrap_err();
        assert!(error.to_string().contains("/no/such/versions.properties"));
    }
}
