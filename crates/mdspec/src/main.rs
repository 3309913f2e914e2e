//! mdspec command-line tool.
//!
//! Merges Markdown descriptions and code samples into a JSON API spec, or
//! creates the empty file layout for a spec.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};

use mdspec_merge::{
    load_input, merge, require_input, scaffold, write_spec, FilesLayout, MergeError, Output,
};
use mdspec_spec::Language;
use mdspec_telemetry::{LogFormat, TelemetryConfig};

#[derive(Parser, Debug)]
#[command(
    name = "mdspec",
    about = "Merge Markdown docs and code samples into a JSON API spec",
    version
)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Log level filter (RUST_LOG takes precedence).
    #[arg(long, global = true, env = "MDSPEC_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format: text, pretty or json.
    #[arg(
        long,
        global = true,
        env = "MDSPEC_LOG_FORMAT",
        default_value = "text",
        value_parser = parse_log_format
    )]
    log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge your spec file and your Markdown files.
    Merge {
        /// The raw spec file (JSON).
        input_file: PathBuf,

        /// Root of the folder with your .md and code sample files.
        #[arg(default_value = ".")]
        files_root: PathBuf,

        /// Where to write the merged spec. Printed to stdout if omitted.
        output_file: Option<PathBuf>,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Create blank .md and code sample files for easy copy-pasting.
    #[command(name = "createfiles")]
    CreateFiles {
        /// The raw spec file (JSON).
        input_file: PathBuf,

        /// Root of the folder to create. Must not exist yet.
        #[arg(default_value = ".")]
        files_root: PathBuf,

        /// Languages to create empty code sample files for.
        #[arg(
            long,
            num_args = 1..,
            value_parser = PossibleValuesParser::new(Language::NAMES)
                .try_map(|name| name.parse::<Language>())
        )]
        languages: Vec<Language>,
    },
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::parse(s).ok_or_else(|| format!("unknown log format '{s}' (text, pretty, json)"))
}

/// Run the merge command.
fn run_merge(
    input: &Path,
    files_root: &Path,
    output: &Output,
    pretty: bool,
) -> Result<(), MergeError> {
    require_input(input)?;
    let layout = FilesLayout::existing(files_root)?;
    let mut spec = load_input(input)?;

    let report = merge(&mut spec, &layout)?;
    mdspec_telemetry::log_merge_completed!(
        operations = report.operations,
        documented = report.documented,
        missing = report.missing.len(),
        code_samples = report.code_samples,
        info_merged = report.info_merged,
        "merge completed"
    );

    write_spec(&spec, output, pretty)
}

/// Run the createfiles command.
fn run_create_files(
    input: &Path,
    files_root: &Path,
    languages: &[Language],
) -> Result<(), MergeError> {
    require_input(input)?;
    let layout = FilesLayout::fresh(files_root)?;
    let spec = load_input(input)?;

    let report = scaffold(&spec, &layout, languages)?;
    mdspec_telemetry::log_scaffold_completed!(
        root = %layout.root().display(),
        directories = report.directories,
        files = report.files,
        "Done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = TelemetryConfig::new()
        .with_log_level(cli.log.log_level)
        .with_log_format(cli.log.log_format);
    if let Err(e) = mdspec_telemetry::init_logging(&config) {
        eprintln!("error: {}", e);
        return ExitCode::from(1);
    }

    let result = match cli.command {
        Commands::Merge {
            input_file,
            files_root,
            output_file,
            pretty,
        } => run_merge(
            &input_file,
            &files_root,
            &Output::from_arg(output_file),
            pretty,
        ),
        Commands::CreateFiles {
            input_file,
            files_root,
            languages,
        } => run_create_files(&input_file, &files_root, &languages),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn merge_defaults() {
        let cli = Cli::try_parse_from(["mdspec", "merge", "spec.json"]).unwrap();
        match cli.command {
            Commands::Merge {
                input_file,
                files_root,
                output_file,
                pretty,
            } => {
                assert_eq!(input_file, PathBuf::from("spec.json"));
                assert_eq!(files_root, PathBuf::from("."));
                assert_eq!(output_file, None);
                assert!(!pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn createfiles_parses_language_names() {
        let cli = Cli::try_parse_from([
            "mdspec",
            "createfiles",
            "spec.json",
            "docs",
            "--languages",
            "C++",
            "C#",
            "Python",
        ])
        .unwrap();
        match cli.command {
            Commands::CreateFiles { languages, .. } => {
                assert_eq!(
                    languages,
                    vec![Language::Cpp, Language::CSharp, Language::Python]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn createfiles_rejects_unknown_language() {
        let result = Cli::try_parse_from([
            "mdspec",
            "createfiles",
            "spec.json",
            "--languages",
            "Rust",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn log_options_are_global() {
        let cli = Cli::try_parse_from([
            "mdspec",
            "merge",
            "spec.json",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log.log_format, LogFormat::Json);
        assert_eq!(cli.log.log_level, "debug");
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["mdspec", "publish", "spec.json"]).is_err());
    }
}
