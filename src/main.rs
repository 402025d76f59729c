//! CLI entry point for grammar drift detection.
//!
//! Commands: `check` (the drift report), `symbols` (grammar symbol listing),
//! `init` and `config` (settings management).

use clap::{
    Args, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use grammar_drift::config::Settings;
use grammar_drift::display::{THEME, create_summary_table, create_symbols_table};
use grammar_drift::io::{ExitCode, OutputFormat, OutputManager};
use grammar_drift::parsing::SignatureStyle;
use grammar_drift::pipeline::{DriftAnalyzer, InputPaths};
use grammar_drift::{DriftError, DriftResult};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Grammar/parser drift detector
#[derive(Parser)]
#[command(
    name = "grammar-drift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find grammar rules a hand-written parser does not declare or implement",
    long_about = "Compares the rules of a grammar file with the methods of a recursive-descent \
                  parser and prints ready-to-paste stubs for anything missing.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input locations shared by the analysis commands
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Directory relative settings paths resolve against
    #[arg(long)]
    root: Option<PathBuf>,

    /// Grammar file (overrides paths.grammar)
    #[arg(long)]
    grammar: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Compare grammar rules with parser methods
    #[command(
        about = "Report missing parser declarations and implementations",
        after_help = "Examples:\n  grammar-drift check\n  grammar-drift check --grammar grammar/Lang.g4 --header include/Parser.h --source src/Parser.cpp\n  grammar-drift check --json --fail-on-drift"
    )]
    Check {
        #[command(flatten)]
        inputs: InputArgs,

        /// Parser interface file (overrides paths.header)
        #[arg(long)]
        header: Option<PathBuf>,

        /// Parser implementation file (overrides paths.source)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Signature style: leading, trailing or any
        #[arg(long)]
        style: Option<SignatureStyle>,

        /// Join signatures spread across several lines
        #[arg(long)]
        join_multiline: bool,

        /// Exit with code 7 when anything is missing
        #[arg(long)]
        fail_on_drift: bool,

        /// Print a counts table after the report
        #[arg(long, conflicts_with = "json")]
        summary: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List rules and tokens found in the grammar
    #[command(about = "Show extracted grammar rules and tokens")]
    Symbols {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Initialize project
    #[command(about = "Set up .grammar-drift directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let mut settings = match loaded {
        Ok(settings) => settings,
        // init must be able to replace a broken settings file
        Err(_) if matches!(cli.command, Commands::Init { .. }) => Settings::default(),
        Err(e) => {
            let error = DriftError::ConfigError {
                reason: e.to_string(),
            };
            let code = OutputManager::new(OutputFormat::Text)
                .error(&error)
                .unwrap_or(ExitCode::ConfigError);
            std::process::exit(code.into());
        }
    };

    init_logging(cli.verbose || settings.debug);

    let code = run(cli.command, &mut settings);
    tracing::debug!("exiting with {} ({})", code as i32, code.description());
    std::process::exit(code.into());
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so stdout carries only the report
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Commands, settings: &mut Settings) -> ExitCode {
    let format = match &command {
        Commands::Check { json, .. } | Commands::Symbols { json, .. } => {
            OutputFormat::from_json_flag(*json)
        }
        _ => OutputFormat::Text,
    };
    let mut output = OutputManager::new(format);

    let result = match command {
        Commands::Check {
            inputs,
            header,
            source,
            style,
            join_multiline,
            fail_on_drift,
            summary,
            json: _,
        } => {
            apply_root(settings, &inputs);
            if let Some(style) = style {
                settings.extraction.signature_style = style;
            }
            if join_multiline {
                settings.extraction.join_multiline_signatures = true;
            }

            let paths = InputPaths {
                grammar: inputs.grammar.unwrap_or_else(|| settings.grammar_path()),
                header: header.unwrap_or_else(|| settings.header_path()),
                source: source.unwrap_or_else(|| settings.source_path()),
            };
            run_check(&mut output, settings, &paths, fail_on_drift, summary)
        }

        Commands::Symbols { inputs, .. } => {
            apply_root(settings, &inputs);
            let grammar = inputs.grammar.unwrap_or_else(|| settings.grammar_path());
            run_symbols(&mut output, settings, &grammar)
        }

        Commands::Init { force } => Settings::init_config_file(force).map(|path| {
            println!(
                "{}",
                THEME.success_with_icon(&format!(
                    "Created configuration file at: {}",
                    THEME.apply(&THEME.path, path.display())
                ))
            );
            ExitCode::Success
        }),

        Commands::Config => toml::to_string_pretty(&*settings)
            .map_err(|e| DriftError::ConfigError {
                reason: e.to_string(),
            })
            .map(|toml_str| {
                println!("{}", THEME.apply(&THEME.header, "Current Configuration:"));
                println!("{}", "=".repeat(50));
                println!("{toml_str}");
                ExitCode::Success
            }),
    };

    match result {
        Ok(code) => code,
        Err(error) => output.error(&error).unwrap_or(ExitCode::GeneralError),
    }
}

fn apply_root(settings: &mut Settings, inputs: &InputArgs) {
    if let Some(root) = &inputs.root {
        settings.paths.project_root = Some(root.clone());
    }
}

fn run_check(
    output: &mut OutputManager,
    settings: &Settings,
    paths: &InputPaths,
    fail_on_drift: bool,
    summary: bool,
) -> DriftResult<ExitCode> {
    let analyzer = DriftAnalyzer::new(settings)?;
    let report = analyzer.run(paths)?;

    let code = output.report(&report, fail_on_drift).map_err(io_error)?;
    if summary {
        output
            .info(&create_summary_table(&report))
            .map_err(io_error)?;
    }
    Ok(code)
}

fn run_symbols(
    output: &mut OutputManager,
    settings: &Settings,
    grammar: &std::path::Path,
) -> DriftResult<ExitCode> {
    let analyzer = DriftAnalyzer::new(settings)?;
    let symbols = analyzer.grammar_symbols(grammar)?;
    if symbols.is_empty() {
        output
            .warn("No rules or tokens found in grammar")
            .map_err(io_error)?;
    }

    let text = format!(
        "{}\n{} rules, {} tokens",
        create_symbols_table(&symbols),
        symbols.rules.len(),
        symbols.tokens.len()
    );
    output.success(&symbols, text).map_err(io_error)
}

fn io_error(e: std::io::Error) -> DriftError {
    DriftError::General(format!("Failed to write output: {e}"))
}
