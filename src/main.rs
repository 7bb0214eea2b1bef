mod cli;

use clap::Parser;
use cli::{CheckConfigArgs, ClassifyArgs, Cli, Commands, OutputFormat};
use color_eyre::eyre::{Result, WrapErr};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use jfx::config::{ConfigValidation, JFlexConfig};
use jfx::outcome::{evaluate, OutcomeKind};
use jfx::parser::parse_outputs;
use jfx::report::{render_json, render_text};
use jfx::ui_style::{Colors, Symbols};

const EXIT_REPORTED_ERRORS: u8 = 1;
const EXIT_UNEXPLAINED_FAILURE: u8 = 2;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli_args = Cli::parse();
    jfx::logging::setup_logging(cli_args.verbose);

    match cli_args.command {
        Commands::Classify(args) => classify(args),
        Commands::CheckConfig(args) => check_config(args),
    }
}

/// Reads a captured stream; no file means the stream was empty.
fn read_capture(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            let bytes = std::fs::read(p)
                .wrap_err_with(|| format!("Failed to read captured output from {}", p.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => Ok(String::new()),
    }
}

fn classify(args: ClassifyArgs) -> Result<ExitCode> {
    let stdout = read_capture(args.stdout.as_deref())?;
    let stderr = read_capture(args.stderr.as_deref())?;

    let messages = parse_outputs(&stdout, &stderr);
    debug!(
        "Parsed {} informational line(s) and {} error(s)",
        messages.informational.len(),
        messages.errors.len()
    );

    let source = args.source.as_deref();
    match evaluate(args.exit_code, messages.clone(), &args.command) {
        Ok(outcome) => {
            let rendered = match args.format {
                OutputFormat::Text => render_text(outcome.kind(), outcome.messages(), source, None),
                OutputFormat::Json => render_json(outcome.kind(), outcome.messages(), None)
                    .wrap_err("Failed to serialize report")?,
            };
            print!("{}", rendered);
            if args.format == OutputFormat::Json {
                println!();
            }
            Ok(match outcome.kind() {
                OutcomeKind::Success => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_REPORTED_ERRORS),
            })
        }
        Err(failure) => {
            match args.format {
                OutputFormat::Text => {
                    print!(
                        "{}",
                        render_text(OutcomeKind::UnexplainedFailure, &messages, source, Some(&failure))
                    );
                }
                OutputFormat::Json => {
                    let rendered = render_json(OutcomeKind::UnexplainedFailure, &messages, Some(&failure))
                        .wrap_err("Failed to serialize report")?;
                    println!("{}", rendered);
                }
            }
            Ok(ExitCode::from(EXIT_UNEXPLAINED_FAILURE))
        }
    }
}

fn check_config(args: CheckConfigArgs) -> Result<ExitCode> {
    let config = match args.config {
        Some(path) => JFlexConfig::try_load_from_path(&path)
            .wrap_err("Could not load the requested configuration")?,
        None => JFlexConfig::load(),
    }
    .with_env_overrides();

    let verdict = config.validate();
    if verdict.is_ok() {
        println!("{} {}", Colors::success(Symbols::success()), verdict);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", Colors::warning(Symbols::warning()), verdict);
    match (verdict, config.launcher_path(), config.effective_skeleton()) {
        (ConfigValidation::SkeletonMissing, _, Some(skeleton)) => {
            println!("   skeleton: {}", Colors::code(skeleton.display()));
        }
        (_, Some(launcher), _) => {
            println!("   expected launcher: {}", Colors::code(launcher.display()));
        }
        _ => println!("   set `home` in jfx.toml or the JFLEX_HOME environment variable"),
    }
    Ok(ExitCode::from(EXIT_REPORTED_ERRORS))
}
