use clap::{value_parser, Arg, Command};
use signup_cli::{check_draft, fields_table, load_draft, roster_table, simulate, validate_value};
use signup_form::SubmissionConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("signup")
        .version(signup_form::VERSION)
        .about("Sign-up form validation and submission harness")
        .subcommand_required(true)
        .subcommand(Command::new("fields").about("List the form fields"))
        .subcommand(
            Command::new("validate")
                .about("Validate one value")
                .arg(Arg::new("field").required(true).help("Input name, e.g. phoneNumber"))
                .arg(Arg::new("value").required(true).allow_hyphen_values(true).help("Raw value")),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a JSON draft")
                .arg(
                    Arg::new("draft")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to a JSON person draft"),
                ),
        )
        .subcommand(
            Command::new("simulate")
                .about("Submit a JSON draft against a flaky in-memory store")
                .arg(
                    Arg::new("draft")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to a JSON person draft"),
                )
                .arg(
                    Arg::new("fail-first")
                        .long("fail-first")
                        .default_value("0")
                        .value_parser(value_parser!(usize))
                        .help("Number of saves that fail before one succeeds"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Submission configuration (TOML)"),
                ),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("fields", _)) => {
            print!("{}", fields_table());
            Ok(ExitCode::SUCCESS)
        }
        Some(("validate", args)) => {
            let field = args.get_one::<String>("field").map(String::as_str).unwrap_or_default();
            let value = args.get_one::<String>("value").map(String::as_str).unwrap_or_default();
            let result = validate_value(field, value)?;
            println!("{result}");
            Ok(if result.is_valid() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(("check", args)) => {
            let Some(path) = args.get_one::<PathBuf>("draft") else {
                anyhow::bail!("missing draft path");
            };
            let problems = check_draft(&load_draft(path)?);
            if problems.is_empty() {
                println!("valid");
                return Ok(ExitCode::SUCCESS);
            }
            for (field, message) in problems {
                println!("{field}: {message}");
            }
            Ok(ExitCode::FAILURE)
        }
        Some(("simulate", args)) => {
            let Some(path) = args.get_one::<PathBuf>("draft") else {
                anyhow::bail!("missing draft path");
            };
            let fail_first = args.get_one::<usize>("fail-first").copied().unwrap_or(0);
            let config = match args.get_one::<PathBuf>("config") {
                Some(file) => SubmissionConfig::from_file(file)?,
                None => SubmissionConfig::default(),
            };

            let report = simulate(&load_draft(path)?, fail_first, config).await?;
            for failure in &report.failures {
                println!("attempt failed: {failure}");
            }
            println!("saved after {} attempt(s)", report.attempts);
            print!("{}", roster_table(&report.rows));
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            cli().print_help()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
