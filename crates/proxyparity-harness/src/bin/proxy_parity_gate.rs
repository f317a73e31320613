use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use proxyparity_error::{ParityError, Result};
use proxyparity_harness::log::init_tracing;
use proxyparity_harness::report::run_parity_checks_with;
use proxyparity_types::{PROXY_COMMANDS, SERVER_COMMANDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
struct CliConfig {
    format: OutputFormat,
    output_path: Option<PathBuf>,
}

fn print_help() {
    let help = "\
proxy_parity_gate - server command table vs proxy support table

USAGE:
    cargo run -p proxyparity-harness --bin proxy_parity_gate -- [OPTIONS]

OPTIONS:
    --format <text|json>   Report format (default: text)
    --output <PATH>        Write the report to path (stdout when omitted)
    -h, --help             Show this help

EXIT CODES:
    0  all checks ran
    1  a command table invariant was violated
    2  usage or I/O error
";
    println!("{help}");
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliConfig>> {
    let mut format = OutputFormat::Text;
    let mut output_path: Option<PathBuf> = None;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--format" => {
                index += 1;
                format = match args.get(index).map(String::as_str) {
                    Some("text") => OutputFormat::Text,
                    Some("json") => OutputFormat::Json,
                    Some(other) => {
                        return Err(ParityError::Usage(format!("unknown format: {other}")));
                    }
                    None => return Err(ParityError::Usage("--format requires a value".to_owned())),
                };
            }
            "--output" => {
                index += 1;
                let Some(path) = args.get(index) else {
                    return Err(ParityError::Usage("--output requires a value".to_owned()));
                };
                output_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            unknown => {
                return Err(ParityError::Usage(format!("unknown option: {unknown}")));
            }
        }
        index += 1;
    }

    Ok(Some(CliConfig {
        format,
        output_path,
    }))
}

fn open_sink(config: &CliConfig) -> Result<Box<dyn Write>> {
    match &config.output_path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let mut sink = open_sink(config)?;

    match config.format {
        OutputFormat::Text => {
            run_parity_checks_with(SERVER_COMMANDS, PROXY_COMMANDS, |lines| {
                for line in lines {
                    writeln!(sink, "{line}")?;
                }
                sink.flush()?;
                Ok(())
            })?;
        }
        OutputFormat::Json => {
            let report = run_parity_checks_with(SERVER_COMMANDS, PROXY_COMMANDS, |_| Ok(()))?;
            let payload = serde_json::to_string_pretty(&report)
                .map_err(|error| ParityError::Serialize(error.to_string()))?;
            writeln!(sink, "{payload}")?;
            sink.flush()?;
        }
    }
    Ok(())
}

/// Exit code for a finished run: 0 ran, 1 invariant violation, 2 anything else.
fn exit_code_for(outcome: &Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(ParityError::Invariant(_)) => 1,
        Err(_) => 2,
    }
}

fn error_line(error: &ParityError) -> String {
    match error {
        ParityError::Invariant(violation) => format!(
            "ERROR kind={} command={} {violation}",
            violation.kind(),
            violation.command()
        ),
        other => format!("ERROR proxy_parity_gate failed: {other}"),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let outcome = parse_args(&args).and_then(|config| match config {
        Some(config) => run(&config),
        None => Ok(()),
    });

    if let Err(error) = &outcome {
        eprintln!("{}", error_line(error));
    }
    ExitCode::from(exit_code_for(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxyparity_error::InvariantViolation;

    fn shape_violation() -> ParityError {
        ParityError::Invariant(InvariantViolation::ProxyKeyShape {
            name: "RENAME".to_owned(),
            first_key: 1,
            last_key: 2,
        })
    }

    #[test]
    fn completed_run_exits_zero() {
        assert_eq!(exit_code_for(&Ok(())), 0);
    }

    #[test]
    fn invariant_violation_exits_one() {
        assert_eq!(exit_code_for(&Err(shape_violation())), 1, "case=invariant");
        let missing = ParityError::Invariant(InvariantViolation::MissingServerEntry {
            name: "GETEX".to_owned(),
        });
        assert_eq!(exit_code_for(&Err(missing)), 1, "case=missing_server_entry");
    }

    #[test]
    fn usage_and_io_errors_exit_two() {
        let usage = ParityError::Usage("unknown option: --strict".to_owned());
        assert_eq!(exit_code_for(&Err(usage)), 2, "case=usage");
        let io = ParityError::from(io::Error::new(io::ErrorKind::NotFound, "no such dir"));
        assert_eq!(exit_code_for(&Err(io)), 2, "case=io");
    }

    #[test]
    fn invariant_error_line_names_kind_and_command() {
        let line = error_line(&shape_violation());
        assert!(
            line.starts_with("ERROR kind=proxy_key_shape command=RENAME "),
            "case=error_line line={line}"
        );
        assert!(line.contains("first=1 last=2"));
    }

    #[test]
    fn other_error_line_is_prefixed() {
        let line = error_line(&ParityError::Usage("--format requires a value".to_owned()));
        assert!(line.starts_with("ERROR proxy_parity_gate failed: "));
        assert!(line.contains("--format requires a value"));
    }

    #[test]
    fn parse_args_rejects_missing_output_path() {
        let args = vec!["--output".to_owned()];
        let err = parse_args(&args).expect_err("missing value");
        assert_eq!(exit_code_for(&Err(err)), 2);
    }
}
