mod command;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use signup_lib::error::CatalogError;
use signup_lib::form::PasswordStrength;
use signup_lib::{FormConfig, MessageCatalog, RegistrationForm, SubmitEffects};
use simplelog::{Config, LevelFilter, WriteLogger};

use command::Command;

#[derive(Parser, Debug)]
#[command(name = "signup-cli")]
#[command(about = "Replay registration form events from stdin", version)]
struct Cli {
    /// JSON file overriding the default messages
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Use the length-only password rules
    #[arg(long)]
    simple_passwords: bool,

    /// Where the log is written
    #[arg(long, default_value = "signup-cli.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "debug", value_parser = parse_level)]
    log_level: LevelFilter,
}

impl Cli {
    fn password_strength(&self) -> PasswordStrength {
        if self.simple_passwords {
            PasswordStrength::Simple
        } else {
            PasswordStrength::Strong
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level
        .parse()
        .map_err(|_| format!("invalid log level '{level}'"))
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Prints the success effects instead of navigating.
struct TerminalEffects<W: Write> {
    out: W,
}

impl<W: Write> SubmitEffects for TerminalEffects<W> {
    fn navigate(&mut self, route: &str) {
        if let Err(e) = writeln!(self.out, "-> navigate {route}") {
            error!("Failed to print navigation to {route}: {e}");
        }
    }

    fn haptic_pulse(&mut self) {
        if let Err(e) = writeln!(self.out, "-> haptic pulse") {
            error!("Failed to print haptic pulse: {e}");
        }
    }
}

fn print_form(out: &mut impl Write, form: &RegistrationForm) -> io::Result<()> {
    for field in form.snapshot() {
        let status = if field.is_valid { "valid" } else { "invalid" };
        match field.error {
            Some(error) => {
                writeln!(out, "{:<8} {:?} [{status}] {error}", field.field, field.value)?
            }
            None => writeln!(out, "{:<8} {:?} [{status}]", field.field, field.value)?,
        }
    }
    Ok(())
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)?;

    let catalog = match &cli.catalog {
        Some(path) => MessageCatalog::load(path)?,
        None => MessageCatalog::default(),
    };
    let config = FormConfig::default()
        .with_catalog(catalog)
        .with_password_strength(cli.password_strength());
    let mut form = RegistrationForm::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                error!("line {}: {}", number + 1, e);
                writeln!(out, "line {}: {}", number + 1, e)?;
                continue;
            }
        };

        match command {
            Command::Type { field, text } => form.change(field, text),
            Command::Blur(field) => form.blur(field),
            Command::Submit => {
                let mut effects = TerminalEffects { out: &mut out };
                let accepted = form.attempt_submit(&mut effects);
                writeln!(out, "submit: {}", if accepted { "accepted" } else { "rejected" })?;
                if !accepted {
                    for error in form.errors() {
                        writeln!(out, "  {error}")?;
                    }
                }
            }
            Command::Show => print_form(&mut out, &form)?,
            Command::Reset => form.reset(),
        }
    }

    info!("Input exhausted");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["signup-cli"]).unwrap();
        assert!(cli.catalog.is_none());
        assert_eq!(cli.password_strength(), PasswordStrength::Strong);
        assert_eq!(cli.log_file, PathBuf::from("signup-cli.log"));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "signup-cli",
            "--catalog",
            "messages.json",
            "--simple-passwords",
            "--log-file",
            "/tmp/run.log",
            "--log-level",
            "trace",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("messages.json")));
        assert_eq!(cli.password_strength(), PasswordStrength::Simple);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/run.log"));
        assert_eq!(cli.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["signup-cli", "--log-level", "loud"]).is_err());
        assert!(Cli::try_parse_from(["signup-cli", "--catalog"]).is_err());
        assert!(Cli::try_parse_from(["signup-cli", "--verbose"]).is_err());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_effects_survive_write_failure() {
        let mut effects = TerminalEffects { out: BrokenPipe };
        effects.navigate("/home");
        effects.haptic_pulse();

        let mut effects = TerminalEffects { out: Vec::new() };
        effects.navigate("/home");
        effects.haptic_pulse();
        let printed = String::from_utf8(effects.out).unwrap();
        assert_eq!(printed, "-> navigate /home\n-> haptic pulse\n");
    }
}
