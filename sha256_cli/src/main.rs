//! `sha256` command: print the SHA-256 digest of a string, standard input or a file.
//!
//! Exit codes: 0 on success, 1 when hashing or I/O fails (including input too
//! large for the 64-bit length field), 2 on bad arguments.

mod config;

use config::{CliConfig, Command, ConfigError, InputSource, OutputFormat, USAGE};
use sha256_core::logger::{self, LOG_ENV_VAR};
use sha256_core::{digest, digest_reader, hex, log_debug, log_error, Digest, HashError};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process;

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Everything that ends the command with a non-zero status.
#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Hash(HashError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => EXIT_USAGE,
            CliError::Hash(_) => EXIT_FAILURE,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{e}"),
            CliError::Hash(e) => write!(f, "{e}"),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<HashError> for CliError {
    fn from(e: HashError) -> Self {
        CliError::Hash(e)
    }
}

fn main() {
    let env_level = env::var(LOG_ENV_VAR).ok();
    let cfg = match CliConfig::from_args(env::args_os().skip(1), env_level.as_deref()) {
        Ok(Command::Hash(cfg)) => cfg,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Version) => {
            println!("sha256 {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(e) => {
            let e = CliError::from(e);
            log_error!("{}", e);
            eprintln!("{USAGE}");
            process::exit(e.exit_code());
        }
    };
    logger::set_max_level(cfg.log_level);

    let mut out = io::stdout().lock();
    if let Err(e) = run(&cfg, &mut out) {
        let e = CliError::from(e);
        log_error!("{}", e);
        process::exit(e.exit_code());
    }
}

/// Hash the configured input and write it to `out` in the configured format.
fn run<W: Write>(cfg: &CliConfig, out: &mut W) -> sha256_core::Result<()> {
    let d = hash_input(&cfg.input)?;
    match cfg.format {
        OutputFormat::Hex => writeln!(out, "{}", hex(&d))?,
        OutputFormat::Raw => out.write_all(&d)?,
    }
    out.flush()?;
    Ok(())
}

fn hash_input(input: &InputSource) -> sha256_core::Result<Digest> {
    match input {
        InputSource::Arg(bytes) => {
            log_debug!("hashing {} argument bytes", bytes.len());
            digest(bytes)
        }
        InputSource::Stdin => {
            log_debug!("hashing standard input");
            digest_reader(io::stdin().lock())
        }
        InputSource::File(path) => {
            log_debug!("hashing file {}", path.display());
            let file = File::open(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })?;
            digest_reader(file)
        }
    }
}
