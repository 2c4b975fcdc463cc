use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use sha256_core::logger::LogLevel;

/// Where the message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Raw bytes of a command-line argument, exactly as the OS passed them.
    Arg(Vec<u8>),
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Hex,
    Raw,
}

/// Runtime configuration assembled from arguments and environment.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: InputSource,
    pub format: OutputFormat,
    pub log_level: LogLevel,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Command {
    Hash(CliConfig),
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(&'static str),
    Conflicting(&'static str),
    InvalidLogLevel(String),
    /// An argument that is not valid Unicode on a platform without byte-level arguments.
    #[cfg_attr(unix, allow(dead_code))]
    NonUnicodeArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
            ConfigError::MissingValue(flag) => write!(f, "option '{flag}' needs a value"),
            ConfigError::Conflicting(what) => write!(f, "conflicting arguments: {what}"),
            ConfigError::InvalidLogLevel(v) => {
                write!(f, "invalid log level '{v}' (expected trace|debug|info|warn|error)")
            }
            ConfigError::NonUnicodeArgument(v) => {
                write!(f, "argument '{v}' is not valid Unicode; use --file or standard input")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub const USAGE: &str = "\
Usage: sha256 [OPTIONS] [STRING | -]

Print the SHA-256 digest of STRING, of standard input (no argument or '-'),
or of a file.

Options:
  -f, --file <PATH>        hash the contents of PATH
      --raw                write the 32 raw digest bytes instead of hex
      --log-level <LEVEL>  trace|debug|info|warn|error (default: $SHA256_LOG or warn)
  -h, --help               show this help
  -V, --version            show the version
      --                   treat the next argument as STRING even if it starts with '-'";

impl CliConfig {
    /// Parse arguments (program name already skipped). `env_level` is the raw
    /// value of the log level environment variable, if set.
    pub fn from_args<I>(args: I, env_level: Option<&str>) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut text: Option<Vec<u8>> = None;
        let mut stdin = false;
        let mut file: Option<PathBuf> = None;
        let mut format = OutputFormat::Hex;
        let mut level_arg: Option<String> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.to_str() {
                Some("-h" | "--help") => return Ok(Command::Help),
                Some("-V" | "--version") => return Ok(Command::Version),
                Some("--raw") => format = OutputFormat::Raw,
                Some("-f" | "--file") => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--file"))?;
                    if file.replace(PathBuf::from(path)).is_some() {
                        return Err(ConfigError::Conflicting("--file given more than once"));
                    }
                }
                Some("--log-level") => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--log-level"))?;
                    let value = value
                        .into_string()
                        .map_err(|v| ConfigError::InvalidLogLevel(v.to_string_lossy().into_owned()))?;
                    level_arg = Some(value);
                }
                Some("-") => stdin = true,
                Some("--") => {
                    if let Some(rest) = args.next() {
                        set_text(&mut text, arg_bytes(rest)?)?;
                    }
                    if args.next().is_some() {
                        return Err(ConfigError::Conflicting("more than one STRING"));
                    }
                }
                Some(flag) if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()))
                }
                _ => set_text(&mut text, arg_bytes(arg)?)?,
            }
        }

        let input = match (text, stdin, file) {
            (Some(s), false, None) => InputSource::Arg(s),
            (None, _, None) => InputSource::Stdin,
            (None, false, Some(p)) => InputSource::File(p),
            _ => return Err(ConfigError::Conflicting("give only one of STRING, '-' or --file")),
        };

        let log_level = match level_arg.as_deref().or(env_level) {
            Some(v) => LogLevel::parse(v).ok_or_else(|| ConfigError::InvalidLogLevel(v.to_string()))?,
            None => LogLevel::Warn,
        };

        Ok(Command::Hash(CliConfig { input, format, log_level }))
    }
}

/// The bytes to hash for a STRING argument.
#[cfg(unix)]
fn arg_bytes(arg: OsString) -> Result<Vec<u8>, ConfigError> {
    use std::os::unix::ffi::OsStringExt;
    Ok(arg.into_vec())
}

#[cfg(not(unix))]
fn arg_bytes(arg: OsString) -> Result<Vec<u8>, ConfigError> {
    arg.into_string()
        .map(String::into_bytes)
        .map_err(|v| ConfigError::NonUnicodeArgument(v.to_string_lossy().into_owned()))
}

fn set_text(slot: &mut Option<Vec<u8>>, value: Vec<u8>) -> Result<(), ConfigError> {
    if slot.replace(value).is_some() {
        return Err(ConfigError::Conflicting("more than one STRING"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: Option<&str>) -> Result<Command, ConfigError> {
        CliConfig::from_args(args.iter().map(OsString::from), env)
    }

    fn config(args: &[&str]) -> CliConfig {
        match parse(args, None) {
            Ok(Command::Hash(cfg)) => cfg,
            other => panic!("expected a hash command, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_reads_stdin() {
        let cfg = config(&[]);
        assert_eq!(cfg.input, InputSource::Stdin);
        assert_eq!(cfg.format, OutputFormat::Hex);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert_eq!(config(&["-"]).input, InputSource::Stdin);
    }

    #[test]
    fn string_argument() {
        assert_eq!(config(&["abc"]).input, InputSource::Arg(b"abc".to_vec()));
        assert_eq!(config(&["--", "-abc"]).input, InputSource::Arg(b"-abc".to_vec()));
        assert_eq!(config(&["--", ""]).input, InputSource::Arg(Vec::new()));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_hashed_as_raw_bytes() {
        use std::os::unix::ffi::OsStringExt;
        let args = vec![OsString::from_vec(vec![b'a', 0xff])];
        match CliConfig::from_args(args, None) {
            Ok(Command::Hash(cfg)) => assert_eq!(cfg.input, InputSource::Arg(vec![b'a', 0xff])),
            other => panic!("expected a hash command, got {other:?}"),
        }

        let args = vec![OsString::from("--"), OsString::from_vec(vec![b'-', 0xfe])];
        match CliConfig::from_args(args, None) {
            Ok(Command::Hash(cfg)) => assert_eq!(cfg.input, InputSource::Arg(vec![b'-', 0xfe])),
            other => panic!("expected a hash command, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_log_level_is_rejected() {
        use std::os::unix::ffi::OsStringExt;
        let args = vec![OsString::from("--log-level"), OsString::from_vec(vec![0xff])];
        assert!(matches!(
            CliConfig::from_args(args, None),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn file_and_raw() {
        let cfg = config(&["--raw", "-f", "data.bin"]);
        assert_eq!(cfg.input, InputSource::File(PathBuf::from("data.bin")));
        assert_eq!(cfg.format, OutputFormat::Raw);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert!(matches!(parse(&["abc", "--help"], None), Ok(Command::Help)));
        assert!(matches!(parse(&["-V"], None), Ok(Command::Version)));
    }

    #[test]
    fn log_level_flag_beats_environment() {
        let cfg = match parse(&["--log-level", "debug", "x"], Some("error")) {
            Ok(Command::Hash(cfg)) => cfg,
            other => panic!("{other:?}"),
        };
        assert_eq!(cfg.log_level, LogLevel::Debug);
        let cfg = match parse(&["x"], Some("info")) {
            Ok(Command::Hash(cfg)) => cfg,
            other => panic!("{other:?}"),
        };
        assert_eq!(cfg.log_level, LogLevel::Info);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(parse(&["--nope"], None).unwrap_err(), ConfigError::UnknownFlag("--nope".into()));
        assert_eq!(parse(&["--file"], None).unwrap_err(), ConfigError::MissingValue("--file"));
        assert!(matches!(parse(&["a", "b"], None), Err(ConfigError::Conflicting(_))));
        assert!(matches!(parse(&["a", "-"], None), Err(ConfigError::Conflicting(_))));
        assert!(matches!(parse(&["a", "-f", "p"], None), Err(ConfigError::Conflicting(_))));
        assert_eq!(
            parse(&["x"], Some("chatty")).unwrap_err(),
            ConfigError::InvalidLogLevel("chatty".into())
        );
    }
}
