use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the minimum level to emit.
pub const LOG_ENV_VAR: &str = "SHA256_LOG";

/// Severity level for a log entry.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    fn from_u8(v: u8) -> LogLevel {
        match v {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info  => "INFO",
            LogLevel::Warn  => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Global stderr logger lock to avoid interleaved output from multiple threads.
static LOGGER_LOCK: Mutex<()> = Mutex::new(());

static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

/// Set the least severe level that is still emitted.
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn max_level() -> LogLevel {
    LogLevel::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= max_level()
}

/// Write a log line with the given level and formatted message.
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    // A panic while holding the lock must not silence every later message.
    let _guard = LOGGER_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _ = write_line(&mut io::stderr(), level, args);
}

/// Format one entry as `[unix_millis] [LEVEL] ThreadId: message`.
fn write_line<W: Write>(out: &mut W, level: LogLevel, args: fmt::Arguments<'_>) -> io::Result<()> {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let millis = ts.as_secs() * 1000 + (ts.subsec_millis() as u64);
    let tid = std::thread::current().id();
    writeln!(out, "[{}] [{}] {:?}: {}", millis, level, tid, args)
}

// ------------- Convenience macros -------------

/// Emit a DEBUG level log entry.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, format_args!($($arg)*));
    };
}

/// Emit an INFO level log entry.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, format_args!($($arg)*));
    };
}

/// Emit a WARN level log entry.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, format_args!($($arg)*));
    };
}

/// Emit an ERROR level log entry.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, format_args!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(LogLevel::parse("TRACE"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse(" debug "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Trace < LogLevel::Debug);
        for v in 0..=4u8 {
            assert_eq!(LogLevel::from_u8(v) as u8, v);
        }
    }

    #[test]
    fn line_format() {
        let mut buf = Vec::new();
        write_line(&mut buf, LogLevel::Info, format_args!("hashed {} bytes", 3)).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with('['));
        assert!(line.contains("] [INFO] ThreadId("));
        assert!(line.ends_with(": hashed 3 bytes\n"));
    }

    #[test]
    fn max_level_filters() {
        let before = max_level();
        set_max_level(LogLevel::Error);
        assert!(!enabled(LogLevel::Warn));
        assert!(enabled(LogLevel::Error));
        set_max_level(LogLevel::Trace);
        assert!(enabled(LogLevel::Trace));
        set_max_level(before);
    }
}
