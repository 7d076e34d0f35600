use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

// Long options that are also accepted with a single dash, e.g. `-db app.db`
const SINGLE_DASH_OPTIONS: [&str; 5] = ["db", "port", "host", "cors-allow-origin", "tracing-level"];

#[derive(Debug, Parser)]
#[command(version, about = "Read-only web explorer for a SQLite database", long_about = None)]
pub struct CliOpts {
    #[arg(
        long,
        env = "EXPLORER_DB",
        help = "Path to the SQLite database file"
    )]
    pub db: PathBuf,

    #[arg(
        long,
        env = "EXPLORER_HOST",
        default_value = "0.0.0.0",
        help = "Host to bind to"
    )]
    pub host: String,

    #[arg(
        long,
        env = "EXPLORER_PORT",
        default_value = "8080",
        help = "Port to run the web server on"
    )]
    pub port: u16,

    #[arg(long, env = "CORS_ALLOW_ORIGIN", help = "CORS Allow Origin")]
    pub cors_allow_origin: Option<String>,

    #[arg(
        long,
        value_enum,
        env = "TRACING_LEVEL",
        default_value = "info",
        help = "Tracing level, it can be overrided by *RUST_LOG* env var"
    )]
    pub tracing_level: TracingLevel,
}

impl CliOpts {
    /// Parses the process arguments, accepting single dash long options.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-db`, `-port` and the other known long options (also in the
/// `-port=8080` form) to their double dash spelling. Everything else is
/// passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(rest) = arg.to_str().and_then(|s| s.strip_prefix('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_OPTIONS.contains(&name) {
                OsString::from(format!("--{rest}"))
            } else {
                arg
            }
        })
        .collect()
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TracingLevel {
    Off,
    Info,
    Debug,
    Trace,
}

impl From<TracingLevel> for LevelFilter {
    fn from(level: TracingLevel) -> Self {
        match level {
            TracingLevel::Off => Self::OFF,
            TracingLevel::Info => Self::INFO,
            TracingLevel::Debug => Self::DEBUG,
            TracingLevel::Trace => Self::TRACE,
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOpts, clap::Error> {
        CliOpts::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_single_dash_options() {
        let args = ["explorerd", "-db", "app.db", "-port=9000", "-v", "--host", "127.0.0.1"]
            .map(OsString::from);
        let normalized = normalize_args(args);
        assert_eq!(
            normalized,
            ["explorerd", "--db", "app.db", "--port=9000", "-v", "--host", "127.0.0.1"]
                .map(OsString::from)
        );
    }

    #[test]
    fn test_option_like_values() {
        let normalized = normalize_args(["explorerd", "--db", "-db"].map(OsString::from));
        // A value that looks like an option is rewritten too, clap then
        // rejects the command line instead of opening a file named `-db`
        assert_eq!(normalized[2], OsString::from("--db"));
        let normalized = normalize_args(["explorerd", "--db", "-data.db"].map(OsString::from));
        assert_eq!(normalized[2], OsString::from("-data.db"));
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&["explorerd", "-db", "app.db"]).unwrap();
        assert_eq!(opts.db, PathBuf::from("app.db"));
        assert_eq!(opts.port, 8080);
        assert_eq!(opts.host, "0.0.0.0");
        assert!(opts.cors_allow_origin.is_none());
        assert_eq!(opts.tracing_level.to_string(), "info");
    }

    #[test]
    fn test_db_is_required() {
        let err = parse(&["explorerd", "-port", "9000"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_port() {
        let err = parse(&["explorerd", "-db", "app.db", "-port", "http"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
