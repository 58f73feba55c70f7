use std::fmt;
use std::net::SocketAddr;

use chrono::Duration;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBind { raw: String },
    InvalidIdleSecs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBind { raw } => write!(f, "invalid --bind value: {raw}"),
            ArgsError::InvalidIdleSecs { raw } => {
                write!(f, "invalid --session-idle-secs value (expected seconds > 0): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bind <addr>] [--session-idle-secs <n>] [--no-seed]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bind {DEFAULT_BIND}");
    eprintln!("  sessions never expire unless --session-idle-secs is set");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BIND, QUIZ_SESSION_IDLE_SECS, QUIZ_NO_SEED, RUST_LOG");
}

/// Server settings resolved from flags, then environment, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub session_idle: Option<Duration>,
    pub seed: bool,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Serve(Config),
    Help,
}

fn parse_bind(raw: String) -> Result<SocketAddr, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidBind { raw })
}

fn parse_idle_secs(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(Duration::seconds(i64::from(secs))),
        _ => Err(ArgsError::InvalidIdleSecs { raw }),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Invocation {
    /// Parse process arguments using the real environment for fallbacks.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags or malformed values.
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with(args, |key| std::env::var(key).ok())
    }

    /// Parse arguments with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags or malformed values.
    pub fn parse_with(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut bind = parse_bind(env("QUIZ_BIND").unwrap_or_else(|| DEFAULT_BIND.into()))?;
        let mut session_idle = env("QUIZ_SESSION_IDLE_SECS")
            .map(parse_idle_secs)
            .transpose()?;
        let mut seed = !env("QUIZ_NO_SEED").is_some_and(|v| is_truthy(&v));

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bind" => bind = parse_bind(require_value(&mut args, "--bind")?)?,
                "--session-idle-secs" => {
                    let value = require_value(&mut args, "--session-idle-secs")?;
                    session_idle = Some(parse_idle_secs(value)?);
                }
                "--no-seed" => seed = false,
                "--help" | "-h" => return Ok(Self::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self::Serve(Config {
            bind,
            session_idle,
            seed,
        }))
    }
}
