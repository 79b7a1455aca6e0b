//! Service configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use invoicegen_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "INVOICEGEN_BIND_ADDR";
pub const FONTS_DIR_VAR: &str = "INVOICEGEN_FONTS_DIR";
pub const BUILTIN_FONTS_VAR: &str = "INVOICEGEN_BUILTIN_FONTS";
pub const OUTPUT_DIR_VAR: &str = "INVOICEGEN_OUTPUT_DIR";
pub const LOG_FORMAT_VAR: &str = "INVOICEGEN_LOG_FORMAT";

const DEFAULT_FONTS_DIR: &str = "assets/fonts";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: `{value}` is not a socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: `{value}` is not a boolean (expected true/false/1/0)")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidLogFormat { var: &'static str, message: String },
}

/// Where the two font weights come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Directory holding `Outfit-Regular.ttf` and `Outfit-SemiBold.ttf`.
    Directory(PathBuf),
    /// PDF standard fonts, nothing to load.
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub fonts: FontSource,
    /// Directory for per-request temporary documents.
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => default_bind_addr(),
        };

        let builtin = match get(BUILTIN_FONTS_VAR) {
            Some(value) => parse_bool(BUILTIN_FONTS_VAR, value)?,
            None => false,
        };
        let fonts = if builtin {
            FontSource::Builtin
        } else {
            FontSource::Directory(
                get(FONTS_DIR_VAR)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_FONTS_DIR)),
            )
        };

        let output_dir = get(OUTPUT_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir);

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|message| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    message,
                })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            fonts,
            output_dir,
            log_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            fonts: FontSource::Directory(PathBuf::from(DEFAULT_FONTS_DIR)),
            output_dir: default_output_dir(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("invoicegen")
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
