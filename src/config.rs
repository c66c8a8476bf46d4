use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://nhl.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not a valid IP address: {0:?}")]
    InvalidHost(String),

    #[error("PORT is not a valid port number: {0:?}")]
    InvalidPort(String),

    #[error("DATABASE_URL {url:?} is invalid: {source}")]
    InvalidDatabaseUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("PLAYER_LOOKUP must be \"legacy\" or \"strict\", got {0:?}")]
    InvalidPlayerLookup(String),

    #[error("ROW_FORMAT must be \"array\" or \"object\", got {0:?}")]
    InvalidRowFormat(String),
}

/// How `GET /nhl/players/{id}` answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerLookup {
    /// Runs the lookup but always answers 200 with an empty body, hit or miss.
    #[default]
    Legacy,
    /// Answers with the matching row, or 404 when nothing matches.
    Strict,
}

impl FromStr for PlayerLookup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::InvalidPlayerLookup(s.to_string())),
        }
    }
}

/// Wire shape of a single player row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFormat {
    /// Column values in table order: `[1, "Sidney Crosby", "PIT"]`
    #[default]
    Array,
    /// Column name to value, keys in table order: `{"id": 1, ...}`
    Object,
}

impl FromStr for RowFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            _ => Err(ConfigError::InvalidRowFormat(s.to_string())),
        }
    }
}

/// Server settings, read once at startup and handed to the router.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database: SqliteConnectOptions,
    pub player_lookup: PlayerLookup,
    pub row_format: RowFormat,
}

impl Config {
    /// Loads `.env` if present, then reads settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default settings pointed at the SQLite file at `path`.
    pub fn for_database(path: impl AsRef<Path>) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            database: SqliteConnectOptions::new().filename(path),
            player_lookup: PlayerLookup::default(),
            row_format: RowFormat::default(),
        }
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database = parse_database_url(&url)?;

        let player_lookup = match lookup("PLAYER_LOOKUP") {
            Some(raw) => raw.parse()?,
            None => PlayerLookup::default(),
        };

        let row_format = match lookup("ROW_FORMAT") {
            Some(raw) => raw.parse()?,
            None => RowFormat::default(),
        };

        Ok(Self {
            host,
            port,
            database,
            player_lookup,
            row_format,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// Accepts either a `sqlite:` URL or a bare file path.
fn parse_database_url(url: &str) -> Result<SqliteConnectOptions, ConfigError> {
    if url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(url).map_err(|source| ConfigError::InvalidDatabaseUrl {
            url: url.to_string(),
            source,
        })
    } else {
        Ok(SqliteConnectOptions::new().filename(url))
    }
}
