// ABOUTME: Environment configuration for the server and the CLI
// ABOUTME: Parses ports, auth provider selection, storage, demo latency, and dataset settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! Environment-based configuration

use super::feature_flags::FeatureFlags;
use crate::constants::client::DEFAULT_API_BASE_URL;
use crate::constants::demo_latency::{PROGRAM_DELAY_MAX_MS, PROGRAM_DELAY_MIN_MS};
use crate::constants::env_vars;
use crate::constants::ports::{DEFAULT_HOST, DEFAULT_HTTP_PORT};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::storage::factory::StorageConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Staging
    Staging,
    /// Production
    Production,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        })
    }
}

/// Which authentication backend the frontend talks to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    /// Local storage-backed mock
    #[default]
    Demo,
    /// Supabase GoTrue
    Supabase,
}

impl FromStr for AuthProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "supabase" => Ok(Self::Supabase),
            other => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unknown auth provider '{other}', expected demo or supabase"),
            )),
        }
    }
}

impl fmt::Display for AuthProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Demo => "demo",
            Self::Supabase => "supabase",
        })
    }
}

/// Supabase project credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL
    pub url: String,
    /// Public anonymous key
    pub anon_key: String,
}

/// Authentication settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Selected provider
    pub provider: AuthProviderKind,
    /// Supabase credentials, required when the provider is Supabase
    pub supabase: Option<SupabaseConfig>,
    /// Whether the demo provider simulates network latency
    pub demo_delays: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProviderKind::Demo,
            supabase: None,
            demo_delays: true,
        }
    }
}

/// Program generation service settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramServiceConfig {
    /// Lower bound of the artificial delay
    pub delay_min_ms: u64,
    /// Upper bound of the artificial delay
    pub delay_max_ms: u64,
    /// Fixed RNG seed for reproducible output
    pub rng_seed: Option<u64>,
}

impl Default for ProgramServiceConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: PROGRAM_DELAY_MIN_MS,
            delay_max_ms: PROGRAM_DELAY_MAX_MS,
            rng_seed: None,
        }
    }
}

impl ProgramServiceConfig {
    /// No artificial delay
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
            rng_seed: None,
        }
    }
}

/// Staging demo dataset settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoDataConfig {
    /// Serve the dataset at all
    pub enabled: bool,
    /// Fixture file; the embedded dataset is used when unset
    pub data_path: Option<PathBuf>,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Backend base URL used by the API client
    pub api_base_url: String,
    /// Comma-separated origins allowed by CORS; `*` allows any
    pub cors_allowed_origins: String,
    /// Enforce per-client request limits
    pub rate_limit_enabled: bool,
    /// Authentication
    pub auth: AuthConfig,
    /// Key-value storage backend
    pub storage: StorageConfig,
    /// Program generation
    pub programs: ProgramServiceConfig,
    /// Staging demo dataset
    pub demo: DemoDataConfig,
    /// Product feature flags
    pub features: FeatureFlags,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            cors_allowed_origins: "*".to_owned(),
            rate_limit_enabled: true,
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            programs: ProgramServiceConfig::default(),
            demo: DemoDataConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or the configuration is inconsistent
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or the configuration is inconsistent
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let provider = lookup(env_vars::AUTH_PROVIDER)
            .map_or(Ok(AuthProviderKind::Demo), |raw| raw.parse())?;
        let supabase = match (
            lookup(env_vars::SUPABASE_URL),
            lookup(env_vars::SUPABASE_ANON_KEY),
        ) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig { url, anon_key }),
            _ => None,
        };

        let config = Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            http_port: parse_var(&lookup, env_vars::HTTP_PORT, DEFAULT_HTTP_PORT)?,
            log_level: LogLevel::from_str_or_default(
                &lookup("RUST_LOG").unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &lookup("ENVIRONMENT").unwrap_or_default(),
            ),
            api_base_url: lookup(env_vars::API_BASE_URL)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned()),
            cors_allowed_origins: lookup(env_vars::CORS_ALLOWED_ORIGINS)
                .unwrap_or_else(|| "*".to_owned()),
            rate_limit_enabled: parse_flag(&lookup, env_vars::RATE_LIMIT_ENABLED, true)?,
            auth: AuthConfig {
                provider,
                supabase,
                demo_delays: parse_flag(&lookup, env_vars::DEMO_AUTH_DELAY, true)?,
            },
            storage: lookup(env_vars::STORAGE_PATH)
                .map_or(StorageConfig::Memory, |path| StorageConfig::File {
                    path: PathBuf::from(path),
                }),
            programs: ProgramServiceConfig {
                delay_min_ms: parse_var(&lookup, env_vars::PROGRAM_DELAY_MIN_MS, PROGRAM_DELAY_MIN_MS)?,
                delay_max_ms: parse_var(&lookup, env_vars::PROGRAM_DELAY_MAX_MS, PROGRAM_DELAY_MAX_MS)?,
                rng_seed: lookup(env_vars::PROGRAM_RNG_SEED)
                    .map(|raw| parse_value(env_vars::PROGRAM_RNG_SEED, &raw))
                    .transpose()?,
            },
            demo: DemoDataConfig {
                enabled: lookup(env_vars::STAGING_DEMO_MODE)
                    .is_some_and(|value| is_demo_mode_value(&value)),
                data_path: lookup(env_vars::DEMO_DATA_PATH).map(PathBuf::from),
            },
            features: FeatureFlags::from_lookup(&lookup),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for inconsistent settings
    pub fn validate(&self) -> AppResult<()> {
        if self.programs.delay_min_ms > self.programs.delay_max_ms {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "PROGRAM_DELAY_MIN_MS cannot exceed PROGRAM_DELAY_MAX_MS",
            ));
        }
        if self.auth.provider == AuthProviderKind::Supabase && self.auth.supabase.is_none() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "AUTH_PROVIDER=supabase requires SUPABASE_URL and SUPABASE_ANON_KEY",
            ));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "NGX Pulse Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Rate Limiting: {}\n\
             - Auth Provider: {}\n\
             - Storage: {}\n\
             - Program Delay: {}-{} ms\n\
             - Program Seed: {}\n\
             - Demo Dataset: {}\n\
             - Lite Mode: {}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.cors_allowed_origins,
            if self.rate_limit_enabled {
                "Enabled"
            } else {
                "Disabled"
            },
            self.auth.provider,
            match &self.storage {
                StorageConfig::Memory => "memory".to_owned(),
                StorageConfig::File { path } => format!("file ({})", path.display()),
            },
            self.programs.delay_min_ms,
            self.programs.delay_max_ms,
            if self.programs.rng_seed.is_some() {
                "Fixed"
            } else {
                "Entropy"
            },
            if self.demo.enabled {
                "Enabled"
            } else {
                "Disabled"
            },
            self.features.lite_mode,
        )
    }
}

/// Values that switch staging demo mode on
#[must_use]
pub fn is_demo_mode_value(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {key} value '{raw}': {e}"),
        )
    })
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> AppResult<bool> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {key} value '{raw}'"),
        )),
    }
}
