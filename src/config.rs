//! Configuration management for Interviewer
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{InterviewerError, Result};
use crate::models::{Difficulty, StartInterviewRequest};
use crate::views::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure for Interviewer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Service connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Interview flow settings
    #[serde(default)]
    pub interview: InterviewConfig,
    /// Retry behavior for API calls
    #[serde(default)]
    pub retry: RetryConfig,
    /// Terminal presentation settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Deployment profile used to resolve the service address
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Local development against the backend on its dev port
    #[default]
    Development,
    /// Deployed backend at the configured URL
    Production,
}

impl FromStr for Profile {
    type Err = InterviewerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(InterviewerError::Config(format!(
                "Invalid profile: {}. Must be one of: development, production",
                other
            ))),
        }
    }
}

/// Service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Which address to use
    #[serde(default)]
    pub profile: Profile,

    /// Service address used by the production profile
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Service address used by the development profile
    #[serde(default = "default_base_url")]
    pub dev_base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Log every outgoing request at debug level; defaults on for development
    #[serde(default)]
    pub log_requests: Option<bool>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            base_url: default_base_url(),
            dev_base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            log_requests: None,
        }
    }
}

impl ApiConfig {
    /// Address requests are sent to for the active profile
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::config::{ApiConfig, Profile};
    ///
    /// let mut api = ApiConfig::default();
    /// api.profile = Profile::Production;
    /// api.base_url = "https://interviews.example.com".to_string();
    /// assert_eq!(api.resolved_base_url(), "https://interviews.example.com");
    /// ```
    pub fn resolved_base_url(&self) -> &str {
        match self.profile {
            Profile::Development => &self.dev_base_url,
            Profile::Production => &self.base_url,
        }
    }

    /// Whether outgoing requests are logged
    pub fn request_logging(&self) -> bool {
        self.log_requests.unwrap_or(self.profile == Profile::Development)
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Interview flow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    /// Topic requested on start
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Difficulty requested on start
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Number of questions requested on start
    #[serde(default = "default_question_count")]
    pub question_count: u32,

    /// Minimum trimmed answer length before submit is enabled
    #[serde(default = "default_min_answer_chars")]
    pub min_answer_chars: usize,

    /// Delay between showing feedback and loading the next question (ms)
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
}

fn default_topic() -> String {
    "javascript-basics".to_string()
}

fn default_question_count() -> u32 {
    3
}

fn default_min_answer_chars() -> usize {
    10
}

fn default_advance_delay_ms() -> u64 {
    3000
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            difficulty: Difficulty::default(),
            question_count: default_question_count(),
            min_answer_chars: default_min_answer_chars(),
            advance_delay_ms: default_advance_delay_ms(),
        }
    }
}

impl InterviewConfig {
    /// Start request built from the configured defaults
    pub fn start_request(&self) -> StartInterviewRequest {
        StartInterviewRequest {
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            question_count: self.question_count,
        }
    }

    /// Auto-advance delay as a duration
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

/// Retry configuration
///
/// Reads are idempotent and retried; mutations are not retried unless
/// explicitly configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Extra attempts for read operations
    #[serde(default = "default_read_retries")]
    pub read_retries: u32,

    /// Extra attempts for mutating operations
    #[serde(default)]
    pub mutation_retries: u32,

    /// Delay before the first retry (ms), doubled on each further attempt
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Upper bound on the delay between attempts (ms)
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

fn default_read_retries() -> u32 {
    1
}

fn default_initial_backoff_ms() -> u64 {
    200
}

fn default_max_backoff_ms() -> u64 {
    2000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            read_retries: default_read_retries(),
            mutation_retries: 0,
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

/// Terminal presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language of labels
    #[serde(default)]
    pub locale: Locale,

    /// Width of the progress bar in cells
    #[serde(default = "default_progress_width")]
    pub progress_width: usize,
}

fn default_progress_width() -> usize {
    30
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            progress_width: default_progress_width(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli)?;

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InterviewerError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| InterviewerError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(url) = std::env::var("INTERVIEWER_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(profile) = std::env::var("INTERVIEWER_PROFILE") {
            match profile.parse() {
                Ok(p) => self.api.profile = p,
                Err(e) => tracing::warn!("Ignoring INTERVIEWER_PROFILE: {}", e),
            }
        }

        if let Ok(timeout) = std::env::var("INTERVIEWER_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(t) => self.api.timeout_seconds = t,
                Err(_) => tracing::warn!("Invalid INTERVIEWER_TIMEOUT_SECONDS: {}", timeout),
            }
        }

        if let Ok(topic) = std::env::var("INTERVIEWER_TOPIC") {
            self.interview.topic = topic;
        }

        if let Ok(difficulty) = std::env::var("INTERVIEWER_DIFFICULTY") {
            match difficulty.parse() {
                Ok(d) => self.interview.difficulty = d,
                Err(e) => tracing::warn!("Ignoring INTERVIEWER_DIFFICULTY: {}", e),
            }
        }

        if let Ok(count) = std::env::var("INTERVIEWER_QUESTION_COUNT") {
            match count.parse() {
                Ok(c) => self.interview.question_count = c,
                Err(_) => tracing::warn!("Invalid INTERVIEWER_QUESTION_COUNT: {}", count),
            }
        }

        if let Ok(locale) = std::env::var("INTERVIEWER_LOCALE") {
            match locale.parse() {
                Ok(l) => self.ui.locale = l,
                Err(e) => tracing::warn!("Ignoring INTERVIEWER_LOCALE: {}", e),
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) -> Result<()> {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(profile) = &cli.profile {
            self.api.profile = profile.parse()?;
        }

        if let Some(url) = &cli.api_url {
            // An explicit address wins regardless of profile
            self.api.base_url = url.clone();
            self.api.dev_base_url = url.clone();
        }

        if let Some(locale) = &cli.locale {
            self.ui.locale = locale.parse()?;
        }

        if let crate::cli::Commands::Practice {
            topic,
            difficulty,
            questions,
        } = &cli.command
        {
            if let Some(topic) = topic {
                self.interview.topic = topic.clone();
            }
            if let Some(difficulty) = difficulty {
                self.interview.difficulty = difficulty.parse()?;
            }
            if let Some(questions) = questions {
                self.interview.question_count = *questions;
            }
        }

        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        let base = self.api.resolved_base_url();
        if base.trim().is_empty() {
            return Err(InterviewerError::Config("API base URL cannot be empty".to_string()).into());
        }

        url::Url::parse(base).map_err(|e| {
            InterviewerError::Config(format!("Invalid API base URL {}: {}", base, e))
        })?;

        if self.api.timeout_seconds == 0 {
            return Err(InterviewerError::Config(
                "api.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.interview.topic.trim().is_empty() {
            return Err(
                InterviewerError::Config("interview.topic cannot be empty".to_string()).into(),
            );
        }

        if self.interview.question_count == 0 {
            return Err(InterviewerError::Config(
                "interview.question_count must be greater than 0".to_string(),
            )
            .into());
        }

        if self.interview.question_count > 100 {
            return Err(InterviewerError::Config(
                "interview.question_count must be less than or equal to 100".to_string(),
            )
            .into());
        }

        if self.retry.read_retries > 10 || self.retry.mutation_retries > 10 {
            return Err(InterviewerError::Config(
                "retry counts must be less than or equal to 10".to_string(),
            )
            .into());
        }

        if self.retry.initial_backoff_ms > self.retry.max_backoff_ms {
            return Err(InterviewerError::Config(
                "retry.initial_backoff_ms must not exceed retry.max_backoff_ms".to_string(),
            )
            .into());
        }

        if self.ui.progress_width == 0 {
            return Err(InterviewerError::Config(
                "ui.progress_width must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
