//! Interviewer - terminal client for interview practice
//!
//! This library drives a practice interview against a remote scoring
//! service: it starts a session, shows questions, submits answers, displays
//! the evaluation and moves on until the interview is finished.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: HTTP adapter, retry policy and the typed interview operations
//! - `models`: Request and response types of the service
//! - `session`: Session flow controller and its state machine
//! - `views`: Pure renderers for questions, feedback, progress and pages
//! - `routes`: Screens reachable from the navigation line
//! - `commands`: Interactive practice loop and service probe
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use interviewer::api::HttpInterviewApi;
//! use interviewer::session::{FlowSettings, SessionController};
//! use interviewer::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let api = Arc::new(HttpInterviewApi::from_config(&config)?);
//!     let flow = SessionController::new(api, FlowSettings::from(&config.interview));
//!     flow.start().await?;
//!     flow.set_answer("A closure keeps access to its lexical scope");
//!     let feedback = flow.submit().await?;
//!     println!("scored {}", feedback.score);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod views;

// Re-export commonly used types
pub use api::{HttpInterviewApi, InterviewApi};
pub use config::Config;
pub use error::{InterviewerError, Result};
pub use session::{FlowSnapshot, Phase, SessionController};
