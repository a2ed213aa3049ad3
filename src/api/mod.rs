//! Access to the remote interview service
//!
//! - `client`: HTTP adapter with timeout, JSON headers and error classification
//! - `retry`: explicit retry budgets for reads and mutations
//! - `interview`: the typed interview operations

pub mod client;
pub mod interview;
pub mod retry;

pub use client::ApiClient;
pub use interview::{HttpInterviewApi, InterviewApi};
pub use retry::{OperationKind, RetryPolicy};
