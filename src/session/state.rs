//! State held by the session flow controller

use crate::models::{Feedback, InterviewSummary, Progress, Question};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Where the interview currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No session held
    #[default]
    Idle,
    /// A question is shown and the answer draft is editable
    AwaitingAnswer,
    /// Feedback for the last answer is shown until the next question loads
    ShowingFeedback,
    /// Every question has been answered; only ending remains
    Completed,
}

/// Actions with a call in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pending {
    pub start: bool,
    pub submit: bool,
    pub end: bool,
}

/// Point-in-time copy of the flow for rendering
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlowSnapshot {
    pub phase: Phase,
    pub interview_id: Option<String>,
    pub question: Option<Question>,
    pub progress: Option<Progress>,
    pub feedback: Option<Feedback>,
    pub answer: String,
    pub can_submit: bool,
    pub pending: Pending,
    /// Message of the most recent failed call, cleared by the next attempt
    pub last_error: Option<String>,
    /// Result of the last successful end
    pub summary: Option<InterviewSummary>,
}

/// The scheduled move from feedback to the next question
#[derive(Debug)]
pub(crate) struct AdvanceTask {
    pub token: CancellationToken,
    pub handle: Option<JoinHandle<()>>,
}

#[derive(Debug, Default)]
pub(crate) struct FlowState {
    pub phase: Phase,
    pub interview_id: Option<String>,
    pub question: Option<Question>,
    pub progress: Option<Progress>,
    pub feedback: Option<Feedback>,
    pub answer: String,
    pub pending: Pending,
    pub last_error: Option<String>,
    pub summary: Option<InterviewSummary>,
    /// Bumped whenever the held session changes; results from older epochs are dropped
    pub epoch: u64,
    pub shown_at: Option<Instant>,
    pub advance: Option<AdvanceTask>,
}

impl FlowState {
    /// Why submit is unavailable, or `None` when it is allowed
    pub fn submit_blocker(&self, min_answer_chars: usize) -> Option<String> {
        if self.phase != Phase::AwaitingAnswer {
            return Some("no question is awaiting an answer".to_string());
        }
        if self.interview_id.is_none() || self.question.is_none() {
            return Some("no active question".to_string());
        }
        if self.pending.submit {
            return Some("an answer is already being submitted".to_string());
        }
        let chars = self.answer.trim().chars().count();
        if chars < min_answer_chars {
            return Some(format!(
                "answer needs at least {} characters, has {}",
                min_answer_chars, chars
            ));
        }
        None
    }

    /// Whether the question on screen is the last of the interview
    pub fn on_last_question(&self) -> bool {
        match (&self.question, &self.progress) {
            (Some(question), Some(progress)) => progress.is_last(question.question_number),
            _ => false,
        }
    }

    pub fn cancel_advance(&mut self) {
        if let Some(task) = self.advance.take() {
            task.token.cancel();
        }
    }

    /// Forget the session and everything derived from it
    pub fn clear_session(&mut self) {
        self.cancel_advance();
        self.phase = Phase::Idle;
        self.interview_id = None;
        self.question = None;
        self.progress = None;
        self.feedback = None;
        self.answer.clear();
        self.shown_at = None;
        self.epoch += 1;
    }

    pub fn snapshot(&self, min_answer_chars: usize) -> FlowSnapshot {
        FlowSnapshot {
            phase: self.phase,
            interview_id: self.interview_id.clone(),
            question: self.question.clone(),
            progress: self.progress,
            feedback: self.feedback.clone(),
            answer: self.answer.clone(),
            can_submit: self.submit_blocker(min_answer_chars).is_none(),
            pending: self.pending,
            last_error: self.last_error.clone(),
            summary: self.summary.clone(),
        }
    }
}
