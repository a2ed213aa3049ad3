//! Interview session flow controller
//!
//! Sequences start, question, answer, feedback, next question and end against
//! an [`InterviewApi`]. State lives behind a mutex that is only ever held for
//! synchronous updates, never across a network call. Every change of the held
//! session bumps an epoch; a response that comes back under an older epoch is
//! logged and dropped instead of being applied.

use super::state::{AdvanceTask, FlowSnapshot, FlowState, Phase};
use crate::api::InterviewApi;
use crate::config::InterviewConfig;
use crate::error::{classify, InterviewerError, Result};
use crate::models::{
    AnswerRequest, Feedback, InterviewSession, InterviewSummary, QuestionResponse,
    StartInterviewRequest,
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Status the service uses once every question has been served
const EXHAUSTED_STATUS: u16 = 400;

/// Tunables of the flow
#[derive(Debug, Clone)]
pub struct FlowSettings {
    /// Request used by [`SessionController::start`]
    pub defaults: StartInterviewRequest,
    /// Minimum trimmed answer length
    pub min_answer_chars: usize,
    /// Time feedback stays on screen before the next question loads
    pub advance_delay: Duration,
}

impl From<&InterviewConfig> for FlowSettings {
    fn from(config: &InterviewConfig) -> Self {
        Self {
            defaults: config.start_request(),
            min_answer_chars: config.min_answer_chars,
            advance_delay: config.advance_delay(),
        }
    }
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self::from(&InterviewConfig::default())
    }
}

/// Owner of the interview flow
///
/// Cloning yields another handle to the same flow.
pub struct SessionController<A: InterviewApi + 'static> {
    api: Arc<A>,
    settings: Arc<FlowSettings>,
    state: Arc<Mutex<FlowState>>,
}

impl<A: InterviewApi + 'static> Clone for SessionController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            settings: Arc::clone(&self.settings),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: InterviewApi + 'static> SessionController<A> {
    /// Create an idle controller
    pub fn new(api: Arc<A>, settings: FlowSettings) -> Self {
        Self {
            api,
            settings: Arc::new(settings),
            state: Arc::new(Mutex::new(FlowState::default())),
        }
    }

    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a session with the configured defaults
    pub async fn start(&self) -> Result<InterviewSession> {
        let request = self.settings.defaults.clone();
        self.start_with(request).await
    }

    /// Start a session and load its first question
    ///
    /// Any session already held is abandoned without telling the service.
    ///
    /// # Errors
    ///
    /// Returns `ActionPending` if a start is already in flight, or the API
    /// error if either call fails. On failure the previous state is kept.
    pub async fn start_with(&self, request: StartInterviewRequest) -> Result<InterviewSession> {
        let epoch = {
            let mut state = self.lock();
            if state.pending.start {
                return Err(InterviewerError::ActionPending("start").into());
            }
            state.pending.start = true;
            state.last_error = None;
            state.epoch
        };

        let result = self.open_session(&request).await;

        let mut state = self.lock();
        state.pending.start = false;
        if state.epoch != epoch {
            tracing::warn!("Discarding start response: session changed while starting");
            return Err(InterviewerError::StaleResponse("start").into());
        }

        match result {
            Ok((session, first)) => {
                if let Some(old) = state.interview_id.as_deref() {
                    tracing::info!("Abandoning interview {}", old);
                }
                state.clear_session();
                state.summary = None;
                state.interview_id = Some(session.id.clone());
                state.apply_question(first);
                tracing::info!(
                    "Started interview {} ({} questions, {})",
                    session.id,
                    session.total_questions,
                    session.difficulty
                );
                Ok(session)
            }
            Err(e) => {
                tracing::error!("Failed to start interview: {}", e);
                state.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn open_session(
        &self,
        request: &StartInterviewRequest,
    ) -> Result<(InterviewSession, QuestionResponse)> {
        let session = self.api.start_interview(request).await?;
        let first = self.api.get_question(&session.id).await?;
        Ok((session, first))
    }

    /// Replace the answer draft
    pub fn set_answer(&self, text: impl Into<String>) {
        self.lock().answer = text.into();
    }

    /// Append a line to the answer draft
    pub fn append_answer_line(&self, line: &str) {
        let mut state = self.lock();
        if !state.answer.is_empty() {
            state.answer.push('\n');
        }
        state.answer.push_str(line);
    }

    pub fn clear_answer(&self) {
        self.lock().answer.clear();
    }

    pub fn answer(&self) -> String {
        self.lock().answer.clone()
    }

    /// Whether [`submit`](Self::submit) would send the answer
    pub fn can_submit(&self) -> bool {
        self.lock()
            .submit_blocker(self.settings.min_answer_chars)
            .is_none()
    }

    /// Send the answer draft for evaluation
    ///
    /// On success the draft is cleared, the feedback is stored and the
    /// automatic move to the next question is scheduled.
    ///
    /// # Errors
    ///
    /// Returns `SubmitDisabled` without any network call when the draft is
    /// too short or no question is awaiting an answer. On an API error the
    /// draft and phase are left untouched.
    pub async fn submit(&self) -> Result<Feedback> {
        let (epoch, request) = {
            let mut state = self.lock();
            if state.pending.submit {
                return Err(InterviewerError::ActionPending("submit").into());
            }
            if let Some(reason) = state.submit_blocker(self.settings.min_answer_chars) {
                return Err(InterviewerError::SubmitDisabled(reason).into());
            }
            let (Some(interview_id), Some(question)) =
                (state.interview_id.clone(), state.question.as_ref())
            else {
                return Err(InterviewerError::NoActiveSession.into());
            };
            let time_spent = state
                .shown_at
                .map(|shown| shown.elapsed().as_secs())
                .unwrap_or(0)
                .max(1);
            let request = AnswerRequest {
                interview_id,
                question_id: question.id.clone(),
                answer: state.answer.clone(),
                time_spent,
            };
            state.pending.submit = true;
            state.last_error = None;
            (state.epoch, request)
        };

        tracing::debug!(
            "Submitting answer for question {} ({}s)",
            request.question_id,
            request.time_spent
        );
        let result = self.api.submit_answer(&request).await;

        let mut state = self.lock();
        state.pending.submit = false;
        if state.epoch != epoch {
            tracing::warn!(
                "Discarding feedback for question {}: session changed",
                request.question_id
            );
            return Err(InterviewerError::StaleResponse("submit").into());
        }

        match result {
            Ok(feedback) => {
                tracing::info!(
                    "Question {} scored {}",
                    request.question_id,
                    feedback.score
                );
                state.answer.clear();
                state.feedback = Some(feedback.clone());
                state.phase = Phase::ShowingFeedback;
                self.schedule_advance(&mut state, epoch);
                Ok(feedback)
            }
            Err(e) => {
                tracing::error!("Failed to submit answer: {}", e);
                state.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn schedule_advance(&self, state: &mut FlowState, epoch: u64) {
        state.cancel_advance();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let delay = self.settings.advance_delay;
        let controller = self.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::debug!("Auto-advance cancelled");
                }
                _ = async {
                    tokio::time::sleep(delay).await;
                    controller.advance(epoch).await;
                } => {}
            }
        });

        state.advance = Some(AdvanceTask {
            token,
            handle: Some(handle),
        });
    }

    /// Leave the feedback screen: load the next question or finish
    async fn advance(&self, epoch: u64) {
        let interview_id = {
            let mut state = self.lock();
            if state.epoch != epoch || state.phase != Phase::ShowingFeedback {
                tracing::debug!("Skipping auto-advance: flow moved on");
                return;
            }
            if state.on_last_question() {
                tracing::info!("Last question answered");
                state.phase = Phase::Completed;
                return;
            }
            match state.interview_id.clone() {
                Some(id) => id,
                None => return,
            }
        };

        let result = self.api.get_question(&interview_id).await;

        let mut state = self.lock();
        if state.epoch != epoch || state.phase != Phase::ShowingFeedback {
            tracing::warn!(
                "Discarding next question for interview {}: flow moved on",
                interview_id
            );
            return;
        }
        match result {
            Ok(next) => state.apply_question(next),
            Err(e) => state.record_fetch_failure(&e),
        }
    }

    /// Wait until the scheduled auto-advance has run or been cancelled
    pub async fn wait_for_advance(&self) {
        let handle = self
            .lock()
            .advance
            .as_mut()
            .and_then(|task| task.handle.take());
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!("Auto-advance task failed: {}", e);
                }
            }
        }
    }

    /// Fetch the current question again
    ///
    /// Used to recover when the automatic fetch failed.
    pub async fn reload_question(&self) -> Result<QuestionResponse> {
        let (interview_id, epoch) = {
            let mut state = self.lock();
            let id = state
                .interview_id
                .clone()
                .ok_or(InterviewerError::NoActiveSession)?;
            state.last_error = None;
            (id, state.epoch)
        };

        let result = self.api.get_question(&interview_id).await;

        let mut state = self.lock();
        if state.epoch != epoch {
            tracing::warn!("Discarding reloaded question: session changed");
            return Err(InterviewerError::StaleResponse("reload").into());
        }
        match result {
            Ok(response) => {
                state.cancel_advance();
                state.apply_question(response.clone());
                Ok(response)
            }
            Err(e) => {
                state.record_fetch_failure(&e);
                Err(e)
            }
        }
    }

    /// End the held session
    ///
    /// Local state is cleared before the service is called, so the flow is
    /// back to idle even when the call fails. Returns `None` when no
    /// session was held.
    pub async fn end(&self) -> Result<Option<InterviewSummary>> {
        let (interview_id, epoch) = {
            let mut state = self.lock();
            if state.pending.end {
                return Err(InterviewerError::ActionPending("end").into());
            }
            let id = state.interview_id.clone();
            state.clear_session();
            state.summary = None;
            state.last_error = None;
            state.pending.end = id.is_some();
            (id, state.epoch)
        };

        let Some(interview_id) = interview_id else {
            tracing::debug!("End requested with no active interview");
            return Ok(None);
        };

        let result = self.api.end_interview(&interview_id).await;

        let mut state = self.lock();
        state.pending.end = false;
        match result {
            Ok(summary) => {
                tracing::info!(
                    "Ended interview {}: {}/{}",
                    interview_id,
                    summary.final_score,
                    summary.max_possible_score
                );
                if state.epoch == epoch {
                    state.summary = Some(summary.clone());
                }
                Ok(Some(summary))
            }
            Err(e) => {
                tracing::error!("Failed to end interview {}: {}", interview_id, e);
                if state.epoch == epoch {
                    state.last_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Copy of the current flow
    pub fn snapshot(&self) -> FlowSnapshot {
        self.lock().snapshot(self.settings.min_answer_chars)
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }
}

impl FlowState {
    /// Show a freshly fetched question
    ///
    /// A different question resets the draft and the answer timer.
    fn apply_question(&mut self, response: QuestionResponse) {
        let same_question = self
            .question
            .as_ref()
            .is_some_and(|q| q.id == response.question.id);
        if !same_question {
            self.answer.clear();
            self.shown_at = Some(Instant::now());
        }
        tracing::debug!(
            "Showing question {} ({}/{})",
            response.question.id,
            response.progress.current,
            response.progress.total
        );
        self.question = Some(response.question);
        self.progress = Some(response.progress);
        self.feedback = None;
        self.last_error = None;
        self.phase = Phase::AwaitingAnswer;
    }

    /// A question fetch failed; 400 means the service has no questions left
    fn record_fetch_failure(&mut self, error: &anyhow::Error) {
        let status = classify(error).and_then(InterviewerError::status);
        if status == Some(EXHAUSTED_STATUS) {
            tracing::info!("Service reports no questions left");
            self.phase = Phase::Completed;
            return;
        }
        tracing::error!("Failed to load question: {}", error);
        self.last_error = Some(error.to_string());
    }
}
