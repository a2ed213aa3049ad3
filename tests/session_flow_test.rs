//! Session flow integration tests against a mock interview service
//!
//! Each test drives a real `SessionController` over HTTP to a wiremock
//! server and checks both the resulting flow state and the requests the
//! service received.

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    config_for, feedback_body, mount_answer, mount_question_once, mount_start, question_body,
    requests_to, summary_body,
};
use interviewer::config::Config;
use interviewer::error::{classify, InterviewerError};
use interviewer::models::AnswerRequest;
use interviewer::session::{FlowSettings, Phase, SessionController};
use interviewer::views::ProgressView;
use interviewer::HttpInterviewApi;

fn controller(config: &Config) -> SessionController<HttpInterviewApi> {
    let api = HttpInterviewApi::from_config(config).unwrap();
    SessionController::new(Arc::new(api), FlowSettings::from(&config.interview))
}

const ANSWER: &str = "A closure keeps access to its lexical scope";

// ---------------------------------------------------------------------------
// Starting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_start_shows_first_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interview/start"))
        .and(body_json(json!({
            "topic": "javascript-basics",
            "difficulty": "middle",
            "question_count": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::session_body("S1", 3)))
        .expect(1)
        .mount(&server)
        .await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;

    let flow = controller(&config_for(&server));
    let session = flow.start().await.unwrap();
    assert_eq!(session.id, "S1");

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::AwaitingAnswer);
    assert_eq!(snapshot.interview_id.as_deref(), Some("S1"));
    assert_eq!(
        snapshot.question.as_ref().map(|q| q.text.as_str()),
        Some("Question number 1?")
    );
    let progress = ProgressView::from(snapshot.progress.unwrap());
    assert_eq!(progress.percent(), 33);
    assert_eq!(progress.average_score(), 0.0);
    assert!(!snapshot.can_submit);
}

#[tokio::test]
async fn test_start_failure_keeps_idle_and_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interview/start"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let flow = controller(&config_for(&server));
    let err = flow.start().await.unwrap_err();
    assert_eq!(classify(&err).and_then(InterviewerError::status), Some(500));

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.interview_id.is_none());
    assert!(snapshot.last_error.is_some());
    assert!(!snapshot.pending.start);
}

#[tokio::test]
async fn test_start_with_failed_first_question_retains_nothing() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    Mock::given(method("GET"))
        .and(path("/api/interview/question"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let flow = controller(&config_for(&server));
    assert!(flow.start().await.is_err());

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.interview_id.is_none());
    assert!(snapshot.question.is_none());
}

// ---------------------------------------------------------------------------
// Answering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_submit_shows_feedback_then_next_question() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    mount_question_once(&server, "S1", question_body(2, 3, 8)).await;
    mount_answer(&server, 8).await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);
    assert!(flow.can_submit());

    let feedback = flow.submit().await.unwrap();
    assert_eq!(feedback.score, 8);
    assert_eq!(feedback.suggestions, vec!["Give an example".to_string()]);

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::ShowingFeedback);
    assert!(snapshot.answer.is_empty());
    assert_eq!(snapshot.feedback, Some(feedback));

    flow.wait_for_advance().await;

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::AwaitingAnswer);
    assert!(snapshot.feedback.is_none());
    assert_eq!(snapshot.question.unwrap().question_number, 2);
    let progress = ProgressView::from(snapshot.progress.unwrap());
    assert_eq!(progress.answered(), 1);
    assert_eq!(progress.average_score(), 8.0);

    let answers = requests_to(&server, "/api/interview/answer").await;
    assert_eq!(answers.len(), 1);
    let sent: AnswerRequest = serde_json::from_slice(&answers[0].body).unwrap();
    assert_eq!(sent.interview_id, "S1");
    assert_eq!(sent.question_id, "q1");
    assert_eq!(sent.answer, ANSWER);
    assert!(sent.time_spent >= 1);
}

#[tokio::test]
async fn test_short_answer_does_not_submit() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    Mock::given(method("POST"))
        .and(path("/api/interview/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feedback_body(5)))
        .expect(0)
        .mount(&server)
        .await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();

    flow.set_answer("  123456789  ");
    assert!(!flow.can_submit());
    let err = flow.submit().await.unwrap_err();
    assert!(matches!(
        classify(&err),
        Some(InterviewerError::SubmitDisabled(_))
    ));
    assert_eq!(flow.phase(), Phase::AwaitingAnswer);

    flow.set_answer("1234567890");
    assert!(flow.can_submit());
}

#[tokio::test]
async fn test_submit_timeout_keeps_draft() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    Mock::given(method("POST"))
        .and(path("/api/interview/answer"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feedback_body(9))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.api.timeout_seconds = 1;
    let flow = controller(&config);
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);

    let err = flow.submit().await.unwrap_err();
    assert!(matches!(classify(&err), Some(InterviewerError::Network(_))));

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::AwaitingAnswer);
    assert_eq!(snapshot.answer, ANSWER);
    assert!(snapshot.feedback.is_none());
    assert!(snapshot.last_error.is_some());
    assert!(snapshot.can_submit);
}

#[tokio::test]
async fn test_submit_server_error_keeps_draft() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    Mock::given(method("POST"))
        .and(path("/api/interview/answer"))
        .respond_with(ResponseTemplate::new(500).set_body_string("evaluator down"))
        .expect(1)
        .mount(&server)
        .await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);

    let err = flow.submit().await.unwrap_err();
    assert_eq!(classify(&err).and_then(InterviewerError::status), Some(500));
    assert_eq!(flow.phase(), Phase::AwaitingAnswer);
    assert_eq!(flow.answer(), ANSWER);
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_last_answer_completes_without_refetch() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 1).await;
    Mock::given(method("GET"))
        .and(path("/api/interview/question"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_body(1, 1, 0)))
        .expect(1)
        .mount(&server)
        .await;
    mount_answer(&server, 6).await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);
    flow.submit().await.unwrap();
    flow.wait_for_advance().await;

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::Completed);
    assert!(snapshot.feedback.is_some());
    assert!(!snapshot.can_submit);
}

#[tokio::test]
async fn test_exhausted_questions_complete_the_interview() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    Mock::given(method("GET"))
        .and(path("/api/interview/question"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Все вопросы пройдены"})),
        )
        .mount(&server)
        .await;
    mount_answer(&server, 7).await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);
    flow.submit().await.unwrap();
    flow.wait_for_advance().await;

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::Completed);
    assert!(snapshot.last_error.is_none());
}

#[tokio::test]
async fn test_refetch_failure_keeps_feedback_until_reload() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    // One read retry: both attempts of the automatic fetch fail
    Mock::given(method("GET"))
        .and(path("/api/interview/question"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    mount_question_once(&server, "S1", question_body(2, 3, 7)).await;
    mount_answer(&server, 7).await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);
    flow.submit().await.unwrap();
    flow.wait_for_advance().await;

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::ShowingFeedback);
    assert!(snapshot.feedback.is_some());
    assert!(snapshot.last_error.is_some());

    let next = flow.reload_question().await.unwrap();
    assert_eq!(next.question.question_number, 2);
    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::AwaitingAnswer);
    assert!(snapshot.feedback.is_none());
    assert!(snapshot.last_error.is_none());
}

// ---------------------------------------------------------------------------
// Ending
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_end_returns_summary_and_clears_state() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    Mock::given(method("POST"))
        .and(path("/api/interview/end"))
        .and(query_param("interview_id", "S1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body(0, 0, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer("half-written");

    let summary = flow.end().await.unwrap().unwrap();
    assert_eq!(summary.total_questions, 3);
    assert_eq!(summary.max_possible_score, 30);

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.interview_id.is_none());
    assert!(snapshot.question.is_none());
    assert!(snapshot.answer.is_empty());
    assert_eq!(snapshot.summary, Some(summary));
}

#[tokio::test]
async fn test_end_failure_still_clears_state() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    Mock::given(method("POST"))
        .and(path("/api/interview/end"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db offline"))
        .mount(&server)
        .await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();

    assert!(flow.end().await.is_err());
    let snapshot = flow.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.interview_id.is_none());
    assert!(snapshot.summary.is_none());
}

#[tokio::test]
async fn test_end_during_feedback_cancels_advance() {
    let server = MockServer::start().await;
    mount_start(&server, "S1", 3).await;
    Mock::given(method("GET"))
        .and(path("/api/interview/question"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_body(1, 3, 0)))
        .expect(1)
        .mount(&server)
        .await;
    mount_answer(&server, 4).await;
    Mock::given(method("POST"))
        .and(path("/api/interview/end"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body(4, 1, 3)))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.interview.advance_delay_ms = 200;
    let flow = controller(&config);
    flow.start().await.unwrap();
    flow.set_answer(ANSWER);
    flow.submit().await.unwrap();

    flow.end().await.unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(flow.phase(), Phase::Idle);
    assert!(flow.snapshot().question.is_none());
}

#[tokio::test]
async fn test_restart_abandons_previous_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interview/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::session_body("S1", 3)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_start(&server, "S2", 3).await;
    mount_question_once(&server, "S1", question_body(1, 3, 0)).await;
    mount_question_once(&server, "S2", question_body(1, 3, 0)).await;

    let flow = controller(&config_for(&server));
    flow.start().await.unwrap();
    flow.set_answer("draft for S1");
    flow.start().await.unwrap();

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.interview_id.as_deref(), Some("S2"));
    assert!(snapshot.answer.is_empty());
    assert!(requests_to(&server, "/api/interview/end").await.is_empty());
}
