use interviewer::config::Config;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration pointing at a mock server with a short auto-advance delay
#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.dev_base_url = server.uri();
    config.api.base_url = server.uri();
    config.api.timeout_seconds = 2;
    config.interview.advance_delay_ms = 20;
    config.retry.initial_backoff_ms = 10;
    config.retry.max_backoff_ms = 20;
    config
}

#[allow(dead_code)]
pub fn session_body(id: &str, total: u32) -> Value {
    json!({
        "id": id,
        "topic": "javascript-basics",
        "difficulty": "middle",
        "current_question": 1,
        "total_questions": total,
        "score": 0,
        "start_time": "2024-05-01T10:15:30.123456",
        "is_active": true
    })
}

#[allow(dead_code)]
pub fn question_body(number: u32, total: u32, score: u32) -> Value {
    json!({
        "question": {
            "id": format!("q{}", number),
            "text": format!("Question number {}?", number),
            "topic": "javascript-basics",
            "difficulty": "middle",
            "question_number": number
        },
        "progress": {"current": number, "total": total, "score": score}
    })
}

#[allow(dead_code)]
pub fn feedback_body(score: u8) -> Value {
    json!({
        "score": score,
        "comment": "Clear explanation",
        "suggestions": ["Give an example"],
        "correct_answer": "A closure captures its lexical environment"
    })
}

#[allow(dead_code)]
pub fn summary_body(final_score: u32, answered: u32, total: u32) -> Value {
    json!({
        "message": "Интервью завершено",
        "final_score": final_score,
        "max_possible_score": total * 10,
        "percentage": f64::from(final_score) / f64::from(total * 10) * 100.0,
        "questions_answered": answered,
        "total_questions": total
    })
}

/// Mount a start endpoint that creates session `id`
#[allow(dead_code)]
pub async fn mount_start(server: &MockServer, id: &str, total: u32) {
    Mock::given(method("POST"))
        .and(path("/api/interview/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body(id, total)))
        .mount(server)
        .await;
}

/// Mount one question response that is served once, in mount order
#[allow(dead_code)]
pub async fn mount_question_once(server: &MockServer, id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/interview/question"))
        .and(query_param("interview_id", id))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

/// Mount an answer endpoint returning `score`
#[allow(dead_code)]
pub async fn mount_answer(server: &MockServer, score: u8) {
    Mock::given(method("POST"))
        .and(path("/api/interview/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feedback_body(score)))
        .mount(server)
        .await;
}

/// Requests received for `endpoint`
#[allow(dead_code)]
pub async fn requests_to(server: &MockServer, endpoint: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == endpoint)
        .collect()
}
