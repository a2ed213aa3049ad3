//! Request and response types exchanged with the interview service
//!
//! Every payload the client sends or receives has a concrete type here.
//! Responses are deserialized straight into these structures, so a body with
//! the wrong shape fails at the API boundary instead of leaking into views.

use crate::error::InterviewerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest score the service awards for a single answer
pub const MAX_ANSWER_SCORE: u8 = 10;

/// Interview difficulty level
///
/// The service speaks `junior`, `middle` and `senior`. User input also
/// accepts `beginner` and `advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level questions
    #[serde(rename = "junior", alias = "beginner")]
    Beginner,
    /// Intermediate questions
    #[default]
    Middle,
    /// Expert level questions
    #[serde(rename = "senior", alias = "advanced")]
    Advanced,
}

impl Difficulty {
    /// Wire representation sent to the service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "junior",
            Self::Middle => "middle",
            Self::Advanced => "senior",
        }
    }

    /// Parse a wire or user-supplied difficulty name
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::models::Difficulty;
    ///
    /// assert_eq!(Difficulty::parse_str("junior"), Some(Difficulty::Beginner));
    /// assert_eq!(Difficulty::parse_str("Advanced"), Some(Difficulty::Advanced));
    /// assert_eq!(Difficulty::parse_str("expert"), None);
    /// ```
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "junior" | "beginner" => Some(Self::Beginner),
            "middle" => Some(Self::Middle),
            "senior" | "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = InterviewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| {
            InterviewerError::Config(format!(
                "Unknown difficulty: {}. Must be one of: junior, middle, senior",
                s
            ))
        })
    }
}

/// Body of `POST /api/interview/start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartInterviewRequest {
    /// Question topic, e.g. `javascript-basics`
    pub topic: String,
    /// Requested difficulty
    pub difficulty: Difficulty,
    /// Number of questions to ask
    pub question_count: u32,
}

/// Session created by the service on start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    /// Opaque session identifier
    pub id: String,
    pub topic: String,
    pub difficulty: String,
    pub current_question: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A single interview question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub topic: String,
    /// Kept as the raw wire string so unknown levels can be shown verbatim
    pub difficulty: String,
    /// One-based position within the interview
    pub question_number: u32,
}

/// Position and cumulative score reported with every question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
    pub score: u32,
}

impl Progress {
    /// Whether question `number` closes an interview of this length
    pub fn is_last(&self, number: u32) -> bool {
        self.total > 0 && number >= self.total
    }
}

/// Response of `GET /api/interview/question`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: Question,
    pub progress: Progress,
}

/// Body of `POST /api/interview/answer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub interview_id: String,
    pub question_id: String,
    pub answer: String,
    /// Seconds spent on the answer
    pub time_spent: u64,
}

/// Evaluation of one submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Score between 0 and [`MAX_ANSWER_SCORE`]
    pub score: u8,
    pub comment: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub correct_answer: String,
}

impl Feedback {
    /// Reject feedback whose score is out of range
    pub fn validate(&self) -> Result<(), InterviewerError> {
        if self.score > MAX_ANSWER_SCORE {
            return Err(InterviewerError::Decode(format!(
                "feedback score {} exceeds maximum of {}",
                self.score, MAX_ANSWER_SCORE
            )));
        }
        Ok(())
    }
}

/// Response of `POST /api/interview/end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub message: String,
    pub final_score: u32,
    pub max_possible_score: u32,
    pub percentage: f64,
    pub questions_answered: u32,
    pub total_questions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_difficulty_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_value(Difficulty::Beginner).unwrap(),
            json!("junior")
        );
        assert_eq!(
            serde_json::to_value(Difficulty::Middle).unwrap(),
            json!("middle")
        );
        assert_eq!(
            serde_json::to_value(Difficulty::Advanced).unwrap(),
            json!("senior")
        );
    }

    #[test]
    fn test_difficulty_accepts_aliases() {
        let d: Difficulty = serde_json::from_value(json!("beginner")).unwrap();
        assert_eq!(d, Difficulty::Beginner);
        let d: Difficulty = serde_json::from_value(json!("advanced")).unwrap();
        assert_eq!(d, Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!("MIDDLE".parse::<Difficulty>().unwrap(), Difficulty::Middle);
    }

    #[test]
    fn test_start_request_shape() {
        let request = StartInterviewRequest {
            topic: "javascript-basics".to_string(),
            difficulty: Difficulty::Middle,
            question_count: 3,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"topic": "javascript-basics", "difficulty": "middle", "question_count": 3})
        );
    }

    #[test]
    fn test_session_parses_service_payload() {
        let session: InterviewSession = serde_json::from_value(json!({
            "id": "S1",
            "topic": "javascript-basics",
            "difficulty": "middle",
            "current_question": 1,
            "total_questions": 3,
            "score": 0,
            "start_time": "2024-05-01T10:15:30.123456",
            "is_active": true
        }))
        .unwrap();
        assert_eq!(session.id, "S1");
        assert_eq!(session.total_questions, 3);
        assert!(session.is_active);
    }

    #[test]
    fn test_feedback_suggestions_default_to_empty() {
        let feedback: Feedback = serde_json::from_value(json!({
            "score": 7,
            "comment": "Good",
            "correct_answer": "closures capture scope"
        }))
        .unwrap();
        assert!(feedback.suggestions.is_empty());
        assert!(feedback.validate().is_ok());
    }

    #[test]
    fn test_feedback_shape_mismatch_fails() {
        let result = serde_json::from_value::<Feedback>(json!({
            "score": "seven",
            "comment": "Good",
            "correct_answer": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_feedback_score_out_of_range_rejected() {
        let feedback = Feedback {
            score: 11,
            comment: String::new(),
            suggestions: vec![],
            correct_answer: String::new(),
        };
        assert!(matches!(
            feedback.validate(),
            Err(InterviewerError::Decode(_))
        ));
    }

    #[test]
    fn test_progress_marks_last_question() {
        let progress = Progress {
            current: 3,
            total: 3,
            score: 14,
        };
        assert!(progress.is_last(3));
        assert!(!progress.is_last(2));
        assert!(!Progress::default().is_last(1));
    }
}
