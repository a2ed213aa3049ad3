//! Terminal rendering of interview data
//!
//! Everything in this module is a pure function of its inputs: views never
//! call the service and never own state. They return strings so the REPL
//! decides where output goes and tests can inspect it.

pub mod cards;
pub mod difficulty;
pub mod pages;
pub mod progress;
pub mod score;

pub use cards::{render_draft, render_feedback, render_question, render_summary};
pub use difficulty::{difficulty_color, difficulty_label};
pub use pages::{render_header, render_history_page, render_profile_page, render_welcome};
pub use progress::ProgressView;
pub use score::ScoreGrade;

use crate::error::InterviewerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

impl FromStr for Locale {
    type Err = InterviewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            other => Err(InterviewerError::Config(format!(
                "Unknown locale: {}. Must be one of: en, ru",
                other
            ))),
        }
    }
}

impl Locale {
    /// Label table for this locale
    pub fn labels(&self) -> &'static Labels {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

/// Fixed user-facing strings
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub nav_interview: &'static str,
    pub nav_history: &'static str,
    pub nav_profile: &'static str,
    pub start_heading: &'static str,
    pub start_hint: &'static str,
    pub question: &'static str,
    pub your_answer: &'static str,
    pub min_chars: &'static str,
    pub ready_to_submit: &'static str,
    pub submitting: &'static str,
    pub feedback_heading: &'static str,
    pub comment: &'static str,
    pub suggestions: &'static str,
    pub correct_answer: &'static str,
    pub progress_heading: &'static str,
    pub progress: &'static str,
    pub questions_done: &'static str,
    pub answers_sent: &'static str,
    pub average_score: &'static str,
    pub summary_heading: &'static str,
    pub final_score: &'static str,
    pub percentage: &'static str,
    pub answered: &'static str,
    pub history_title: &'static str,
    pub history_body: &'static str,
    pub profile_title: &'static str,
    pub profile_subtitle: &'static str,
    pub profile_name: &'static str,
    pub profile_email: &'static str,
    pub profile_level: &'static str,
}

static EN: Labels = Labels {
    app_title: "AI Interviewer",
    nav_interview: "Interview",
    nav_history: "History",
    nav_profile: "Profile",
    start_heading: "Ready to start the interview?",
    start_hint: "You will get a few questions of varying difficulty. Answer in detail and take your time.",
    question: "Question",
    your_answer: "Your answer",
    min_chars: "Minimum characters",
    ready_to_submit: "ready, type /submit",
    submitting: "Submitting...",
    feedback_heading: "Answer evaluation",
    comment: "Comment",
    suggestions: "Suggestions for improvement",
    correct_answer: "Correct answer",
    progress_heading: "Interview progress",
    progress: "Progress",
    questions_done: "questions",
    answers_sent: "Answers submitted",
    average_score: "Average score",
    summary_heading: "Interview finished",
    final_score: "Final score",
    percentage: "Result",
    answered: "Questions answered",
    history_title: "History",
    history_body: "Past interviews are not stored yet.",
    profile_title: "Profile",
    profile_subtitle: "Manage settings and view statistics",
    profile_name: "Name",
    profile_email: "Email",
    profile_level: "Developer level",
};

static RU: Labels = Labels {
    app_title: "AI Interviewer",
    nav_interview: "Интервью",
    nav_history: "История",
    nav_profile: "Профиль",
    start_heading: "Готовы начать интервью?",
    start_hint: "Вам будет предложено несколько вопросов разной сложности. Отвечайте подробно и не торопитесь.",
    question: "Вопрос",
    your_answer: "Ваш ответ",
    min_chars: "Минимум символов",
    ready_to_submit: "готово, введите /submit",
    submitting: "Отправляем...",
    feedback_heading: "Оценка ответа",
    comment: "Комментарий",
    suggestions: "Рекомендации для улучшения",
    correct_answer: "Правильный ответ",
    progress_heading: "Прогресс интервью",
    progress: "Прогресс",
    questions_done: "вопросов",
    answers_sent: "Ответов отправлено",
    average_score: "Средний балл",
    summary_heading: "Интервью завершено",
    final_score: "Итоговый балл",
    percentage: "Результат",
    answered: "Отвечено вопросов",
    history_title: "История",
    history_body: "Прошлые интервью пока не сохраняются.",
    profile_title: "Профиль",
    profile_subtitle: "Управляйте настройками и просматривайте статистику",
    profile_name: "Имя",
    profile_email: "Email",
    profile_level: "Уровень разработчика",
};
