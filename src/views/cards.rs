//! Question, feedback and summary cards

use super::difficulty::{difficulty_color, difficulty_label};
use super::score::ScoreGrade;
use super::Locale;
use crate::models::{Feedback, InterviewSummary, Question, MAX_ANSWER_SCORE};
use colored::Colorize;
use prettytable::{format, Table};

/// Render a question with its topic and difficulty badge
pub fn render_question(question: &Question, locale: Locale) -> String {
    let labels = locale.labels();
    let badge = difficulty_label(&question.difficulty, locale)
        .color(difficulty_color(&question.difficulty))
        .bold();
    format!(
        "{} {}  [{}]  {}\n\n{}",
        labels.question.bold(),
        question.question_number,
        question.topic.cyan(),
        badge,
        question.text
    )
}

/// Render the answer draft and whether it can be submitted
///
/// The counter shows trimmed characters against `min_chars`.
pub fn render_draft(draft: &str, min_chars: usize, submitting: bool, locale: Locale) -> String {
    let labels = locale.labels();
    let count = draft.trim().chars().count();
    let status = if submitting {
        labels.submitting.yellow().to_string()
    } else if count >= min_chars {
        format!("{}/{} {}", count, min_chars, labels.ready_to_submit)
            .green()
            .to_string()
    } else {
        format!("{}: {}/{}", labels.min_chars, count, min_chars)
            .bright_black()
            .to_string()
    };

    if draft.is_empty() {
        format!("{}: -\n{}", labels.your_answer.bold(), status)
    } else {
        format!("{}:\n{}\n{}", labels.your_answer.bold(), draft, status)
    }
}

/// Render the evaluation of one answer
pub fn render_feedback(feedback: &Feedback, locale: Locale) -> String {
    let labels = locale.labels();
    let grade = ScoreGrade::from_score(f64::from(feedback.score));

    let mut out = format!(
        "{}\n{}  {}\n\n{}:\n{}\n",
        labels.feedback_heading.bold(),
        grade.paint(&format!("{}/{}", feedback.score, MAX_ANSWER_SCORE)),
        grade.paint(grade.label(locale)),
        labels.comment.bold(),
        feedback.comment
    );

    if !feedback.suggestions.is_empty() {
        out.push_str(&format!("\n{}:\n", labels.suggestions.bold()));
        for suggestion in &feedback.suggestions {
            out.push_str(&format!("  • {}\n", suggestion));
        }
    }

    out.push_str(&format!(
        "\n{}:\n{}",
        labels.correct_answer.bold(),
        feedback.correct_answer
    ));
    out
}

/// Render the end-of-interview summary as a table
pub fn render_summary(summary: &InterviewSummary, locale: Locale) -> String {
    let labels = locale.labels();
    let grade = ScoreGrade::from_score(summary.percentage / 10.0);

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(prettytable::row![
        labels.final_score.bold(),
        format!("{}/{}", summary.final_score, summary.max_possible_score)
    ]);
    table.add_row(prettytable::row![
        labels.percentage.bold(),
        grade.paint(&format!("{:.1}%", summary.percentage))
    ]);
    table.add_row(prettytable::row![
        labels.answered.bold(),
        format!("{}/{}", summary.questions_answered, summary.total_questions)
    ]);

    format!(
        "{}\n{}\n{}",
        labels.summary_heading.bold(),
        summary.message,
        table
    )
}
