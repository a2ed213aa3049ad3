//! Difficulty labels

use super::Locale;
use crate::models::Difficulty;
use colored::Color;

/// Localized label for a wire difficulty; unknown values are returned as-is
///
/// # Examples
///
/// ```
/// use interviewer::views::{difficulty_label, Locale};
///
/// assert_eq!(difficulty_label("junior", Locale::En), "Beginner");
/// assert_eq!(difficulty_label("staff", Locale::En), "staff");
/// ```
pub fn difficulty_label(raw: &str, locale: Locale) -> String {
    let Some(level) = Difficulty::parse_str(raw) else {
        return raw.to_string();
    };
    let label = match (locale, level) {
        (Locale::En, Difficulty::Beginner) => "Beginner",
        (Locale::En, Difficulty::Middle) => "Middle",
        (Locale::En, Difficulty::Advanced) => "Advanced",
        (Locale::Ru, Difficulty::Beginner) => "Начинающий",
        (Locale::Ru, Difficulty::Middle) => "Средний",
        (Locale::Ru, Difficulty::Advanced) => "Продвинутый",
    };
    label.to_string()
}

/// Badge color for a wire difficulty
pub fn difficulty_color(raw: &str) -> Color {
    match Difficulty::parse_str(raw) {
        Some(Difficulty::Beginner) => Color::Green,
        Some(Difficulty::Middle) => Color::Yellow,
        Some(Difficulty::Advanced) => Color::Red,
        None => Color::BrightBlack,
    }
}
