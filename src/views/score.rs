//! Score grading

use super::Locale;
use colored::{Color, Colorize};

/// Qualitative bucket for a 0-10 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    /// 8 and above
    Excellent,
    /// 6 up to 8
    Good,
    /// 4 up to 6
    Fair,
    /// Below 4
    NeedsImprovement,
}

impl ScoreGrade {
    /// Bucket a score; boundaries 4, 6 and 8 belong to the upper bucket
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::views::ScoreGrade;
    ///
    /// assert_eq!(ScoreGrade::from_score(8.0), ScoreGrade::Excellent);
    /// assert_eq!(ScoreGrade::from_score(7.9), ScoreGrade::Good);
    /// assert_eq!(ScoreGrade::from_score(3.5), ScoreGrade::NeedsImprovement);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    /// Display label
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Self::Excellent) => "Excellent",
            (Locale::En, Self::Good) => "Good",
            (Locale::En, Self::Fair) => "Fair",
            (Locale::En, Self::NeedsImprovement) => "Needs improvement",
            (Locale::Ru, Self::Excellent) => "Отлично!",
            (Locale::Ru, Self::Good) => "Хорошо!",
            (Locale::Ru, Self::Fair) => "Удовлетворительно",
            (Locale::Ru, Self::NeedsImprovement) => "Требует улучшения",
        }
    }

    /// Terminal color
    pub fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Yellow,
            Self::Fair => Color::TrueColor {
                r: 255,
                g: 140,
                b: 0,
            },
            Self::NeedsImprovement => Color::Red,
        }
    }

    /// `text` painted in this grade's color
    pub fn paint(&self, text: &str) -> String {
        text.color(self.color()).bold().to_string()
    }
}
