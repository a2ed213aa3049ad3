//! Interview progress bar

use super::score::ScoreGrade;
use super::Locale;
use colored::Colorize;

/// Progress figures derived from the service's [`crate::models::Progress`]
///
/// `current` is the one-based number of the question being shown, so the
/// number of answers already submitted is `current - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressView {
    pub current: u32,
    pub total: u32,
    pub score: u32,
}

impl ProgressView {
    pub fn new(current: u32, total: u32, score: u32) -> Self {
        Self {
            current,
            total,
            score,
        }
    }

    /// Completion percentage rounded to the nearest integer, 0 when `total` is 0
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::views::ProgressView;
    ///
    /// assert_eq!(ProgressView::new(1, 3, 0).percent(), 33);
    /// assert_eq!(ProgressView::new(2, 3, 0).percent(), 67);
    /// assert_eq!(ProgressView::new(0, 0, 0).percent(), 0);
    /// ```
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.current) * 100.0 / f64::from(self.total)).round() as u32
    }

    /// Answers already submitted
    pub fn answered(&self) -> u32 {
        self.current.saturating_sub(1)
    }

    /// Mean score of submitted answers, 0 before the first answer
    pub fn average_score(&self) -> f64 {
        match self.answered() {
            0 => 0.0,
            n => f64::from(self.score) / f64::from(n),
        }
    }

    /// Filled cells of a bar `width` cells wide
    fn filled(&self, width: usize) -> usize {
        if self.total == 0 {
            return 0;
        }
        let ratio = (f64::from(self.current) / f64::from(self.total)).clamp(0.0, 1.0);
        ((ratio * width as f64).round() as usize).min(width)
    }

    /// Render the progress block
    pub fn render(&self, width: usize, locale: Locale) -> String {
        let labels = locale.labels();
        let filled = self.filled(width);
        let bar = format!(
            "{}{}",
            "█".repeat(filled).cyan(),
            "░".repeat(width - filled).bright_black()
        );

        let average = self.average_score();
        let average_text = format!("{:.1}", average);
        let average_text = if self.answered() == 0 {
            average_text
        } else {
            ScoreGrade::from_score(average).paint(&average_text)
        };

        format!(
            "{}\n{}: {}/{} {}  {}%\n{}\n{}: {}  {}: {}  {}: {}",
            labels.progress_heading.bold(),
            labels.progress,
            self.current,
            self.total,
            labels.questions_done,
            self.percent(),
            bar,
            labels.answers_sent,
            self.answered(),
            labels.final_score,
            self.score,
            labels.average_score,
            average_text
        )
    }
}

impl From<crate::models::Progress> for ProgressView {
    fn from(progress: crate::models::Progress) -> Self {
        Self::new(progress.current, progress.total, progress.score)
    }
}
