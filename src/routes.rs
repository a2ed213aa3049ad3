//! Screens of the client and their paths

use crate::error::InterviewerError;
use std::fmt;
use std::str::FromStr;

/// A screen reachable from the navigation line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`: the interview itself
    #[default]
    Interview,
    /// `/history`
    History,
    /// `/profile`
    Profile,
}

impl Route {
    /// Every route in navigation order
    pub const ALL: [Route; 3] = [Route::Interview, Route::History, Route::Profile];

    /// Path of the screen
    pub fn path(&self) -> &'static str {
        match self {
            Self::Interview => "/",
            Self::History => "/history",
            Self::Profile => "/profile",
        }
    }

    /// Resolve a path or screen name
    ///
    /// Unknown paths yield `None`; there is no catch-all screen.
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::routes::Route;
    ///
    /// assert_eq!(Route::from_path("/history"), Some(Route::History));
    /// assert_eq!(Route::from_path("profile"), Some(Route::Profile));
    /// assert_eq!(Route::from_path("/settings"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_end_matches('/').to_lowercase().as_str() {
            "" | "interview" => Some(Self::Interview),
            "/history" | "history" => Some(Self::History),
            "/profile" | "profile" => Some(Self::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = InterviewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| {
            InterviewerError::Command(format!(
                "Unknown screen: {}. Available: interview, history, profile",
                s
            ))
        })
    }
}
