//! Navigation header and static screens

use super::difficulty::difficulty_label;
use super::Locale;
use crate::models::Difficulty;
use crate::routes::Route;
use colored::Colorize;

fn nav_label(route: Route, locale: Locale) -> &'static str {
    let labels = locale.labels();
    match route {
        Route::Interview => labels.nav_interview,
        Route::History => labels.nav_history,
        Route::Profile => labels.nav_profile,
    }
}

/// Title plus navigation line with the active screen highlighted
pub fn render_header(active: Route, locale: Locale) -> String {
    let nav = Route::ALL
        .iter()
        .map(|route| {
            let label = nav_label(*route, locale);
            if *route == active {
                format!("[{}]", label).cyan().bold().to_string()
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}  {}", locale.labels().app_title.bold(), nav)
}

/// Interview screen before a session is started
pub fn render_welcome(locale: Locale) -> String {
    let labels = locale.labels();
    format!(
        "{}\n{}\n\nType {} to begin.",
        labels.start_heading.bold(),
        labels.start_hint,
        "/start".cyan()
    )
}

/// History screen placeholder
pub fn render_history_page(locale: Locale) -> String {
    let labels = locale.labels();
    format!("{}\n{}", labels.history_title.bold(), labels.history_body)
}

/// Profile screen with the placeholder account form
pub fn render_profile_page(locale: Locale) -> String {
    let labels = locale.labels();
    let levels = [
        Difficulty::Beginner,
        Difficulty::Middle,
        Difficulty::Advanced,
    ]
    .iter()
    .map(|level| difficulty_label(level.as_str(), locale))
    .collect::<Vec<_>>()
    .join(" | ");

    format!(
        "{}\n{}\n\n{}: {}\n{}: {}\n{}: {}",
        labels.profile_title.bold(),
        labels.profile_subtitle,
        labels.profile_name,
        if locale == Locale::Ru {
            "Пользователь"
        } else {
            "User"
        },
        labels.profile_email,
        "user@example.com",
        labels.profile_level,
        levels
    )
}
