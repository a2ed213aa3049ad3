/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes two top-level command modules:

- `practice`: Interactive interview session
- `info`: Print what the service reports about itself
*/

use crate::api::{HttpInterviewApi, InterviewApi};
use crate::config::Config;
use crate::error::Result;
use std::sync::Arc;

// Special commands parser for the practice session
pub mod special_commands;

// Practice command handler
pub mod practice {
    //! Interactive practice handler.
    //!
    //! Builds the HTTP API and a session controller, then runs a
    //! readline-based loop. Command lines drive the controller; any other
    //! line is appended to the answer being written.

    use super::*;
    use crate::commands::special_commands::{
        parse_draft_input, parse_special_command, print_help, SpecialCommand,
    };
    use crate::models::StartInterviewRequest;
    use crate::routes::Route;
    use crate::session::{FlowSettings, FlowSnapshot, Phase, SessionController};
    use crate::views::{self, Locale, ProgressView};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Screen state of the REPL
    #[derive(Clone, Copy)]
    struct Screen {
        route: Route,
        locale: Locale,
        progress_width: usize,
        min_answer_chars: usize,
    }

    /// Start an interactive practice session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration, already validated
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client or the line editor cannot be created
    pub async fn run_practice(config: Config) -> Result<()> {
        let api = Arc::new(HttpInterviewApi::from_config(&config)?);
        let flow = SessionController::new(Arc::clone(&api), FlowSettings::from(&config.interview));
        let mut screen = Screen {
            route: Route::Interview,
            locale: config.ui.locale,
            progress_width: config.ui.progress_width,
            min_answer_chars: config.interview.min_answer_chars,
        };

        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(&screen, api.client().base_url());

        loop {
            let prompt = format_prompt(&flow.snapshot());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(trimmed)?;

                    let drafting = screen.route == Route::Interview
                        && flow.phase() == Phase::AwaitingAnswer;
                    let parsed = if drafting {
                        parse_draft_input(trimmed)
                    } else {
                        parse_special_command(trimmed)
                    };
                    let command = match parsed {
                        Ok(command) => command,
                        Err(e) => {
                            eprintln!("{}\n", e.to_string().red());
                            continue;
                        }
                    };

                    match command {
                        SpecialCommand::Exit => break,
                        SpecialCommand::Help => print_help(),
                        SpecialCommand::None => {
                            handle_answer_line(&flow, &screen, line.trim_end());
                        }
                        SpecialCommand::Start {
                            topic,
                            difficulty,
                            questions,
                        } => {
                            let defaults = &config.interview;
                            let request = StartInterviewRequest {
                                topic: topic.unwrap_or_else(|| defaults.topic.clone()),
                                difficulty: difficulty.unwrap_or(defaults.difficulty),
                                question_count: questions.unwrap_or(defaults.question_count),
                            };
                            screen.route = Route::Interview;
                            match flow.start_with(request).await {
                                Ok(session) => {
                                    println!(
                                        "\n{} {} ({} / {})\n",
                                        "Interview started:".green().bold(),
                                        session.topic,
                                        views::difficulty_label(&session.difficulty, screen.locale),
                                        session.total_questions
                                    );
                                    print_question_screen(&flow.snapshot(), &screen);
                                }
                                Err(e) => print_error(&e),
                            }
                        }
                        SpecialCommand::Submit => handle_submit(&flow, &screen).await,
                        SpecialCommand::Clear => {
                            flow.clear_answer();
                            println!("{}\n", "Answer cleared".yellow());
                        }
                        SpecialCommand::ShowAnswer => {
                            let snapshot = flow.snapshot();
                            println!(
                                "\n{}\n",
                                views::render_draft(
                                    &snapshot.answer,
                                    screen.min_answer_chars,
                                    snapshot.pending.submit,
                                    screen.locale
                                )
                            );
                        }
                        SpecialCommand::Reload => match flow.reload_question().await {
                            Ok(_) => print_question_screen(&flow.snapshot(), &screen),
                            Err(e) => {
                                if flow.phase() == Phase::Completed {
                                    print_completed();
                                } else {
                                    print_error(&e);
                                }
                            }
                        },
                        SpecialCommand::End => handle_end(&flow, &screen).await,
                        SpecialCommand::ShowStatus => print_status_display(&flow.snapshot(), &screen),
                        SpecialCommand::Go(route) => {
                            screen.route = route;
                            print_route(&flow.snapshot(), &screen);
                        }
                        SpecialCommand::Info => match api.api_info().await {
                            Ok(value) => println!("{}\n", super::info::format_info(&value)),
                            Err(e) => print_error(&e),
                        },
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        if flow.snapshot().interview_id.is_some() {
            handle_end(&flow, &screen).await;
        }

        println!("Goodbye!");
        Ok(())
    }

    fn handle_answer_line<A: InterviewApi + 'static>(
        flow: &SessionController<A>,
        screen: &Screen,
        line: &str,
    ) {
        if screen.route != Route::Interview {
            println!(
                "{}\n",
                "Switch to the interview screen with /go interview to answer".yellow()
            );
            return;
        }
        match flow.phase() {
            Phase::AwaitingAnswer => flow.append_answer_line(line),
            Phase::Idle => println!("{}\n", "Type /start to begin an interview".yellow()),
            Phase::ShowingFeedback => {
                println!(
                    "{}\n",
                    "Wait for the next question, or type /reload or /end".yellow()
                )
            }
            Phase::Completed => print_completed(),
        }
    }

    async fn handle_submit<A: InterviewApi + 'static>(flow: &SessionController<A>, screen: &Screen) {
        if flow.can_submit() {
            println!("{}", screen.locale.labels().submitting.bright_black());
        }
        let feedback = match flow.submit().await {
            Ok(feedback) => feedback,
            Err(e) => {
                print_error(&e);
                return;
            }
        };
        println!("\n{}\n", views::render_feedback(&feedback, screen.locale));

        match flow.phase() {
            Phase::ShowingFeedback => {
                let delay = flow.settings().advance_delay;
                println!(
                    "{}\n",
                    format!(
                        "Next step in {:.1}s. Type /end to finish now.",
                        delay.as_secs_f64()
                    )
                    .bright_black()
                );
                follow_advance(flow.clone(), *screen);
            }
            Phase::Completed => print_completed(),
            _ => {}
        }
    }

    /// Print whatever the auto-advance leads to, while the prompt stays usable
    fn follow_advance<A: InterviewApi + 'static>(flow: SessionController<A>, screen: Screen) {
        let interview_id = flow.snapshot().interview_id;
        tokio::spawn(async move {
            flow.wait_for_advance().await;
            let snapshot = flow.snapshot();
            if snapshot.interview_id != interview_id {
                return;
            }
            match snapshot.phase {
                Phase::AwaitingAnswer => print_question_screen(&snapshot, &screen),
                Phase::Completed => print_completed(),
                Phase::ShowingFeedback => {
                    if let Some(error) = &snapshot.last_error {
                        eprintln!("{} {}", "Error:".red().bold(), error);
                        println!(
                            "{}\n",
                            "Type /reload to try loading the next question again".yellow()
                        );
                    }
                }
                Phase::Idle => {}
            }
        });
    }

    async fn handle_end<A: InterviewApi + 'static>(flow: &SessionController<A>, screen: &Screen) {
        match flow.end().await {
            Ok(Some(summary)) => println!("\n{}\n", views::render_summary(&summary, screen.locale)),
            Ok(None) => println!("{}\n", "No interview in progress".yellow()),
            Err(e) => {
                print_error(&e);
                println!("{}\n", "The interview was closed locally".yellow());
            }
        }
    }

    fn format_prompt(snapshot: &FlowSnapshot) -> String {
        let tag = match (snapshot.phase, &snapshot.progress) {
            (Phase::AwaitingAnswer, Some(progress)) => {
                format!("[{}/{}]", progress.current, progress.total).cyan()
            }
            (Phase::ShowingFeedback, _) => "[feedback]".yellow(),
            (Phase::Completed, _) => "[done]".green(),
            _ => "[idle]".bright_black(),
        };
        format!("{} >> ", tag)
    }

    fn print_welcome_banner(screen: &Screen, base_url: &str) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║              Interviewer Practice Session                    ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Service: {}\n", base_url.cyan());
        println!("{}\n", views::render_header(screen.route, screen.locale));
        println!("{}\n", views::render_welcome(screen.locale));
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    fn print_question_screen(snapshot: &FlowSnapshot, screen: &Screen) {
        if let Some(progress) = snapshot.progress {
            println!(
                "{}\n",
                ProgressView::from(progress).render(screen.progress_width, screen.locale)
            );
        }
        if let Some(question) = &snapshot.question {
            println!("{}\n", views::render_question(question, screen.locale));
        }
    }

    fn print_status_display(snapshot: &FlowSnapshot, screen: &Screen) {
        println!("\n{}\n", views::render_header(screen.route, screen.locale));
        match snapshot.phase {
            Phase::Idle => {
                if let Some(summary) = &snapshot.summary {
                    println!("{}\n", views::render_summary(summary, screen.locale));
                } else {
                    println!("{}\n", views::render_welcome(screen.locale));
                }
            }
            _ => {
                print_question_screen(snapshot, screen);
                if let Some(feedback) = &snapshot.feedback {
                    println!("{}\n", views::render_feedback(feedback, screen.locale));
                }
                if snapshot.phase == Phase::AwaitingAnswer {
                    println!(
                        "{}\n",
                        views::render_draft(
                            &snapshot.answer,
                            screen.min_answer_chars,
                            snapshot.pending.submit,
                            screen.locale
                        )
                    );
                }
            }
        }
        if let Some(error) = &snapshot.last_error {
            eprintln!("{} {}\n", "Last error:".red().bold(), error);
        }
    }

    fn print_route(snapshot: &FlowSnapshot, screen: &Screen) {
        match screen.route {
            Route::Interview => print_status_display(snapshot, screen),
            Route::History => {
                println!("\n{}\n", views::render_header(screen.route, screen.locale));
                println!("{}\n", views::render_history_page(screen.locale));
            }
            Route::Profile => {
                println!("\n{}\n", views::render_header(screen.route, screen.locale));
                println!("{}\n", views::render_profile_page(screen.locale));
            }
        }
    }

    fn print_completed() {
        println!(
            "{}\n",
            "All questions answered. Type /end to see your result.".green()
        );
    }

    fn print_error(error: &anyhow::Error) {
        eprintln!("{} {}\n", "Error:".red().bold(), error);
    }
}

// Info command handler
pub mod info {
    //! Service information handler.

    use super::*;
    use colored::Colorize;
    use prettytable::{format, Table};

    /// Fetch and print the service description
    ///
    /// # Errors
    ///
    /// Returns error if the service cannot be reached or answers with an error
    pub async fn show_info(config: Config, json: bool) -> Result<()> {
        let api = HttpInterviewApi::from_config(&config)?;
        let value = api.api_info().await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("\nService: {}\n", api.client().base_url().cyan());
            println!("{}", format_info(&value));
        }
        Ok(())
    }

    /// Tabulate the top-level fields of the service description
    pub fn format_info(value: &serde_json::Value) -> String {
        let Some(object) = value.as_object() else {
            return value.to_string();
        };

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
        table.add_row(prettytable::row!["Field".bold(), "Value".bold()]);
        for (key, field) in object {
            let text = match field {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            table.add_row(prettytable::row![key.cyan(), text]);
        }
        table.to_string()
    }

}
