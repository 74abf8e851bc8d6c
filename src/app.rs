use crate::config::Settings;
use crate::day::Day;
use crate::errors::Result;
use crate::handlers;
use crate::state::AppState;
use crate::ui::{render_detail_text, render_summary_line};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "streaks", version, about = "Track daily habit streaks")]
pub struct Cli {
    /// Path of the JSON data file (default: $STREAKS_DATA_PATH or data/streaks.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Treat this day as today (default: $STREAKS_TODAY or the local date)
    #[arg(long, global = true, value_name = "DAY")]
    pub today: Option<Day>,

    /// Let the current streak survive single skipped days
    #[arg(long, global = true)]
    pub lenient_gaps: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new streak
    Add {
        name: String,
        #[arg(long, short)]
        description: Option<String>,
        #[arg(long, short)]
        emoji: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List all streaks with their status
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one streak with its yearly grid
    Show {
        id: i64,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        json: bool,
    },
    /// Mark a streak done for today
    Complete {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Undo today's completion
    Uncomplete {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Delete a streak
    Delete { id: i64 },
    /// Write an HTML contribution report
    Report {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, short, default_value = "streaks.html")]
        output: PathBuf,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.data, cli.today, cli.lenient_gaps)?;
    let mut state = AppState::load(settings).await;

    match cli.command {
        Command::Add {
            name,
            description,
            emoji,
            json,
        } => {
            let record =
                handlers::add_streak(&mut state, &name, description.as_deref(), emoji.as_deref()).await?;
            if json {
                print_json(&record)?;
            } else {
                println!("Created streak [{}] {} {}", record.id, record.emoji, record.name);
            }
        }
        Command::List { json } => {
            let summaries = handlers::list_streaks(&state);
            if json {
                print_json(&summaries)?;
            } else if summaries.is_empty() {
                println!("No streaks yet! Add your first streak to get started.");
            } else {
                for summary in &summaries {
                    println!("{}", render_summary_line(summary));
                }
            }
        }
        Command::Show { id, year, json } => {
            let detail = handlers::show_streak(&state, id, year)?;
            if json {
                print_json(&detail)?;
            } else {
                print!("{}", render_detail_text(&detail));
            }
        }
        Command::Complete { id, json } => {
            let summary = handlers::complete_streak(&mut state, id).await?;
            if json {
                print_json(&summary)?;
            } else {
                println!("{}", render_summary_line(&summary));
            }
        }
        Command::Uncomplete { id, json } => {
            let summary = handlers::uncomplete_streak(&mut state, id).await?;
            if json {
                print_json(&summary)?;
            } else {
                println!("{}", render_summary_line(&summary));
            }
        }
        Command::Delete { id } => {
            let removed = handlers::delete_streak(&mut state, id).await?;
            println!("Deleted streak [{}] {}", removed.id, removed.name);
        }
        Command::Report { year, output } => {
            let count = handlers::write_report(&state, year, &output).await?;
            println!("Wrote report for {count} streak(s) to {}", output.display());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
