//! cuecard - Main Entry Point
//!
//! Command-line front end for browsing sample answers and exporting them.

use clap::{Parser, Subcommand};
use cuecard::answer::ScoreLabel;
use cuecard::catalog::{load_catalog, Catalog, CueCard, Part};
use cuecard::config::{load_config, Settings};
use cuecard::export::{CopyOutcome, CopyTarget, SystemClipboard};
use cuecard::viewer::{AnswerContent, AnswerView};
use cuecard::{Error, Result};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Application name constant.
const APP_NAME: &str = "cuecard";

#[derive(Parser, Debug)]
#[command(name = "cuecard", version, about = "Browse and export cue card sample answers")]
struct Cli {
    /// Catalog file (json, yaml or toml); defaults to the configured catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every card by part
    Cards,
    /// List the score labels available for a card
    Scores {
        /// Card id
        card: String,
    },
    /// Show a card's answers split into segments
    Show {
        /// Card id
        card: String,
        /// Score to show; defaults to the configured initial score
        #[arg(long)]
        score: Option<String>,
        /// Print the rendered answers as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print or copy the plain-text export of a card
    Export {
        /// Card id
        card: String,
        /// Score to export; defaults to the configured initial score
        #[arg(long)]
        score: Option<String>,
        /// Export only this question (1-based)
        #[arg(long)]
        question: Option<usize>,
        /// Copy to the system clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("Starting {}", APP_NAME);

    let cli = Cli::parse();
    let settings = load_config();

    match run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let catalog_path = cli
        .catalog
        .or_else(|| settings.catalog_path.clone())
        .ok_or_else(|| {
            Error::Application(
                "No catalog given; pass --catalog or set catalog_path in the config file"
                    .to_string(),
            )
        })?;
    let catalog = load_catalog(&catalog_path)?;

    match cli.command {
        Command::Cards => list_cards(&catalog),
        Command::Scores { card } => {
            let card = catalog.require_card(&card)?;
            let view = open_view(card, settings, None);
            let scores: Vec<&str> = view.available_scores().iter().map(ScoreLabel::as_str).collect();
            println!("{}", scores.join(" "));
        }
        Command::Show { card, score, json } => {
            let card = catalog.require_card(&card)?;
            let view = open_view(card, settings, score);
            show(&view, json)?;
        }
        Command::Export {
            card,
            score,
            question,
            copy,
        } => {
            let card = catalog.require_card(&card)?;
            let mut view = open_view(card, settings, score);
            export(&mut view, question, copy)?;
        }
    }
    Ok(())
}

fn open_view<'a>(
    card: &'a CueCard,
    settings: &Settings,
    score: Option<String>,
) -> AnswerView<'a, SystemClipboard> {
    let score = score
        .map(ScoreLabel::from)
        .unwrap_or_else(|| settings.initial_score.clone());
    AnswerView::new(card.analysis_answers(), score, SystemClipboard)
        .with_classifier(settings.classifier())
        .with_numbering(card.numbering(settings.numbering))
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

fn list_cards(catalog: &Catalog) {
    for (part, topics) in [(Part::Part1, &catalog.part1), (Part::Part2, &catalog.part2)] {
        if topics.is_empty() {
            continue;
        }
        println!("{}", part.label());
        for topic in topics {
            println!("  {}", topic.title);
            for card in &topic.cards {
                println!("    {:<28} {}", card.id, card.title);
            }
        }
    }
}

fn show(view: &AnswerView<'_, SystemClipboard>, json: bool) -> Result<()> {
    let rendered = view.render();

    if json {
        let out = serde_json::to_string_pretty(&rendered)
            .map_err(|e| Error::Application(format!("Failed to serialize answers: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    for answer in &rendered {
        println!("{}", answer.label);
        match &answer.content {
            AnswerContent::Missing => {
                println!("  (no answer at score {})", view.selected_score());
            }
            AnswerContent::Present { segmentation, .. } => {
                for segment in segmentation.segments() {
                    match segment.role {
                        Some(role) => println!("  [{}] {}", role.name(), segment.text),
                        None => println!("  {}", segment.text),
                    }
                }
            }
        }
        println!();
    }
    Ok(())
}

fn export(
    view: &mut AnswerView<'_, SystemClipboard>,
    question: Option<usize>,
    copy: bool,
) -> Result<()> {
    let target = match question {
        Some(0) => {
            return Err(Error::Application(
                "Question numbers start at 1".to_string(),
            ))
        }
        Some(number) => CopyTarget::Question(number - 1),
        None => CopyTarget::All,
    };
    let score = view.selected_score().clone();
    let missing = || {
        Error::Application(format!(
            "Nothing to export for {} at score {}",
            target, score
        ))
    };

    if !copy {
        let text = match target {
            CopyTarget::Question(index) => view.export_question(index),
            CopyTarget::All => view.export_all(),
        };
        println!("{}", text.ok_or_else(missing)?);
        return Ok(());
    }

    let now = Instant::now();
    let outcome = match target {
        CopyTarget::Question(index) => view.copy_question(index, now),
        CopyTarget::All => view.copy_all(now),
    };
    match outcome {
        CopyOutcome::Copied => {
            eprintln!("Copied {} to the clipboard", target);
            Ok(())
        }
        CopyOutcome::NothingToCopy => Err(missing()),
        CopyOutcome::Failed => Err(Error::Application(
            "Could not write to the clipboard".to_string(),
        )),
        CopyOutcome::Disabled | CopyOutcome::Stale => Ok(()),
    }
}
