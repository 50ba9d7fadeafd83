//! Cue card catalog
//!
//! The catalog is the static content the answer core reads from: topics of
//! cue cards, split into Part 1 and Part 2 banks. It is loaded once and never
//! mutated.
//!
//! - `loader.rs` - Reading catalog files in JSON, YAML or TOML

mod loader;

pub use loader::{load_catalog, parse_catalog, CatalogFormat};

use crate::answer::SampleAnswer;
use crate::error::{Error, Result};
use crate::export::NumberingStyle;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Cards and Topics
// ─────────────────────────────────────────────────────────────────────────────

/// One cue card.
///
/// Part 1 cards carry a list of short questions. Part 2 cards carry a
/// monologue prompt plus Part 3 follow-up questions; their first sample
/// answer is the Part 2 monologue itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part1_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_answers: Vec<SampleAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part2_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part2_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part2_prompts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part3_questions: Vec<String>,
}

impl CueCard {
    /// True for Part 2 cards (those with a monologue title).
    pub fn is_part2(&self) -> bool {
        self.part2_title.is_some()
    }

    /// The answers shown on the analysis view.
    ///
    /// For Part 2 cards the leading Part 2 monologue is skipped, leaving the
    /// Part 3 answers.
    pub fn analysis_answers(&self) -> &[SampleAnswer] {
        if self.is_part2() {
            self.sample_answers.get(1..).unwrap_or_default()
        } else {
            &self.sample_answers
        }
    }

    /// The numbering used for this card's answers under `style`.
    pub fn numbering(&self, style: NumberingStyle) -> NumberingStyle {
        style.resolve(self.is_part2())
    }

    /// Check every question's versions for duplicate score labels.
    pub fn validate(&self) -> Result<()> {
        self.sample_answers.iter().try_for_each(SampleAnswer::validate)
    }
}

/// A named group of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<CueCard>,
    #[serde(default)]
    pub is_new: bool,
}

/// Which question bank a topic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Part1,
    Part2,
}

impl Part {
    pub fn label(&self) -> &'static str {
        match self {
            Part::Part1 => "Part 1",
            Part::Part2 => "Part 2",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// All topics of both question banks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub part1: Vec<Topic>,
    #[serde(default)]
    pub part2: Vec<Topic>,
}

impl Catalog {
    /// Every card, Part 1 topics first, in file order.
    pub fn cards(&self) -> impl Iterator<Item = &CueCard> {
        self.part1
            .iter()
            .chain(self.part2.iter())
            .flat_map(|topic| topic.cards.iter())
    }

    pub fn card_by_id(&self, id: &str) -> Option<&CueCard> {
        self.cards().find(|card| card.id == id)
    }

    /// Like [`card_by_id`](Self::card_by_id) but with an error for a miss.
    pub fn require_card(&self, id: &str) -> Result<&CueCard> {
        self.card_by_id(id)
            .ok_or_else(|| Error::CardNotFound(id.to_string()))
    }

    /// Find the bank and topic holding a card. Part 2 is searched first.
    pub fn locate(&self, card_id: &str) -> Option<(Part, &Topic)> {
        let contains = |topic: &&Topic| topic.cards.iter().any(|card| card.id == card_id);
        self.part2
            .iter()
            .find(contains)
            .map(|topic| (Part::Part2, topic))
            .or_else(|| {
                self.part1
                    .iter()
                    .find(contains)
                    .map(|topic| (Part::Part1, topic))
            })
    }

    /// Validate every card.
    pub fn validate(&self) -> Result<()> {
        self.cards().try_for_each(CueCard::validate)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
