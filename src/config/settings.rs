//! User settings for cuecard
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use crate::answer::{MarkerClassifier, Role, ScoreLabel};
use crate::export::NumberingStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User settings.
///
/// Serialized to JSON and persisted to the user's config directory. Every
/// field has a default, so partial files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Answers
    // ─────────────────────────────────────────────────────────────────────────
    /// Score shown when a card is first opened
    pub initial_score: ScoreLabel,

    /// Role markers recognized inside answer text
    pub roles: Vec<Role>,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    /// How question labels are produced in exports
    pub numbering: NumberingStyle,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// Catalog file used when none is given on the command line
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_score: ScoreLabel::default(),
            roles: Role::all().to_vec(),
            numbering: NumberingStyle::default(),
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Build the marker classifier for the configured roles.
    pub fn classifier(&self) -> MarkerClassifier {
        MarkerClassifier::new(&self.roles)
    }

    /// Repair values that a hand-edited file may have broken.
    ///
    /// An empty role list falls back to every role, duplicates are dropped
    /// keeping the first occurrence, and a blank initial score falls back to
    /// the default.
    pub fn sanitize(&mut self) {
        if self.roles.is_empty() {
            self.roles = Role::all().to_vec();
        }

        let mut seen = Vec::with_capacity(self.roles.len());
        self.roles.retain(|role| {
            if seen.contains(role) {
                false
            } else {
                seen.push(*role);
                true
            }
        });

        if self.initial_score.as_str().trim().is_empty() {
            self.initial_score = ScoreLabel::default();
        }
    }

    /// Deserialize and then sanitize.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.initial_score.as_str(), "6.5");
        assert_eq!(settings.roles.len(), 5);
        assert_eq!(settings.numbering, NumberingStyle::ByCard);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_settings_deserialize_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let json = r#"{"initial_score": "7", "numbering": "keep_part2_labels"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.initial_score, ScoreLabel::from("7"));
        assert_eq!(settings.numbering, NumberingStyle::KeepPart2Labels);
        assert_eq!(settings.roles, Role::all().to_vec());
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings {
            initial_score: ScoreLabel::from("8"),
            roles: vec![Role::Point, Role::Example],
            numbering: NumberingStyle::KeepPart2Labels,
            catalog_path: Some(PathBuf::from("/tmp/catalog.json")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_sanitize_empty_roles() {
        let settings = Settings::from_json_sanitized(r#"{"roles": []}"#).unwrap();
        assert_eq!(settings.roles, Role::all().to_vec());
    }

    #[test]
    fn test_sanitize_duplicate_roles() {
        let json = r#"{"roles": ["Reason", "Point", "Reason"]}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();
        assert_eq!(settings.roles, vec![Role::Reason, Role::Point]);
    }

    #[test]
    fn test_sanitize_blank_score() {
        let settings = Settings::from_json_sanitized(r#"{"initial_score": "  "}"#).unwrap();
        assert_eq!(settings.initial_score, ScoreLabel::default());
    }

    #[test]
    fn test_classifier_uses_configured_roles() {
        let settings = Settings {
            roles: vec![Role::Point],
            ..Settings::default()
        };
        let classifier = settings.classifier();
        assert!(classifier.has_markers("(Point) yes"));
        assert!(!classifier.has_markers("(Reason) because"));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = Settings::from_json_sanitized(r#"{"roles": ["Summary"]}"#);
        assert!(result.is_err());
    }
}
