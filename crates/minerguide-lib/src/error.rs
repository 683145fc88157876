use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the MinerGuide library.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of reference record held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Hull,
    Turret,
    Crystal,
    HarvestUpgrade,
    Rig,
    Drone,
    BoosterHull,
    ForemanLink,
    Skill,
    Implant,
}

impl ItemKind {
    /// Catalog item kinds, in listing order.
    pub const CATALOG: [ItemKind; 8] = [
        ItemKind::Hull,
        ItemKind::Turret,
        ItemKind::Crystal,
        ItemKind::HarvestUpgrade,
        ItemKind::Rig,
        ItemKind::Drone,
        ItemKind::BoosterHull,
        ItemKind::ForemanLink,
    ];

    /// Short lowercase label used in messages and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Hull => "hull",
            ItemKind::Turret => "turret",
            ItemKind::Crystal => "crystal",
            ItemKind::HarvestUpgrade => "upgrade",
            ItemKind::Rig => "rig",
            ItemKind::Drone => "drone",
            ItemKind::BoosterHull => "booster-hull",
            ItemKind::ForemanLink => "link",
            ItemKind::Skill => "skill",
            ItemKind::Implant => "implant",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a name could not be resolved against the catalog.
    #[error("unknown {kind}: {name}{}", format_suggestions(.suggestions))]
    UnknownItem {
        kind: ItemKind,
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when duplicate names are encountered during catalog load.
    #[error("duplicate {kind} name encountered: {name}")]
    DuplicateItem { kind: ItemKind, name: String },

    /// Raised when a catalog record fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when pilot data (skills, implants, trip time) fails validation.
    #[error("invalid pilot data: {message}")]
    PilotValidation { message: String },

    /// Raised when a ship or booster assembly is structurally invalid.
    #[error("invalid fit: {message}")]
    FitValidation { message: String },

    /// Raised when a skill sheet could not be parsed.
    #[error("invalid skill sheet {}: {message}", display_source(.path))]
    SkillSheet {
        path: Option<PathBuf>,
        message: String,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<reader>".to_string(),
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_item_lists_single_suggestion() {
        let err = Error::UnknownItem {
            kind: ItemKind::Hull,
            name: "Hulc".to_string(),
            suggestions: vec!["Hulk".to_string()],
        };
        assert_eq!(err.to_string(), "unknown hull: Hulc. Did you mean 'Hulk'?");
    }

    #[test]
    fn unknown_item_without_suggestions_is_plain() {
        let err = Error::UnknownItem {
            kind: ItemKind::Rig,
            name: "Nope".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown rig: Nope");
    }
}
