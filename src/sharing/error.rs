//! Import failures.
//!
//! Every failure is returned as a typed `ImportError`; nothing on the import
//! path panics or propagates a raw parser error. The UI decides what to show
//! based on `ImportError::kind()` and, for missing cards, the
//! `UnavailableCards` report.

use serde::Serialize;
use thiserror::Error;

use super::codec::DecodeError;
use super::dto::{CaveDto, DwellerCardDto, WoodyPlantCardDto};
use super::schema::SchemaError;
use crate::cards::Expansion;

/// Flat failure code, serialized for the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportErrorKind {
    InvalidData,
    InvalidSchema,
    AppVersionMismatch,
    GameBoxesMismatch,
    UnavailableCards,
}

/// Every card reference that could not be resolved in one player pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableCards {
    /// The cave that was asked for, or `None` if it matched.
    pub cave: Option<CaveDto>,
    pub dwellers: Vec<DwellerCardDto>,
    pub woody_plants: Vec<WoodyPlantCardDto>,
}

impl UnavailableCards {
    /// Check if every card resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cave.is_none() && self.dwellers.is_empty() && self.woody_plants.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid data: {0}")]
    InvalidData(#[from] DecodeError),

    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    #[error("app version mismatch: expected {expected}, found {found}")]
    AppVersionMismatch { expected: String, found: String },

    #[error("expansions not enabled in this game: {missing:?}")]
    GameBoxesMismatch { missing: Vec<Expansion> },

    #[error(
        "unavailable cards: cave {}, {} dweller(s), {} woody plant(s)",
        .0.cave.as_ref().map_or("ok", |c| c.name.as_str()),
        .0.dwellers.len(),
        .0.woody_plants.len()
    )]
    UnavailableCards(UnavailableCards),
}

impl ImportError {
    #[must_use]
    pub fn kind(&self) -> ImportErrorKind {
        match self {
            ImportError::InvalidData(_) => ImportErrorKind::InvalidData,
            ImportError::InvalidSchema(_) => ImportErrorKind::InvalidSchema,
            ImportError::AppVersionMismatch { .. } => ImportErrorKind::AppVersionMismatch,
            ImportError::GameBoxesMismatch { .. } => ImportErrorKind::GameBoxesMismatch,
            ImportError::UnavailableCards(_) => ImportErrorKind::UnavailableCards,
        }
    }

    /// The missing-card report, for `UnavailableCards` failures.
    #[must_use]
    pub fn unavailable_cards(&self) -> Option<&UnavailableCards> {
        match self {
            ImportError::UnavailableCards(report) => Some(report),
            _ => None,
        }
    }
}
