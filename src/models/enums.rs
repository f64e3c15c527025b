// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Enumerations shared by users and activities.
//!
//! `BoatType` and `Level` carry an explicit numeric label. Comparisons
//! between values always go through the label, not declaration order.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Boat class, also used as the user's rowing certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum BoatType {
    C4,
    FourPlus,
    EightPlus,
}

impl BoatType {
    /// Certification strength: C4=1 < FOUR_PLUS=2 < EIGHT_PLUS=3.
    pub const fn label(self) -> u8 {
        match self {
            BoatType::C4 => 1,
            BoatType::FourPlus => 2,
            BoatType::EightPlus => 3,
        }
    }
}

/// Rowing experience. A lower label means more experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Level {
    Professional,
    Amateur,
}

impl Level {
    pub const fn label(self) -> u8 {
        match self {
            Level::Professional => 1,
            Level::Amateur => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Seat or role in a crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Position {
    Cox,
    Coach,
    PortSideRower,
    StarboardSideRower,
    ScullingRower,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_labels_are_ordered() {
        assert!(BoatType::C4.label() < BoatType::FourPlus.label());
        assert!(BoatType::FourPlus.label() < BoatType::EightPlus.label());
    }

    #[test]
    fn test_professional_is_more_experienced() {
        assert!(Level::Professional.label() < Level::Amateur.label());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&BoatType::FourPlus).unwrap(),
            "\"FOUR_PLUS\""
        );
        assert_eq!(
            serde_json::from_str::<Position>("\"PORT_SIDE_ROWER\"").unwrap(),
            Position::PortSideRower
        );
    }
}
