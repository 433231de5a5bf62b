//! User preferences used to filter the catalog

use super::destination::{BudgetLevel, Category, Season};
use crate::TravelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A filter control that is either unconstrained or pinned to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference<T> {
    Any,
    Exactly(T),
}

impl<T> Default for Preference<T> {
    fn default() -> Self {
        Preference::Any
    }
}

impl<T: PartialEq> Preference<T> {
    /// `Any` accepts every value, `Exactly(v)` only `v`
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Preference::Any => true,
            Preference::Exactly(wanted) => wanted == value,
        }
    }
}

impl<T> From<Option<T>> for Preference<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Preference::Any, Preference::Exactly)
    }
}

impl<T: fmt::Display> fmt::Display for Preference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::Any => f.write_str("Any"),
            Preference::Exactly(value) => write!(f, "{value}"),
        }
    }
}

impl<T: FromStr<Err = TravelError>> FromStr for Preference<T> {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            Ok(Preference::Any)
        } else {
            s.parse().map(Preference::Exactly)
        }
    }
}

impl<T: fmt::Display> Serialize for Preference<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr<Err = TravelError>> Deserialize<'de> for Preference<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The three constraints a user picks. Every field defaults to "no constraint",
/// so a document that omits a key filters exactly like one that says "Any".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    #[serde(alias = "budget")]
    pub budget_ceiling: BudgetLevel,
    pub season: Preference<Season>,
    #[serde(alias = "type")]
    pub category: Preference<Category>,
}

impl UserPreferences {
    /// Unconstrained preferences
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_budget(mut self, ceiling: BudgetLevel) -> Self {
        self.budget_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Preference::Exactly(season);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Preference::Exactly(category);
        self
    }
}
