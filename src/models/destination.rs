//! Destination records and the value types they are made of

use crate::TravelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of trip a destination offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    City,
    Beach,
    Historical,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::City, Category::Beach, Category::Historical];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::City => "City",
            Category::Beach => "Beach",
            Category::Historical => "Historical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(Category::City),
            "beach" => Ok(Category::Beach),
            "historical" => Ok(Category::Historical),
            other => Err(TravelError::validation(format!(
                "Unknown destination type '{other}'. Must be one of: City, Beach, Historical"
            ))),
        }
    }
}

/// Meteorological season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Season of a calendar month (1 = January).
    ///
    /// March to May is spring, June to August summer, September to
    /// November fall; December, January and February are winter.
    pub fn from_month(month: u32) -> crate::Result<Self> {
        match month {
            3..=5 => Ok(Season::Spring),
            6..=8 => Ok(Season::Summer),
            9..=11 => Ok(Season::Fall),
            12 | 1 | 2 => Ok(Season::Winter),
            _ => Err(TravelError::validation(format!(
                "Month must be between 1 and 12, got: {month}"
            ))),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            other => Err(TravelError::validation(format!(
                "Unknown season '{other}'. Must be one of: Spring, Summer, Fall, Winter"
            ))),
        }
    }
}

/// Relative cost of a destination, from 1 (cheapest) to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BudgetLevel(u8);

impl BudgetLevel {
    pub const MIN: BudgetLevel = BudgetLevel(1);
    pub const MAX: BudgetLevel = BudgetLevel(4);

    /// Constructor for compile-time tables; use in a `const` context so an
    /// out-of-range level fails the build.
    #[must_use]
    pub const fn new_const(level: u8) -> Self {
        assert!(level >= Self::MIN.0 && level <= Self::MAX.0, "budget level out of range");
        Self(level)
    }

    pub fn new(level: u8) -> crate::Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(TravelError::validation(format!(
                "Budget level must be between {} and {}, got: {level}",
                Self::MIN.0,
                Self::MAX.0
            )))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// One money bag per level
    #[must_use]
    pub fn format_bags(self) -> String {
        "💰".repeat(usize::from(self.0))
    }
}

impl Default for BudgetLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for BudgetLevel {
    type Error = TravelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<BudgetLevel> for u8 {
    fn from(level: BudgetLevel) -> Self {
        level.0
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BudgetLevel {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s
            .trim()
            .parse::<u8>()
            .map_err(|_| TravelError::validation(format!("Budget level must be a number, got: '{s}'")))?;
        Self::new(level)
    }
}

/// One row of the destination catalog. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub name: String,
    pub category: Category,
    pub budget_level: BudgetLevel,
    pub best_season: Season,
    pub description: String,
    pub country: String,
}

impl DestinationRecord {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        budget_level: BudgetLevel,
        best_season: Season,
        description: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            budget_level,
            best_season,
            description: description.into(),
            country: country.into(),
        }
    }

    /// Card header, e.g. "Paris - City"
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.category)
    }
}
