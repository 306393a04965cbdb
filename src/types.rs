//! Core data types for the grocer inventory.

use std::fmt;
use std::str::FromStr;

/// Longest name the flat-file record format carries.
///
/// The on-disk format stores names in a fixed-width field; anything longer
/// is rejected up front instead of being truncated.
pub const MAX_NAME_LEN: usize = 19;

/// One grocery record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier, assigned by the caller (not auto-generated)
    pub id: u32,

    /// Short label, 1-19 characters, no embedded whitespace
    pub name: String,

    /// Non-negative currency value
    pub cost: f64,

    /// Department the item belongs to
    pub category: Category,
}

/// Item departments, encoded on disk as a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Meat,
    Produce,
    Dairy,
    Canned,
    Nonfood,
}

impl Category {
    /// The single-character code used in the flat-file format.
    pub fn code(&self) -> char {
        match self {
            Category::Meat => 'M',
            Category::Produce => 'P',
            Category::Dairy => 'D',
            Category::Canned => 'C',
            Category::Nonfood => 'N',
        }
    }

    /// Parse a category from its single-character code.
    pub fn from_code(code: char) -> Option<Category> {
        match code {
            'M' => Some(Category::Meat),
            'P' => Some(Category::Produce),
            'D' => Some(Category::Dairy),
            'C' => Some(Category::Canned),
            'N' => Some(Category::Nonfood),
            _ => None,
        }
    }

    /// Human-readable department name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Meat => "meat",
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Canned => "canned goods",
            Category::Nonfood => "nonfoods",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Category::from_code(c).ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
            }
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

/// Validation errors for items.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    NameTooLong,
    NameHasWhitespace,
    NegativeCost,
    UnknownCategory(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "name cannot be empty"),
            ValidationError::NameTooLong => {
                write!(f, "name exceeds {} characters", MAX_NAME_LEN)
            }
            ValidationError::NameHasWhitespace => {
                write!(f, "name cannot contain whitespace or control characters")
            }
            ValidationError::NegativeCost => write!(f, "cost cannot be negative"),
            ValidationError::UnknownCategory(code) => {
                write!(f, "unknown category '{}': expected M, P, D, C, or N", code)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl Item {
    /// Validate the item's fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Name: required, at most MAX_NAME_LEN chars, a single token with no
        // whitespace or control characters (the on-disk format is
        // whitespace-delimited)
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }
        if self.name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::NameHasWhitespace);
        }

        // Cost: non-negative; NaN never compares less than zero but is
        // rejected all the same
        if self.cost < 0.0 || self.cost.is_nan() {
            return Err(ValidationError::NegativeCost);
        }

        Ok(())
    }
}
