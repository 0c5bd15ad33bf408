use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category assigned to a transaction.
///
/// `Income` is reserved for callers labelling credit transactions; the
/// keyword heuristics only ever produce the other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Investments,
    Other,
    Income,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Food => write!(f, "Food"),
            Category::Travel => write!(f, "Travel"),
            Category::Shopping => write!(f, "Shopping"),
            Category::Bills => write!(f, "Bills"),
            Category::Investments => write!(f, "Investments"),
            Category::Other => write!(f, "Other"),
            Category::Income => write!(f, "Income"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "travel" => Ok(Category::Travel),
            "shopping" => Ok(Category::Shopping),
            "bills" => Ok(Category::Bills),
            "investments" => Ok(Category::Investments),
            // Legacy storage rows default to "Uncategorized".
            "other" | "uncategorized" => Ok(Category::Other),
            "income" => Ok(Category::Income),
            other => Err(format!("Unknown category: '{other}'")),
        }
    }
}

/// A category plus a heuristic strength indicator (0–100, not a calibrated
/// probability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categorization {
    pub category: Category,
    pub confidence: u8,
}

impl Categorization {
    pub fn new(category: Category, confidence: u8) -> Self {
        Self { category, confidence: confidence.min(100) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_from_str_roundtrip() {
        for c in [
            Category::Food,
            Category::Travel,
            Category::Shopping,
            Category::Bills,
            Category::Investments,
            Category::Other,
            Category::Income,
        ] {
            assert_eq!(Category::from_str(&c.to_string()).unwrap(), c);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(Category::from_str("FOOD").unwrap(), Category::Food);
        assert_eq!(Category::from_str("shopping").unwrap(), Category::Shopping);
    }

    #[test]
    fn uncategorized_maps_to_other() {
        assert_eq!(Category::from_str("Uncategorized").unwrap(), Category::Other);
    }

    #[test]
    fn unknown_category_errors() {
        assert!(Category::from_str("groceries").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn categorization_clamps_confidence() {
        assert_eq!(Categorization::new(Category::Food, 250).confidence, 100);
        assert_eq!(Categorization::new(Category::Food, 70).confidence, 70);
    }
}
