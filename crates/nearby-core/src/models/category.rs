use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NearbyError;

/// Kind of place a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Entertainment,
    Landmark,
}

impl Category {
    /// Categories that are searched against the remote POI source.
    /// Landmarks come from the static catalog instead.
    pub const SEARCHABLE: [Category; 2] = [Category::Restaurant, Category::Entertainment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Entertainment => "entertainment",
            Category::Landmark => "landmark",
        }
    }

    pub fn is_searchable(&self) -> bool {
        !matches!(self, Category::Landmark)
    }

    /// Fallback subtitle for a result that carries no more specific label
    pub fn fallback_label(&self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Entertainment => "Venue",
            Category::Landmark => "Landmark",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NearbyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" | "restaurants" => Ok(Category::Restaurant),
            "entertainment" => Ok(Category::Entertainment),
            "landmark" | "landmarks" => Ok(Category::Landmark),
            _ => Err(NearbyError::ConfigInvalid {
                key: "category".to_string(),
                reason: format!(
                    "Unknown category: {}. Use restaurant, entertainment, or landmark",
                    s
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("restaurants".parse::<Category>().unwrap(), Category::Restaurant);
        assert_eq!("Entertainment".parse::<Category>().unwrap(), Category::Entertainment);
        assert_eq!("landmark".parse::<Category>().unwrap(), Category::Landmark);
        assert!("museum".parse::<Category>().is_err());
    }

    #[test]
    fn test_landmark_is_not_searchable() {
        assert!(Category::Restaurant.is_searchable());
        assert!(Category::Entertainment.is_searchable());
        assert!(!Category::Landmark.is_searchable());
    }
}
