use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::{Category, PoiTags};

/// Cuisine selection of the filter control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CuisineFilter {
    #[default]
    All,
    Only(String),
}

impl From<String> for CuisineFilter {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("all") || value.is_empty() {
            CuisineFilter::All
        } else {
            CuisineFilter::Only(value)
        }
    }
}

impl From<CuisineFilter> for String {
    fn from(value: CuisineFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for CuisineFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CuisineFilter::from(s.to_string()))
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuisineFilter::All => f.write_str("all"),
            CuisineFilter::Only(key) => f.write_str(key),
        }
    }
}

/// Category-specific filters. Only restaurants are filtered by tag; every
/// other category ignores the criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub cuisine: CuisineFilter,
    #[serde(default)]
    pub halal_only: bool,
}

impl FilterCriteria {
    pub fn new(cuisine: CuisineFilter, halal_only: bool) -> Self {
        Self { cuisine, halal_only }
    }

    /// Whether a named record of `category` survives the filters
    pub fn accepts(&self, category: Category, tags: &PoiTags) -> bool {
        if category != Category::Restaurant {
            return true;
        }

        if let CuisineFilter::Only(wanted) = &self.cuisine {
            if tags.cuisine.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }

        if self.halal_only && tags.diet.as_deref() != Some("halal") {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(cuisine: Option<&str>, diet: Option<&str>) -> PoiTags {
        PoiTags {
            name: "Test".to_string(),
            cuisine: cuisine.map(String::from),
            diet: diet.map(String::from),
            ..PoiTags::default()
        }
    }

    #[test]
    fn test_all_cuisines_accepts_untagged() {
        let criteria = FilterCriteria::default();
        assert!(criteria.accepts(Category::Restaurant, &tags(None, None)));
    }

    #[test]
    fn test_cuisine_must_match_exactly() {
        let criteria = FilterCriteria::new(CuisineFilter::Only("plov".into()), false);
        assert!(criteria.accepts(Category::Restaurant, &tags(Some("plov"), None)));
        assert!(!criteria.accepts(Category::Restaurant, &tags(Some("lagman"), None)));
        assert!(!criteria.accepts(Category::Restaurant, &tags(None, None)));
    }

    #[test]
    fn test_halal_only_requires_diet_tag() {
        let criteria = FilterCriteria::new(CuisineFilter::All, true);
        assert!(criteria.accepts(Category::Restaurant, &tags(None, Some("halal"))));
        assert!(!criteria.accepts(Category::Restaurant, &tags(None, Some("vegan"))));
        assert!(!criteria.accepts(Category::Restaurant, &tags(None, None)));
    }

    #[test]
    fn test_filters_compose() {
        let criteria = FilterCriteria::new(CuisineFilter::Only("plov".into()), true);
        assert!(criteria.accepts(Category::Restaurant, &tags(Some("plov"), Some("halal"))));
        assert!(!criteria.accepts(Category::Restaurant, &tags(Some("plov"), None)));
        assert!(!criteria.accepts(Category::Restaurant, &tags(Some("somsa"), Some("halal"))));
    }

    #[test]
    fn test_entertainment_ignores_criteria() {
        let criteria = FilterCriteria::new(CuisineFilter::Only("plov".into()), true);
        assert!(criteria.accepts(Category::Entertainment, &tags(None, None)));
    }

    #[test]
    fn test_cuisine_filter_parsing() {
        assert_eq!("all".parse::<CuisineFilter>().unwrap(), CuisineFilter::All);
        assert_eq!("ALL".parse::<CuisineFilter>().unwrap(), CuisineFilter::All);
        assert_eq!(
            "shashlik".parse::<CuisineFilter>().unwrap(),
            CuisineFilter::Only("shashlik".into())
        );
    }

    #[test]
    fn test_criteria_deserializes_with_defaults() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"cuisine": "plov"}"#).unwrap();
        assert_eq!(criteria.cuisine, CuisineFilter::Only("plov".into()));
        assert!(!criteria.halal_only);
    }
}
