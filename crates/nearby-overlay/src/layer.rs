use nearby_core::models::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Independently clearable group of drawables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Restaurants,
    Entertainment,
    Landmarks,
    User,
}

impl Layer {
    pub const ALL: [Layer; 4] =
        [Layer::Restaurants, Layer::Entertainment, Layer::Landmarks, Layer::User];

    /// Layers holding search results, i.e. everything but `User`
    pub const RESULTS: [Layer; 3] = [Layer::Restaurants, Layer::Entertainment, Layer::Landmarks];

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Restaurant => Layer::Restaurants,
            Category::Entertainment => Layer::Entertainment,
            Category::Landmark => Layer::Landmarks,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Layer::Restaurants => "restaurants",
            Layer::Entertainment => "entertainment",
            Layer::Landmarks => "landmarks",
            Layer::User => "user",
        }
    }

    pub fn is_results(&self) -> bool {
        !matches!(self, Layer::User)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
