pub mod category;
pub mod coordinate;
pub mod cuisine;
pub mod filter;
pub mod landmark;
pub mod poi;

pub use category::Category;
pub use coordinate::{Coordinate, TASHKENT_CENTER};
pub use cuisine::{cuisine_display_name, CUISINES};
pub use filter::{CuisineFilter, FilterCriteria};
pub use landmark::{Landmark, LandmarkCatalog, LandmarkKind};
pub use poi::{AnnotatedPoi, PoiElement, PoiRecord, PoiResponse, PoiTags};
