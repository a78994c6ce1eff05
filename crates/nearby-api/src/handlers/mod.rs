mod catalog;
mod health;
mod nearby;
mod overlay;
mod session;

pub use catalog::list_cuisines;
pub use health::health_check;
pub use nearby::find_nearby;
pub use overlay::{clear_overlay, focus, get_overlay, get_panel, show_landmarks, show_route};
pub use session::{get_session, report_location_error, toggle_tracking, update_position};
