mod request;
mod response;

pub use request::{FocusRequest, LocationErrorKind, LocationErrorRequest, PositionRequest, RouteRequest};
pub use response::{
    CuisineResponse, HealthResponse, NearbyResponse, PanelResponse, PositionResponse,
    RouteResponse, SessionResponse,
};
