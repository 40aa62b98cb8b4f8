pub mod cors;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod bookings;
    pub mod currency;
    pub mod health;
    pub mod payments;
}

pub use cors::CorsResponse;
pub use router::{create_router, ApiDoc};
pub use types::AppState;
