// Entity Models - compiled-in listing tables

pub mod floor_plan;
pub mod place;
pub mod testimonial;
pub mod tower;

pub use floor_plan::{FloorPlan, FloorPlanRegistry, PlanType};
pub use place::{Place, PlaceRegistry, ALL_CATEGORIES, PLACE_CATEGORIES};
pub use testimonial::{default_testimonials, Testimonial};
pub use tower::{Tower, TowerRegistry};
