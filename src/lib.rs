// Turnberry Place - Listing Engine
// Exposes all modules for use in the terminal browser, API server, and tests

pub mod entities;
pub mod filter;
pub mod pagination;
pub mod category;
pub mod browser;
pub mod comparison;
pub mod carousel;
pub mod debounce;
pub mod availability;
pub mod scroll_spy;
pub mod leads;
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use entities::{
    FloorPlan, FloorPlanRegistry, PlanType,
    Place, PlaceRegistry, ALL_CATEGORIES, PLACE_CATEGORIES,
    Testimonial, default_testimonials,
    Tower, TowerRegistry,
};
pub use filter::{filter, filter_places, FilterCriteria, TypeFilter};
pub use pagination::{Paginator, PAGE_SIZE};
pub use category::{CategoryListener, CategoryTabs};
pub use browser::{FloorPlanBrowser, PlaceBrowser};
pub use comparison::{ComparisonSelection, SelectionState, MAX_COMPARE};
pub use carousel::TestimonialCarousel;
pub use debounce::Debouncer;
pub use availability::{CountSource, ListingCount, ListingCountFeed};
pub use scroll_spy::ScrollSpy;
pub use leads::{FieldError, LeadError, LeadReceipt, LeadRequest, ValidLead};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
