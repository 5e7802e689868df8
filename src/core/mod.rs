// Core algorithm exports
pub mod filters;
pub mod location;
pub mod matcher;
pub mod ordering;
pub mod pipeline;
pub mod scoring;
pub mod selection;

pub use filters::{matches_filters, matches_search};
pub use location::{location_tier, LocationTier};
pub use matcher::Matcher;
pub use ordering::sort_candidates;
pub use pipeline::process;
pub use scoring::{calculate_match_score, normalize_work_types};
pub use selection::{SelectionChange, SelectionRejected, SelectionTracker};
