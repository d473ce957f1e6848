//! Navigation state for the portfolio page.
//!
//! This crate owns the only runtime state in the system: which section
//! is currently in view, whether the viewport has scrolled past the
//! navbar styling threshold, and whether the compact navigation menu
//! is open. It knows nothing about terminals or rendering: the host
//! feeds it [`ScrollSnapshot`]s and reads [`NavigationState`] back.

pub mod disclosure;
pub mod section;
pub mod snapshot;
pub mod tracker;

pub use disclosure::Disclosure;
pub use section::{Section, SectionId, section_map};
pub use snapshot::ScrollSnapshot;
pub use tracker::{ACTIVATION_LINE, NavTracker, NavigationState, SCROLL_THRESHOLD, active_section};
