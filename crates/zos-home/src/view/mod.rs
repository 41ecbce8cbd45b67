//! Home views and pagination
//!
//! Views are the pages of the home screen. The pagination model tracks the
//! current page, the live drag offset, and the page transition in flight.

#[allow(clippy::module_inception)]
mod view;
mod pagination;
mod transition;
mod easing;

pub use view::View;
pub use pagination::{EdgeIndicators, ViewPaginationModel};
pub use transition::{CompletedTransition, PendingTransition, TransitionKind};
