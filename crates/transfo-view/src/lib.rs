//! # transfo-view
//!
//! Presentation-layer logic for the Transfo Desk contract viewer.
//!
//! The UI keeps no implicit globals: everything the controls can change
//! lives in an explicit [`ViewState`] (search text, selected customer,
//! sort key), and every re-render goes through a [`Renderer`] that
//! produces a fresh [`ViewModel`]. Filtering and sorting always recompute
//! from the full aggregated customer list, so re-applying a control can
//! never compound a previous filter.
//!
//! Interaction handlers are generation-scoped: each render invalidates the
//! handler ids minted by the previous one, which is what guarantees that
//! replacing the card list cannot leak handlers attached to old content.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod render;
pub mod state;

pub use error::{Error, Result};
pub use render::{CardList, CustomerCard, HandlerId, Renderer, ViewModel};
pub use state::{SortKey, ViewState};
