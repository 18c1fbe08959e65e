//! The card render model.
//!
//! Each render replaces the whole card list. Handler ids minted by a
//! previous render carry that render's generation and are rejected once a
//! newer render exists, which models detaching the old DOM handlers before
//! attaching a fresh set.

use transfo_core::Customer;

use crate::error::{Error, Result};
use crate::state::ViewState;

/// Opaque id for one card's "view details" interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandlerId {
    generation: u64,
    slot: usize,
}

/// One customer card with its details toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerCard {
    /// The aggregated customer shown on the card.
    pub customer: Customer,
    /// Handler for this card's details toggle, valid for this render only.
    pub details_handler: HandlerId,
    /// Whether the contract details are expanded. Fresh renders start
    /// collapsed.
    pub details_open: bool,
}

/// The rendered card list for one generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardList {
    generation: u64,
    cards: Vec<CustomerCard>,
}

impl CardList {
    /// The rendered cards, in display order.
    pub fn cards(&self) -> &[CustomerCard] {
        &self.cards
    }

    /// Toggle a card's details. Returns the new open/closed state.
    ///
    /// A handler from an earlier render is stale and is rejected rather
    /// than toggling whichever card now occupies its slot.
    pub fn toggle_details(&mut self, handler: HandlerId) -> Result<bool> {
        if handler.generation != self.generation {
            return Err(Error::StaleHandler(handler.generation));
        }
        let card = self
            .cards
            .get_mut(handler.slot)
            .ok_or(Error::StaleHandler(handler.generation))?;
        card.details_open = !card.details_open;
        Ok(card.details_open)
    }
}

/// What the screen shows after a render.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewModel {
    /// One card per customer that survived the view state.
    Cards(CardList),
    /// A successful fetch with nothing to show.
    Empty,
    /// A failed fetch. Prior cards are discarded, never shown stale.
    Error(String),
}

/// Produces [`ViewModel`]s and owns the render generation counter.
#[derive(Debug, Default)]
pub struct Renderer {
    generation: u64,
}

impl Renderer {
    /// Create a renderer. Generation starts at zero; the first render
    /// bumps it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a fetch outcome through the given view state.
    ///
    /// Every call advances the generation, so handler ids from all prior
    /// renders become stale even when the fetch failed. A failure shows
    /// the error view with no leftover cards.
    pub fn render(
        &mut self,
        state: &ViewState,
        fetched: std::result::Result<&[Customer], &str>,
    ) -> ViewModel {
        self.generation += 1;
        let customers = match fetched {
            Ok(all) => state.apply(all),
            Err(message) => return ViewModel::Error(message.to_string()),
        };
        if customers.is_empty() {
            return ViewModel::Empty;
        }

        let cards = customers
            .into_iter()
            .enumerate()
            .map(|(slot, customer)| CustomerCard {
                customer,
                details_handler: HandlerId {
                    generation: self.generation,
                    slot,
                },
                details_open: false,
            })
            .collect();
        ViewModel::Cards(CardList {
            generation: self.generation,
            cards,
        })
    }
}
