//! Card Edit Target
//!
//! What the card form is currently editing.

use crate::models::Card;

#[derive(Clone, Debug, PartialEq)]
pub enum CardEditTarget {
    /// Creating a new card
    New,
    /// Editing an existing card (draft starts from its fields)
    Existing(Card),
}
