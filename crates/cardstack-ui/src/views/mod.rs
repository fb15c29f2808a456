//! UI views for the card list.
//!
//! `CardListPanel` is the stateful root view. The two card representations are
//! stateless components that receive their tap callbacks from the panel.

mod card_image;
mod card_list;
mod collapsed_card;
mod expanded_card;
mod transition;

pub use card_list::CardListPanel;
pub use collapsed_card::CollapsedCard;
pub use expanded_card::ExpandedCard;
