//! UI Components

mod board_column;
mod card_form;
mod card_item;
mod edit_target;
mod header;
mod sidebar;
mod worklogs_modal;

pub use board_column::BoardColumn;
pub use card_form::CardForm;
pub use card_item::CardItem;
pub use edit_target::CardEditTarget;
pub use header::Header;
pub use sidebar::Sidebar;
pub use worklogs_modal::WorklogsModal;
