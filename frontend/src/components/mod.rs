pub mod auth_card;
pub mod cards;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod toast;
