pub mod confirm_dialog;
pub mod empty_state;
pub mod form_field;
pub mod guard;
pub mod layout;
pub mod messages;
