pub mod admin_layout;
pub mod forms;
pub mod guard;
pub mod layout;
