pub mod groups;
pub mod settings;
