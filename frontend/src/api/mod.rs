mod auth;
pub mod client;
mod forms;
mod groups;
mod settings;
mod training;
pub mod types;

pub use auth::*;
pub use client::ApiClient;
pub use forms::*;
pub use groups::*;
pub use settings::*;
pub use training::*;
pub use types::*;
