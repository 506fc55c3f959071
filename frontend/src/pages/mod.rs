pub mod admin;
pub mod checkin;
pub mod completion;
pub mod help;
pub mod home;
pub mod login;
pub mod training;
pub mod unauthorized;

pub use admin::AdminPage;
pub use checkin::CheckinPage;
pub use completion::CompletionPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use training::{TrainingDetailPage, TrainingListPage};
pub use unauthorized::UnauthorizedPage;
