// web_app/pages/mod.rs - Page components module
//
// - HomePage: landing page with recent items and the profile pop-up
// - BrowsePage / YourItemsPage: paginated item lists
// - LostPage / FoundPage: report forms
// - LoginPage / OtpPage: passwordless login flow

pub mod auth;
pub mod home;
pub mod listing;
pub mod report;

// Re-export page components
pub use auth::{LoginPage, OtpPage};
pub use home::HomePage;
pub use listing::{BrowsePage, YourItemsPage};
pub use report::{FoundPage, LostPage};
