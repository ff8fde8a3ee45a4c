// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - item.rs: Item cards and grids
// - list.rs: The paginated list view with its filter bar
// - forms.rs: Report, auth and OTP forms

pub mod common;
pub mod forms;
pub mod item;
pub mod list;

// Re-export commonly used components for convenience
pub use common::*;
pub use forms::*;
pub use item::*;
pub use list::*;
