//! Reusable UI components

mod button;
mod error_banner;
mod modal;
mod sidebar;

pub use button::Button;
pub use error_banner::ErrorBanner;
pub use modal::Modal;
pub use sidebar::Sidebar;
