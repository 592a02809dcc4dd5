//! Terminal UI components.

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;
