//! Transient navigation state of the application shell: which menu is open,
//! how far the page is scrolled and which navigation entry is active.

pub mod header;
pub mod scroll;
pub mod state;
#[cfg(feature = "server")]
pub mod store;

pub use header::HeaderClasses;
pub use scroll::ScrollMetrics;
pub use state::{Menu, UiState};
#[cfg(feature = "server")]
pub use store::UiStore;
