//! Browser and Network Commands
//!
//! Everything that talks to the outside world: the directory API,
//! the clipboard, and the browser window.

mod browser;
mod clipboard;
mod directory;
mod error;

pub use browser::*;
pub use clipboard::*;
pub use directory::*;
pub use error::ApiError;
