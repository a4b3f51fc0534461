pub mod config;
pub mod dataset;
pub mod error;
pub mod render;
pub mod search;
pub mod session;
pub mod transport;
pub mod types;

pub use error::{KbSearchError, Result};
pub use types::*;
