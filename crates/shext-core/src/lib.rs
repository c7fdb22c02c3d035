pub mod config;
pub mod error;
pub mod logging;

pub mod charset;
pub mod collection;
pub mod listing;
pub mod random;
pub mod text;
pub mod xml;

pub use error::{Result, ShextError};
