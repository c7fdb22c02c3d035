//! CLI command handlers. Each command is in its own file.

mod config;
mod encode;
mod list;
mod random;
mod transliterate;

pub use config::run_config;
pub use encode::{run_base64, run_hex, run_unhex};
pub use list::run_list;
pub use random::{run_random, RandomArgs};
pub use transliterate::run_transliterate;
