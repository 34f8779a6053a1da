mod client;
mod errors;
pub mod types;
pub use self::client::{Client, Config, DEFAULT_DETECTOR_URL, DEFAULT_HUMANIZER_URL};
pub use self::errors::{status_explanation, Error, ParseEnumError, Result};
