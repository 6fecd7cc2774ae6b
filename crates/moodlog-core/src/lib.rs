pub mod classify;
pub mod config;
pub mod error;
pub mod label;
pub mod lexicon;
pub mod sentiment;
pub mod tables;
pub mod types;

pub use classify::{classify, validate_input, Classification, Classifier};
pub use config::MoodlogConfig;
pub use error::InputError;
pub use label::Label;
pub use lexicon::Lexicon;
pub use types::*;
