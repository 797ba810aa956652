//! Error types for pokedex-models.
//!
//! A single `thiserror` enum covers everything the parsing surface can
//! fail with; `#[from]` conversions keep the `?` operator usable
//! throughout the crate.

use thiserror::Error;

/// Error type for loading and parsing Pokémon API payloads.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Error reading a cached payload from disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON data, including payloads that are valid JSON
    /// but missing a required field.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
