//! Data loading module - parses Pokémon API payloads from JSON text or
//! cached JSON files on disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::PokedexError;
use crate::models::{PokemonDetail, PokemonListResponse};

/// Parses one page of the Pokémon listing response.
///
/// # Errors
///
/// Returns `PokedexError::JsonParse` if the JSON is malformed or a
/// required field (`count`, `next`, `results`) is missing.
pub fn parse_list_response(json: &str) -> Result<PokemonListResponse, PokedexError> {
    let response: PokemonListResponse = serde_json::from_str(json)?;
    debug!(
        "Parsed listing page with {} of {} total entries",
        response.results.len(),
        response.count
    );
    Ok(response)
}

/// Parses a per-Pokémon detail response.
///
/// Fields outside the modeled sprite block are ignored.
///
/// # Errors
///
/// Returns `PokedexError::JsonParse` if the JSON is malformed or
/// `sprites.front_default` is missing.
pub fn parse_detail(json: &str) -> Result<PokemonDetail, PokedexError> {
    let detail: PokemonDetail = serde_json::from_str(json)?;
    debug!(
        "Parsed detail response with sprite {}",
        detail.sprites.front_default
    );
    Ok(detail)
}

/// Loads a cached listing page from disk and parses it.
///
/// # Returns
///
/// * `Ok(PokemonListResponse)` - The parsed listing page if successful
/// * `Err(PokedexError)` - Error if the file cannot be read or parsed
///
/// # Errors
///
/// Returns `PokedexError::Io` if the file cannot be read.
/// Returns `PokedexError::JsonParse` if the JSON is malformed.
pub fn load_list_response<P: AsRef<Path>>(path: P) -> Result<PokemonListResponse, PokedexError> {
    let content = fs::read_to_string(path)?;
    parse_list_response(&content)
}

/// Loads a cached detail response from disk and parses it.
///
/// # Errors
///
/// Returns `PokedexError::Io` if the file cannot be read.
/// Returns `PokedexError::JsonParse` if the JSON is malformed.
pub fn load_detail<P: AsRef<Path>>(path: P) -> Result<PokemonDetail, PokedexError> {
    let content = fs::read_to_string(path)?;
    parse_detail(&content)
}
