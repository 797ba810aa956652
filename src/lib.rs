//! Consumer-side data contracts for a third-party Pokémon listing API.
//!
//! Declares the subset of the external JSON payloads this crate chooses
//! to trust (a paginated listing page and the sprite block of the detail
//! endpoint), the client-side [`Pokemon`] display record built from them,
//! and helpers for parsing those payloads from JSON text or cached files.
//!
//! Fetching, pagination walking, and favourite persistence are left to
//! the embedding application.

mod data;
mod error;
mod models;

pub use data::{load_detail, load_list_response, parse_detail, parse_list_response};
pub use error::PokedexError;
pub use models::{Pokemon, PokemonDetail, PokemonListEntry, PokemonListResponse, PokemonSprites};
