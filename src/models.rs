//! Data models for the Pokémon listing API.
//!
//! The wire types describe only the subset of the external payloads this
//! crate chooses to trust; `Pokemon` is the client-side display record
//! built from them.

use serde::{Deserialize, Serialize};

/// One page of the paginated Pokémon listing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonListResponse {
    /// Total number of Pokémon across all pages, not just this one.
    pub count: u32,
    /// URL of the next page of results.
    pub next: String,
    /// URL of the previous page; absent on the first page.
    pub previous: Option<String>,
    /// Entries of this page, in API order.
    pub results: Vec<PokemonListEntry>,
}

/// A single row of the listing response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonListEntry {
    pub name: String,
    /// URL of the per-Pokémon detail endpoint for this entry.
    pub url: String,
}

/// Partial projection of the per-Pokémon detail response.
///
/// The real payload carries far more (stats, types, moves, ...); only the
/// sprite block is modeled and everything else is ignored on parse.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonDetail {
    pub sprites: PokemonSprites,
}

/// Sprite section of the detail response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonSprites {
    /// URL of the default front-facing sprite image.
    pub front_default: String,
}

/// Display record for one Pokémon in the list view.
///
/// Owned by whatever UI or state layer instantiates it. The favourite
/// flag is client-local and never sourced from the API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Pokemon {
    pub name: String,
    /// Sprite image URL shown alongside the name.
    pub photo: String,
    pub is_favourite: bool,
}

impl Pokemon {
    /// Builds a display record from a listing entry and its detail response.
    ///
    /// New records always start un-favourited.
    pub fn from_parts(entry: PokemonListEntry, detail: PokemonDetail) -> Self {
        Self {
            name: entry.name,
            photo: detail.sprites.front_default,
            is_favourite: false,
        }
    }

    /// Flips the client-local favourite flag.
    pub fn toggle_favourite(&mut self) {
        self.is_favourite = !self.is_favourite;
    }
}
