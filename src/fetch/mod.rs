//! PokeAPI access: blocking client, response DTOs, and the parallel bulk
//! fetch passes used by `fetch_master_data` and `fetch_pokedexes`.

pub mod bulk;
pub mod client;

pub use bulk::{fetch_abilities, fetch_moves, fetch_pokedexes};
pub use client::{FetchError, PokeApiClient};
