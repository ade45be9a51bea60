//! Parallel bulk fetches. Each id is fetched on the worker pool with a fixed
//! post-request sleep for rate limiting; failures are logged with the
//! offending id and skipped, and results are aggregated once every request
//! has finished. No retries, no ordering guarantees.

use std::time::Duration;

use rayon::prelude::*;

use crate::data::moves::Move;
use crate::data::{Ability, Pokedex};
use crate::fetch::client::PokeApiClient;
use crate::parallel::WorkerPool;

/// Sleep after each request; with 10 workers this keeps the request rate
/// where the public API wants it.
pub const REQUEST_DELAY: Duration = Duration::from_millis(50);

fn fetch_each<T, F>(ids: &[u32], pool: &WorkerPool, what: &str, fetch_one: F) -> Vec<T>
where
    T: Send,
    F: Fn(u32) -> Result<T, crate::fetch::FetchError> + Sync,
{
    pool.install(|| {
        ids.par_iter()
            .filter_map(|&id| {
                let result = match fetch_one(id) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        eprintln!("fetch: {what} {id}: {err}");
                        None
                    }
                };
                std::thread::sleep(REQUEST_DELAY);
                result
            })
            .collect()
    })
}

/// Fetch every ability id, sorted by id. Failed ids are simply absent.
pub fn fetch_abilities(client: &PokeApiClient, ids: &[u32], pool: &WorkerPool) -> Vec<Ability> {
    let mut abilities = fetch_each(ids, pool, "ability", |id| client.fetch_ability(id));
    abilities.sort_by_key(|a| a.id);
    abilities
}

/// Fetch every move id, sorted by id. Categories are classified on the way in.
pub fn fetch_moves(client: &PokeApiClient, ids: &[u32], pool: &WorkerPool) -> Vec<Move> {
    let mut moves = fetch_each(ids, pool, "move", |id| client.fetch_move(id));
    moves.sort_by_key(|m| m.id);
    moves
}

/// Fetch the named regional dexes sequentially (there are only a few).
/// A failed dex is reported and skipped.
pub fn fetch_pokedexes(client: &PokeApiClient, names: &[&str]) -> Vec<Pokedex> {
    let mut pokedexes = Vec::with_capacity(names.len());
    for name in names {
        match client.fetch_pokedex(name) {
            Ok(pokedex) => {
                println!("  {}: {} species", name, pokedex.species_ids.len());
                pokedexes.push(pokedex);
            }
            Err(err) => eprintln!("fetch: pokedex {name}: {err}"),
        }
        std::thread::sleep(REQUEST_DELAY);
    }
    pokedexes
}
