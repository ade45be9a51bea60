//! Fetch ability and move master data from PokeAPI and replace the dataset's
//! `abilities` and `moves` lists. Ids to fetch are collected from the pokemon
//! records, so run this after any pass that adds forms or moves.
//! Run: cargo run --bin fetch_master_data

use std::collections::BTreeSet;

use dexkeeper::data::registry::{registry_path, touch_entry, DATASET_REGISTRY_KEY};
use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::fetch::{fetch_abilities, fetch_moves, PokeApiClient};
use dexkeeper::parallel::WorkerPool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        eprintln!("Set DEXKEEPER_DATASET or add data/scarlet_violet.json first.");
        std::process::exit(1);
    }

    println!("Loading {}...", path.display());
    let mut data = load_dataset(&path)?;

    let mut ability_ids: BTreeSet<u32> = BTreeSet::new();
    let mut move_ids: BTreeSet<u32> = BTreeSet::new();
    for pokemon in &data.pokemon {
        ability_ids.extend(pokemon.abilities.primary.iter().copied());
        if let Some(hidden) = pokemon.abilities.hidden {
            ability_ids.insert(hidden);
        }
        move_ids.extend(pokemon.moves.iter().map(|m| m.move_id));
    }
    let ability_ids: Vec<u32> = ability_ids.into_iter().collect();
    let move_ids: Vec<u32> = move_ids.into_iter().collect();
    println!("  abilities needed: {}", ability_ids.len());
    println!("  moves needed: {}", move_ids.len());

    let client = PokeApiClient::new()?;
    let pool = WorkerPool::default();

    println!("Fetching abilities...");
    let abilities = fetch_abilities(&client, &ability_ids, &pool);
    println!("  fetched {}/{}", abilities.len(), ability_ids.len());

    println!("Fetching moves...");
    let moves = fetch_moves(&client, &move_ids, &pool);
    println!("  fetched {}/{}", moves.len(), move_ids.len());

    data.abilities = abilities;
    data.moves = moves;
    save_dataset(&path, &data)?;

    touch_entry(
        &registry_path(),
        DATASET_REGISTRY_KEY,
        "pokeapi",
        dataset::DEFAULT_DATASET_SUFFIX,
    );

    println!(
        "Master data updated: {} abilities, {} moves -> {}",
        data.abilities.len(),
        data.moves.len(),
        path.display()
    );
    Ok(())
}
