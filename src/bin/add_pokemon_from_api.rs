//! Fetch named pokemon from PokeAPI and append them to the dataset (gender
//! forms, newly revealed forms, and other records the dataset is missing).
//! Existing names are skipped, so reruns are safe. The Japanese name is
//! copied from the base species when it is already in the dataset.
//! Run: cargo run --bin add_pokemon_from_api <slug> [slug...]

use std::env;

use dexkeeper::data::pokemon::{base_name, contains_name, find_by_name};
use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::fetch::PokeApiClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let slugs: Vec<String> = env::args().skip(1).collect();
    if slugs.is_empty() {
        eprintln!("usage: add_pokemon_from_api <slug> [slug...]");
        eprintln!("example: add_pokemon_from_api meowstic-male");
        std::process::exit(2);
    }

    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let client = PokeApiClient::new()?;
    let mut added = 0;

    for slug in &slugs {
        if contains_name(&data.pokemon, slug) {
            println!("  {slug}: already present, skipping");
            continue;
        }
        let api = match client.fetch_pokemon(slug) {
            Ok(api) => api,
            Err(err) => {
                eprintln!("  {slug}: fetch failed: {err}");
                continue;
            }
        };
        let name_ja = find_by_name(&data.pokemon, base_name(slug))
            .map(|base| base.name_ja.clone())
            .unwrap_or_default();
        let record = api.into_record(&name_ja, Default::default());
        println!("  added {} (id {})", record.name, record.id);
        data.pokemon.push(record);
        added += 1;
    }

    save_dataset(&path, &data)?;
    println!("Added {added}/{} pokemon -> {}", slugs.len(), path.display());
    Ok(())
}
