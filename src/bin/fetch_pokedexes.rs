//! Fetch the regional dex species lists (paldea, kitakami, blueberry) from
//! PokeAPI and replace the dataset's `pokedexes`.
//! Run: cargo run --bin fetch_pokedexes

use dexkeeper::data::pokedex::REGIONAL_DEX_NAMES;
use dexkeeper::data::registry::{registry_path, touch_entry, DATASET_REGISTRY_KEY};
use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::fetch::{fetch_pokedexes, PokeApiClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;

    println!("Fetching regional dexes...");
    let client = PokeApiClient::new()?;
    let pokedexes = fetch_pokedexes(&client, REGIONAL_DEX_NAMES);
    if pokedexes.is_empty() {
        eprintln!("No pokedex could be fetched; dataset left unchanged.");
        std::process::exit(1);
    }

    data.pokedexes = pokedexes;
    save_dataset(&path, &data)?;

    touch_entry(
        &registry_path(),
        DATASET_REGISTRY_KEY,
        "pokeapi",
        dataset::DEFAULT_DATASET_SUFFIX,
    );

    println!("Wrote {} pokedexes to {}", data.pokedexes.len(), path.display());
    Ok(())
}
