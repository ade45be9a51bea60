//! Full cosmetic scrub: clear regional dex numbers, drop national numbers,
//! and simplify Japanese display names for every form on the cosmetic list.
//! Regional and gender variants are not on the list and stay untouched.
//! Run: cargo run --bin scrub_cosmetic_forms

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::forms::scrub_cosmetic_forms;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let summary = scrub_cosmetic_forms(&mut data);
    save_dataset(&path, &data)?;

    println!("Scrubbed cosmetic forms -> {}", path.display());
    println!("  pokedexNumbers cleared: {}", summary.pokedex_cleared);
    println!("  nationalDexNumber removed: {}", summary.national_removed);
    println!("  names simplified: {}", summary.names_simplified);
    Ok(())
}
