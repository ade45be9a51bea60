//! Append every catalog cosmetic variant (vivillon patterns, flabebe-line
//! colors, seasonal deer, east/west sea slugs) that is not yet present.
//! Safe to rerun: existing names are skipped.
//! Run: cargo run --bin add_cosmetic_forms

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::forms::add_cosmetic_forms;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let before = data.pokemon.len();
    let added = add_cosmetic_forms(&mut data);

    for name in &added {
        println!("  added {name}");
    }
    save_dataset(&path, &data)?;

    println!(
        "Added {} cosmetic forms ({} -> {} pokemon) -> {}",
        added.len(),
        before,
        data.pokemon.len(),
        path.display()
    );
    Ok(())
}
