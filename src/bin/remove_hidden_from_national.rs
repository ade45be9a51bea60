//! Re-establish the visibility invariant: any record with an empty
//! `pokedexNumbers` map loses its `nationalDexNumber` (and its Japanese name
//! loses the parenthetical form qualifier).
//! Run: cargo run --bin remove_hidden_from_national

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::forms::remove_hidden_from_national;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let (removed, renamed) = remove_hidden_from_national(&mut data);
    save_dataset(&path, &data)?;

    println!("Removed {removed} national numbers, simplified {renamed} names -> {}", path.display());
    Ok(())
}
