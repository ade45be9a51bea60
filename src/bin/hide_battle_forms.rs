//! Hide battle/ride/cap forms from list views by clearing their regional dex
//! numbers (minior keeps one shelled and one bare representative).
//! Run: cargo run --bin hide_battle_forms

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::forms::hide_battle_forms;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let hidden = hide_battle_forms(&mut data);
    save_dataset(&path, &data)?;

    println!("Hid {hidden} battle forms from list views -> {}", path.display());
    Ok(())
}
