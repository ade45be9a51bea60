//! Restore `nationalDexNumber` on records that lost it, using the base
//! species table (a form always shares its base's national number).
//! Run: cargo run --bin restore_national_numbers

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::forms::restore_national_numbers;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let updated = restore_national_numbers(&mut data);
    for name in &updated {
        println!("  restored {name}");
    }
    save_dataset(&path, &data)?;

    let missing = data
        .pokemon
        .iter()
        .filter(|p| p.national_dex_number.is_none())
        .count();
    println!("Restored {} national numbers -> {}", updated.len(), path.display());
    if missing > 0 {
        println!("  {missing} records still have no nationalDexNumber");
    }
    Ok(())
}
