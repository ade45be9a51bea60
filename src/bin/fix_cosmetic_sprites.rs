//! Rewrite cosmetic-form sprite URLs to the HOME `<dex>-<suffix>.png` naming
//! scheme. Run after add_cosmetic_forms; only changed URLs are counted.
//! Run: cargo run --bin fix_cosmetic_sprites

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::forms::fix_cosmetic_sprites;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let updated = fix_cosmetic_sprites(&mut data);
    save_dataset(&path, &data)?;

    println!("Fixed {updated} sprite URLs -> {}", path.display());
    Ok(())
}
