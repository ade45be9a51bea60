//! Propagate movesets down evolution chains: evolved forms learn everything
//! their pre-evolutions know, flagged `isFromPreEvolution`. Stages are
//! processed in ascending order so a full chain converges in one run.
//! Writes a .backup of the previous file first.
//! Run: cargo run --bin add_evolution_moves

use dexkeeper::data::{dataset, load_dataset, save_dataset_with_backup};
use dexkeeper::evolution::inherit_evolution_moves;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    println!("Loaded {} pokemon", data.pokemon.len());

    let added = inherit_evolution_moves(&mut data);
    let backup = save_dataset_with_backup(&path, &data)?;

    println!("Added {added} inherited moves -> {}", path.display());
    println!("Backup at {}", backup.display());
    Ok(())
}
