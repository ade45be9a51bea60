//! Re-run the category classifier over the stored move list. Needed after
//! the classifier's rule tables change; fetch_master_data classifies new
//! moves on the way in.
//! Run: cargo run --bin reclassify_moves

use dexkeeper::categories::reclassify_all;
use dexkeeper::data::{dataset, load_dataset, save_dataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    if data.moves.is_empty() {
        eprintln!("Master move list is empty; run fetch_master_data first.");
        std::process::exit(1);
    }

    let changed = reclassify_all(&mut data.moves);
    save_dataset(&path, &data)?;

    println!("Reclassified {changed}/{} moves -> {}", data.moves.len(), path.display());
    Ok(())
}
