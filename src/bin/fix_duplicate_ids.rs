//! Resolve duplicate pokemon ids: the first record keeps its id, the rest
//! are renumbered sequentially from 20000 (the 10000s are upstream form
//! ids). Verifies the result after writing.
//! Run: cargo run --bin fix_duplicate_ids

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::ids::{find_duplicate_ids, renumber_duplicates, REASSIGN_BASE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let mut data = load_dataset(&path)?;
    let duplicates = find_duplicate_ids(&data.pokemon);
    println!("Duplicate ids found: {}", duplicates.len());

    let reassigned = renumber_duplicates(&mut data, REASSIGN_BASE);
    for r in &reassigned {
        println!("  {}: id {} -> {}", r.name, r.old_id, r.new_id);
    }
    save_dataset(&path, &data)?;

    // verify from the file we just wrote
    let verify = load_dataset(&path)?;
    let remaining = find_duplicate_ids(&verify.pokemon);
    if remaining.is_empty() {
        println!(
            "Renumbered {} records; all {} ids unique -> {}",
            reassigned.len(),
            verify.pokemon.len(),
            path.display()
        );
    } else {
        eprintln!("{} duplicate ids remain after renumbering", remaining.len());
        std::process::exit(1);
    }
    Ok(())
}
