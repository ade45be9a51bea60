//! Report evolution pairs where the evolved form is missing moves its direct
//! pre-evolution knows. Read-only; run add_evolution_moves to repair.
//! Run: cargo run --bin verify_evolution_moves

use dexkeeper::data::{dataset, load_dataset};
use dexkeeper::evolution::find_inheritance_gaps;

const MAX_LISTED: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let data = load_dataset(&path)?;
    let gaps = find_inheritance_gaps(&data);

    if gaps.is_empty() {
        println!("All evolution chains inherit correctly ({} pokemon checked)", data.pokemon.len());
        return Ok(());
    }

    println!("{} inheritance gaps found:", gaps.len());
    for gap in gaps.iter().take(MAX_LISTED) {
        println!(
            "  {} -> {}: {} missing (e.g. {})",
            gap.pre_evolution,
            gap.evolved,
            gap.missing_move_ids.len(),
            gap.missing_samples.join(", ")
        );
    }
    if gaps.len() > MAX_LISTED {
        println!("  ... and {} more", gaps.len() - MAX_LISTED);
    }
    std::process::exit(1);
}
