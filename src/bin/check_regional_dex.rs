//! Report duplicate and discontinuous numbers in one regional dex.
//! Read-only: nothing is fixed.
//! Run: cargo run --bin check_regional_dex <paldea|kitakami|blueberry>

use std::env;

use dexkeeper::data::{dataset, load_dataset};
use dexkeeper::dex::{dex_duplicates, dex_gaps};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(dex) = env::args().nth(1) else {
        eprintln!("usage: check_regional_dex <paldea|kitakami|blueberry>");
        std::process::exit(2);
    };

    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }
    let data = load_dataset(&path)?;

    let entries = data
        .pokemon
        .iter()
        .filter(|p| p.pokedex_numbers.contains_key(&dex))
        .count();
    println!("{dex}: {entries} entries");

    let duplicates = dex_duplicates(&data, &dex);
    if duplicates.is_empty() {
        println!("  no duplicate numbers");
    } else {
        println!("  duplicate numbers: {}", duplicates.len());
        for (number, names) in &duplicates {
            println!("    #{number}: {}", names.join(", "));
        }
    }

    let gaps = dex_gaps(&data, &dex);
    if gaps.is_empty() {
        println!("  numbers are continuous");
    } else {
        for (before, after) in &gaps {
            let missing: Vec<String> = (before + 1..*after).map(|n| n.to_string()).collect();
            println!("    #{before} -> #{after}: missing {}", missing.join(", "));
        }
    }

    if !duplicates.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
