//! Run every dataset checker and print the diagnostics. Read-only; exits
//! non-zero when any error-level diagnostic is found.
//! Run: cargo run --bin check_dataset

use dexkeeper::data::validate::validate_dataset;
use dexkeeper::data::{dataset, load_dataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let data = load_dataset(&path)?;
    println!(
        "Checking {} pokemon, {} moves, {} abilities, {} pokedexes",
        data.pokemon.len(),
        data.moves.len(),
        data.abilities.len(),
        data.pokedexes.len()
    );

    let report = validate_dataset(&data);
    for diag in &report.diagnostics {
        println!("[{}] {}: {}", diag.severity, diag.context, diag.message);
    }

    let errors = report
        .diagnostics
        .iter()
        .filter(|d| d.severity == dexkeeper::data::validate::ValidationSeverity::Error)
        .count();
    println!("{} diagnostics, {} errors", report.diagnostics.len(), errors);
    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
