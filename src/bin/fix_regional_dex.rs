//! Apply the per-dex repair tables: drop wrongly-listed forms from a
//! regional dex and add the entries that were missing.
//! Run: cargo run --bin fix_regional_dex [paldea|kitakami|blueberry]
//! With no argument every dex is repaired.

use std::env;

use dexkeeper::data::{dataset, load_dataset, save_dataset};
use dexkeeper::dex::{apply_dex_fix, fix_for, DEX_FIXES};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = dataset::dataset_path();
    if !path.exists() {
        eprintln!("Dataset not found: {}", path.display());
        std::process::exit(1);
    }

    let fixes: Vec<&dexkeeper::dex::DexFix> = match env::args().nth(1) {
        Some(dex) => match fix_for(&dex) {
            Some(fix) => vec![fix],
            None => {
                eprintln!("usage: fix_regional_dex [paldea|kitakami|blueberry]");
                std::process::exit(2);
            }
        },
        None => DEX_FIXES.iter().collect(),
    };

    let mut data = load_dataset(&path)?;
    for fix in fixes {
        let summary = apply_dex_fix(&mut data, fix);
        println!("{}: removed {}, added {}", fix.dex, summary.removed, summary.added);
    }
    save_dataset(&path, &data)?;

    println!("Saved {}", path.display());
    Ok(())
}
