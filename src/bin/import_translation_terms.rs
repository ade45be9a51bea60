//! Import operator-maintained translations from CSV into the dictionary.
//! CSV columns: kind (move|ability), english, japanese (header row required).
//! Rows with the same English text overwrite the existing entry.
//! Run: cargo run --bin import_translation_terms [terms.csv]

use std::env;
use std::path::PathBuf;

use dexkeeper::translate::{dictionary_path, import_terms_csv, load_dictionary, save_dictionary};

const DEFAULT_TERMS_SUFFIX: &str = "data/import/translation_terms.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let csv_path = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(manifest_dir).join(DEFAULT_TERMS_SUFFIX)
        }
    };
    if !csv_path.exists() {
        eprintln!("Terms CSV not found: {}", csv_path.display());
        eprintln!("Create it with columns: kind, english, japanese");
        std::process::exit(1);
    }

    let dict_path = dictionary_path();
    let mut dict = load_dictionary(&dict_path);
    let applied = import_terms_csv(&csv_path, &mut dict)?;
    save_dictionary(&dict_path, &dict)?;

    println!("Applied {applied} terms from {}", csv_path.display());
    println!(
        "Dictionary now has {} move + {} ability translations",
        dict.moves.len(),
        dict.abilities.len()
    );
    Ok(())
}
