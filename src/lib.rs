//! DEXKEEPER: maintenance tools for the preloaded Pokédex dataset.
//!
//! The dataset (`data/scarlet_violet.json`) is a single JSON document shipped
//! inside an unrelated mobile app. Each binary under `src/bin/` performs one
//! idempotent repair or enrichment pass over it: fetching master data from
//! PokeAPI, adding form variants, deduplicating ids, repairing regional dex
//! numbers, classifying moves, or filling in Japanese effect text.
//!
//! Binaries are run manually and in operator-chosen order; the library only
//! provides the shared document model and the per-operation passes.

pub mod categories;
pub mod data;
pub mod dex;
pub mod evolution;
pub mod fetch;
pub mod forms;
pub mod ids;
pub mod parallel;
pub mod translate;
