//! Document model for the preloaded dataset and the read-only checkers.

pub mod ability;
pub mod dataset;
pub mod moves;
pub mod pokedex;
pub mod pokemon;
pub mod registry;
pub mod validate;

pub use ability::Ability;
pub use dataset::{load_dataset, save_dataset, save_dataset_with_backup, DatasetError, GameData};
pub use moves::{Move, MoveMeta, StatChange};
pub use pokedex::Pokedex;
pub use pokemon::{AbilitySlots, BaseStats, EvolutionChain, LearnedMove, Pokemon, Sprites};
