//! Duplicate-id repair. Historically, generated form variants kept their base
//! record's id; this pass keeps the first occurrence of each id and renumbers
//! the rest sequentially from a fixed offset above every assigned range.

use std::collections::BTreeMap;

use crate::data::{GameData, Pokemon};

/// First id handed out to renumbered records. The 10000s are PokeAPI form
/// ids, so reassignment starts at 20000.
pub const REASSIGN_BASE: u32 = 20000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub name: String,
    pub old_id: u32,
    pub new_id: u32,
}

/// Duplicated id -> indices of every record carrying it, in list order.
pub fn find_duplicate_ids(pokemon: &[Pokemon]) -> BTreeMap<u32, Vec<usize>> {
    let mut by_id: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, p) in pokemon.iter().enumerate() {
        by_id.entry(p.id).or_default().push(index);
    }
    by_id.retain(|_, indices| indices.len() > 1);
    by_id
}

/// Renumber every duplicate after the first, assigning sequential ids from
/// `start`. Duplicated ids are processed in ascending order so reruns on the
/// same input produce the same assignment.
pub fn renumber_duplicates(data: &mut GameData, start: u32) -> Vec<Reassignment> {
    let duplicates = find_duplicate_ids(&data.pokemon);
    let mut next_id = start;
    let mut reassigned = Vec::new();

    for (old_id, indices) in duplicates {
        // first occurrence keeps the id
        for &index in &indices[1..] {
            let pokemon = &mut data.pokemon[index];
            pokemon.id = next_id;
            reassigned.push(Reassignment {
                name: pokemon.name.clone(),
                old_id,
                new_id: next_id,
            });
            next_id += 1;
        }
    }
    reassigned
}
