//! Evolution move inheritance.
//!
//! Evolved forms inherit every move of their same-chain pre-evolutions, with
//! the copies flagged `isFromPreEvolution`. `evolvesTo` is ignored: regional
//! forms point it at the wrong target, so only `chainId` plus stage
//! arithmetic decides who inherits from whom.
//!
//! Stages are processed in ascending order, so a stage-3 form picks up
//! stage-1 moves through its stage-2 parent in a single run.

use std::collections::{BTreeMap, HashSet};

use crate::data::moves;
use crate::data::pokemon::LearnedMove;
use crate::data::GameData;

/// Indices of chain members keyed by (chainId, stage), stages sorted.
fn chain_stages(data: &GameData) -> BTreeMap<u32, BTreeMap<u32, Vec<usize>>> {
    let mut chains: BTreeMap<u32, BTreeMap<u32, Vec<usize>>> = BTreeMap::new();
    for (index, pokemon) in data.pokemon.iter().enumerate() {
        if let Some(chain) = &pokemon.evolution_chain {
            chains
                .entry(chain.chain_id)
                .or_default()
                .entry(chain.evolution_stage)
                .or_default()
                .push(index);
        }
    }
    chains
}

/// Propagate moves down every chain. Returns the number of inherited copies
/// appended across the whole dataset.
pub fn inherit_evolution_moves(data: &mut GameData) -> usize {
    let chains = chain_stages(data);
    let mut added = 0;

    for stages in chains.values() {
        for (&stage, members) in stages {
            if stage <= 1 {
                continue;
            }
            let Some(parents) = stages.get(&(stage - 1)) else {
                continue;
            };

            // snapshot parent movesets first; they were finalized when their
            // own stage was processed (BTreeMap iterates stages ascending)
            let inherited: Vec<LearnedMove> = parents
                .iter()
                .flat_map(|&parent| data.pokemon[parent].moves.iter().cloned())
                .collect();

            for &member in members {
                let pokemon = &mut data.pokemon[member];
                let mut known: HashSet<u32> =
                    pokemon.moves.iter().map(|m| m.move_id).collect();
                for mv in &inherited {
                    if known.insert(mv.move_id) {
                        let mut copy = mv.clone();
                        copy.is_from_pre_evolution = Some(true);
                        pokemon.moves.push(copy);
                        added += 1;
                    }
                }
            }
        }
    }
    added
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceGap {
    pub pre_evolution: String,
    pub evolved: String,
    pub missing_move_ids: Vec<u32>,
    pub missing_samples: Vec<String>,
}

/// Read-only check: every evolution pair where the evolved form is missing
/// moves its direct pre-evolution knows.
pub fn find_inheritance_gaps(data: &GameData) -> Vec<InheritanceGap> {
    let chains = chain_stages(data);
    let mut gaps = Vec::new();

    for stages in chains.values() {
        for (&stage, members) in stages {
            if stage <= 1 {
                continue;
            }
            let Some(parents) = stages.get(&(stage - 1)) else {
                continue;
            };
            for &member in members {
                let known: HashSet<u32> =
                    data.pokemon[member].moves.iter().map(|m| m.move_id).collect();
                for &parent in parents {
                    let missing: Vec<u32> = data.pokemon[parent]
                        .moves
                        .iter()
                        .map(|m| m.move_id)
                        .filter(|id| !known.contains(id))
                        .collect();
                    if missing.is_empty() {
                        continue;
                    }
                    let missing_samples = missing
                        .iter()
                        .take(5)
                        .map(|&id| {
                            moves::find_by_id(&data.moves, id)
                                .map(|m| m.name_ja.clone())
                                .unwrap_or_else(|| format!("move-{id}"))
                        })
                        .collect();
                    gaps.push(InheritanceGap {
                        pre_evolution: data.pokemon[parent].name.clone(),
                        evolved: data.pokemon[member].name.clone(),
                        missing_move_ids: missing,
                        missing_samples,
                    });
                }
            }
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pokemon::{EvolutionChain, Pokemon};
    use serde_json::Map;

    fn member(name: &str, chain: u32, stage: u32, move_ids: &[u32]) -> Pokemon {
        Pokemon {
            id: 1,
            name: name.to_string(),
            name_ja: String::new(),
            national_dex_number: None,
            pokedex_numbers: Default::default(),
            types: Vec::new(),
            base_stats: Default::default(),
            abilities: Default::default(),
            sprites: Default::default(),
            moves: move_ids
                .iter()
                .map(|&id| LearnedMove {
                    move_id: id,
                    is_from_pre_evolution: None,
                    extra: Map::new(),
                })
                .collect(),
            evolution_chain: Some(EvolutionChain {
                chain_id: chain,
                evolution_stage: stage,
                evolves_to: None,
            }),
            extra: Map::new(),
        }
    }

    fn dataset(pokemon: Vec<Pokemon>) -> GameData {
        GameData {
            pokemon,
            moves: Vec::new(),
            abilities: Vec::new(),
            pokedexes: Vec::new(),
            extra: Map::new(),
        }
    }

    fn move_ids(p: &Pokemon) -> Vec<u32> {
        p.moves.iter().map(|m| m.move_id).collect()
    }

    #[test]
    fn evolved_form_inherits_missing_moves_with_flag() {
        let mut data = dataset(vec![
            member("flabebe", 7, 1, &[1, 2]),
            member("floette", 7, 2, &[2, 3]),
        ]);
        let added = inherit_evolution_moves(&mut data);
        assert_eq!(added, 1);
        assert_eq!(move_ids(&data.pokemon[1]), vec![2, 3, 1]);
        let inherited = data.pokemon[1].moves.last().unwrap();
        assert_eq!(inherited.is_from_pre_evolution, Some(true));
    }

    #[test]
    fn propagates_across_multiple_stages_in_one_run() {
        let mut data = dataset(vec![
            member("flabebe", 7, 1, &[10]),
            member("floette", 7, 2, &[20]),
            member("florges", 7, 3, &[30]),
        ]);
        inherit_evolution_moves(&mut data);
        // stage 3 sees move 10 via the augmented stage-2 moveset
        assert!(move_ids(&data.pokemon[2]).contains(&10));
        assert!(move_ids(&data.pokemon[2]).contains(&20));
    }

    #[test]
    fn separate_chains_do_not_mix() {
        let mut data = dataset(vec![
            member("flabebe", 7, 1, &[10]),
            member("shellos", 9, 1, &[99]),
            member("gastrodon", 9, 2, &[]),
        ]);
        inherit_evolution_moves(&mut data);
        assert_eq!(move_ids(&data.pokemon[2]), vec![99]);
    }

    #[test]
    fn rerun_adds_nothing() {
        let mut data = dataset(vec![
            member("flabebe", 7, 1, &[1]),
            member("floette", 7, 2, &[]),
        ]);
        assert_eq!(inherit_evolution_moves(&mut data), 1);
        assert_eq!(inherit_evolution_moves(&mut data), 0);
    }

    #[test]
    fn gap_finder_reports_missing_pairs() {
        let data = dataset(vec![
            member("sneasel-hisui", 42, 1, &[1, 2, 3]),
            member("sneasler", 42, 2, &[3]),
        ]);
        let gaps = find_inheritance_gaps(&data);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].pre_evolution, "sneasel-hisui");
        assert_eq!(gaps[0].evolved, "sneasler");
        assert_eq!(gaps[0].missing_move_ids, vec![1, 2]);
    }

    #[test]
    fn no_gaps_after_inheritance() {
        let mut data = dataset(vec![
            member("flabebe", 7, 1, &[1, 2]),
            member("floette", 7, 2, &[3]),
            member("florges", 7, 3, &[]),
        ]);
        inherit_evolution_moves(&mut data);
        assert!(find_inheritance_gaps(&data).is_empty());
    }
}
