//! Move category classifier.
//!
//! A move's category tags are derived from its static fields only: name-table
//! membership, effect-text substrings, and independent threshold checks over
//! the meta block. No tag depends on another, and rule order fixes the output
//! order, so reclassification is deterministic.

use crate::data::moves::Move;

const SOUND_MOVES: &[&str] = &[
    "growl", "roar", "sing", "supersonic", "screech", "snore", "perish-song",
    "heal-bell", "uproar", "hyper-voice", "metal-sound", "grass-whistle",
    "bug-buzz", "chatter", "round", "echoed-voice", "snarl", "boomburst",
    "disarming-voice", "parting-shot", "sparkling-aria", "clanging-scales",
    "clangorous-soul", "clangorous-soulblaze", "torch-song", "alluring-voice",
    "relic-song", "synchronoise", "throat-chop", "overdrive",
];

const PUNCH_MOVES: &[&str] = &[
    "mega-punch", "fire-punch", "ice-punch", "thunder-punch", "comet-punch",
    "mach-punch", "dynamic-punch", "meteor-mash", "focus-punch", "hammer-arm",
    "bullet-punch", "drain-punch", "shadow-punch", "plasma-fists",
    "dizzy-punch", "power-up-punch", "sky-uppercut", "double-iron-bash",
    "thunderous-kick", "wicked-blow", "surging-strikes",
];

const DANCE_MOVES: &[&str] = &[
    "swords-dance", "petal-dance", "rain-dance", "dragon-dance", "lunar-dance",
    "teeter-dance", "feather-dance", "fiery-dance", "quiver-dance",
    "revelation-dance", "victory-dance", "aqua-step", "clanging-scales",
];

const BITE_MOVES: &[&str] = &[
    "bite", "crunch", "super-fang", "hyper-fang", "thunder-fang", "ice-fang",
    "fire-fang", "poison-fang", "psychic-fangs", "fishious-rend", "jaw-lock",
];

const POWDER_MOVES: &[&str] =
    &["poison-powder", "stun-spore", "sleep-powder", "spore", "cotton-spore", "rage-powder"];

const PULSE_MOVES: &[&str] = &[
    "water-pulse", "aura-sphere", "dark-pulse", "dragon-pulse", "heal-pulse",
    "terrain-pulse", "origin-pulse",
];

const BALL_MOVES: &[&str] = &[
    "shadow-ball", "energy-ball", "focus-blast", "sludge-bomb", "zap-cannon",
    "weather-ball", "electro-ball", "acid-spray", "pollen-puff", "pyro-ball",
    "barrage", "egg-bomb", "ice-ball", "mist-ball", "octazooka", "luster-purge",
];

const WIND_MOVES: &[&str] = &[
    "gust", "whirlwind", "razor-wind", "twister", "hurricane", "air-cutter",
    "ominous-wind", "tailwind", "air-slash", "bleakwind-storm", "sandsear-storm",
    "wildbolt-storm", "springtide-storm", "petal-blizzard", "icy-wind",
    "fairy-wind", "heat-wave",
];

const SLASH_MOVES: &[&str] = &[
    "cut", "slash", "fury-cutter", "air-slash", "x-scissor", "night-slash",
    "psycho-cut", "leaf-blade", "cross-poison", "sacred-sword", "razor-shell",
    "solar-blade", "ceaseless-edge", "population-bomb", "kowtow-cleave",
    "aqua-cutter", "stone-axe",
];

const NAME_TABLES: &[(&str, &[&str])] = &[
    ("sound", SOUND_MOVES),
    ("punch", PUNCH_MOVES),
    ("dance", DANCE_MOVES),
    ("bite", BITE_MOVES),
    ("powder", POWDER_MOVES),
    ("pulse", PULSE_MOVES),
    ("ball", BALL_MOVES),
    ("wind", WIND_MOVES),
    ("slash", SLASH_MOVES),
];

/// Status ailments that become a tag of their own.
const AILMENT_TAGS: &[&str] =
    &["burn", "paralysis", "poison", "sleep", "freeze", "confusion"];

/// Classify one move. Pure: reads the record, returns the tag list.
pub fn detect_move_categories(mv: &Move) -> Vec<String> {
    fn push(tag: &str, tags: &mut Vec<String>) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    let mut tags: Vec<String> = Vec::new();

    for (tag, names) in NAME_TABLES {
        if names.contains(&mv.name.as_str()) {
            push(tag, &mut tags);
        }
    }

    // effect-text fallback for categories the name tables miss
    let effect_lower = mv.effect.to_lowercase();
    if effect_lower.contains("sound") {
        push("sound", &mut tags);
    }
    if effect_lower.contains("powder") {
        push("powder", &mut tags);
    }

    if AILMENT_TAGS.contains(&mv.meta.ailment.as_str()) {
        push(&mv.meta.ailment, &mut tags);
    }
    if mv.meta.crit_rate > 0 {
        push("high-crit", &mut tags);
    }
    if mv.meta.drain > 0 {
        push("drain", &mut tags);
    }
    if mv.meta.drain < 0 {
        push("recoil", &mut tags);
    }
    if mv.meta.healing > 0 {
        push("healing", &mut tags);
    }
    if mv.meta.flinch_chance > 0 {
        push("flinch", &mut tags);
    }
    if mv.priority > 0 {
        push("priority", &mut tags);
    }
    if mv.meta.max_hits.is_some_and(|hits| hits > 1) {
        push("multi-hit", &mut tags);
    }
    if mv.accuracy.is_none() && mv.damage_class != "status" {
        push("never-miss", &mut tags);
    }
    if !mv.meta.stat_changes.is_empty()
        && (mv.meta.stat_chance > 0 || mv.damage_class == "status")
    {
        push("stat-change", &mut tags);
    }

    tags
}

/// Rewrite `categories` on every stored move. Returns how many changed.
pub fn reclassify_all(moves: &mut [Move]) -> usize {
    let mut changed = 0;
    for mv in moves.iter_mut() {
        let categories = detect_move_categories(mv);
        if mv.categories != categories {
            mv.categories = categories;
            changed += 1;
        }
    }
    changed
}

/// Display name for a tag. Unknown tags fall back to the tag itself.
pub fn category_display_name(category: &str, lang: &str) -> String {
    let (ja, en) = match category {
        "sound" => ("音技", "Sound"),
        "punch" => ("パンチ技", "Punch"),
        "dance" => ("踊り技", "Dance"),
        "bite" => ("噛む技", "Bite"),
        "powder" => ("粉技", "Powder"),
        "pulse" => ("波動技", "Pulse"),
        "ball" => ("弾技", "Ball"),
        "wind" => ("風技", "Wind"),
        "slash" => ("切る技", "Slash"),
        "burn" => ("やけど", "Burn"),
        "paralysis" => ("まひ", "Paralysis"),
        "poison" => ("どく", "Poison"),
        "sleep" => ("ねむり", "Sleep"),
        "freeze" => ("こおり", "Freeze"),
        "confusion" => ("こんらん", "Confusion"),
        "high-crit" => ("急所", "High crit"),
        "drain" => ("吸収技", "Drain"),
        "recoil" => ("反動技", "Recoil"),
        "healing" => ("回復技", "Healing"),
        "flinch" => ("ひるみ", "Flinch"),
        "priority" => ("先制技", "Priority"),
        "multi-hit" => ("連続技", "Multi-hit"),
        "never-miss" => ("必中技", "Never miss"),
        "stat-change" => ("能力変化", "Stat change"),
        other => return other.to_string(),
    };
    match lang {
        "ja" => ja.to_string(),
        _ => en.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::moves::{MoveMeta, StatChange};
    use serde_json::Map;

    fn blank_move(name: &str) -> Move {
        Move {
            id: 1,
            name: name.to_string(),
            name_ja: String::new(),
            r#type: "normal".into(),
            damage_class: "physical".into(),
            power: Some(75),
            accuracy: Some(100),
            pp: 15,
            priority: 0,
            effect_chance: None,
            effect: String::new(),
            effect_ja: String::new(),
            categories: Vec::new(),
            meta: MoveMeta::default(),
            extra: Map::new(),
        }
    }

    #[test]
    fn burn_ailment_emits_burn_tag() {
        let mut mv = blank_move("fire-punch");
        mv.meta.ailment = "burn".into();
        let tags = detect_move_categories(&mv);
        assert!(tags.contains(&"burn".to_string()));
        assert!(tags.contains(&"punch".to_string()));
    }

    #[test]
    fn name_table_and_effect_fallback() {
        let mut mv = blank_move("hyper-voice");
        mv.effect = "Inflicts damage with sound.".into();
        let tags = detect_move_categories(&mv);
        // name table and effect text agree; the tag appears once
        assert_eq!(tags.iter().filter(|t| *t == "sound").count(), 1);
    }

    #[test]
    fn threshold_rules_are_independent() {
        let mut mv = blank_move("custom");
        mv.priority = 1;
        mv.meta.flinch_chance = 30;
        mv.meta.drain = -25;
        mv.meta.max_hits = Some(5);
        let tags = detect_move_categories(&mv);
        for expected in ["priority", "flinch", "recoil", "multi-hit"] {
            assert!(tags.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn never_miss_requires_damaging_move() {
        let mut swift = blank_move("swift");
        swift.accuracy = None;
        assert!(detect_move_categories(&swift).contains(&"never-miss".to_string()));

        let mut growl = blank_move("growl");
        growl.accuracy = None;
        growl.damage_class = "status".into();
        assert!(!detect_move_categories(&growl).contains(&"never-miss".to_string()));
    }

    #[test]
    fn status_stat_change_is_tagged() {
        let mut mv = blank_move("swords-dance");
        mv.damage_class = "status".into();
        mv.meta.stat_changes = vec![StatChange { stat: "attack".into(), change: 2 }];
        let tags = detect_move_categories(&mv);
        assert!(tags.contains(&"dance".to_string()));
        assert!(tags.contains(&"stat-change".to_string()));
    }

    #[test]
    fn reclassify_reports_only_real_changes() {
        let mut mv = blank_move("fire-punch");
        mv.meta.ailment = "burn".into();
        let mut moves = vec![mv];
        assert_eq!(reclassify_all(&mut moves), 1);
        assert_eq!(reclassify_all(&mut moves), 0);
    }

    #[test]
    fn display_names_cover_both_languages() {
        assert_eq!(category_display_name("punch", "ja"), "パンチ技");
        assert_eq!(category_display_name("punch", "en"), "Punch");
        assert_eq!(category_display_name("unknown-tag", "ja"), "unknown-tag");
    }
}
