//! Static form catalog: which cosmetic variants exist, how their sprites are
//! named upstream, which battle-only forms are hidden from list views, and
//! the national dex number of each affected base species.
//!
//! The lists are maintained by hand; the generators and checkers key off them.

/// A cosmetic variant to clone from its base record.
pub struct CosmeticForm {
    pub base: &'static str,
    pub name: &'static str,
    pub name_ja: &'static str,
}

pub const COSMETIC_FORMS: &[CosmeticForm] = &[
    // shellos / gastrodon (east / west sea)
    CosmeticForm { base: "shellos", name: "shellos-east", name_ja: "カラナクシ（ひがしのうみ）" },
    CosmeticForm { base: "shellos", name: "shellos-west", name_ja: "カラナクシ（にしのうみ）" },
    CosmeticForm { base: "gastrodon", name: "gastrodon-east", name_ja: "トリトドン（ひがしのうみ）" },
    CosmeticForm { base: "gastrodon", name: "gastrodon-west", name_ja: "トリトドン（にしのうみ）" },
    // deerling / sawsbuck (seasons)
    CosmeticForm { base: "deerling", name: "deerling-spring", name_ja: "シキジカ（はるのすがた）" },
    CosmeticForm { base: "deerling", name: "deerling-summer", name_ja: "シキジカ（なつのすがた）" },
    CosmeticForm { base: "deerling", name: "deerling-autumn", name_ja: "シキジカ（あきのすがた）" },
    CosmeticForm { base: "deerling", name: "deerling-winter", name_ja: "シキジカ（ふゆのすがた）" },
    CosmeticForm { base: "sawsbuck", name: "sawsbuck-spring", name_ja: "メブキジカ（はるのすがた）" },
    CosmeticForm { base: "sawsbuck", name: "sawsbuck-summer", name_ja: "メブキジカ（なつのすがた）" },
    CosmeticForm { base: "sawsbuck", name: "sawsbuck-autumn", name_ja: "メブキジカ（あきのすがた）" },
    CosmeticForm { base: "sawsbuck", name: "sawsbuck-winter", name_ja: "メブキジカ（ふゆのすがた）" },
    // vivillon (20 wing patterns)
    CosmeticForm { base: "vivillon", name: "vivillon-meadow", name_ja: "ビビヨン（花園）" },
    CosmeticForm { base: "vivillon", name: "vivillon-icy-snow", name_ja: "ビビヨン（氷雪）" },
    CosmeticForm { base: "vivillon", name: "vivillon-polar", name_ja: "ビビヨン（雪国）" },
    CosmeticForm { base: "vivillon", name: "vivillon-tundra", name_ja: "ビビヨン（ツンドラ）" },
    CosmeticForm { base: "vivillon", name: "vivillon-continental", name_ja: "ビビヨン（大陸）" },
    CosmeticForm { base: "vivillon", name: "vivillon-garden", name_ja: "ビビヨン（庭園）" },
    CosmeticForm { base: "vivillon", name: "vivillon-elegant", name_ja: "ビビヨン（高雅）" },
    CosmeticForm { base: "vivillon", name: "vivillon-modern", name_ja: "ビビヨン（モダン）" },
    CosmeticForm { base: "vivillon", name: "vivillon-marine", name_ja: "ビビヨン（マリン）" },
    CosmeticForm { base: "vivillon", name: "vivillon-archipelago", name_ja: "ビビヨン（群島）" },
    CosmeticForm { base: "vivillon", name: "vivillon-high-plains", name_ja: "ビビヨン（荒野）" },
    CosmeticForm { base: "vivillon", name: "vivillon-sandstorm", name_ja: "ビビヨン（砂塵）" },
    CosmeticForm { base: "vivillon", name: "vivillon-river", name_ja: "ビビヨン（大河）" },
    CosmeticForm { base: "vivillon", name: "vivillon-monsoon", name_ja: "ビビヨン（スコール）" },
    CosmeticForm { base: "vivillon", name: "vivillon-savanna", name_ja: "ビビヨン（サバンナ）" },
    CosmeticForm { base: "vivillon", name: "vivillon-sun", name_ja: "ビビヨン（太陽）" },
    CosmeticForm { base: "vivillon", name: "vivillon-ocean", name_ja: "ビビヨン（大洋）" },
    CosmeticForm { base: "vivillon", name: "vivillon-jungle", name_ja: "ビビヨン（ジャングル）" },
    CosmeticForm { base: "vivillon", name: "vivillon-fancy", name_ja: "ビビヨン（ファンシー）" },
    CosmeticForm { base: "vivillon", name: "vivillon-poke-ball", name_ja: "ビビヨン（ボール）" },
    // flabebe line (flower colors)
    CosmeticForm { base: "flabebe", name: "flabebe-red", name_ja: "フラベベ（あかいはな）" },
    CosmeticForm { base: "flabebe", name: "flabebe-yellow", name_ja: "フラベベ（きいろのはな）" },
    CosmeticForm { base: "flabebe", name: "flabebe-orange", name_ja: "フラベベ（オレンジいろのはな）" },
    CosmeticForm { base: "flabebe", name: "flabebe-blue", name_ja: "フラベベ（あおいはな）" },
    CosmeticForm { base: "flabebe", name: "flabebe-white", name_ja: "フラベベ（しろいはな）" },
    CosmeticForm { base: "floette", name: "floette-red", name_ja: "フラエッテ（あかいはな）" },
    CosmeticForm { base: "floette", name: "floette-yellow", name_ja: "フラエッテ（きいろのはな）" },
    CosmeticForm { base: "floette", name: "floette-orange", name_ja: "フラエッテ（オレンジいろのはな）" },
    CosmeticForm { base: "floette", name: "floette-blue", name_ja: "フラエッテ（あおいはな）" },
    CosmeticForm { base: "floette", name: "floette-white", name_ja: "フラエッテ（しろいはな）" },
    CosmeticForm { base: "florges", name: "florges-red", name_ja: "フラージェス（あかいはな）" },
    CosmeticForm { base: "florges", name: "florges-yellow", name_ja: "フラージェス（きいろのはな）" },
    CosmeticForm { base: "florges", name: "florges-orange", name_ja: "フラージェス（オレンジいろのはな）" },
    CosmeticForm { base: "florges", name: "florges-blue", name_ja: "フラージェス（あおいはな）" },
    CosmeticForm { base: "florges", name: "florges-white", name_ja: "フラージェス（しろいはな）" },
];

pub const HOME_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home";

/// Sprite repair: variant name -> (national dex number, upstream form suffix).
/// HOME names cosmetic form sprites `<dex>-<suffix>.png`.
pub const SPRITE_OVERRIDES: &[(&str, u32, &str)] = &[
    ("flabebe-red", 669, "red"),
    ("flabebe-yellow", 669, "yellow"),
    ("flabebe-orange", 669, "orange"),
    ("flabebe-blue", 669, "blue"),
    ("flabebe-white", 669, "white"),
    ("floette-red", 670, "red"),
    ("floette-yellow", 670, "yellow"),
    ("floette-orange", 670, "orange"),
    ("floette-blue", 670, "blue"),
    ("floette-white", 670, "white"),
    ("florges-red", 671, "red"),
    ("florges-yellow", 671, "yellow"),
    ("florges-orange", 671, "orange"),
    ("florges-blue", 671, "blue"),
    ("florges-white", 671, "white"),
    ("minior-orange-meteor", 774, "orange-meteor"),
    ("minior-yellow-meteor", 774, "yellow-meteor"),
    ("minior-green-meteor", 774, "green-meteor"),
    ("minior-blue-meteor", 774, "blue-meteor"),
    ("minior-indigo-meteor", 774, "indigo-meteor"),
    ("minior-violet-meteor", 774, "violet-meteor"),
    ("minior-orange", 774, "orange"),
    ("minior-yellow", 774, "yellow"),
    ("minior-green", 774, "green"),
    ("minior-blue", 774, "blue"),
    ("minior-indigo", 774, "indigo"),
    ("minior-violet", 774, "violet"),
];

/// minior representatives that stay visible; every other minior form is hidden.
pub const MINIOR_KEEP: &[&str] = &["minior-red-meteor", "minior-red"];

/// Ride/battle modes and cap variants hidden from list views.
pub const BATTLE_FORMS_HIDE: &[&str] = &[
    "koraidon-limited-build",
    "koraidon-sprinting-build",
    "koraidon-swimming-build",
    "koraidon-gliding-build",
    "miraidon-low-power-mode",
    "miraidon-drive-mode",
    "miraidon-aquatic-mode",
    "miraidon-glide-mode",
    "pikachu-original-cap",
    "pikachu-hoenn-cap",
    "pikachu-sinnoh-cap",
    "pikachu-unova-cap",
    "pikachu-kalos-cap",
    "pikachu-alola-cap",
    "pikachu-partner-cap",
    "pikachu-world-cap",
];

/// Every form treated as cosmetic for scrubbing: hidden from regional and
/// national dexes, display name simplified. Superset of `COSMETIC_FORMS`
/// (includes forms that were never generated by the tools, e.g. arceus types).
pub const COSMETIC_SCRUB_LIST: &[&str] = &[
    "pikachu-original-cap",
    "pikachu-hoenn-cap",
    "pikachu-sinnoh-cap",
    "pikachu-unova-cap",
    "pikachu-kalos-cap",
    "pikachu-alola-cap",
    "pikachu-partner-cap",
    "pikachu-world-cap",
    "flabebe-red",
    "flabebe-yellow",
    "flabebe-orange",
    "flabebe-blue",
    "flabebe-white",
    "floette-red",
    "floette-yellow",
    "floette-orange",
    "floette-blue",
    "floette-white",
    "florges-red",
    "florges-yellow",
    "florges-orange",
    "florges-blue",
    "florges-white",
    "vivillon-meadow",
    "vivillon-icy-snow",
    "vivillon-polar",
    "vivillon-tundra",
    "vivillon-continental",
    "vivillon-garden",
    "vivillon-elegant",
    "vivillon-modern",
    "vivillon-marine",
    "vivillon-archipelago",
    "vivillon-high-plains",
    "vivillon-sandstorm",
    "vivillon-river",
    "vivillon-monsoon",
    "vivillon-savanna",
    "vivillon-sun",
    "vivillon-ocean",
    "vivillon-jungle",
    "vivillon-fancy",
    "vivillon-poke-ball",
    "deerling-spring",
    "deerling-summer",
    "deerling-autumn",
    "deerling-winter",
    "sawsbuck-spring",
    "sawsbuck-summer",
    "sawsbuck-autumn",
    "sawsbuck-winter",
    "shellos-east",
    "shellos-west",
    "gastrodon-east",
    "gastrodon-west",
    "arceus-fighting",
    "arceus-flying",
    "arceus-poison",
    "arceus-ground",
    "arceus-rock",
    "arceus-bug",
    "arceus-ghost",
    "arceus-steel",
    "arceus-fire",
    "arceus-water",
    "arceus-grass",
    "arceus-electric",
    "arceus-psychic",
    "arceus-ice",
    "arceus-dragon",
    "arceus-dark",
    "arceus-fairy",
    "minior-orange-meteor",
    "minior-yellow-meteor",
    "minior-green-meteor",
    "minior-blue-meteor",
    "minior-indigo-meteor",
    "minior-violet-meteor",
    "minior-orange",
    "minior-yellow",
    "minior-green",
    "minior-blue",
    "minior-indigo",
    "minior-violet",
    "zarude-dada",
    "magearna-original",
    "maushold-family-of-four",
    "maushold-family-of-three",
    "tatsugiri-droopy",
    "tatsugiri-stretchy",
    "dudunsparce-two-segment",
    "dudunsparce-three-segment",
    "basculin-blue-striped",
    "mimikyu-busted",
];

/// Base species -> national dex number, for restoring numbers wiped by an
/// earlier over-aggressive scrub.
pub const BASE_NATIONAL_NUMBERS: &[(&str, u32)] = &[
    ("pikachu", 25),
    ("shellos", 422),
    ("gastrodon", 423),
    ("basculin", 550),
    ("deerling", 585),
    ("sawsbuck", 586),
    ("vivillon", 666),
    ("flabebe", 669),
    ("floette", 670),
    ("florges", 671),
    ("minior", 774),
    ("mimikyu", 778),
    ("magearna", 801),
    ("zarude", 893),
    ("maushold", 925),
    ("tatsugiri", 978),
    ("dudunsparce", 982),
];

pub fn base_national_number(base: &str) -> Option<u32> {
    BASE_NATIONAL_NUMBERS
        .iter()
        .find(|(name, _)| *name == base)
        .map(|(_, number)| *number)
}
