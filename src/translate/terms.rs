//! Static substitution tables for effect-text translation.
//!
//! `TERM_REPLACEMENTS` is applied first-to-last, so more specific phrases
//! must stay above their substrings. `POLITE_TO_PLAIN` normalizes polite
//! verb endings to plain form; the with-period variant precedes the bare one.

pub const TERM_REPLACEMENTS: &[(&str, &str)] = &[
    // pronouns and basic terms
    ("This Pokémon's", "このポケモンの"),
    ("This Pokémon", "このポケモン"),
    ("this Pokémon", "このポケモン"),
    ("the user", "使用者"),
    ("the target", "相手"),
    ("The target", "相手"),
    // stats
    (" HP", " HP"),
    (" PP", " PP"),
    ("Special Attack", "特攻"),
    ("special attack", "特攻"),
    ("Special Defense", "特防"),
    ("special defense", "特防"),
    ("Attack", "攻撃"),
    ("attack", "攻撃"),
    ("Defense", "防御"),
    ("defense", "防御"),
    ("Speed", "素早さ"),
    ("speed", "素早さ"),
    ("accuracy", "命中率"),
    ("evasion", "回避率"),
    // status conditions
    ("badly poisoned", "もうどく状態"),
    ("paralyzed", "まひ状態"),
    ("paralyze", "まひ"),
    ("paralysis", "まひ"),
    ("poisoned", "どく状態"),
    ("poison", "どく"),
    ("burned", "やけど状態"),
    ("burn", "やけど"),
    ("frozen", "こおり状態"),
    ("freeze", "こおり"),
    ("asleep", "ねむり状態"),
    ("sleep", "ねむり"),
    ("confused", "こんらん状態"),
    ("confusion", "こんらん"),
    ("flinching", "ひるみ"),
    ("flinch", "ひるみ"),
    ("infatuated", "メロメロ状態"),
    ("infatuation", "メロメロ"),
    // battle mechanics
    ("critical hits", "急所"),
    ("critical hit", "急所"),
    (" stages", " 段階"),
    (" stage", " 段階"),
    (" turns", " ターン"),
    (" turn", " ターン"),
    ("damage", "ダメージ"),
    ("heals", "回復する"),
    ("heal", "回復"),
    ("faints", "ひんし状態になる"),
    ("faint", "ひんし"),
    ("moves", "技"),
    ("move", "技"),
    ("abilities", "特性"),
    ("ability", "特性"),
    (" field", " 場"),
    ("battle", "戦闘"),
    ("weather", "天候"),
    ("makes contact", "接触"),
    // types
    ("normal-type", "ノーマルタイプ"),
    ("fire-type", "ほのおタイプ"),
    ("water-type", "みずタイプ"),
    ("electric-type", "でんきタイプ"),
    ("grass-type", "くさタイプ"),
    ("ice-type", "こおりタイプ"),
    ("fighting-type", "かくとうタイプ"),
    ("poison-type", "どくタイプ"),
    ("ground-type", "じめんタイプ"),
    ("flying-type", "ひこうタイプ"),
    ("psychic-type", "エスパータイプ"),
    ("bug-type", "むしタイプ"),
    ("rock-type", "いわタイプ"),
    ("ghost-type", "ゴーストタイプ"),
    ("dragon-type", "ドラゴンタイプ"),
    ("dark-type", "あくタイプ"),
    ("steel-type", "はがねタイプ"),
    ("fairy-type", "フェアリータイプ"),
    // common phrases
    (" has a ", " には"),
    ("% chance", "%の確率"),
    ("chance to", "の確率で"),
    (" to ", " で"),
    ("when ", "とき"),
    ("When ", "とき"),
    ("Whenever ", "するたびに"),
    ("While ", "の間"),
    ("If ", "もし"),
    ("will ", "する"),
    ("cannot be", "できない"),
    ("cannot ", "できない"),
    (" is ", " は"),
    (" are ", " は"),
    (" at the end of every turn", " 毎ターン終了時"),
    (" at the end of each turn", " 毎ターン終了時"),
    (" at the start of the turn", " ターン開始時"),
    ("for five turns", "5ターンの間"),
    ("for 5 turns", "5ターンの間"),
    (" will fail", " 失敗する"),
    (" raises ", " 上げる"),
    (" lowers ", " 下げる"),
    (" doubled", " 2倍"),
    (" halved", " 半減"),
    (" ignores ", " 無視する"),
    (" with each hit", " 命中するたびに"),
    ("may ", "可能性がある"),
    (" by one stage", " 1段階"),
    (" by two stages", " 2段階"),
    (" one stage", " 1段階"),
    (" two stages", " 2段階"),
    // weather
    ("sandstorm", "すなあらし"),
    ("rain", "あめ"),
    ("sunshine", "にほんばれ"),
    ("sunny day", "にほんばれ"),
    ("hail", "あられ"),
    // well-known move names appearing inside effect text
    ("substitute", "みがわり"),
    ("protect", "まもる"),
    ("detect", "みきり"),
];

pub const POLITE_TO_PLAIN: &[(&str, &str)] = &[
    ("行動できなくします。", "行動できなくする。"),
    ("行動できなくします", "行動できなくする"),
    ("回復します。", "回復する。"),
    ("回復します", "回復する"),
    ("上昇します。", "上昇する。"),
    ("上昇します", "上昇する"),
    ("減少します。", "減少する。"),
    ("減少します", "減少する"),
    ("失敗します。", "失敗する。"),
    ("失敗します", "失敗する"),
    ("終了します。", "終了する。"),
    ("終了します", "終了する"),
    ("解除します。", "解除する。"),
    ("解除します", "解除する"),
    ("破壊します。", "破壊する。"),
    ("破壊します", "破壊する"),
    ("変更します。", "変更する。"),
    ("変更します", "変更する"),
    ("追加します。", "追加する。"),
    ("追加します", "追加する"),
    ("軽減します。", "軽減する。"),
    ("軽減します", "軽減する"),
    ("無視します。", "無視する。"),
    ("無視します", "無視する"),
    ("持続します。", "持続する。"),
    ("持続します", "持続する"),
    ("発動します。", "発動する。"),
    ("発動します", "発動する"),
    ("与えます。", "与える。"),
    ("与えます", "与える"),
    ("吸収します。", "吸収する。"),
    ("吸収します", "吸収する"),
    ("引き継ぎます。", "引き継ぐ。"),
    ("引き継ぎます", "引き継ぐ"),
    ("入れ替わります。", "入れ替わる。"),
    ("入れ替わります", "入れ替わる"),
    ("します。", "する。"),
    ("します", "する"),
    ("されます。", "される。"),
    ("されます", "される"),
    ("なります。", "なる。"),
    ("なります", "なる"),
    ("あります。", "ある。"),
    ("あります", "ある"),
    ("コピーできません。", "コピーできない。"),
    ("コピーできません", "コピーできない"),
    ("使用できません。", "使用できない。"),
    ("使用できません", "使用できない"),
    ("できます。", "できる。"),
    ("できます", "できる"),
    ("受けません。", "受けない。"),
    ("受けません", "受けない"),
    ("選ばれません。", "選ばれない。"),
    ("選ばれません", "選ばれない"),
    ("ません。", "ない。"),
    ("ません", "ない"),
];
