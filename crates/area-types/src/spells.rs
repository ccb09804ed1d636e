//! Spell name to skill-number mapping from the MUD's `const.c` skill table.

/// Spell names in skill-number order; index in this table is the id.
pub const SPELLS: &[&str] = &[
    "reserved",
    "hallucination",
    "acid blast",
    "armor",
    "bless",
    "blindness",
    "burning hands",
    "call lightning",
    "calm",
    "cancellation",
    "cause critical",
    "cause discord",
    "cause light",
    "cause serious",
    "chain lightning",
    "change sex",
    "charm person",
    "chill touch",
    "colour spray",
    "continual light",
    "control weather",
    "call demon",
    "create golem",
    "guardian spirit",
    "call servant",
    "create food",
    "create rose",
    "create spring",
    "create water",
    "cure blindness",
    "cure critical",
    "cure disease",
    "psychic healing",
    "poke",
    "crush",
    "tickle",
    "essence",
    "prayer",
    "cure light",
    "cure poison",
    "cure serious",
    "curse",
    "demonfire",
    "hellfire",
    "permanency",
    "fireshield",
    "detect weakness",
    "detect evil",
    "detect good",
    "detect hidden",
    "detect invis",
    "detect magic",
    "detect poison",
    "dispel evil",
    "dispel good",
    "dispel magic",
    "fissure",
    "earthquake",
    "animate dead",
    "enchant armor",
    "empower armor",
    "dark ritual",
    "brand",
    "empower weapon",
    "enchant weapon",
    "disjunction",
    "safe haven",
    "alternate dimension",
    "hold person",
    "entangle",
    "splinter storm",
    "energy drain",
    "magic drain",
    "faerie fire",
    "faerie fog",
    "farsight",
    "fireball",
    "mental blast",
    "mental disruption",
    "life drain",
    "energy syphon",
    "meteor",
    "fireproof",
    "flamestrike",
    "fly",
    "floating disc",
    "frenzy",
    "divine favor",
    "divine intervention",
    "gate",
    "giant strength",
    "harm",
    "haste",
    "heal",
    "heat metal",
    "holy word",
    "divine power",
    "wrath",
    "identify",
    "infravision",
    "invisibility",
    "know alignment",
    "lightning bolt",
    "remote view",
    "raven spy",
    "locate object",
    "magic missile",
    "mass healing",
    "ice storm",
    "mass invis",
    "nexus",
    "pass door",
    "plague",
    "poison",
    "portal",
    "protection evil",
    "protection good",
    "ray of truth",
    "recharge",
    "refresh",
    "remove curse",
    "telepathy",
    "life stealer",
    "sanctuary",
    "shapeshift",
    "living armor",
    "trembling earth",
    "planeshift",
    "protective sphere",
    "bark skin",
    "talon",
    "shield",
    "shocking grasp",
    "sleep",
    "slow",
    "stone skin",
    "summon",
    "teleport",
    "ventriloquate",
    "weaken",
    "word of recall",
    "mallocs empower",
    "caines maddness",
    "dinchaks power",
    "acid breath",
    "fire breath",
    "frost breath",
    "gas breath",
    "lightning breath",
    "general purpose",
    "high explosive",
    "imprint",
    "avalons protection",
    "psychic influence",
    "spectral blade",
];

/// Skill number for a spell name. Unknown names (and "reserved" itself)
/// resolve to 0.
pub fn spell_id(name: &str) -> i64 {
    SPELLS
        .iter()
        .position(|&s| s == name)
        .map(|i| i as i64)
        .unwrap_or(0)
}
