//! Flag-name tables from `tables.c`/`merc.h`, in bit order.
//!
//! Order is load-bearing: index in each table is the bit position the
//! name belongs to, so entries must be transcribed exactly, retired
//! "unused" slots included.

/// Wear flags, bits A..Z then aa..dd.
pub const WEAR_FLAGS: &[&str] = &[
    "take",
    "finger",
    "neck",
    "body",
    "head",
    "legs",
    "feet",
    "hands",
    "arms",
    "shield",
    "about",
    "waist",
    "wrist",
    "wield",
    "hold",
    "nosac",
    "wearfloat",
    "face",
    "lodge_leg",
    "lodge_arm",
    "lodge_rib",
    "materia",
    "nose",
    "belly",
    "ears",
    "tongue",
    "tattoo",
    "gadget",
    "grimoire",
    "familiar",
];

/// Extra flags (ITEM_* in `merc.h`).
pub const EXTRA_FLAGS: &[&str] = &[
    "glow",
    "hum",
    "dark",
    "lock",
    "evil",
    "invis",
    "magic",
    "nodrop",
    "bless",
    "antigood",
    "antievil",
    "antineutral",
    "noremove",
    "inventory",
    "nopurge",
    "rotdeath",
    "visdeath",
    "noclone",
    "nonmetal",
    "nolocate",
    "meltdrop",
    "hadtimer",
    "sellextract",
    "clan",
    "burnproof",
    "nouncurse",
    "sticky",
    "lodged",
    "trap",
    "no_restring",
    "quest",
    "nogive",
];

/// Affect locations (APPLY_* in `merc.h`), indexed directly.
pub const AFFECT_LOCATIONS: &[&str] = &[
    "none",
    "strength",
    "dexterity",
    "intelligence",
    "wisdom",
    "constitution",
    "sex",
    "class",
    "level",
    "age",
    "height",
    "weight",
    "mana",
    "hp",
    "move",
    "gold",
    "experience",
    "ac",
    "hitroll",
    "damroll",
    "saves",
    "savingrod",
    "savingpetri",
    "savingbreath",
    "savingspell",
    "spellaffect",
    "spellcast",
    "resistance",
    "critchance",
    "critdamage",
    "recuperation",
    "concentration",
    "prosperity",
    "endurance",
    "penetration",
    "alacrity",
    "insight",
    "celerity",
    "potency",
    "savingpara",
    "bounty",
];

pub const SHIELD_FLAGS: &[&str] = &[
    "living_armor",
    "sanctuary",
    "invisible",
    "protect_evil",
    "protect_good",
    "planeshift",
    "fireshield",
    "pass_door",
    "protect_voodoo",
    "iceshield",
    "lightningshield",
    "acidshield",
];

pub const AFFECT_FLAGS: &[&str] = &[
    "blind",
    "detect_evil",
    "detect_invis",
    "detect_magic",
    "detect_hidden",
    "detect_good",
    "unused_1",
    "unused_h",
    "faerie_fire",
    "infrared",
    "curse",
    "resistance",
    "poison",
    "unused_2",
    "unused_3",
    "sneak",
    "hide",
    "sleep",
    "charm",
    "flying",
    "unused_4",
    "haste",
    "calm",
    "plague",
    "weaken",
    "dark_vision",
    "berserk",
    "swim",
    "regeneration",
    "slow",
    "drained",
];

pub const AFFECT2_FLAGS: &[&str] = &[
    "shapeshift",
    "unused_1",
    "telepathy",
    "life_stealer",
    "unused_e",
    "lsd",
    "hold_person",
    "unused_2",
    "divine_intervention",
    "unused_3",
    "mental_disruption",
    "talon",
    "kamikaze",
    "spiritlink",
    "unused_4",
    "unused_5",
    "unused_6",
    "unused_7",
    "unused_8",
    "unused_9",
    "unused_10",
    "unused_11",
    "spectral_blade",
    "unused_12",
    "unused_13",
    "unused_14",
    "focus_chi",
];

pub const IMMUNE_FLAGS: &[&str] = &[
    "summon",
    "charm",
    "magic",
    "weapon",
    "bash",
    "pierce",
    "slash",
    "fire",
    "cold",
    "lightning",
    "acid",
    "poison",
    "negative",
    "holy",
    "energy",
    "mental",
    "disease",
    "drowning",
    "light",
    "sound",
    "wood",
    "silver",
    "iron",
];

// IMM/RES/VULN share one bit layout but are distinct namespaces.
pub const RESIST_FLAGS: &[&str] = IMMUNE_FLAGS;
pub const VULN_FLAGS: &[&str] = IMMUNE_FLAGS;

/// Weapon flags as used by `F W` records ("poisoned", not the render-time
/// letter table's "poison").
pub const WEAPON_FLAGS: &[&str] = &[
    "flaming",
    "frost",
    "vampiric",
    "sharp",
    "vorpal",
    "two_hands",
    "shocking",
    "poisoned",
];

/// Name every set bit, ascending, space-joined; `"none"` when no bit in
/// the table's range is set.
pub fn bitfield_to_names(bits: i64, table: &[&'static str]) -> String {
    let mut names = Vec::new();
    for (i, name) in table.iter().enumerate() {
        if bits & (1i64 << i) != 0 {
            names.push(*name);
        }
    }
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" ")
    }
}

/// Name of the lowest set bit only. `F` records carry one flag per
/// sub-record by construction, so this intentionally does not enumerate;
/// anything outside the table is `"unknown"`.
pub fn first_bit_name(bits: i64, table: &[&'static str]) -> &'static str {
    for (i, name) in table.iter().enumerate() {
        if bits & (1i64 << i) != 0 {
            return name;
        }
    }
    "unknown"
}

/// APPLY_* location name; out-of-range indices are `"unknown"`.
pub fn affect_location_name(location: i64) -> &'static str {
    usize::try_from(location)
        .ok()
        .and_then(|i| AFFECT_LOCATIONS.get(i).copied())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(WEAR_FLAGS.len(), 30);
        assert_eq!(EXTRA_FLAGS.len(), 32);
        assert_eq!(AFFECT_LOCATIONS.len(), 41);
        assert_eq!(SHIELD_FLAGS.len(), 12);
        assert_eq!(AFFECT_FLAGS.len(), 31);
        assert_eq!(AFFECT2_FLAGS.len(), 27);
        assert_eq!(IMMUNE_FLAGS.len(), 23);
        assert_eq!(RESIST_FLAGS.len(), 23);
        assert_eq!(VULN_FLAGS.len(), 23);
        assert_eq!(WEAPON_FLAGS.len(), 8);
    }

    #[test]
    fn bit_positions_spot_check() {
        assert_eq!(WEAR_FLAGS[0], "take");
        assert_eq!(WEAR_FLAGS[13], "wield");
        assert_eq!(WEAR_FLAGS[29], "familiar");
        assert_eq!(EXTRA_FLAGS[0], "glow");
        assert_eq!(EXTRA_FLAGS[31], "nogive");
        assert_eq!(AFFECT_LOCATIONS[0], "none");
        assert_eq!(AFFECT_LOCATIONS[25], "spellaffect");
        assert_eq!(AFFECT_LOCATIONS[26], "spellcast");
        assert_eq!(AFFECT_LOCATIONS[40], "bounty");
    }

    #[test]
    fn bitfield_none() {
        assert_eq!(bitfield_to_names(0, WEAR_FLAGS), "none");
    }

    #[test]
    fn bitfield_single_bit() {
        assert_eq!(bitfield_to_names(1, EXTRA_FLAGS), "glow");
        assert_eq!(bitfield_to_names(1 << 13, WEAR_FLAGS), "wield");
    }

    #[test]
    fn bitfield_ascending_join() {
        // bits 0, 1, 13 in one word, ascending order regardless of value
        assert_eq!(
            bitfield_to_names(1 | 2 | (1 << 13), WEAR_FLAGS),
            "take finger wield"
        );
    }

    #[test]
    fn bitfield_ignores_bits_past_table() {
        assert_eq!(bitfield_to_names(1i64 << 40, WEAR_FLAGS), "none");
    }

    #[test]
    fn first_bit_is_single_winner() {
        // both sanctuary (bit 1) and pass_door (bit 7) set: lowest wins
        assert_eq!(first_bit_name(2 | 128, SHIELD_FLAGS), "sanctuary");
        assert_eq!(first_bit_name(0, SHIELD_FLAGS), "unknown");
        assert_eq!(first_bit_name(1i64 << 60, AFFECT_FLAGS), "unknown");
    }

    #[test]
    fn weapon_record_table_spells_poisoned() {
        assert_eq!(first_bit_name(128, WEAPON_FLAGS), "poisoned");
    }

    #[test]
    fn location_names() {
        assert_eq!(affect_location_name(0), "none");
        assert_eq!(affect_location_name(13), "hp");
        assert_eq!(affect_location_name(18), "hitroll");
        assert_eq!(affect_location_name(41), "unknown");
        assert_eq!(affect_location_name(-1), "unknown");
    }
}
