use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

/// Weapon classes from `merc.h` (WEAPON_* constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum WeaponType {
    Exotic = 0,
    Sword = 1,
    Dagger = 2,
    Spear = 3,
    Mace = 4,
    Axe = 5,
    Flail = 6,
    Whip = 7,
    Polearm = 8,
    Bow = 9,
}

impl WeaponType {
    /// Resolve the weapon-class keyword from a weapon's value[0] field.
    /// "staff" is an alias for spear; anything unrecognized is exotic.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "exotic" => Self::Exotic,
            "sword" => Self::Sword,
            "dagger" => Self::Dagger,
            "spear" | "staff" => Self::Spear,
            "mace" => Self::Mace,
            "axe" => Self::Axe,
            "flail" => Self::Flail,
            "whip" => Self::Whip,
            "polearm" => Self::Polearm,
            "bow" => Self::Bow,
            _ => Self::Exotic,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Exotic => "exotic",
            Self::Sword => "sword",
            Self::Dagger => "dagger",
            Self::Spear => "spear",
            Self::Mace => "mace",
            Self::Axe => "axe",
            Self::Flail => "flail",
            Self::Whip => "whip",
            Self::Polearm => "polearm",
            Self::Bow => "bow",
        }
    }
}

/// Name for a stored weapon-class code, for rendering. Codes outside the
/// table resolve to "unknown".
pub fn weapon_type_name(code: i64) -> &'static str {
    u8::try_from(code)
        .ok()
        .and_then(WeaponType::from_repr)
        .map_or("unknown", WeaponType::name)
}

/// Damage-verb names from `attack_table` in `const.c`, indexed by the
/// numeric damage code.
pub fn damage_type_name(code: i64) -> &'static str {
    match code {
        0 => "none",
        1 => "slice",
        2 => "stab",
        3 => "slash",
        4 => "whip",
        5 => "claw",
        6 => "blast",
        7 => "pound",
        8 => "crush",
        9 => "grep",
        10 => "bite",
        11 => "pierce",
        12 => "suction",
        13 => "beating",
        14 => "digestion",
        15 => "charge",
        16 => "slap",
        17 => "punch",
        18 => "wrath",
        19 => "magic",
        20 => "divine",
        21 => "kiss",
        22 => "cleave",
        23 => "scratch",
        24 => "peck",
        25 => "peckb",
        26 => "chop",
        27 => "sting",
        28 => "smash",
        29 => "shbite",
        30 => "flbite",
        31 => "frbite",
        32 => "acbite",
        33 => "chomp",
        34 => "drain",
        35 => "thrust",
        36 => "slime",
        37 => "shock",
        38 => "thwack",
        39 => "flame",
        40 => "chill",
        41 => "poison",
        42 => "pulse",
        43 => "bleed",
        _ => "unknown",
    }
}

/// Name for one weapon-flag letter from a weapon's trailing flag string.
/// Note the gap at J and the divergence from the F-record weapon table
/// (H here is "poison", there "poisoned").
pub fn weapon_flag_letter_name(letter: char) -> &'static str {
    match letter {
        'A' => "flaming",
        'B' => "frost",
        'C' => "vampiric",
        'D' => "sharp",
        'E' => "vorpal",
        'F' => "two_hands",
        'G' => "shocking",
        'H' => "poison",
        'I' => "acid",
        'K' => "purify",
        _ => "unknown",
    }
}
