use serde::Serialize;

use crate::item_type::ItemType;

/// Area-level metadata. Only the source file name is real; the rest is a
/// fixed placeholder until AREADATA parsing lands.
#[derive(Debug, Clone, Serialize)]
pub struct Area {
    pub name: String,
    pub file_name: String,
    pub credits: String,
    pub builders: String,
}

impl Area {
    pub fn placeholder(file_name: &str) -> Self {
        Self {
            name: "Unknown".to_string(),
            file_name: file_name.to_string(),
            credits: "Unknown".to_string(),
            builders: "Unknown".to_string(),
        }
    }
}

/// Namespace selector letter of an `F` (flag affect) sub-record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlagNamespace {
    Affect,
    Affect2,
    Immune,
    Resist,
    Shield,
    Vuln,
    Weapon,
    /// Anything else; rendered as a raw bitvector.
    Other(char),
}

impl FlagNamespace {
    pub fn from_letter(letter: char) -> Self {
        match letter {
            'A' => Self::Affect,
            'B' => Self::Affect2,
            'I' => Self::Immune,
            'R' => Self::Resist,
            'S' => Self::Shield,
            'V' => Self::Vuln,
            'W' => Self::Weapon,
            other => Self::Other(other),
        }
    }

    /// The selector letter as it appeared in the file.
    pub fn letter(self) -> char {
        match self {
            Self::Affect => 'A',
            Self::Affect2 => 'B',
            Self::Immune => 'I',
            Self::Resist => 'R',
            Self::Shield => 'S',
            Self::Vuln => 'V',
            Self::Weapon => 'W',
            Self::Other(c) => c,
        }
    }
}

/// One affect sub-record attached to an object.
#[derive(Debug, Clone, Serialize)]
pub enum AffectEntry {
    /// Plain `A` record. `spell` is only present when the location is
    /// spellaffect (26) or spellcast (27) and an `N` record follows.
    Normal {
        location: i64,
        modifier: i64,
        spell: Option<String>,
    },
    /// `F` record: a namespaced flag grant.
    Flag {
        namespace: FlagNamespace,
        location: i64,
        modifier: i64,
        bitvector: i64,
    },
}

/// One `E` sub-record: a (keyword, description) pair.
#[derive(Debug, Clone, Serialize)]
pub struct ExtraDescription {
    pub keyword: String,
    pub description: String,
}

/// One decoded `#<vnum>` object block from the OBJECTS section.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectRecord {
    pub vnum: i64,
    pub name: String,
    pub short_descr: String,
    pub description: String,
    pub material: String,
    pub item_type: ItemType,
    pub extra_flags: i64,
    pub wear_flags: i64,
    /// Five generic value slots; meaning depends on `item_type`.
    pub values: [i64; 5],
    pub level: i64,
    pub weight: i64,
    pub cost: i64,
    pub condition: i64,
    /// Quote-delimited spell name, materia items only.
    pub materia_spell: Option<String>,
    /// Raw damage-verb token, weapon items only.
    pub damage_type: Option<String>,
    /// Raw flag-letter string, weapon items only.
    pub weapon_flags: Option<String>,
    /// File order.
    pub affects: Vec<AffectEntry>,
    /// Reverse of file order (records are prepended as read).
    pub extra_descriptions: Vec<ExtraDescription>,
}

impl ObjectRecord {
    pub fn new(vnum: i64) -> Self {
        Self {
            vnum,
            name: String::new(),
            short_descr: String::new(),
            description: String::new(),
            material: String::new(),
            item_type: ItemType::Unknown,
            extra_flags: 0,
            wear_flags: 0,
            values: [0; 5],
            level: 0,
            weight: 0,
            cost: 0,
            condition: 100,
            materia_spell: None,
            damage_type: None,
            weapon_flags: None,
            affects: Vec::new(),
            extra_descriptions: Vec::new(),
        }
    }
}
