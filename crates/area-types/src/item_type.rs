use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

/// Item types from `merc.h` (ITEM_* constants).
///
/// The numeric codes are sparse: 14, 16, 21 and 42-45 were retired from
/// the original table and must stay unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum ItemType {
    Unknown = 0,
    Light = 1,
    Scroll = 2,
    Wand = 3,
    Staff = 4,
    Weapon = 5,
    Shard = 6,
    Ticket = 7,
    Treasure = 8,
    Armor = 9,
    Potion = 10,
    Clothing = 11,
    Furniture = 12,
    Trash = 13,
    Container = 15,
    DrinkCon = 17,
    Key = 18,
    Food = 19,
    Money = 20,
    Boat = 22,
    CorpseNpc = 23,
    CorpsePc = 24,
    Fountain = 25,
    Pill = 26,
    Protect = 27,
    Map = 28,
    Portal = 29,
    WarpStone = 30,
    RoomKey = 31,
    Gem = 32,
    Jewelry = 33,
    Jukebox = 34,
    Quiver = 35,
    Arrow = 36,
    Poison = 37,
    Disjunction = 38,
    SafeHaven = 39,
    Materia = 40,
    Remote = 41,
    Scryer = 46,
    Exit = 47,
    Minigame = 48,
}

impl ItemType {
    /// Resolve the lowercase keyword used in area files. Keywords not in
    /// the table decode as [`ItemType::Unknown`], never an error.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "light" => Self::Light,
            "scroll" => Self::Scroll,
            "wand" => Self::Wand,
            "staff" => Self::Staff,
            "weapon" => Self::Weapon,
            "shard" => Self::Shard,
            "ticket" => Self::Ticket,
            "treasure" => Self::Treasure,
            "armor" => Self::Armor,
            "potion" => Self::Potion,
            "clothing" => Self::Clothing,
            "furniture" => Self::Furniture,
            "trash" => Self::Trash,
            "container" => Self::Container,
            "drink_con" => Self::DrinkCon,
            "key" => Self::Key,
            "food" => Self::Food,
            "money" => Self::Money,
            "boat" => Self::Boat,
            "corpse_npc" => Self::CorpseNpc,
            "corpse_pc" => Self::CorpsePc,
            "fountain" => Self::Fountain,
            "pill" => Self::Pill,
            "protect" => Self::Protect,
            "map" => Self::Map,
            "portal" => Self::Portal,
            "warp_stone" => Self::WarpStone,
            "room_key" => Self::RoomKey,
            "gem" => Self::Gem,
            "jewelry" => Self::Jewelry,
            "jukebox" => Self::Jukebox,
            "quiver" => Self::Quiver,
            "arrow" => Self::Arrow,
            "poison" => Self::Poison,
            "disjunction" => Self::Disjunction,
            "safe_haven" => Self::SafeHaven,
            "materia" => Self::Materia,
            "remote" => Self::Remote,
            "scryer" => Self::Scryer,
            "exit" => Self::Exit,
            "minigame" => Self::Minigame,
            _ => Self::Unknown,
        }
    }

    /// Keyword rendered into the JSON `type` field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Light => "light",
            Self::Scroll => "scroll",
            Self::Wand => "wand",
            Self::Staff => "staff",
            Self::Weapon => "weapon",
            Self::Shard => "shard",
            Self::Ticket => "ticket",
            Self::Treasure => "treasure",
            Self::Armor => "armor",
            Self::Potion => "potion",
            Self::Clothing => "clothing",
            Self::Furniture => "furniture",
            Self::Trash => "trash",
            Self::Container => "container",
            Self::DrinkCon => "drink_con",
            Self::Key => "key",
            Self::Food => "food",
            Self::Money => "money",
            Self::Boat => "boat",
            Self::CorpseNpc => "corpse_npc",
            Self::CorpsePc => "corpse_pc",
            Self::Fountain => "fountain",
            Self::Pill => "pill",
            Self::Protect => "protect",
            Self::Map => "map",
            Self::Portal => "portal",
            Self::WarpStone => "warp_stone",
            Self::RoomKey => "room_key",
            Self::Gem => "gem",
            Self::Jewelry => "jewelry",
            Self::Jukebox => "jukebox",
            Self::Quiver => "quiver",
            Self::Arrow => "arrow",
            Self::Poison => "poison",
            Self::Disjunction => "disjunction",
            Self::SafeHaven => "safe_haven",
            Self::Materia => "materia",
            Self::Remote => "remote",
            Self::Scryer => "scryer",
            Self::Exit => "exit",
            Self::Minigame => "minigame",
        }
    }
}
