pub mod condition;
pub mod item_type;
pub mod object;
pub mod spells;
pub mod weapon;

pub use condition::condition_rating;
pub use item_type::ItemType;
pub use object::{AffectEntry, Area, ExtraDescription, FlagNamespace, ObjectRecord};
pub use spells::{SPELLS, spell_id};
pub use weapon::{WeaponType, damage_type_name, weapon_flag_letter_name, weapon_type_name};
