//! Decoder for `#<vnum>` object blocks in the OBJECTS section.
//!
//! Field order and the per-item-type value encodings follow `load_objects`
//! in the MUD's `db.c`. The decoder never fails: malformed fields decode
//! to their default values and the scan keeps moving.

use area_types::{
    AffectEntry, ExtraDescription, FlagNamespace, ItemType, ObjectRecord, WeaponType,
    condition_rating,
};
use log::{debug, trace, warn};

use crate::reader::AreaReader;

/// Read object blocks until the `#0` sentinel or a malformed header.
///
/// Each decoded object is prepended, so the list ends up in reverse file
/// order; downstream output depends on that ordering.
pub fn load_objects(r: &mut AreaReader, objects: &mut Vec<ObjectRecord>) {
    loop {
        let letter = match r.read_letter() {
            Some(b) => b,
            None => break,
        };
        if letter != b'#' {
            warn!("load_objects: # not found, got '{}'", letter as char);
            break;
        }

        let vnum = r.read_number();
        debug!("loading object vnum {vnum}");
        if vnum == 0 {
            skip_to_section_end(r);
            break;
        }

        let obj = read_object(r, vnum);
        objects.insert(0, obj);
    }
}

/// After the `#0` sentinel, consume forward past `#`-prefixed tokens until
/// a boundary word that is literally `"0"`.
fn skip_to_section_end(r: &mut AreaReader) {
    loop {
        let Some(c) = r.read_letter() else {
            break;
        };
        if c == b'#' {
            match r.read_word() {
                Some(word) if word == "0" => break,
                Some(_) => {}
                None => {}
            }
        }
    }
}

fn read_object(r: &mut AreaReader, vnum: i64) -> ObjectRecord {
    let mut obj = ObjectRecord::new(vnum);

    obj.name = r.read_string();
    trace!("name: {}", obj.name);
    obj.short_descr = r.read_string();
    trace!("short_descr: {}", obj.short_descr);
    obj.description = r.read_string();
    trace!("description: {}", obj.description);
    obj.material = r.read_string();
    trace!("material: {}", obj.material);

    let type_word = r.read_word().unwrap_or_default();
    obj.item_type = ItemType::from_keyword(&type_word);
    trace!("item type '{}' -> {:?}", type_word, obj.item_type);

    obj.extra_flags = r.read_flag();
    trace!("extra_flags: {}", obj.extra_flags);
    obj.wear_flags = r.read_flag();
    trace!("wear_flags: {}", obj.wear_flags);

    read_values(r, &mut obj);
    trace!("values: {:?}", obj.values);

    obj.level = r.read_number();
    obj.weight = r.read_number();
    obj.cost = r.read_number();
    trace!("level {} weight {} cost {}", obj.level, obj.weight, obj.cost);

    let condition_letter = r.read_letter().unwrap_or(0);
    obj.condition = condition_rating(condition_letter as char);
    trace!("condition '{}' -> {}", condition_letter as char, obj.condition);

    read_affects(r, &mut obj);

    obj
}

/// The five value slots are overloaded per item type: materia carries a
/// plain charge count plus an out-of-band quoted spell name, weapons a
/// keyword-coded class and dice, armor letter-flag-encoded AC bonuses, and
/// everything else five flag-encoded words. Swapping an encoding produces
/// silently wrong numbers, so the branch set is exact.
fn read_values(r: &mut AreaReader, obj: &mut ObjectRecord) {
    match obj.item_type {
        ItemType::Materia => {
            obj.values[0] = r.read_number();
            obj.materia_spell = Some(read_materia_spell(r));
            trace!("materia spell: {:?}", obj.materia_spell);
            obj.values[1] = 0;
            obj.values[2] = r.read_number();
            obj.values[3] = r.read_number();
            obj.values[4] = r.read_number();
        }
        ItemType::Weapon => {
            let weapon_word = r.read_word().unwrap_or_default();
            obj.values[0] = WeaponType::from_keyword(&weapon_word) as i64;
            obj.values[1] = r.read_number();
            obj.values[2] = r.read_number();
            obj.damage_type = r.read_word();
            obj.weapon_flags = r.read_word();
            obj.values[3] = 0;
            obj.values[4] = 0;
        }
        ItemType::Armor => {
            // ac_pierce, ac_bash, ac_slash, ac_exotic, unused
            obj.values[0] = r.read_flag();
            obj.values[1] = r.read_flag();
            obj.values[2] = r.read_flag();
            obj.values[3] = r.read_flag();
            obj.values[4] = r.read_flag();
        }
        _ => {
            for slot in &mut obj.values {
                *slot = r.read_flag();
            }
        }
    }
}

/// Spell name between single quotes. A non-quote introducer is consumed
/// and yields the empty name.
fn read_materia_spell(r: &mut AreaReader) -> String {
    match r.read_letter() {
        Some(b'\'') => r.read_quoted_tail(),
        _ => String::new(),
    }
}

/// The trailing sub-record loop: `A` affects, `F` flag affects, `E` extra
/// descriptions, plus the discarded `N`/`R`/`S` stubs. `#` and `0` end the
/// object; any other letter skips its line (forward compatibility).
fn read_affects(r: &mut AreaReader, obj: &mut ObjectRecord) {
    loop {
        let Some(letter) = r.read_letter() else {
            break;
        };
        match letter {
            b'A' => {
                let location = r.read_number();
                let modifier = r.read_number();
                trace!("affect: location={location} modifier={modifier}");
                let spell = if location == 26 || location == 27 {
                    read_optional_spell(r)
                } else {
                    None
                };
                obj.affects.push(AffectEntry::Normal {
                    location,
                    modifier,
                    spell,
                });
            }
            b'F' => {
                let where_letter = r.read_letter().unwrap_or(0) as char;
                let location = r.read_number();
                let modifier = r.read_number();
                let bitvector = r.read_flag();
                trace!(
                    "flag affect: where={where_letter} location={location} \
                     modifier={modifier} bitvector={bitvector}"
                );
                obj.affects.push(AffectEntry::Flag {
                    namespace: FlagNamespace::from_letter(where_letter),
                    location,
                    modifier,
                    bitvector,
                });
            }
            b'E' => {
                let keyword = r.read_string();
                let description = r.read_string();
                trace!("extra description: {keyword}");
                // prepended: final order is reverse of file order
                obj.extra_descriptions.insert(
                    0,
                    ExtraDescription {
                        keyword,
                        description,
                    },
                );
            }
            b'N' => {
                // standalone spell name, read and discarded
                let spell_name = r.read_string();
                trace!("discarding spell name: {spell_name}");
            }
            b'R' => {
                // room-affect stub
                let _ = r.read_number();
                let _ = r.read_number();
            }
            b'S' => {
                // shield-affect stub
                let _ = r.read_number();
                let _ = r.read_number();
                let _ = r.read_word();
            }
            b'#' | b'0' => {
                r.unread(letter);
                break;
            }
            other => {
                trace!("unknown sub-record '{}', skipping line", other as char);
                r.read_to_eol();
            }
        }
    }
}

/// Peek for an `N`-tagged spell name after a spell-location affect; push
/// the letter back if it introduces something else.
fn read_optional_spell(r: &mut AreaReader) -> Option<String> {
    match r.read_letter() {
        Some(b'N') => Some(r.read_string()),
        Some(other) => {
            r.unread(other);
            None
        }
        None => None,
    }
}
