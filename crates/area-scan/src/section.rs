//! Top-level section loop over `#KEYWORD` markers.
//!
//! Only OBJECTS is decoded; every other recognized section is skip-scanned
//! to the next marker. MOBILES needs its own skip because mobile records
//! use `#`-prefixed sub-blocks that are not section markers.

use area_types::ObjectRecord;
use log::{debug, warn};

use crate::objects::load_objects;
use crate::reader::AreaReader;

/// Words that end a MOBILES skip when found after a `#`.
const MOBILES_BOUNDARIES: &[&str] = &[
    "0", "OBJECTS", "ROOMS", "RESETS", "SHOPS", "MOBPROGS", "SPECIALS",
];

/// Run the section loop to `#$` or end of input, collecting decoded
/// objects. Unrecognized sections are logged and ignored; a missing `#`
/// ends the loop, and whatever was collected so far is returned.
pub fn parse_area(r: &mut AreaReader) -> Vec<ObjectRecord> {
    let mut objects = Vec::new();

    loop {
        match r.read_letter() {
            Some(b'#') => {}
            Some(other) => {
                warn!("section header: # not found, got '{}'", other as char);
                break;
            }
            None => {
                warn!("section header: # not found at end of input");
                break;
            }
        }

        let Some(word) = r.read_word() else {
            break;
        };
        let word = word.strip_prefix('#').unwrap_or(&word);
        debug!("section: {word}");

        if word.starts_with('$') {
            break;
        }
        match word {
            // no skip at all: the next marker follows directly
            "AREA" | "MOBOLD" => {}
            "AREADATA" | "HELPS" | "OBJOLD" | "RESETS" | "ROOMS" | "SHOPS" | "MOBPROGS"
            | "SPECIALS" => skip_section(r),
            "MOBILES" => skip_mobiles(r),
            "OBJECTS" => load_objects(r, &mut objects),
            other => warn!("unknown section: {other}"),
        }
    }

    objects
}

/// Scan forward to the next `#`, leaving it unconsumed.
fn skip_section(r: &mut AreaReader) {
    loop {
        match r.read_letter() {
            None => break,
            Some(b'#') => {
                r.unread(b'#');
                break;
            }
            Some(_) => {}
        }
    }
}

/// Scan forward to a `#` followed by one of the boundary words. Only the
/// `#` is pushed back; the consumed boundary word then surfaces in the
/// section loop as an ignorable empty "section".
fn skip_mobiles(r: &mut AreaReader) {
    loop {
        match r.read_letter() {
            None => break,
            Some(b'#') => {
                let Some(word) = r.read_word() else {
                    continue;
                };
                if MOBILES_BOUNDARIES.contains(&word.as_str()) {
                    r.unread(b'#');
                    break;
                }
            }
            Some(_) => {}
        }
    }
}
