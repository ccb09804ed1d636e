//! JSON emission for the decoded object list.
//!
//! Single pass, objects in list order (reverse of file order). Strings get
//! the seven JSON backslash escapes and nothing more; other bytes pass
//! through untouched. The `values` object shape mirrors the decoder's
//! item-type branch.

use std::fmt::Write;

use area_types::{
    AffectEntry, Area, FlagNamespace, ObjectRecord, weapon_flag_letter_name, weapon_type_name,
};

use crate::tables::{
    AFFECT2_FLAGS, AFFECT_FLAGS, EXTRA_FLAGS, IMMUNE_FLAGS, RESIST_FLAGS, SHIELD_FLAGS,
    VULN_FLAGS, WEAPON_FLAGS, WEAR_FLAGS, affect_location_name, bitfield_to_names,
    first_bit_name,
};

/// Escape `"`, `\`, backspace, form feed, newline, carriage return and tab.
pub fn escape_json(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Render the whole document: area placeholder plus the object array.
pub fn render_document(area: &Area, objects: &[ObjectRecord]) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str("  \"area\": {\n");
    let _ = writeln!(out, "    \"name\": \"{}\",", escape_json(&area.name));
    let _ = writeln!(out, "    \"file\": \"{}\",", escape_json(&area.file_name));
    let _ = writeln!(out, "    \"credits\": \"{}\",", escape_json(&area.credits));
    let _ = writeln!(out, "    \"builders\": \"{}\"", escape_json(&area.builders));
    out.push_str("  },\n");
    out.push_str("  \"objects\": [\n");

    let mut first = true;
    for obj in objects {
        if !first {
            out.push_str(",\n");
        }
        first = false;
        render_object(&mut out, obj);
    }

    out.push_str("\n  ]\n");
    out.push_str("}\n");
    out
}

fn render_object(out: &mut String, obj: &ObjectRecord) {
    out.push_str("  {\n");
    let _ = writeln!(out, "    \"vnum\": {},", obj.vnum);
    let _ = writeln!(out, "    \"name\": \"{}\",", escape_json(&obj.name));
    let _ = writeln!(out, "    \"type\": \"{}\",", obj.item_type.name());
    let _ = writeln!(out, "    \"level\": {},", obj.level);
    let _ = writeln!(
        out,
        "    \"wear_flags\": \"{}\",",
        bitfield_to_names(obj.wear_flags, WEAR_FLAGS)
    );
    let _ = writeln!(
        out,
        "    \"extra_flags\": \"{}\",",
        bitfield_to_names(obj.extra_flags, EXTRA_FLAGS)
    );
    let _ = writeln!(out, "    \"material\": \"{}\",", escape_json(&obj.material));
    let _ = writeln!(out, "    \"condition\": {},", obj.condition);
    let _ = writeln!(out, "    \"weight\": {},", obj.weight);
    let _ = writeln!(out, "    \"cost\": {},", obj.cost);
    let _ = writeln!(
        out,
        "    \"short_descr\": \"{}\",",
        escape_json(&obj.short_descr)
    );
    let _ = writeln!(
        out,
        "    \"description\": \"{}\",",
        escape_json(&obj.description)
    );

    out.push_str("    \"affects\": [\n");
    let mut first = true;
    for affect in &obj.affects {
        if !first {
            out.push_str(",\n");
        }
        first = false;
        render_affect(out, affect);
    }
    out.push_str("\n    ],\n");

    render_values(out, obj);
    out.push_str("  }");
}

/// `extra` is omitted, not null, when there is nothing to say.
fn render_affect(out: &mut String, affect: &AffectEntry) {
    out.push_str("      {\n");
    match affect {
        AffectEntry::Normal {
            location,
            modifier,
            spell,
        } => {
            out.push_str("        \"type\": \"normal\",\n");
            let _ = writeln!(
                out,
                "        \"location\": \"{}\",",
                affect_location_name(*location)
            );
            let _ = write!(out, "        \"modifier\": {modifier}");
            if let Some(spell) = spell.as_deref().filter(|s| !s.is_empty()) {
                let _ = write!(out, ", \"extra\": \"{}\"", escape_json(spell));
            }
        }
        AffectEntry::Flag {
            namespace,
            location,
            modifier,
            bitvector,
        } => {
            out.push_str("        \"type\": \"flag\",\n");
            let _ = writeln!(
                out,
                "        \"location\": \"F{}:{}\",",
                namespace.letter(),
                affect_location_name(*location)
            );
            let _ = write!(out, "        \"modifier\": {modifier}");
            let extra = flag_extra(*namespace, *bitvector);
            let _ = write!(out, ", \"extra\": \"{}\"", escape_json(&extra));
        }
    }
    out.push_str("\n      }");
}

fn flag_extra(namespace: FlagNamespace, bitvector: i64) -> String {
    match namespace {
        FlagNamespace::Affect => format!("affect:{}", first_bit_name(bitvector, AFFECT_FLAGS)),
        FlagNamespace::Affect2 => format!("affect2:{}", first_bit_name(bitvector, AFFECT2_FLAGS)),
        FlagNamespace::Immune => format!("immune:{}", first_bit_name(bitvector, IMMUNE_FLAGS)),
        FlagNamespace::Resist => format!("resist:{}", first_bit_name(bitvector, RESIST_FLAGS)),
        FlagNamespace::Shield => format!("shield:{}", first_bit_name(bitvector, SHIELD_FLAGS)),
        FlagNamespace::Vuln => format!("vuln:{}", first_bit_name(bitvector, VULN_FLAGS)),
        FlagNamespace::Weapon => format!("weapon:{}", first_bit_name(bitvector, WEAPON_FLAGS)),
        FlagNamespace::Other(_) => format!("bitvector:{bitvector}"),
    }
}

/// Value slots named per the same item-type branch the decoder used.
fn render_values(out: &mut String, obj: &ObjectRecord) {
    use area_types::ItemType;

    out.push_str("    \"values\": {\n");
    match obj.item_type {
        ItemType::Armor => {
            let _ = writeln!(out, "      \"ac_pierce\": {},", obj.values[0]);
            let _ = writeln!(out, "      \"ac_bash\": {},", obj.values[1]);
            let _ = writeln!(out, "      \"ac_slash\": {},", obj.values[2]);
            let _ = writeln!(out, "      \"ac_exotic\": {},", obj.values[3]);
            let _ = writeln!(out, "      \"v4\": {}", obj.values[4]);
        }
        ItemType::Weapon => {
            let _ = writeln!(
                out,
                "      \"weapon_type\": \"{}\",",
                weapon_type_name(obj.values[0])
            );
            let _ = writeln!(out, "      \"number_of_dice\": {},", obj.values[1]);
            let _ = writeln!(out, "      \"type_of_dice\": {},", obj.values[2]);
            let _ = writeln!(
                out,
                "      \"damage_type\": \"{}\",",
                escape_json(obj.damage_type.as_deref().unwrap_or("unknown"))
            );
            let _ = writeln!(
                out,
                "      \"flags\": {}",
                weapon_flag_array(obj.weapon_flags.as_deref())
            );
        }
        ItemType::Materia => {
            let _ = writeln!(out, "      \"charges\": {},", obj.values[0]);
            let _ = writeln!(
                out,
                "      \"spell\": \"{}\",",
                escape_json(obj.materia_spell.as_deref().unwrap_or(""))
            );
            let _ = writeln!(out, "      \"v2\": {},", obj.values[2]);
            let _ = writeln!(out, "      \"v3\": {},", obj.values[3]);
            let _ = writeln!(out, "      \"v4\": {}", obj.values[4]);
        }
        _ => {
            let _ = writeln!(out, "      \"v0\": {},", obj.values[0]);
            let _ = writeln!(out, "      \"v1\": {},", obj.values[1]);
            let _ = writeln!(out, "      \"v2\": {},", obj.values[2]);
            let _ = writeln!(out, "      \"v3\": {},", obj.values[3]);
            let _ = writeln!(out, "      \"v4\": {}", obj.values[4]);
        }
    }
    out.push_str("    }\n");
}

/// A weapon's trailing flag letters as a JSON string array.
fn weapon_flag_array(flags: Option<&str>) -> String {
    let Some(flags) = flags else {
        return "[]".to_string();
    };
    let mut out = String::from("[");
    let mut first = true;
    for letter in flags.chars() {
        if !first {
            out.push_str(", ");
        }
        first = false;
        out.push('"');
        out.push_str(weapon_flag_letter_name(letter));
        out.push('"');
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use area_types::ItemType;

    #[test]
    fn escape_plain_string_unchanged() {
        assert_eq!(escape_json("a sharp sword"), "a sharp sword");
    }

    #[test]
    fn escape_specials() {
        assert_eq!(escape_json("a\"b"), "a\\\"b");
        assert_eq!(escape_json("a\\b"), "a\\\\b");
        assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_json("\r\t\u{8}\u{c}"), "\\r\\t\\b\\f");
    }

    #[test]
    fn escape_passes_other_bytes_through() {
        assert_eq!(escape_json("café ~"), "café ~");
    }

    #[test]
    fn weapon_flag_arrays() {
        assert_eq!(weapon_flag_array(None), "[]");
        assert_eq!(weapon_flag_array(Some("A")), "[\"flaming\"]");
        assert_eq!(
            weapon_flag_array(Some("ABQ")),
            "[\"flaming\", \"frost\", \"unknown\"]"
        );
    }

    #[test]
    fn empty_document_parses() {
        let area = Area::placeholder("test.are");
        let doc = render_document(&area, &[]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        assert_eq!(parsed["area"]["name"], "Unknown");
        assert_eq!(parsed["area"]["file"], "test.are");
        assert_eq!(parsed["objects"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn generic_object_values_shape() {
        let mut obj = ObjectRecord::new(7);
        obj.name = "thing".into();
        obj.values = [1, 2, 3, 4, 5];
        let area = Area::placeholder("t.are");
        let doc = render_document(&area, &[obj]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        let values = &parsed["objects"][0]["values"];
        assert_eq!(values["v0"], 1);
        assert_eq!(values["v4"], 5);
        assert_eq!(parsed["objects"][0]["type"], "unknown");
    }

    #[test]
    fn armor_values_shape() {
        let mut obj = ObjectRecord::new(8);
        obj.item_type = ItemType::Armor;
        obj.values = [5, 6, 7, 8, 0];
        let area = Area::placeholder("t.are");
        let doc = render_document(&area, &[obj]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        let values = &parsed["objects"][0]["values"];
        assert_eq!(values["ac_pierce"], 5);
        assert_eq!(values["ac_bash"], 6);
        assert_eq!(values["ac_slash"], 7);
        assert_eq!(values["ac_exotic"], 8);
        assert_eq!(values["v4"], 0);
    }

    #[test]
    fn flag_names_joined_or_none() {
        let mut obj = ObjectRecord::new(9);
        obj.extra_flags = 1 | 2;
        obj.wear_flags = 0;
        let area = Area::placeholder("t.are");
        let doc = render_document(&area, &[obj]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        assert_eq!(parsed["objects"][0]["extra_flags"], "glow hum");
        assert_eq!(parsed["objects"][0]["wear_flags"], "none");
    }

    #[test]
    fn normal_affect_omits_empty_extra() {
        let mut obj = ObjectRecord::new(10);
        obj.affects.push(AffectEntry::Normal {
            location: 18,
            modifier: 2,
            spell: None,
        });
        let area = Area::placeholder("t.are");
        let doc = render_document(&area, &[obj]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        let affect = &parsed["objects"][0]["affects"][0];
        assert_eq!(affect["type"], "normal");
        assert_eq!(affect["location"], "hitroll");
        assert_eq!(affect["modifier"], 2);
        assert!(affect.get("extra").is_none());
    }

    #[test]
    fn flag_affect_renders_namespace() {
        let mut obj = ObjectRecord::new(11);
        obj.affects.push(AffectEntry::Flag {
            namespace: FlagNamespace::Shield,
            location: 0,
            modifier: 0,
            bitvector: 2,
        });
        obj.affects.push(AffectEntry::Flag {
            namespace: FlagNamespace::Other('X'),
            location: 0,
            modifier: 0,
            bitvector: 12,
        });
        let area = Area::placeholder("t.are");
        let doc = render_document(&area, &[obj]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        let affects = &parsed["objects"][0]["affects"];
        assert_eq!(affects[0]["type"], "flag");
        assert_eq!(affects[0]["location"], "FS:none");
        assert_eq!(affects[0]["extra"], "shield:sanctuary");
        assert_eq!(affects[1]["location"], "FX:none");
        assert_eq!(affects[1]["extra"], "bitvector:12");
    }

    #[test]
    fn spell_affect_extra() {
        let mut obj = ObjectRecord::new(12);
        obj.affects.push(AffectEntry::Normal {
            location: 26,
            modifier: 1,
            spell: Some("sanctuary".into()),
        });
        let area = Area::placeholder("t.are");
        let doc = render_document(&area, &[obj]);
        let parsed: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
        let affect = &parsed["objects"][0]["affects"][0];
        assert_eq!(affect["location"], "spellcast");
        assert_eq!(affect["extra"], "sanctuary");
    }
}
