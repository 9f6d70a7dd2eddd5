use crate::schema::Schema;
use crate::statics;
use crate::value::CdValue;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Stable identity of one top-level object inside a loaded file. Handed out
/// by the store at parse time and never reused, so deletion can target the
/// exact object even when a sibling has identical content.
pub type EntryId = u64;

/// A schema-bound JSON object plus its originating file. The store owns the
/// actual field map; this is a cheap handle used by indexes and the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub entry_id: EntryId,
    pub schema_key: String,
    pub discriminator: String,
    pub file_path: PathBuf,
}

/// Identifier of a record: the schema's declared id field, falling back to
/// `id`, `ident`, `abstract` for legacy content. Empty when none is present.
pub fn record_ident(schema: &Schema, fields: &IndexMap<String, CdValue>) -> String {
    if let Some(value) = fields.get(schema.id_field.as_str()) {
        return value.to_display_string();
    }
    for key in statics::ID_FALLBACKS {
        if let Some(value) = fields.get(key) {
            return value.to_display_string();
        }
    }
    String::new()
}

/// Human-facing name of a record: the schema's display field, unwrapping a
/// translation object to its `str` key (or first string entry), falling back
/// to the identifier.
pub fn record_display_name(schema: &Schema, fields: &IndexMap<String, CdValue>) -> String {
    match fields.get(schema.display_field.as_str()) {
        Some(CdValue::Object(map)) => {
            if let Some(s) = map.get(statics::KEY_STR).and_then(|v| v.as_str()) {
                return s.to_string();
            }
            if let Some(s) = map.values().find_map(|v| v.as_str()) {
                return s.to_string();
            }
            record_ident(schema, fields)
        }
        Some(value) => value.to_display_string(),
        None => record_ident(schema, fields),
    }
}

/// List/tree label: `id — name` when both exist and differ.
pub fn record_label(schema: &Schema, fields: &IndexMap<String, CdValue>) -> String {
    let ident = record_ident(schema, fields);
    let name = record_display_name(schema, fields);
    if !ident.is_empty() && !name.is_empty() && ident != name {
        return format!("{ident} — {name}");
    }
    if !ident.is_empty() {
        ident
    } else if !name.is_empty() {
        name
    } else {
        statics::EN_PLACEHOLDER_UNNAMED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{record_display_name, record_ident, record_label};
    use crate::schema::{Schema, SchemaField, ValueKind};
    use crate::value::CdValue;
    use indexmap::IndexMap;

    fn npc_schema() -> Schema {
        Schema::new(
            "npc",
            "NPCs",
            "npc",
            "id",
            "name",
            vec![
                SchemaField::new("id", ValueKind::Text).required(),
                SchemaField::new("name", ValueKind::LocalizedText),
            ],
        )
    }

    fn obj(pairs: &[(&str, CdValue)]) -> IndexMap<String, CdValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn ident_prefers_declared_field_then_fallbacks() {
        let schema = npc_schema();

        let fields = obj(&[("id", CdValue::String("guard".into()))]);
        assert_eq!(record_ident(&schema, &fields), "guard");

        let fields = obj(&[("ident", CdValue::String("old_style".into()))]);
        assert_eq!(record_ident(&schema, &fields), "old_style");

        let fields = obj(&[("abstract", CdValue::String("base_npc".into()))]);
        assert_eq!(record_ident(&schema, &fields), "base_npc");

        let fields = obj(&[("name", CdValue::String("no id at all".into()))]);
        assert_eq!(record_ident(&schema, &fields), "");
    }

    #[test]
    fn display_name_unwraps_translation_objects() {
        let schema = npc_schema();

        let name = obj(&[("str", CdValue::String("Guard".into()))]);
        let fields = obj(&[
            ("id", CdValue::String("guard".into())),
            ("name", CdValue::Object(name)),
        ]);
        assert_eq!(record_display_name(&schema, &fields), "Guard");

        // Gendered forms without a canonical `str`: first string entry wins.
        let name = obj(&[
            ("ctxt", CdValue::Null),
            ("male", CdValue::String("Smith".into())),
        ]);
        let fields = obj(&[("name", CdValue::Object(name))]);
        assert_eq!(record_display_name(&schema, &fields), "Smith");
    }

    #[test]
    fn display_name_falls_back_to_ident() {
        let schema = npc_schema();
        let fields = obj(&[("id", CdValue::String("guard".into()))]);
        assert_eq!(record_display_name(&schema, &fields), "guard");
    }

    #[test]
    fn label_combines_ident_and_name() {
        let schema = npc_schema();
        let fields = obj(&[
            ("id", CdValue::String("guard".into())),
            ("name", CdValue::String("Guard".into())),
        ]);
        assert_eq!(record_label(&schema, &fields), "guard — Guard");

        let fields = obj(&[("id", CdValue::String("guard".into()))]);
        assert_eq!(record_label(&schema, &fields), "guard");

        let fields = obj(&[]);
        assert_eq!(record_label(&schema, &fields), "<unnamed>");
    }
}
