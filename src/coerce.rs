//! Field coercion engine: one materialize/harvest pair per `ValueKind`.
//!
//! `materialize` turns the stored JSON value of a field into an editable
//! representation; `harvest` turns the edited representation back into JSON.
//! Harvesting returns `Ok(None)` when the editor content still matches the
//! stored value, so an untouched editor never rewrites a file.

use crate::schema::{Schema, SchemaField, ValueKind};
use crate::statics;
use crate::value::{CdNumber, CdValue};
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarvestError {
    #[error("field `{field}`: {message}")]
    FieldParseFailure { field: String, message: String },
}

/// Resolved metadata for one field actually present on a record: either a
/// declared schema field, or synthesized from the runtime value's shape.
#[derive(Debug, Clone)]
pub struct FieldMeta {
    pub name: String,
    pub label: String,
    pub kind: ValueKind,
    pub help: String,
    pub required: bool,
    pub bounds: Option<(f64, f64)>,
    pub reference_kind: Option<String>,
    pub choices: Vec<String>,
    pub auto_inferred: bool,
}

impl FieldMeta {
    pub fn declared(field: &SchemaField) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            kind: field.kind,
            help: field.help.clone(),
            required: field.required,
            bounds: field.bounds,
            reference_kind: field.reference_kind.clone(),
            choices: field.choices.clone().unwrap_or_default(),
            auto_inferred: false,
        }
    }

    pub fn inferred(name: &str, value: &CdValue) -> Self {
        Self {
            name: name.to_string(),
            label: name.to_string(),
            kind: infer_kind(value),
            help: String::new(),
            required: false,
            bounds: None,
            reference_kind: None,
            choices: Vec::new(),
            auto_inferred: true,
        }
    }
}

/// Kind inference for keys the schema does not declare.
pub fn infer_kind(value: &CdValue) -> ValueKind {
    match value {
        CdValue::Bool(_) => ValueKind::Boolean,
        CdValue::Number(n) if n.is_integer() => ValueKind::Integer,
        CdValue::Number(_) => ValueKind::Real,
        CdValue::Array(items) => {
            if items.iter().all(CdValue::is_scalar) {
                ValueKind::StringList
            } else {
                ValueKind::RawStructured
            }
        }
        CdValue::Object(_) => ValueKind::RawStructured,
        _ => ValueKind::Text,
    }
}

/// One `FieldMeta` per key present on the record, in the record's own key
/// order. Declared metadata wins; everything else is auto-inferred.
pub fn resolve_fields(schema: &Schema, data: &IndexMap<String, CdValue>) -> Vec<FieldMeta> {
    data.iter()
        .map(|(key, value)| match schema.field(key) {
            Some(field) => FieldMeta::declared(field),
            None => FieldMeta::inferred(key, value),
        })
        .collect()
}

/// The value written when a field is first added to a record.
pub fn default_value(kind: ValueKind) -> CdValue {
    match kind {
        ValueKind::Text | ValueKind::Enumerated => CdValue::String(String::new()),
        ValueKind::Integer => CdValue::Number(CdNumber::I64(0)),
        ValueKind::Real => CdValue::Number(CdNumber::F64(0.0)),
        ValueKind::Boolean => CdValue::Bool(false),
        ValueKind::StringList | ValueKind::FlagList | ValueKind::ReferenceList => {
            CdValue::Array(Vec::new())
        }
        ValueKind::RawStructured => CdValue::empty_object(),
        ValueKind::LocalizedText => {
            let mut map = IndexMap::new();
            map.insert(statics::KEY_STR.to_string(), CdValue::String(String::new()));
            CdValue::Object(map)
        }
    }
}

/// The generic editable form handed to (and harvested from) the
/// presentation layer. One variant per editor widget shape.
#[derive(Debug, Clone, PartialEq)]
pub enum EditValue {
    /// Single-line text (also localized text, edited through its `str`).
    Text(String),
    Integer(i64),
    Real(f64),
    Toggle(bool),
    /// Newline-separated list entries.
    Lines(String),
    /// Ordered reference ids; the UI feeds this from a picker.
    Refs(Vec<String>),
    /// Raw JSON text.
    Raw(String),
    /// Enumerated selection. `ad_hoc` marks a value outside the declared set.
    Choice { selected: String, ad_hoc: bool },
}

/// Build the editable representation of a field's current value.
pub fn materialize(meta: &FieldMeta, value: Option<&CdValue>) -> EditValue {
    match meta.kind {
        ValueKind::Text => EditValue::Text(
            value.map(CdValue::to_display_string).unwrap_or_default(),
        ),
        ValueKind::Integer => {
            let v = value
                .and_then(|v| match v {
                    CdValue::Number(n) => n.as_i64(),
                    _ => None,
                })
                .unwrap_or(0);
            EditValue::Integer(v)
        }
        ValueKind::Real => {
            let v = value
                .and_then(|v| match v {
                    CdValue::Number(n) => Some(n.as_f64()),
                    _ => None,
                })
                .unwrap_or(0.0);
            EditValue::Real(v)
        }
        ValueKind::Boolean => {
            EditValue::Toggle(value.and_then(CdValue::as_bool).unwrap_or(false))
        }
        ValueKind::StringList | ValueKind::FlagList => {
            EditValue::Lines(list_entries(value).join("\n"))
        }
        ValueKind::ReferenceList => EditValue::Refs(list_entries(value)),
        ValueKind::RawStructured => {
            let text = value
                .unwrap_or(&CdValue::Object(IndexMap::new()))
                .format_pretty();
            EditValue::Raw(text.trim_end().to_string())
        }
        ValueKind::LocalizedText => EditValue::Text(localized_text(value)),
        ValueKind::Enumerated => {
            let selected = value.map(CdValue::to_display_string).unwrap_or_default();
            let ad_hoc = !selected.is_empty() && !meta.choices.contains(&selected);
            EditValue::Choice { selected, ad_hoc }
        }
    }
}

/// Convert an edited representation back into a JSON value.
///
/// `Ok(None)` means the editor still matches `previous` — distinct from
/// "changed to empty", which comes back as `Ok(Some(...))`.
/// A raw JSON field that fails to parse yields `FieldParseFailure`; the
/// caller keeps the previous value and scopes the error to this field.
pub fn harvest(
    meta: &FieldMeta,
    edit: &EditValue,
    previous: Option<&CdValue>,
) -> Result<Option<CdValue>, HarvestError> {
    match (meta.kind, edit) {
        (ValueKind::Text, EditValue::Text(s)) => Ok(harvest_text(s, previous)),
        (ValueKind::Enumerated, EditValue::Choice { selected, .. }) => {
            Ok(harvest_text(selected, previous))
        }
        (ValueKind::Integer, EditValue::Integer(v)) => {
            let clamped = clamp_i64(*v, meta.bounds);
            let unchanged = previous.is_some_and(|p| match p {
                CdValue::Number(n) => n.as_f64() == clamped as f64,
                _ => false,
            });
            if unchanged {
                Ok(None)
            } else {
                Ok(Some(CdValue::Number(CdNumber::I64(clamped))))
            }
        }
        (ValueKind::Real, EditValue::Real(v)) => {
            let clamped = clamp_f64(*v, meta.bounds);
            let unchanged = previous.is_some_and(|p| match p {
                CdValue::Number(n) => n.as_f64() == clamped,
                _ => false,
            });
            if unchanged {
                Ok(None)
            } else {
                Ok(Some(CdValue::Number(CdNumber::F64(clamped))))
            }
        }
        (ValueKind::Boolean, EditValue::Toggle(b)) => {
            if previous.and_then(CdValue::as_bool) == Some(*b) {
                Ok(None)
            } else {
                Ok(Some(CdValue::Bool(*b)))
            }
        }
        (ValueKind::StringList | ValueKind::FlagList, EditValue::Lines(text)) => {
            let entries: Vec<String> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            Ok(harvest_list(entries, previous))
        }
        (ValueKind::ReferenceList, EditValue::Refs(ids)) => {
            let mut entries: Vec<String> = Vec::with_capacity(ids.len());
            for id in ids {
                let id = id.trim();
                if !id.is_empty() && !entries.iter().any(|e| e == id) {
                    entries.push(id.to_string());
                }
            }
            Ok(harvest_list(entries, previous))
        }
        (ValueKind::RawStructured, EditValue::Raw(text)) => {
            let parsed = if text.trim().is_empty() {
                CdValue::empty_object()
            } else {
                CdValue::parse_relaxed(text).map_err(|e| HarvestError::FieldParseFailure {
                    field: meta.name.clone(),
                    message: format!("{e:#}"),
                })?
            };
            if previous == Some(&parsed) {
                Ok(None)
            } else {
                Ok(Some(parsed))
            }
        }
        (ValueKind::LocalizedText, EditValue::Text(s)) => {
            match previous {
                Some(CdValue::Object(map)) => {
                    if localized_text(previous) == *s {
                        return Ok(None);
                    }
                    // Shallow copy: replace `str`, keep alternate forms.
                    let mut out = map.clone();
                    out.insert(statics::KEY_STR.to_string(), CdValue::String(s.clone()));
                    Ok(Some(CdValue::Object(out)))
                }
                _ => Ok(harvest_text(s, previous)),
            }
        }
        // Kind/representation mismatch: materialize never produces this, so
        // treat it as "no change" rather than guessing at a conversion.
        _ => {
            debug_assert!(
                false,
                "edit value does not match kind {:?} for field `{}`",
                meta.kind, meta.name
            );
            Ok(None)
        }
    }
}

fn harvest_text(s: &str, previous: Option<&CdValue>) -> Option<CdValue> {
    let unchanged = previous.is_some_and(|p| p.to_display_string() == s);
    if unchanged {
        None
    } else {
        Some(CdValue::String(s.to_string()))
    }
}

fn harvest_list(entries: Vec<String>, previous: Option<&CdValue>) -> Option<CdValue> {
    let unchanged = match previous {
        Some(prev @ CdValue::Array(_)) => list_entries(Some(prev)) == entries,
        None => entries.is_empty(),
        _ => false,
    };
    if unchanged {
        None
    } else {
        Some(CdValue::Array(
            entries.into_iter().map(CdValue::String).collect(),
        ))
    }
}

/// Non-empty display strings of a stored list value, in order.
fn list_entries(value: Option<&CdValue>) -> Vec<String> {
    let Some(CdValue::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(CdValue::to_display_string)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Canonical text of a localized value: a translation object's `str` key,
/// else its first string entry; scalars stringified.
fn localized_text(value: Option<&CdValue>) -> String {
    match value {
        Some(CdValue::Object(map)) => map
            .get(statics::KEY_STR)
            .and_then(|v| v.as_str())
            .or_else(|| map.values().find_map(|v| v.as_str()))
            .unwrap_or_default()
            .to_string(),
        Some(scalar) => scalar.to_display_string(),
        None => String::new(),
    }
}

fn clamp_i64(v: i64, bounds: Option<(f64, f64)>) -> i64 {
    let Some((min, max)) = bounds else {
        return v;
    };
    let clamped = (v as f64).clamp(min, max);
    clamped as i64
}

fn clamp_f64(v: f64, bounds: Option<(f64, f64)>) -> f64 {
    match bounds {
        Some((min, max)) => v.clamp(min, max),
        None => v,
    }
}

#[cfg(test)]
mod tests {
    use super::{EditValue, FieldMeta, default_value, harvest, infer_kind, materialize};
    use crate::schema::{SchemaField, ValueKind};
    use crate::value::{CdNumber, CdValue};
    use indexmap::IndexMap;

    fn meta(kind: ValueKind) -> FieldMeta {
        FieldMeta::declared(&SchemaField::new("f", kind))
    }

    #[test]
    fn infer_kind_follows_value_shape() {
        assert_eq!(infer_kind(&CdValue::Bool(true)), ValueKind::Boolean);
        assert_eq!(
            infer_kind(&CdValue::Number(CdNumber::I64(3))),
            ValueKind::Integer
        );
        assert_eq!(
            infer_kind(&CdValue::Number(CdNumber::F64(3.5))),
            ValueKind::Real
        );
        assert_eq!(
            infer_kind(&CdValue::Array(vec![CdValue::Number(CdNumber::I64(1))])),
            ValueKind::StringList
        );
        assert_eq!(
            infer_kind(&CdValue::Array(vec![CdValue::empty_object()])),
            ValueKind::RawStructured
        );
        assert_eq!(infer_kind(&CdValue::empty_object()), ValueKind::RawStructured);
        assert_eq!(infer_kind(&CdValue::String("x".into())), ValueKind::Text);
        assert_eq!(infer_kind(&CdValue::Null), ValueKind::Text);
    }

    #[test]
    fn integer_harvest_clamps_to_bounds() {
        let m = FieldMeta::declared(&SchemaField::new("points", ValueKind::Integer).bounds(-10.0, 10.0));
        let out = harvest(&m, &EditValue::Integer(99), None).unwrap();
        assert_eq!(out, Some(CdValue::Number(CdNumber::I64(10))));
    }

    #[test]
    fn untouched_numbers_do_not_change_representation() {
        // Stored as integer 3 under a `real` field: no edit, no rewrite.
        let m = meta(ValueKind::Real);
        let prev = CdValue::Number(CdNumber::I64(3));
        let edit = materialize(&m, Some(&prev));
        assert_eq!(edit, EditValue::Real(3.0));
        assert_eq!(harvest(&m, &edit, Some(&prev)).unwrap(), None);
    }

    #[test]
    fn lines_harvest_trims_and_drops_empty() {
        let m = meta(ValueKind::FlagList);
        let out = harvest(&m, &EditValue::Lines("  A  \n\nB\n".into()), None).unwrap();
        assert_eq!(
            out,
            Some(CdValue::Array(vec![
                CdValue::String("A".into()),
                CdValue::String("B".into()),
            ]))
        );

        let out = harvest(&m, &EditValue::Lines(String::new()), Some(&CdValue::Array(vec![
            CdValue::String("A".into()),
        ])))
        .unwrap();
        assert_eq!(out, Some(CdValue::Array(Vec::new())));
    }

    #[test]
    fn reference_harvest_deduplicates_in_order() {
        let m = FieldMeta::declared(
            &SchemaField::new("prereqs", ValueKind::ReferenceList).reference("mutation"),
        );
        let out = harvest(
            &m,
            &EditValue::Refs(vec![
                "b".into(),
                "a".into(),
                "b".into(),
                " ".into(),
                "a ".into(),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(
            out,
            Some(CdValue::Array(vec![
                CdValue::String("b".into()),
                CdValue::String("a".into()),
            ]))
        );
    }

    #[test]
    fn raw_harvest_reports_field_scoped_parse_failure() {
        let m = meta(ValueKind::RawStructured);
        let err = harvest(&m, &EditValue::Raw("{bad".into()), None).unwrap_err();
        match err {
            super::HarvestError::FieldParseFailure { field, .. } => assert_eq!(field, "f"),
        }
    }

    #[test]
    fn raw_blank_text_harvests_to_empty_object() {
        let m = meta(ValueKind::RawStructured);
        let out = harvest(&m, &EditValue::Raw("  ".into()), None).unwrap();
        assert_eq!(out, Some(CdValue::empty_object()));
    }

    #[test]
    fn localized_harvest_preserves_alternate_forms() {
        let m = meta(ValueKind::LocalizedText);
        let mut prev_map = IndexMap::new();
        prev_map.insert("str".to_string(), CdValue::String("Old".into()));
        prev_map.insert("str_sp".to_string(), CdValue::String("Vieja".into()));
        let prev = CdValue::Object(prev_map);

        let out = harvest(&m, &EditValue::Text("New".into()), Some(&prev))
            .unwrap()
            .unwrap();
        let map = out.as_object().unwrap();
        assert_eq!(map.get("str").and_then(|v| v.as_str()), Some("New"));
        assert_eq!(map.get("str_sp").and_then(|v| v.as_str()), Some("Vieja"));
    }

    #[test]
    fn localized_scalar_stays_scalar() {
        let m = meta(ValueKind::LocalizedText);
        let prev = CdValue::String("plain".into());
        assert_eq!(harvest(&m, &EditValue::Text("plain".into()), Some(&prev)).unwrap(), None);
        assert_eq!(
            harvest(&m, &EditValue::Text("edited".into()), Some(&prev)).unwrap(),
            Some(CdValue::String("edited".into()))
        );
    }

    #[test]
    fn enumerated_materialize_marks_ad_hoc_values() {
        let m = FieldMeta::declared(
            &SchemaField::new("color", ValueKind::Enumerated).choices(&["red", "green"]),
        );
        let edit = materialize(&m, Some(&CdValue::String("light_red".into())));
        assert_eq!(
            edit,
            EditValue::Choice {
                selected: "light_red".into(),
                ad_hoc: true
            }
        );
        let edit = materialize(&m, Some(&CdValue::String("red".into())));
        assert_eq!(
            edit,
            EditValue::Choice {
                selected: "red".into(),
                ad_hoc: false
            }
        );
    }

    #[test]
    fn defaults_match_declared_kinds() {
        assert_eq!(default_value(ValueKind::Text), CdValue::String(String::new()));
        assert_eq!(
            default_value(ValueKind::Integer),
            CdValue::Number(CdNumber::I64(0))
        );
        assert_eq!(default_value(ValueKind::Boolean), CdValue::Bool(false));
        assert_eq!(default_value(ValueKind::FlagList), CdValue::Array(Vec::new()));
        assert_eq!(default_value(ValueKind::RawStructured), CdValue::empty_object());
        let loc = default_value(ValueKind::LocalizedText);
        assert_eq!(loc.get("str"), Some(&CdValue::String(String::new())));
    }
}
