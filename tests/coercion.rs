use cdme::{
    CdValue, EditValue, FieldMeta, ProjectStore, SchemaRegistry, ValueKind, builtin_schemas,
    harvest, materialize, resolve_fields,
};
use pretty_assertions::assert_eq;
use std::fs;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn registry() -> SchemaRegistry {
    SchemaRegistry::new(builtin_schemas()).expect("builtin table is valid")
}

/// Materializing every field of an untouched record and harvesting it back
/// must yield "unchanged" for all of them, whatever the stored shapes are.
#[test]
fn untouched_records_never_report_changes() -> Result<()> {
    let reg = registry();
    let schema = reg.get("mutation")?;
    let data = CdValue::parse_relaxed(
        r#"{
            "type": "mutation",
            "id": "CHITIN",
            "name": { "str": "Chitin", "str_sp": "Quitina" },
            "points": 2,
            "visibility": 3,
            "valid": true,
            "category": ["INSECT", "SPIDER"],
            "prereqs": ["SKIN_ROUGH"],
            "flags": [],
            "variants": { "alt": { "weight": 1 } },
            "bash_resist": 1.5,
            "undeclared_list": [1, 2, 3]
        }"#,
    )?;
    let fields = data.as_object().unwrap();

    for meta in resolve_fields(schema, fields) {
        let stored = fields.get(&meta.name);
        let edit = materialize(&meta, stored);
        let out = harvest(&meta, &edit, stored)?;
        assert_eq!(out, None, "field `{}` reported a phantom change", meta.name);
    }
    Ok(())
}

#[test]
fn undeclared_fields_get_shape_matched_editors() -> Result<()> {
    let reg = registry();
    let schema = reg.get("mutation")?;
    let data = CdValue::parse_relaxed(
        r#"{
            "type": "mutation",
            "id": "X",
            "custom_flag": true,
            "custom_count": 7,
            "custom_rate": 3.5,
            "custom_tags": ["a", "b"],
            "custom_table": [{ "k": 1 }],
            "custom_blob": { "nested": true }
        }"#,
    )?;
    let fields = data.as_object().unwrap();
    let metas = resolve_fields(schema, fields);
    let kind_of = |name: &str| {
        metas
            .iter()
            .find(|m| m.name == name)
            .map(|m| (m.kind, m.auto_inferred))
            .unwrap()
    };

    // Declared fields keep their declared kind.
    assert_eq!(kind_of("id"), (ValueKind::Text, false));
    // Everything else is inferred from the value shape.
    assert_eq!(kind_of("custom_flag"), (ValueKind::Boolean, true));
    assert_eq!(kind_of("custom_count"), (ValueKind::Integer, true));
    assert_eq!(kind_of("custom_rate"), (ValueKind::Real, true));
    assert_eq!(kind_of("custom_tags"), (ValueKind::StringList, true));
    assert_eq!(kind_of("custom_table"), (ValueKind::RawStructured, true));
    assert_eq!(kind_of("custom_blob"), (ValueKind::RawStructured, true));
    Ok(())
}

/// A numeric list shown through a string-list editor must not be rewritten
/// as strings unless the user actually edits it.
#[test]
fn inferred_numeric_lists_round_trip_untouched() -> Result<()> {
    let stored = CdValue::parse_relaxed("[1, 2, 3]")?;
    let meta = FieldMeta::inferred("custom", &stored);
    assert_eq!(meta.kind, ValueKind::StringList);

    let edit = materialize(&meta, Some(&stored));
    assert_eq!(edit, EditValue::Lines("1\n2\n3".into()));
    assert_eq!(harvest(&meta, &edit, Some(&stored))?, None);

    // An actual edit converts to the editor's kind.
    let out = harvest(&meta, &EditValue::Lines("1\n2\n3\n4".into()), Some(&stored))?;
    assert_eq!(out, Some(CdValue::parse_relaxed(r#"["1", "2", "3", "4"]"#)?));
    Ok(())
}

#[test]
fn raw_json_failure_is_field_scoped_and_keeps_the_stored_value() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("m.json");
    fs::write(
        &path,
        r#"[{ "type": "mutation", "id": "X", "variants": { "keep": "me" } }]"#,
    )?;

    let mut store = ProjectStore::new(registry());
    store.open_file(&path)?;
    let record = store.records("mutation")[0].clone();

    let schema = registry();
    let schema = schema.get("mutation")?;
    let meta = resolve_fields(schema, store.fields(&record).unwrap())
        .into_iter()
        .find(|m| m.name == "variants")
        .unwrap();

    let prev = store.fields(&record).unwrap().get("variants").cloned();
    let err = harvest(&meta, &EditValue::Raw("{ broken".into()), prev.as_ref()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("variants"), "error not field-scoped: {msg}");

    // The store was never touched, so the record is intact and clean.
    assert_eq!(
        store.fields(&record).unwrap().get("variants"),
        Some(&CdValue::parse_relaxed(r#"{ "keep": "me" }"#)?)
    );
    assert!(!store.has_dirty());
    Ok(())
}

#[test]
fn localized_edits_preserve_alternate_translation_keys() -> Result<()> {
    let reg = registry();
    let schema = reg.get("mutation")?;
    let data = CdValue::parse_relaxed(
        r#"{ "id": "X", "name": { "str": "Old", "str_sp": "Vieja", "ctxt": "trait" } }"#,
    )?;
    let fields = data.as_object().unwrap();
    let meta = resolve_fields(schema, fields)
        .into_iter()
        .find(|m| m.name == "name")
        .unwrap();
    assert_eq!(meta.kind, ValueKind::LocalizedText);

    let prev = fields.get("name");
    assert_eq!(materialize(&meta, prev), EditValue::Text("Old".into()));

    let out = harvest(&meta, &EditValue::Text("New".into()), prev)?.unwrap();
    assert_eq!(
        out,
        CdValue::parse_relaxed(r#"{ "str": "New", "str_sp": "Vieja", "ctxt": "trait" }"#)?
    );
    Ok(())
}

#[test]
fn declared_bounds_clamp_numeric_edits() -> Result<()> {
    let reg = registry();
    let schema = reg.get("mutation")?;
    let meta = FieldMeta::declared(schema.field("visibility").unwrap());
    assert_eq!(meta.bounds, Some((0.0, 10.0)));

    let out = harvest(&meta, &EditValue::Integer(99), None)?;
    assert_eq!(out, Some(CdValue::parse_relaxed("10")?));
    let out = harvest(&meta, &EditValue::Integer(-5), None)?;
    assert_eq!(out, Some(CdValue::parse_relaxed("0")?));
    Ok(())
}

#[test]
fn enumerated_fields_accept_values_outside_the_declared_set() -> Result<()> {
    let reg = registry();
    let schema = reg.get("item_generic")?;
    let meta = FieldMeta::declared(schema.field("color").unwrap());
    assert_eq!(meta.kind, ValueKind::Enumerated);

    let stored = CdValue::String("light_cyan_homebrew".into());
    match materialize(&meta, Some(&stored)) {
        EditValue::Choice { selected, ad_hoc } => {
            assert_eq!(selected, "light_cyan_homebrew");
            assert!(ad_hoc);
        }
        other => panic!("expected a choice editor, got {other:?}"),
    }

    // Selecting it back is not a change.
    let edit = EditValue::Choice {
        selected: "light_cyan_homebrew".into(),
        ad_hoc: true,
    };
    assert_eq!(harvest(&meta, &edit, Some(&stored))?, None);
    Ok(())
}
