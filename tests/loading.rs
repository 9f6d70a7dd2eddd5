use cdme::{ProjectError, ProjectStore, SchemaRegistry, builtin_schemas};
use pretty_assertions::assert_eq;
use std::fs;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn store() -> ProjectStore {
    ProjectStore::new(SchemaRegistry::new(builtin_schemas()).expect("builtin table is valid"))
}

#[test]
fn directory_load_walks_recursively_and_skips_bad_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("items"))?;
    fs::write(
        dir.path().join("items").join("armor.json"),
        r#"[{ "type": "ARMOR", "id": "test_vest", "name": "test vest" }]"#,
    )?;
    fs::write(
        dir.path().join("mutations.json"),
        r#"[
            { "type": "mutation", "id": "TEST_A", "name": "A" },
            { "type": "mutation", "id": "TEST_B", "name": "B" }
        ]"#,
    )?;
    fs::write(dir.path().join("broken.json"), "{ not json at all")?;
    fs::write(dir.path().join("readme.txt"), "not loaded")?;

    let mut store = store();
    let summary = store.open_directory(dir.path())?;
    assert_eq!(summary.files, 2);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.warnings, 1);
    assert_eq!(store.records("mutation").len(), 2);
    assert_eq!(store.records("item_armor").len(), 1);
    Ok(())
}

#[test]
fn missing_directory_is_an_error() {
    let mut store = store();
    let err = store
        .open_directory(std::path::Path::new("/nonexistent/mod/path"))
        .unwrap_err();
    assert!(matches!(err, ProjectError::NotFound { .. }));
}

#[test]
fn opening_a_directory_as_a_file_is_not_found() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sub = dir.path().join("data.json");
    fs::create_dir(&sub)?;

    let mut store = store();
    let err = store.open_file(&sub).unwrap_err();
    assert!(matches!(err, ProjectError::NotFound { .. }));
    Ok(())
}

#[test]
fn single_file_load_fails_loudly_on_bad_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.json");
    fs::write(&path, "[{]")?;

    let mut store = store();
    let err = store.open_file(&path).unwrap_err();
    assert!(matches!(err, ProjectError::MalformedInput { .. }));
    Ok(())
}

#[test]
fn scalar_top_level_is_malformed() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scalar.json");
    fs::write(&path, r#""just a string""#)?;

    let mut store = store();
    let err = store.open_file(&path).unwrap_err();
    match err {
        ProjectError::MalformedInput { message, .. } => assert!(message.contains("string")),
        other => panic!("expected MalformedInput, got {other}"),
    }
    Ok(())
}

#[test]
fn unrecognized_and_non_object_entries_are_kept_but_not_indexed() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[
            { "type": "mutation", "id": "REAL" },
            { "type": "vehicle_part", "id": "not_ours" },
            { "no_type_at_all": true },
            "stray string"
        ]"#,
    )?;

    let mut store = store();
    let summary = store.open_file(&path)?;
    assert_eq!(summary.records, 1);
    assert_eq!(store.records("mutation").len(), 1);

    // Saving must write all four entries back.
    store.save_one(&path)?;
    let reloaded = cdme::CdValue::parse_relaxed(&fs::read_to_string(&path)?)?;
    assert_eq!(reloaded.as_array().unwrap().len(), 4);
    Ok(())
}

#[test]
fn reference_index_is_sorted_and_scoped_by_discriminator() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("data.json"),
        r#"[
            { "type": "mutation", "id": "ZEBRA" },
            { "type": "mutation", "id": "ANT" },
            { "type": "SPELL", "id": "zap" }
        ]"#,
    )?;

    let mut store = store();
    store.open_directory(dir.path())?;
    assert_eq!(store.ids_for_discriminator("mutation"), vec!["ANT", "ZEBRA"]);
    assert_eq!(store.ids_for_discriminator("SPELL"), vec!["zap"]);
    assert!(store.ids_for_discriminator("GENERIC").is_empty());
    Ok(())
}

#[test]
fn legacy_ident_records_resolve_their_identifier() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("professions.json");
    fs::write(
        &path,
        r#"[{ "type": "profession", "ident": "sheriff", "name": "Sheriff" }]"#,
    )?;

    let mut store = store();
    store.open_file(&path)?;
    assert_eq!(store.ids_for_discriminator("profession"), vec!["sheriff"]);
    Ok(())
}
