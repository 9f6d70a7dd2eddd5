//! Project store: owns every loaded JSON file, the records indexed out of
//! them, and the dirty set that drives saving.

use crate::coerce;
use crate::record::{EntryId, Record, record_ident};
use crate::schema::{SchemaRegistry, ValueKind};
use crate::statics;
use crate::value::CdValue;
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed input in {}: {message}", path.display())]
    MalformedInput { path: PathBuf, message: String },
    #[error("no project folder is open")]
    NoProjectRoot,
    #[error("unknown schema key `{0}`")]
    UnknownSchema(String),
    #[error("field `{field}` already exists on this record")]
    FieldAlreadyExists { field: String },
    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a load pass found. `warnings` counts files that were skipped because
/// they could not be read or parsed; the store keeps everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files: usize,
    pub records: usize,
    pub warnings: usize,
}

/// One top-level entry of a loaded file, in file order. Entries that are not
/// recognized records (unknown `type`, non-objects in arrays) are carried
/// here untouched so saving never drops them.
#[derive(Debug, Clone)]
struct FileEntry {
    id: EntryId,
    value: CdValue,
}

pub struct ProjectStore {
    registry: SchemaRegistry,
    root: Option<PathBuf>,
    files: IndexMap<PathBuf, Vec<FileEntry>>,
    records_by_schema: IndexMap<String, Vec<Record>>,
    ids_by_discriminator: HashMap<String, BTreeSet<String>>,
    dirty: BTreeSet<PathBuf>,
    next_entry_id: EntryId,
}

impl ProjectStore {
    pub fn new(registry: SchemaRegistry) -> Self {
        let records_by_schema = registry
            .iter()
            .map(|s| (s.key.clone(), Vec::new()))
            .collect();
        Self {
            registry,
            root: None,
            files: IndexMap::new(),
            records_by_schema,
            ids_by_discriminator: HashMap::new(),
            dirty: BTreeSet::new(),
            next_entry_id: 1,
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn record_count(&self) -> usize {
        self.records_by_schema.values().map(Vec::len).sum()
    }

    /// Records of one schema kind, in load order. Empty for unknown keys.
    pub fn records(&self, schema_key: &str) -> &[Record] {
        self.records_by_schema
            .get(schema_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replace the store contents with every `.json` file under `dir`,
    /// recursively, in sorted path order. Files that fail to read or parse
    /// are logged and counted as warnings; the rest of the project loads.
    pub fn open_directory(&mut self, dir: &Path) -> Result<LoadSummary, ProjectError> {
        if !dir.is_dir() {
            return Err(ProjectError::NotFound {
                path: dir.to_path_buf(),
            });
        }
        self.reset();
        self.root = Some(dir.to_path_buf());

        let mut paths = Vec::new();
        collect_json_files(dir, &mut paths).map_err(|e| ProjectError::MalformedInput {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut summary = LoadSummary::default();
        for path in paths {
            match self.load_file(&path) {
                Ok(records) => {
                    summary.files += 1;
                    summary.records += records;
                }
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    summary.warnings += 1;
                }
            }
        }
        info!(
            "loaded {} records from {} files ({} skipped) in {}",
            summary.records,
            summary.files,
            summary.warnings,
            dir.display()
        );
        Ok(summary)
    }

    /// Replace the store contents with a single file. Unlike a directory
    /// load, a parse failure here is fatal: there is nothing else to show.
    pub fn open_file(&mut self, path: &Path) -> Result<LoadSummary, ProjectError> {
        self.reset();
        self.root = path.parent().map(Path::to_path_buf);
        let records = self.load_file(path)?;
        Ok(LoadSummary {
            files: 1,
            records,
            warnings: 0,
        })
    }

    fn reset(&mut self) {
        self.root = None;
        self.files.clear();
        for records in self.records_by_schema.values_mut() {
            records.clear();
        }
        self.ids_by_discriminator.clear();
        self.dirty.clear();
    }

    fn load_file(&mut self, path: &Path) -> Result<usize, ProjectError> {
        // Directories (and anything else that is not a regular file) are a
        // missing-file problem, not a parse problem.
        if !path.is_file() {
            return Err(ProjectError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ProjectError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ProjectError::MalformedInput {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;
        let parsed =
            CdValue::parse_relaxed(&text).map_err(|e| ProjectError::MalformedInput {
                path: path.to_path_buf(),
                message: format!("{e:#}"),
            })?;

        // A bare top-level object is one record; anything else must be the
        // usual array of entries.
        let values = match parsed {
            CdValue::Object(_) => vec![parsed],
            CdValue::Array(items) => items,
            other => {
                return Err(ProjectError::MalformedInput {
                    path: path.to_path_buf(),
                    message: format!("top-level value is {}, expected object or array", other.type_name()),
                });
            }
        };

        let mut entries = Vec::with_capacity(values.len());
        let mut records = 0usize;
        for value in values {
            let id = self.next_entry_id;
            self.next_entry_id += 1;
            if self.index_entry(id, &value, path) {
                records += 1;
            }
            entries.push(FileEntry { id, value });
        }
        debug!("{}: {} entries, {} records", path.display(), entries.len(), records);
        self.files.insert(path.to_path_buf(), entries);
        Ok(records)
    }

    /// Index one entry as a record if its `type` resolves to a schema.
    fn index_entry(&mut self, id: EntryId, value: &CdValue, path: &Path) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };
        let Some(discriminator) = map.get(statics::KEY_TYPE).and_then(|v| v.as_str()) else {
            return false;
        };
        let Some(schema) = self.registry.schema_for_discriminator(discriminator) else {
            return false;
        };
        let record = Record {
            entry_id: id,
            schema_key: schema.key.clone(),
            discriminator: schema.discriminator.clone(),
            file_path: path.to_path_buf(),
        };
        let ident = record_ident(schema, map);
        if !ident.is_empty() {
            self.ids_by_discriminator
                .entry(schema.discriminator.clone())
                .or_default()
                .insert(ident);
        }
        self.records_by_schema
            .entry(schema.key.clone())
            .or_default()
            .push(record);
        true
    }

    /// Known identifiers of records whose `type` is `discriminator`, sorted.
    pub fn ids_for_discriminator(&self, discriminator: &str) -> Vec<String> {
        self.ids_by_discriminator
            .get(discriminator)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn rebuild_id_index(&mut self) {
        let mut index: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (schema_key, records) in &self.records_by_schema {
            let Ok(schema) = self.registry.get(schema_key) else {
                continue;
            };
            for record in records {
                let Some(entries) = self.files.get(&record.file_path) else {
                    continue;
                };
                let Some(map) = entries
                    .iter()
                    .find(|e| e.id == record.entry_id)
                    .and_then(|e| e.value.as_object())
                else {
                    continue;
                };
                let ident = record_ident(schema, map);
                if !ident.is_empty() {
                    index
                        .entry(record.discriminator.clone())
                        .or_default()
                        .insert(ident);
                }
            }
        }
        self.ids_by_discriminator = index;
    }

    // ---- record lifecycle ------------------------------------------------

    /// Create a fresh record of `schema_key` in the per-kind synthetic file
    /// under the project root, seeded with its `type` and an empty id. The
    /// empty id stays out of the reference index until it is filled in.
    pub fn create_record(&mut self, schema_key: &str) -> Result<Record, ProjectError> {
        let schema = self
            .registry
            .get(schema_key)
            .map_err(|_| ProjectError::UnknownSchema(schema_key.to_string()))?;
        let root = self.root.as_ref().ok_or(ProjectError::NoProjectRoot)?;
        let path = root.join(format!(
            "{}{}.{}",
            statics::EDITOR_FILE_PREFIX,
            schema_key,
            statics::JSON_EXTENSION
        ));

        let mut map = IndexMap::new();
        map.insert(
            statics::KEY_TYPE.to_string(),
            CdValue::String(schema.discriminator.clone()),
        );
        map.insert(schema.id_field.clone(), CdValue::String(String::new()));

        let record = Record {
            entry_id: self.next_entry_id,
            schema_key: schema.key.clone(),
            discriminator: schema.discriminator.clone(),
            file_path: path.clone(),
        };
        self.next_entry_id += 1;

        self.files.entry(path.clone()).or_default().push(FileEntry {
            id: record.entry_id,
            value: CdValue::Object(map),
        });
        self.records_by_schema
            .entry(record.schema_key.clone())
            .or_default()
            .push(record.clone());
        self.dirty.insert(path);
        Ok(record)
    }

    /// Remove exactly the entry this record points at, by its stable id, so
    /// a sibling with identical content is never the one deleted. Idempotent:
    /// deleting an already-deleted record changes nothing and dirties nothing.
    pub fn delete_record(&mut self, record: &Record) -> bool {
        let Some(entries) = self.files.get_mut(&record.file_path) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| e.id != record.entry_id);
        if entries.len() == before {
            return false;
        }
        if let Some(records) = self.records_by_schema.get_mut(&record.schema_key) {
            records.retain(|r| r.entry_id != record.entry_id);
        }
        self.rebuild_id_index();
        self.dirty.insert(record.file_path.clone());
        true
    }

    // ---- field access ----------------------------------------------------

    /// The field map of a record, or `None` if it has been deleted.
    pub fn fields(&self, record: &Record) -> Option<&IndexMap<String, CdValue>> {
        self.files
            .get(&record.file_path)?
            .iter()
            .find(|e| e.id == record.entry_id)?
            .value
            .as_object()
    }

    fn fields_mut(&mut self, record: &Record) -> Option<&mut IndexMap<String, CdValue>> {
        self.files
            .get_mut(&record.file_path)?
            .iter_mut()
            .find(|e| e.id == record.entry_id)?
            .value
            .as_object_mut()
    }

    /// Set one field to a new value and mark the file dirty. Changing an
    /// identifier field also refreshes the reference index.
    pub fn set_field(&mut self, record: &Record, key: &str, value: CdValue) {
        let Some(map) = self.fields_mut(record) else {
            return;
        };
        map.insert(key.to_string(), value);
        self.dirty.insert(record.file_path.clone());
        let is_ident_key = key == statics::KEY_TYPE
            || statics::ID_FALLBACKS.contains(&key)
            || self
                .registry
                .get(&record.schema_key)
                .map(|s| s.id_field == key)
                .unwrap_or(false);
        if is_ident_key {
            self.rebuild_id_index();
        }
    }

    /// Add a field with the kind's default value.
    pub fn add_field(
        &mut self,
        record: &Record,
        key: &str,
        kind: ValueKind,
    ) -> Result<(), ProjectError> {
        let Some(map) = self.fields_mut(record) else {
            return Err(ProjectError::NotFound {
                path: record.file_path.clone(),
            });
        };
        if map.contains_key(key) {
            return Err(ProjectError::FieldAlreadyExists {
                field: key.to_string(),
            });
        }
        map.insert(key.to_string(), coerce::default_value(kind));
        self.dirty.insert(record.file_path.clone());
        Ok(())
    }

    /// Remove a field. A no-op (and not a dirtying one) when it is absent.
    pub fn remove_field(&mut self, record: &Record, key: &str) {
        let Some(map) = self.fields_mut(record) else {
            return;
        };
        if map.shift_remove(key).is_some() {
            self.dirty.insert(record.file_path.clone());
        }
    }

    // ---- dirty tracking and saving ----------------------------------------

    pub fn mark_dirty(&mut self, path: &Path) {
        if self.files.contains_key(path) {
            self.dirty.insert(path.to_path_buf());
        }
    }

    pub fn clear_dirty(&mut self, path: &Path) {
        self.dirty.remove(path);
    }

    pub fn is_dirty(&self, path: &Path) -> bool {
        self.dirty.contains(path)
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// Dirty file paths in sorted order.
    pub fn dirty_files(&self) -> Vec<PathBuf> {
        self.dirty.iter().cloned().collect()
    }

    /// Serialize one loaded file back to disk, always in array form, strict
    /// JSON, pretty-printed. Does not touch the dirty set.
    pub fn write_file(&self, path: &Path) -> Result<(), ProjectError> {
        let entries = self.files.get(path).ok_or_else(|| ProjectError::NotFound {
            path: path.to_path_buf(),
        })?;
        let array = CdValue::Array(entries.iter().map(|e| e.value.clone()).collect());
        fs::write(path, array.format_pretty()).map_err(|source| ProjectError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write one file and clear its dirty mark on success.
    pub fn save_one(&mut self, path: &Path) -> Result<(), ProjectError> {
        self.write_file(path)?;
        self.dirty.remove(path);
        debug!("saved {}", path.display());
        Ok(())
    }

    /// Write every loaded file. Failures are collected, not short-circuited:
    /// one unwritable file must not block the rest of the project.
    pub fn save_all(&mut self) -> Vec<ProjectError> {
        let paths: Vec<PathBuf> = self.files.keys().cloned().collect();
        self.save_paths(paths)
    }

    /// Write only the files with unsaved changes.
    pub fn save_dirty(&mut self) -> Vec<ProjectError> {
        self.save_paths(self.dirty_files())
    }

    fn save_paths(&mut self, paths: Vec<PathBuf>) -> Vec<ProjectError> {
        let mut errors = Vec::new();
        for path in paths {
            if let Err(e) = self.save_one(&path) {
                warn!("{e}");
                errors.push(e);
            }
        }
        errors
    }
}

fn collect_json_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    children.sort();
    for child in children {
        if child.is_dir() {
            collect_json_files(&child, out)?;
        } else if child
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(statics::JSON_EXTENSION))
        {
            out.push(child);
        }
    }
    Ok(())
}
