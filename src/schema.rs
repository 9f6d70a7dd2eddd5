use indexmap::IndexMap;
use thiserror::Error;

/// The closed set of field shapes the editor knows how to coerce.
/// Every kind has one materialize/harvest pair in `coerce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Real,
    Boolean,
    StringList,
    /// Same wire shape as `StringList`; kept distinct so the UI can present
    /// flag sets differently from free-form lists.
    FlagList,
    /// List of identifiers of records of another schema kind
    /// (`SchemaField::reference_kind` names the target).
    ReferenceList,
    /// Arbitrary nested JSON, edited as text.
    RawStructured,
    /// Either a plain string or a translation object with a canonical
    /// `str` key plus optional alternate-form keys.
    LocalizedText,
    /// One of a fixed (but combo-editable) set of strings.
    Enumerated,
}

impl ValueKind {
    pub const ALL: [ValueKind; 10] = [
        ValueKind::Text,
        ValueKind::Integer,
        ValueKind::Real,
        ValueKind::Boolean,
        ValueKind::StringList,
        ValueKind::FlagList,
        ValueKind::ReferenceList,
        ValueKind::RawStructured,
        ValueKind::LocalizedText,
        ValueKind::Enumerated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Boolean => "boolean",
            ValueKind::StringList => "string list",
            ValueKind::FlagList => "flag list",
            ValueKind::ReferenceList => "reference list",
            ValueKind::RawStructured => "raw JSON",
            ValueKind::LocalizedText => "localized text",
            ValueKind::Enumerated => "choice",
        }
    }
}

/// One declared field of a schema. Immutable after registry construction.
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: String,
    pub label: String,
    pub kind: ValueKind,
    pub help: String,
    pub required: bool,
    pub bounds: Option<(f64, f64)>,
    pub reference_kind: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl SchemaField {
    pub fn new(name: &str, kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            label: name.to_string(),
            kind,
            help: String::new(),
            required: false,
            bounds: None,
            reference_kind: None,
            choices: None,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    pub fn reference(mut self, schema_key: &str) -> Self {
        self.reference_kind = Some(schema_key.to_string());
        self
    }

    pub fn choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(choices.iter().map(|c| c.to_string()).collect());
        self
    }
}

/// One record kind: which JSON `type` it binds to, where its identity and
/// display name live, and its declared fields in presentation order.
#[derive(Debug, Clone)]
pub struct Schema {
    pub key: String,
    pub label: String,
    pub discriminator: String,
    pub id_field: String,
    pub display_field: String,
    pub fields: IndexMap<String, SchemaField>,
}

impl Schema {
    pub fn new(
        key: &str,
        label: &str,
        discriminator: &str,
        id_field: &str,
        display_field: &str,
        fields: Vec<SchemaField>,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            discriminator: discriminator.to_string(),
            id_field: id_field.to_string(),
            display_field: display_field.to_string(),
            fields: fields.into_iter().map(|f| (f.name.clone(), f)).collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate schema key `{0}`")]
    DuplicateKey(String),
    #[error("schemas `{first}` and `{second}` both claim discriminator `{discriminator}`")]
    DuplicateDiscriminator {
        discriminator: String,
        first: String,
        second: String,
    },
    #[error("unknown schema key `{0}`")]
    UnknownSchema(String),
}

/// Pure lookup table built once at startup and injected into the store.
/// Construction validates that keys and discriminators are unique, so a
/// JSON object's `type` resolves to at most one schema.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new(schemas: Vec<Schema>) -> Result<Self, RegistryError> {
        let mut map: IndexMap<String, Schema> = IndexMap::with_capacity(schemas.len());
        for schema in schemas {
            if map.contains_key(&schema.key) {
                return Err(RegistryError::DuplicateKey(schema.key));
            }
            if let Some(prev) = map
                .values()
                .find(|s| s.discriminator == schema.discriminator)
            {
                return Err(RegistryError::DuplicateDiscriminator {
                    discriminator: schema.discriminator,
                    first: prev.key.clone(),
                    second: schema.key,
                });
            }
            map.insert(schema.key.clone(), schema);
        }
        Ok(Self { schemas: map })
    }

    pub fn get(&self, key: &str) -> Result<&Schema, RegistryError> {
        self.schemas
            .get(key)
            .ok_or_else(|| RegistryError::UnknownSchema(key.to_string()))
    }

    pub fn schema_for_discriminator(&self, discriminator: &str) -> Option<&Schema> {
        self.schemas
            .values()
            .find(|s| s.discriminator == discriminator)
    }

    /// Resolve a reference target: `reference_kind` names a schema key whose
    /// discriminator scopes the id picker.
    pub fn discriminator_for_key(&self, key: &str) -> Option<&str> {
        self.schemas.get(key).map(|s| s.discriminator.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
