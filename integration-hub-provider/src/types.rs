use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Records ============

/// Which JSON fields identify and classify a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordShape {
    /// Field holding the unique id (`id`, `ID`, ...).
    pub id_field: String,
    /// Field holding the display classification, if the collection has one.
    pub status_field: Option<String>,
}

impl RecordShape {
    pub fn new(id_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
            status_field: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status_field: impl Into<String>) -> Self {
        self.status_field = Some(status_field.into());
        self
    }
}

impl Default for RecordShape {
    fn default() -> Self {
        Self::new("id").with_status("status")
    }
}

/// One item of a remote collection (a workflow run, a timeline entry, a deal
/// change or a document).
///
/// The remote source owns the schema; only `id` and `status` are interpreted,
/// everything else is kept verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub status: Option<String>,
    pub fields: Map<String, Value>,
}

impl Record {
    /// Build a record from one element of a list response.
    ///
    /// Numeric ids are stringified. Returns `None` for non-objects and for
    /// objects without a usable id.
    pub fn from_json(value: Value, shape: &RecordShape) -> Option<Self> {
        let Value::Object(fields) = value else {
            return None;
        };
        let id = fields.get(&shape.id_field).and_then(scalar_to_string)?;
        let status = shape
            .status_field
            .as_ref()
            .and_then(|f| fields.get(f))
            .and_then(scalar_to_string);
        Some(Self { id, status, fields })
    }

    /// Look up a field by dotted path, e.g. `deal_data.TITLE`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        parts.try_fold(self.fields.get(first)?, |v, key| v.get(key))
    }

    /// Field as display text. Strings are returned as-is, numbers and booleans
    /// are formatted, anything else is `None`.
    pub fn field_str(&self, path: &str) -> Option<String> {
        self.field(path).and_then(scalar_to_string)
    }
}

/// Convert a JSON scalar to its display text.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Expanded per-record data, fetched lazily when a record is selected.
///
/// Replaced wholesale on every fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailPayload(pub Value);

impl DetailPayload {
    /// Look up a field by dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.0, |v, key| v.get(key))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON for display.
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

// ============ Query filter ============

/// Where the workflow-log backend reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Live CRM REST API.
    #[default]
    Api,
    /// Backend's own database snapshot.
    Db,
}

impl SourceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Db => "db",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Api => Self::Db,
            Self::Db => Self::Api,
        }
    }
}

/// Parameters selecting which records a list source returns.
///
/// Owned by the view; the controller only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub search_text: String,
    /// `""` or `"all"` means no status filter.
    pub status_filter: String,
    pub source_mode: SourceMode,
}

impl QueryFilter {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status_filter: status.into(),
            ..Self::default()
        }
    }

    /// Trimmed search text, `None` when empty.
    pub fn search(&self) -> Option<&str> {
        let s = self.search_text.trim();
        (!s.is_empty()).then_some(s)
    }

    /// Status filter, `None` when it selects everything.
    pub fn status(&self) -> Option<&str> {
        let s = self.status_filter.trim();
        (!s.is_empty() && !s.eq_ignore_ascii_case("all")).then_some(s)
    }
}

// ============ Commands ============

/// JSON body for a command endpoint: `{ "action": ..., ...params }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandRequest {
    body: Map<String, Value>,
}

impl CommandRequest {
    /// A request carrying an `action` discriminator.
    pub fn action(action: &str) -> Self {
        let mut body = Map::new();
        body.insert("action".to_string(), Value::String(action.to_string()));
        Self { body }
    }

    /// A request without an `action` field (plain JSON body).
    pub fn plain() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    pub fn action_name(&self) -> Option<&str> {
        self.body.get("action").and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}
