use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Recursive per-field mapping of validation failures.
///
/// The tree mirrors the shape of the validated record: nested objects in
/// the record become [`FieldError::Subtree`] nodes, scalar fields carry a
/// [`FieldError::Leaf`], and array-shaped fields are kept as an opaque
/// [`FieldError::List`]. Fields keep the order in which they were reported.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, FieldError>);

// A single node of a field error tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    Leaf(ErrorLeaf),
    Subtree(FieldErrors),
    // Array-indexed errors are stored verbatim and never merged per element.
    List(Vec<Value>),
    // Bare strings, numbers, booleans and null, kept exactly as reported.
    Scalar(Value),
}

// Error reported for one field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorLeaf {
    pub message: Option<String>,
    // Rule that failed ("required", "minLength", ...), serialized as `type`.
    pub kind: Option<String>,
    // Anything else the producer attached (`ref`, `types`, a non-string
    // `message` or `type`, ...).
    pub meta: Map<String, Value>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldError> {
        self.0.get_mut(field)
    }

    // Replaces an existing field in place; new fields go to the end.
    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) -> Option<FieldError> {
        self.0.insert(field.into(), error)
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        self.0.shift_remove(field)
    }

    pub fn with_leaf(mut self, field: impl Into<String>, leaf: ErrorLeaf) -> Self {
        self.insert(field, FieldError::Leaf(leaf));
        self
    }

    pub fn with_subtree(mut self, field: impl Into<String>, subtree: FieldErrors) -> Self {
        self.insert(field, FieldError::Subtree(subtree));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(field, error)| (field.as_str(), error))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    // Message at a dotted path such as `address.zip`.
    pub fn message_at(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            match node {
                FieldError::Subtree(subtree) => node = subtree.get(segment)?,
                _ => return None,
            }
        }
        match node {
            FieldError::Leaf(leaf) => leaf.message.as_deref(),
            FieldError::Scalar(Value::String(message)) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl FromIterator<(String, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, FieldError);
    type IntoIter = indexmap::map::IntoIter<String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl ErrorLeaf {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    // Only string `message`/`type` values are lifted out; anything else
    // stays in `meta` untouched.
    fn from_object(mut object: Map<String, Value>) -> Self {
        let message = take_string(&mut object, "message");
        let kind = take_string(&mut object, "type");
        Self {
            message,
            kind,
            meta: object,
        }
    }
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(_)) => match object.remove(key) {
            Some(Value::String(text)) => Some(text),
            _ => None,
        },
        _ => None,
    }
}

// A JSON object is a leaf when it looks like a field error record.
fn is_leaf_object(object: &Map<String, Value>) -> bool {
    matches!(object.get("message"), Some(Value::String(_)))
        || matches!(object.get("type"), Some(Value::String(_)))
}

// Node shape is decided here, once, so merging never inspects raw JSON.
impl From<Value> for FieldError {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => FieldError::List(items),
            Value::Object(object) if is_leaf_object(&object) => {
                FieldError::Leaf(ErrorLeaf::from_object(object))
            }
            Value::Object(object) => FieldError::Subtree(
                object
                    .into_iter()
                    .map(|(field, value)| (field, FieldError::from(value)))
                    .collect(),
            ),
            scalar => FieldError::Scalar(scalar),
        }
    }
}

impl<'de> Deserialize<'de> for FieldError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FieldError::from)
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldError::Leaf(leaf) => leaf.serialize(serializer),
            FieldError::Subtree(subtree) => subtree.serialize(serializer),
            FieldError::List(items) => items.serialize(serializer),
            FieldError::Scalar(value) => value.serialize(serializer),
        }
    }
}

impl Serialize for ErrorLeaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(kind) = &self.kind {
            map.serialize_entry("type", kind)?;
        }
        if let Some(message) = &self.message {
            map.serialize_entry("message", message)?;
        }
        for (key, value) in &self.meta {
            if (key == "message" && self.message.is_some())
                || (key == "type" && self.kind.is_some())
            {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
