use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::error_tree::FieldErrors;
use crate::domain::errors::FormDataError;

// Field name used when callers do not pick their own.
pub const DEFAULT_FORM_DATA_KEY: &str = "formData";

// Binary part of a multipart submission.
#[derive(Clone, Debug, PartialEq)]
pub struct FormFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

// Single value carried by a form body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FormFile),
}

/// Key/value collection read from (or written to) a form-encoded body.
///
/// Entries keep their submission order; lookups return the first entry
/// with a matching name, the same way browsers resolve `FormData.get`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormPayload {
    entries: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: FormValue) {
        self.entries.push((name.into(), value));
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, FormValue::Text(value.into()));
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, file: FormFile) -> Self {
        self.append(name, FormValue::File(file));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    // Text stored under `key`; files and absent keys are errors, never defaults.
    pub fn text(&self, key: &str) -> Result<&str, FormDataError> {
        match self.get(key) {
            Some(FormValue::Text(text)) => Ok(text),
            Some(FormValue::File(_)) => Err(FormDataError::NotText {
                key: key.to_string(),
            }),
            None => Err(FormDataError::MissingField {
                key: key.to_string(),
            }),
        }
    }

    /// Deserializes the JSON text stored under `key`.
    pub fn parse_json<T>(&self, key: &str) -> Result<T, FormDataError>
    where
        T: DeserializeOwned,
    {
        let text = self.text(key)?;
        serde_json::from_str(text).map_err(|source| FormDataError::Parse {
            key: key.to_string(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Encodes the text entries as `application/x-www-form-urlencoded`.
    ///
    /// File entries cannot be represented in this encoding and are skipped.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            if let FormValue::Text(text) = value {
                serializer.append_pair(name, text);
            }
        }
        serializer.finish()
    }
}

impl FromIterator<(String, FormValue)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (String, FormValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// Outcome of running data through a resolver: exactly one side is populated.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Validation::Valid(data) => Some(data),
            Validation::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            Validation::Valid(data) => Ok(data),
            Validation::Invalid(errors) => Err(errors),
        }
    }
}

// Wire shape is `{ "errors": .., "data": .. }` with the unused side set to null.
impl<T> Serialize for Validation<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Validation", 2)?;
        match self {
            Validation::Valid(data) => {
                state.serialize_field("errors", &Option::<&FieldErrors>::None)?;
                state.serialize_field("data", data)?;
            }
            Validation::Invalid(errors) => {
                state.serialize_field("errors", errors)?;
                state.serialize_field("data", &Option::<&T>::None)?;
            }
        }
        state.end()
    }
}
