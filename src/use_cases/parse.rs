use axum::http::Uri;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::entities::DEFAULT_FORM_DATA_KEY;
use crate::domain::errors::FormDataError;
use crate::domain::ports::FormRequest;

/// Reads the request's form body and deserializes the JSON stored under
/// `formData`.
pub async fn parse_form_data<T, R>(request: R) -> Result<T, FormDataError>
where
    T: DeserializeOwned,
    R: FormRequest,
{
    parse_form_data_at(request, DEFAULT_FORM_DATA_KEY).await
}

// Same as `parse_form_data` with a caller-chosen field name.
pub async fn parse_form_data_at<T, R>(request: R, key: &str) -> Result<T, FormDataError>
where
    T: DeserializeOwned,
    R: FormRequest,
{
    let payload = request.form_data().await?;
    tracing::debug!(key, entries = payload.len(), "form body read");
    payload.parse_json(key)
}

// Builds a record from a GET submission. Values that parse as JSON keep their
// JSON type; anything else stays a string. Repeated keys keep the last value.
pub fn get_form_data_from_search_params(uri: &Uri) -> Value {
    let query = uri.query().unwrap_or_default();
    let record: Map<String, Value> = url::form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| {
            let value = serde_json::from_str(&value).unwrap_or(Value::String(value.into_owned()));
            (name.into_owned(), value)
        })
        .collect();
    Value::Object(record)
}
