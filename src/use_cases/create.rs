use serde::Serialize;

use crate::domain::entities::{DEFAULT_FORM_DATA_KEY, FormPayload};
use crate::domain::errors::FormDataError;

// Wraps `data` as JSON text under `formData`, ready to be submitted.
pub fn create_form_data<T>(data: &T) -> Result<FormPayload, FormDataError>
where
    T: Serialize + ?Sized,
{
    create_form_data_at(data, DEFAULT_FORM_DATA_KEY)
}

pub fn create_form_data_at<T>(data: &T, key: &str) -> Result<FormPayload, FormDataError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(data).map_err(FormDataError::Serialize)?;
    Ok(FormPayload::new().with_text(key, json))
}
