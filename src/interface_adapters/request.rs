use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::extract::{FromRequest, Multipart};
use axum::http::{Method, Request, header};

use crate::domain::entities::{FormFile, FormPayload, FormValue};
use crate::domain::errors::FormDataError;
use crate::domain::ports::FormRequest;

// Upper bound for urlencoded bodies; matches axum's default body limit.
pub const MAX_FORM_BODY_BYTES: usize = 2 * 1024 * 1024;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

// Reads urlencoded and multipart bodies; anything else is not a form.
#[async_trait]
impl FormRequest for Request<Body> {
    async fn form_data(self) -> Result<FormPayload, FormDataError> {
        let content_type = self
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(value) if value.starts_with(URLENCODED) => read_urlencoded(self).await,
            Some(value) if value.starts_with(MULTIPART) => read_multipart(self).await,
            Some(value) => Err(FormDataError::Body(format!(
                "unsupported content type `{value}`"
            ))),
            None => Err(FormDataError::Body("missing content type".to_string())),
        }
    }
}

async fn read_urlencoded(request: Request<Body>) -> Result<FormPayload, FormDataError> {
    let bytes = to_bytes(request.into_body(), MAX_FORM_BODY_BYTES)
        .await
        .map_err(|err| FormDataError::Body(err.to_string()))?;

    Ok(url::form_urlencoded::parse(&bytes)
        .into_owned()
        .map(|(name, value)| (name, FormValue::Text(value)))
        .collect())
}

async fn read_multipart(request: Request<Body>) -> Result<FormPayload, FormDataError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| FormDataError::Body(rejection.to_string()))?;

    let mut payload = FormPayload::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| FormDataError::Body(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        // Parts with a file name are attachments even when their bytes are UTF-8.
        let value = match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| FormDataError::Body(err.to_string()))?;
                FormValue::File(FormFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                })
            }
            None => FormValue::Text(
                field
                    .text()
                    .await
                    .map_err(|err| FormDataError::Body(err.to_string()))?,
            ),
        };
        payload.append(name, value);
    }

    Ok(payload)
}

// Builds the POST request a browser would send for `payload`.
pub fn build_form_request(
    uri: &str,
    payload: &FormPayload,
) -> Result<Request<Body>, axum::http::Error> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, URLENCODED)
        .body(Body::from(payload.to_urlencoded()))
}
