use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, Uri},
};

use crate::domain::entities::Validation;
use crate::domain::error_tree::FieldErrors;
use crate::domain::errors::FormDataError;
use crate::domain::ports::FormRequest;
use crate::interface_adapters::protocol::{CLIENT_ERRORS_KEY, ErrorResponse, SignupForm};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{
    get_validated_form_data_at, get_validated_form_data_from_search_params, merge_errors,
};

type SignupResult =
    Result<(StatusCode, Json<Validation<SignupForm>>), (StatusCode, Json<ErrorResponse>)>;

// Handler for POSTed signup forms. The body is read once; the record and any
// client-side errors both come from that single payload.
#[tracing::instrument(name = "submit_signup", skip_all)]
pub async fn submit_signup(State(state): State<Arc<AppState>>, request: Request) -> SignupResult {
    let payload = request.form_data().await.map_err(map_form_error)?;

    let client_errors = match payload.get(CLIENT_ERRORS_KEY) {
        Some(_) => payload
            .parse_json::<FieldErrors>(CLIENT_ERRORS_KEY)
            .map_err(map_form_error)?,
        None => FieldErrors::new(),
    };

    let validation = get_validated_form_data_at(payload, &state.form_data_key, &state.resolver)
        .await
        .map_err(map_form_error)?;

    Ok(respond(validation, &client_errors))
}

// Handler for GET submissions carried in the query string.
#[tracing::instrument(name = "query_signup", skip_all)]
pub async fn query_signup(State(state): State<Arc<AppState>>, uri: Uri) -> SignupResult {
    let validation = get_validated_form_data_from_search_params(&uri, &state.resolver)
        .await
        .map_err(map_form_error)?;

    Ok(respond(validation, &FieldErrors::new()))
}

fn respond(
    validation: Validation<SignupForm>,
    client_errors: &FieldErrors,
) -> (StatusCode, Json<Validation<SignupForm>>) {
    match validation {
        Validation::Valid(form) => {
            tracing::info!("signup accepted");
            (StatusCode::OK, Json(Validation::Valid(form)))
        }
        Validation::Invalid(server_errors) => {
            let errors = merge_errors(client_errors, Some(&server_errors));
            tracing::info!(fields = errors.len(), "signup rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(Validation::Invalid(errors)))
        }
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_form_error(err: FormDataError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        FormDataError::MissingField { .. }
        | FormDataError::NotText { .. }
        | FormDataError::Parse { .. }
        | FormDataError::Body(_) => {
            tracing::warn!(error = %err, "rejected form submission");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        FormDataError::Resolver(source) => {
            tracing::error!(error = %source, "resolver failed");
            error_response(StatusCode::BAD_GATEWAY, "validation unavailable")
        }
        FormDataError::Serialize(source) => {
            tracing::error!(error = %source, "failed to serialize form data");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
