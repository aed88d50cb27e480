use axum::http::Uri;
use serde_json::Value;

use crate::domain::entities::{DEFAULT_FORM_DATA_KEY, Validation};
use crate::domain::errors::FormDataError;
use crate::domain::ports::{FormRequest, Resolver, ResolverContext, ResolverOptions};
use crate::use_cases::parse::{get_form_data_from_search_params, parse_form_data_at};

/// Runs `data` through `resolver` and folds its report into a [`Validation`].
///
/// The resolver is called with an empty context, native validation turned
/// off and no field metadata. A non-empty error map always wins over any
/// values the resolver may also have returned.
pub async fn validate_form_data<R>(
    data: Value,
    resolver: &R,
) -> Result<Validation<R::Values>, FormDataError>
where
    R: Resolver,
{
    let context = ResolverContext::new();
    let options = ResolverOptions {
        should_use_native_validation: false,
        ..ResolverOptions::default()
    };

    let output = resolver
        .resolve(data, &context, &options)
        .await
        .map_err(FormDataError::Resolver)?;

    if !output.errors.is_empty() {
        tracing::debug!(fields = output.errors.len(), "form data rejected by resolver");
        return Ok(Validation::Invalid(output.errors));
    }

    output
        .values
        .map(Validation::Valid)
        .ok_or_else(|| FormDataError::Resolver("resolver returned neither values nor errors".into()))
}

// Parse the default field, then validate it.
pub async fn get_validated_form_data<Q, R>(
    request: Q,
    resolver: &R,
) -> Result<Validation<R::Values>, FormDataError>
where
    Q: FormRequest,
    R: Resolver,
{
    get_validated_form_data_at(request, DEFAULT_FORM_DATA_KEY, resolver).await
}

pub async fn get_validated_form_data_at<Q, R>(
    request: Q,
    key: &str,
    resolver: &R,
) -> Result<Validation<R::Values>, FormDataError>
where
    Q: FormRequest,
    R: Resolver,
{
    let data: Value = parse_form_data_at(request, key).await?;
    validate_form_data(data, resolver).await
}

// GET counterpart: the record comes from the query string.
pub async fn get_validated_form_data_from_search_params<R>(
    uri: &Uri,
    resolver: &R,
) -> Result<Validation<R::Values>, FormDataError>
where
    R: Resolver,
{
    let data = get_form_data_from_search_params(uri);
    validate_form_data(data, resolver).await
}
