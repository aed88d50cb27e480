use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::entities::FormPayload;
use crate::domain::error_tree::FieldErrors;
use crate::domain::errors::{BoxError, FormDataError};

// Port for anything that can hand over its form body. Taking `self` by value
// means the body is read at most once.
#[async_trait]
pub trait FormRequest: Send + Sized {
    async fn form_data(self) -> Result<FormPayload, FormDataError>;
}

// A payload that has already been read is its own source.
#[async_trait]
impl FormRequest for FormPayload {
    async fn form_data(self) -> Result<FormPayload, FormDataError> {
        Ok(self)
    }
}

// Caller-defined context forwarded to resolvers.
pub type ResolverContext = Map<String, Value>;

// Options passed to every resolver call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolverOptions {
    // Browser constraint validation is meaningless on the server.
    pub should_use_native_validation: bool,
    // Field metadata keyed by field name.
    pub fields: Map<String, Value>,
}

// What a resolver reports back: coerced values, field errors, or both empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverOutput<V> {
    pub values: Option<V>,
    pub errors: FieldErrors,
}

impl<V> ResolverOutput<V> {
    pub fn valid(values: V) -> Self {
        Self {
            values: Some(values),
            errors: FieldErrors::new(),
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            values: None,
            errors,
        }
    }
}

/// Validates a raw record against some schema.
///
/// Implementations usually wrap a validation library. Failures of the
/// resolver itself (as opposed to field errors) are returned as `Err` and
/// reach the caller unchanged.
#[async_trait]
pub trait Resolver: Send + Sync {
    type Values: Send;

    async fn resolve(
        &self,
        data: Value,
        context: &ResolverContext,
        options: &ResolverOptions,
    ) -> Result<ResolverOutput<Self::Values>, BoxError>;
}
