use thiserror::Error;

// Boxed error type used by resolvers and passed through untouched.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// Errors raised while moving form data between requests and resolvers.
#[derive(Debug, Error)]
pub enum FormDataError {
    #[error("form field `{key}` is missing")]
    MissingField { key: String },

    // The field exists but carries a file part instead of text.
    #[error("form field `{key}` is not a text value")]
    NotText { key: String },

    #[error("form field `{key}` does not hold valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read form body: {0}")]
    Body(String),

    #[error(transparent)]
    Resolver(BoxError),

    #[error("failed to serialize form data: {0}")]
    Serialize(#[source] serde_json::Error),
}
