// Domain layer: payload, validation outcome and error tree types plus ports.

pub mod entities;
pub mod error_tree;
pub mod errors;
pub mod ports;

pub use entities::{DEFAULT_FORM_DATA_KEY, FormFile, FormPayload, FormValue, Validation};
pub use error_tree::{ErrorLeaf, FieldError, FieldErrors};
pub use errors::{BoxError, FormDataError};
pub use ports::{FormRequest, Resolver, ResolverContext, ResolverOptions, ResolverOutput};
