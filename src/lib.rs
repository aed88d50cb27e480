pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    BoxError, DEFAULT_FORM_DATA_KEY, ErrorLeaf, FieldError, FieldErrors, FormDataError, FormFile,
    FormPayload, FormRequest, FormValue, Resolver, ResolverContext, ResolverOptions,
    ResolverOutput, Validation,
};
pub use frameworks::server::{run, run_with_config};
pub use interface_adapters::request::build_form_request;
pub use use_cases::{
    create_form_data, create_form_data_at, get_form_data_from_search_params,
    get_validated_form_data, get_validated_form_data_at,
    get_validated_form_data_from_search_params, merge_errors, parse_form_data, parse_form_data_at,
    validate_form_data,
};
