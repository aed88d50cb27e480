// Use cases layer: the form helpers themselves.

pub mod create;
pub mod merge;
pub mod parse;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use create::{create_form_data, create_form_data_at};
pub use merge::merge_errors;
pub use parse::{get_form_data_from_search_params, parse_form_data, parse_form_data_at};
pub use validate::{
    get_validated_form_data, get_validated_form_data_at,
    get_validated_form_data_from_search_params, validate_form_data,
};
