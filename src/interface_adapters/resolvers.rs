use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error_tree::{ErrorLeaf, FieldError, FieldErrors};
use crate::domain::errors::BoxError;
use crate::domain::ports::{Resolver, ResolverContext, ResolverOptions, ResolverOutput};
use crate::interface_adapters::protocol::{SignupAddress, SignupForm};

// Hand-written schema for the demo signup form.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignupResolver;

#[async_trait]
impl Resolver for SignupResolver {
    type Values = SignupForm;

    async fn resolve(
        &self,
        data: Value,
        _context: &ResolverContext,
        _options: &ResolverOptions,
    ) -> Result<ResolverOutput<SignupForm>, BoxError> {
        let name = check_name(data.get("name"));
        let email = check_email(data.get("email"));
        let address = check_address(data.get("address"));

        match (name, email, address) {
            (Ok(name), Ok(email), Ok(address)) => Ok(ResolverOutput::valid(SignupForm {
                name,
                email,
                address,
            })),
            (name, email, address) => {
                let errors = [
                    ("name", name.err()),
                    ("email", email.err()),
                    ("address", address.err()),
                ]
                .into_iter()
                .filter_map(|(field, error)| error.map(|error| (field.to_string(), error)))
                .collect();
                Ok(ResolverOutput::invalid(errors))
            }
        }
    }
}

fn leaf(kind: &str, message: impl Into<String>) -> FieldError {
    FieldError::Leaf(ErrorLeaf::new(message).with_kind(kind))
}

fn required(field: &str) -> FieldError {
    leaf("required", format!("{field} is required"))
}

// Trimmed, non-empty string content.
fn text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn check_name(value: Option<&Value>) -> Result<String, FieldError> {
    const MIN_LEN: usize = 3;
    const MAX_LEN: usize = 64;

    let name = text(value).ok_or_else(|| required("name"))?;
    let len = name.chars().count();
    if len < MIN_LEN {
        return Err(leaf(
            "minLength",
            format!("name must be at least {MIN_LEN} characters"),
        ));
    }
    if len > MAX_LEN {
        return Err(leaf(
            "maxLength",
            format!("name must be at most {MAX_LEN} characters"),
        ));
    }
    Ok(name.to_string())
}

fn check_email(value: Option<&Value>) -> Result<String, FieldError> {
    let email = text(value).ok_or_else(|| required("email"))?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(leaf("pattern", "email is not a valid address"));
    }
    Ok(email.to_ascii_lowercase())
}

fn check_address(value: Option<&Value>) -> Result<SignupAddress, FieldError> {
    let address = value
        .and_then(Value::as_object)
        .ok_or_else(|| required("address"))?;

    let mut errors = FieldErrors::new();
    let city = text(address.get("city"));
    if city.is_none() {
        errors.insert("city", required("city"));
    }
    let zip = text(address.get("zip"));
    match zip {
        None => {
            errors.insert("zip", required("zip"));
        }
        Some(zip) if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) => {
            errors.insert("zip", leaf("pattern", "zip must be 5 digits"));
        }
        Some(_) => {}
    }

    match (city, zip) {
        (Some(city), Some(zip)) if errors.is_empty() => Ok(SignupAddress {
            city: city.to_string(),
            zip: zip.to_string(),
        }),
        _ => Err(FieldError::Subtree(errors)),
    }
}
