use serde::{Deserialize, Serialize};

// Field name under which browsers may submit their own validation errors.
pub const CLIENT_ERRORS_KEY: &str = "clientErrors";

// Postal address nested inside the signup form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupAddress {
    pub city: String,
    pub zip: String,
}

// Signup record as it looks once the resolver has accepted it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub address: SignupAddress,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
