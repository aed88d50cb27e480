use std::env;

use crate::domain::entities::DEFAULT_FORM_DATA_KEY;

// Runtime settings read from the environment (`.env` is loaded first).

pub fn http_port() -> u16 {
    env::var("FORM_BRIDGE_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3004)
}

pub fn form_data_key() -> String {
    env::var("FORM_DATA_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FORM_DATA_KEY.to_string())
}
