use crate::interface_adapters::resolvers::SignupResolver;

// Shared state for the signup routes.
pub struct AppState {
    pub resolver: SignupResolver,
    // Form field holding the serialized record.
    pub form_data_key: String,
}
