// Interface adapters: axum request reading, the demo resolver and HTTP wiring.

pub mod handlers;
pub mod protocol;
pub mod request;
pub mod resolvers;
pub mod routes;
pub mod state;
