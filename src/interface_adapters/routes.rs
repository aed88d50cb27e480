use std::sync::Arc;

use crate::interface_adapters::handlers::{query_signup, submit_signup};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/signup", get(query_signup).post(submit_signup))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DEFAULT_FORM_DATA_KEY, FormPayload};
    use crate::interface_adapters::request::build_form_request;
    use crate::interface_adapters::resolvers::SignupResolver;
    use crate::use_cases::create::create_form_data;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn build_test_app() -> Router {
        app(Arc::new(AppState {
            resolver: SignupResolver,
            form_data_key: DEFAULT_FORM_DATA_KEY.to_string(),
        }))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    fn valid_signup() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "address": { "city": "London", "zip": "12345" }
        })
    }

    #[tokio::test]
    async fn when_signup_is_valid_then_returns_200_with_data() {
        let payload = create_form_data(&valid_signup()).expect("expected payload");
        let request = build_form_request("/signup", &payload).expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["errors"], Value::Null);
        assert_eq!(payload["data"], valid_signup());
    }

    #[tokio::test]
    async fn when_signup_is_invalid_then_returns_422_with_errors() {
        let payload = create_form_data(&json!({
            "name": "Al",
            "email": "ada@example.com",
            "address": { "city": "London", "zip": "123" }
        }))
        .expect("expected payload");
        let request = build_form_request("/signup", &payload).expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = json_body(response).await;
        assert_eq!(payload["data"], Value::Null);
        assert_eq!(payload["errors"]["name"]["type"], "minLength");
        assert_eq!(payload["errors"]["address"]["zip"]["message"], "zip must be 5 digits");
    }

    #[tokio::test]
    async fn when_client_errors_are_sent_then_server_messages_are_merged_over_them() {
        let payload = create_form_data(&json!({
            "name": "Al",
            "email": "ada@example.com",
            "address": { "city": "London", "zip": "12345" }
        }))
        .expect("expected payload")
        .with_text(
            "clientErrors",
            json!({
                "name": { "type": "client", "message": "looks short" },
                "nickname": { "type": "maxLength", "message": "too long" }
            })
            .to_string(),
        );
        let request = build_form_request("/signup", &payload).expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = json_body(response).await;
        assert_eq!(
            payload["errors"],
            json!({
                "name": { "type": "client", "message": "name must be at least 3 characters" },
                "nickname": { "type": "maxLength", "message": "too long" }
            })
        );
    }

    #[tokio::test]
    async fn when_form_data_field_is_missing_then_returns_400_and_error_message() {
        let payload = FormPayload::new().with_text("other", "{}");
        let request = build_form_request("/signup", &payload).expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "form field `formData` is missing");
    }

    #[tokio::test]
    async fn when_form_data_is_not_json_then_returns_400() {
        let payload = FormPayload::new().with_text("formData", "name=Ada");
        let request = build_form_request("/signup", &payload).expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_body_is_json_instead_of_form_then_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/signup")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"formData":"{}"}"#))
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_signup_is_sent_as_query_string_then_returns_200() {
        let request = Request::builder()
            .method("GET")
            .uri("/signup?name=Ada%20Lovelace&email=ada%40example.com&address=%7B%22city%22%3A%22London%22%2C%22zip%22%3A%2212345%22%7D")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["data"], valid_signup());
    }

    #[tokio::test]
    async fn when_signup_route_is_called_with_put_then_returns_405() {
        let request = Request::builder()
            .method("PUT")
            .uri("/signup")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn when_route_does_not_exist_then_returns_404() {
        let request = Request::builder()
            .method("POST")
            .uri("/does-not-exist")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
