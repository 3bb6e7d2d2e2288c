mod chat;
mod health;

pub use chat::{ButtonRequest, ChatRequest, ReplyResponse, button_handler, chat_handler};
pub use health::{HealthResponse, RefreshResponse, health_handler, refresh_handler};

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::cache::PageCache;
    use crate::config::Settings;
    use crate::router::ChatRouter;
    use crate::scheduler::RefreshScheduler;
    use crate::server::{AppState, build_app};
    use crate::variants::{DEFAULT_REPLY, GREETING_REPLY};

    fn app(variant: &str) -> Router {
        let vars: HashMap<&str, &str> = [("CHATBOT_VARIANT", variant)].into_iter().collect();
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        let cache = Arc::new(PageCache::new());
        let chat = ChatRouter::from_settings(&settings, Arc::clone(&cache)).unwrap();
        let scheduler = RefreshScheduler::new(
            chat.resolver().crawler().clone(),
            cache,
            settings.base_url.clone(),
        );
        build_app(AppState::new(chat, scheduler.handle()))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_chat_endpoint() {
        let (status, body) = send(app("hrms"), "POST", "/chat", Some(json!({"message": "hi"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"reply": GREETING_REPLY}));

        let (status, body) = send(
            app("hrms"),
            "POST",
            "/chat",
            Some(json!({"message": "xyz123 unrelated gibberish"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn test_button_endpoint() {
        let (status, body) = send(
            app("company"),
            "POST",
            "/button",
            Some(json!({"button": "HRMS System"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["reply"].as_str().unwrap().starts_with("🏢 HRMS"));

        let (_, body) = send(app("company"), "POST", "/button", Some(json!({"button": "foo"}))).await;
        assert_eq!(
            body["reply"],
            "Please select either 'HRMS System' or 'SCHOOL System' for more information."
        );
    }

    #[tokio::test]
    async fn test_button_route_absent_without_buttons() {
        let (status, _) = send(app("hrms"), "POST", "/button", Some(json!({"button": "HRMS System"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_refresh() {
        let (status, body) = send(app("school"), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "ok", "variant": "school", "cache_populated": false})
        );

        let (status, body) = send(app("school"), "POST", "/refresh", None).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, json!({"status": "scheduled"}));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/chat")
            .header(header::ORIGIN, "https://frontend.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app("company").oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
