use std::{collections::HashMap, env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{env::Envy, errors::handle_middleware_error},
    sessions::models::session::SessionStore,
};

mod app;
mod images;
mod sessions;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub http: reqwest::Client,
    pub sessions: SessionStore,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/images/options", get(images::controller::get_options))
        .route("/images/generate", post(images::controller::generate_image))
        // sessions
        .route("/sessions", post(sessions::controller::create_session))
        .route(
            "/sessions/:id",
            get(sessions::controller::get_session_by_id),
        )
        .route(
            "/sessions/:id/generate",
            post(sessions::controller::generate_for_session),
        )
        .route(
            "/sessions/:id/examples",
            post(sessions::controller::select_example_for_session),
        )
        .route(
            "/sessions/:id/reset",
            post(sessions::controller::reset_session_by_id),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let http = match app::util::reqwest::build_client(envy.request_timeout_secs) {
        Ok(client) => client,
        Err(e) => panic!("failed to build http client: {:#?}", e),
    };

    let state = AppState {
        envy: Arc::new(envy),
        http,
        sessions: Arc::new(RwLock::new(HashMap::new())),
    };

    app::util::janitor::spawn(state.clone());

    // app
    let app = create_router(state)
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::util::testing::{spawn_server, test_state};

    use super::*;

    fn stub_endpoint() -> String {
        let router = Router::new().route(
            "/openai/deployments/:deployment/images/generations",
            post(|| async {
                Json(json!({
                    "created": 1,
                    "data": [{ "url": "https://images.test/generated.png", "revised_prompt": "r" }]
                }))
            }),
        );

        spawn_server(router)
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    #[tokio::test]
    async fn test_get_root() {
        let router = create_router(test_state("http://127.0.0.1:1"));

        let (status, body) = send(&router, Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "IconBuilder: DALL-E 3 Icon Generator");
        assert_eq!(body["subtitle"], "Please be patient after every submission");
    }

    #[tokio::test]
    async fn test_get_options() {
        let router = create_router(test_state("http://127.0.0.1:1"));

        let (status, body) = send(&router, Method::GET, "/images/options", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quality"]["values"], json!(["standard", "hd"]));
        assert_eq!(body["quality"]["default"], "standard");
        assert_eq!(body["style"]["values"], json!(["vivid", "natural"]));
        assert_eq!(body["style"]["default"], "vivid");
        assert_eq!(body["sizes"]["icon"], json!(["1024x1024"]));
        assert_eq!(
            body["sizes"]["headline"],
            json!(["1024x1024", "1792x1024", "1024x1792"])
        );
        assert_eq!(body["examples"]["icon"][3], "IconBuilder");
    }

    #[tokio::test]
    async fn test_generate_image() {
        let router = create_router(test_state(&stub_endpoint()));

        let (status, body) = send(
            &router,
            Method::POST,
            "/images/generate",
            Some(json!({ "mode": "icon", "subject": "IconBuilder" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "https://images.test/generated.png");
        assert_eq!(
            body["prompt"],
            "Rounded edges square mobile app logo design without text, 3d origami of a 'IconBuilder' GPT, subtle gradient, minimal blue background. Conveys the idea of the APPLICATION NAME: 'IconBuilder'"
        );
    }

    #[tokio::test]
    async fn test_generate_image_failure_is_bad_gateway() {
        let router = create_router(test_state("http://127.0.0.1:1"));

        let (status, body) = send(
            &router,
            Method::POST,
            "/images/generate",
            Some(json!({ "mode": "headline", "subject": "Markets rally" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("An error occurred during Azure DALL-E 3 query: "));
    }

    #[tokio::test]
    async fn test_generate_image_rejects_bad_input() {
        let router = create_router(test_state("http://127.0.0.1:1"));

        let (status, _) = send(
            &router,
            Method::POST,
            "/images/generate",
            Some(json!({ "mode": "icon", "subject": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &router,
            Method::POST,
            "/images/generate",
            Some(json!({ "mode": "icon", "subject": "App", "quality": "ultra" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &router,
            Method::POST,
            "/images/generate",
            Some(json!({ "mode": "poster", "subject": "App" })),
        )
        .await;
        assert!(status.is_client_error());
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_session_flow() {
        let router = create_router(test_state(&stub_endpoint()));

        let (status, session) = send(&router, Method::POST, "/sessions", None).await;
        assert_eq!(status, StatusCode::OK);
        let id = session["id"].as_str().unwrap().to_string();

        let (status, generation) = send(
            &router,
            Method::POST,
            &format!("/sessions/{}/examples", id),
            Some(json!({ "mode": "icon", "index": 2, "quality": "hd" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(generation["session"]["title"], "Headline2Image");
        assert_eq!(
            generation["session"]["image_url"],
            "https://images.test/generated.png"
        );

        let (status, session) =
            send(&router, Method::GET, &format!("/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["title"], "Headline2Image");

        let (status, session) = send(
            &router,
            Method::POST,
            &format!("/sessions/{}/reset", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["title"], Value::Null);
        assert_eq!(session["image_url"], Value::Null);

        let (status, generation) = send(
            &router,
            Method::POST,
            &format!("/sessions/{}/generate", id),
            Some(json!({ "mode": "headline", "subject": "Rain expected", "size": "1792x1024" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(generation["session"]["title"], Value::Null);
        assert_eq!(generation["image"]["prompt"], "Rain expected");
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let router = create_router(test_state("http://127.0.0.1:1"));

        let (status, body) = send(&router, Method::GET, "/sessions/missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Session not found.");
    }
}
