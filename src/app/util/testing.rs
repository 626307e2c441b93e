use std::{collections::HashMap, net::TcpListener, sync::Arc};

use axum::Router;
use tokio::sync::RwLock;

use crate::{app::env::Envy, AppState};

/// Serves `router` on an ephemeral local port and returns its base url.
pub fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

pub fn test_envy(endpoint: &str) -> Envy {
    Envy {
        app_env: "test".to_string(),
        port: None,
        azure_openai_dalle3_api_key: "test-key".to_string(),
        azure_openai_api_endpoint_dalle3: endpoint.to_string(),
        azure_openai_dalle3_deployment: "dalle-3".to_string(),
        azure_openai_api_version: "2023-12-01-preview".to_string(),
        request_timeout_secs: Some(5),
        session_ttl_secs: 3600,
    }
}

pub fn test_state(endpoint: &str) -> AppState {
    AppState {
        envy: Arc::new(test_envy(endpoint)),
        http: reqwest::Client::new(),
        sessions: Arc::new(RwLock::new(HashMap::new())),
    }
}
