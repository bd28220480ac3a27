use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{envy::Envy, errors::DefaultApiError, models::api_error::ApiError},
    credentials::CredentialPool,
    dispatch::{service::DispatcherConfig, Dispatcher},
    provider::gemini::{
        config::{IMAGE_MODEL, TEXT_MODEL},
        GeminiProvider,
    },
};

mod app;
mod credentials;
mod dispatch;
mod media;
mod prompts;
mod provider;
mod styles;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub dispatcher: Arc<Dispatcher>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let port = envy.port.unwrap_or(Envy::DEFAULT_PORT);
    let state = match build_state(envy) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("failed to start: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        credentials = state.dispatcher.pool().len(),
        "credential pool ready"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await
        .expect("server error");
}

/// Wires the credential pool, provider and dispatcher. Refuses to start
/// without at least one credential.
pub fn build_state(envy: Envy) -> Result<AppState, String> {
    let credentials = envy.credentials();
    if credentials.is_empty() {
        return Err("GEMINI_API_KEYS must contain at least one API key".to_string());
    }

    let timeout = Duration::from_secs(
        envy.request_timeout_secs
            .unwrap_or(Envy::DEFAULT_REQUEST_TIMEOUT_SECS),
    );
    let provider = GeminiProvider::new(envy.gemini_api_url.as_deref(), timeout)?;

    let config = DispatcherConfig {
        image_model: envy
            .image_model
            .clone()
            .unwrap_or_else(|| IMAGE_MODEL.to_string()),
        text_model: envy
            .text_model
            .clone()
            .unwrap_or_else(|| TEXT_MODEL.to_string()),
        safety_threshold: envy.safety_threshold.clone(),
    };

    let dispatcher = Dispatcher::new(
        Arc::new(CredentialPool::new(credentials)),
        Arc::new(provider),
        config,
    );

    Ok(AppState {
        envy: Arc::new(envy),
        dispatcher: Arc::new(dispatcher),
    })
}

pub fn app(state: AppState) -> Router {
    let body_limit = state
        .envy
        .body_limit_bytes
        .unwrap_or(Envy::DEFAULT_BODY_LIMIT_BYTES);
    let rate_limit = state
        .envy
        .rate_limit_per_sec
        .unwrap_or(Envy::DEFAULT_RATE_LIMIT_PER_SEC)
        .max(1);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/images/generate", post(media::controller::generate_image))
        .route(
            "/images/generate/gallery",
            post(media::controller::generate_gallery),
        )
        .route("/images/edit", post(media::controller::edit_image))
        .route(
            "/images/edit/gallery",
            post(media::controller::edit_gallery),
        )
        .route("/images/upscale", post(media::controller::upscale_image))
        // prompts
        .route(
            "/prompts/upscale",
            post(prompts::controller::upscale_prompt),
        )
        .route(
            "/prompts/explore",
            get(prompts::controller::get_explore_prompts),
        )
        // styles
        .route("/styles", get(styles::controller::get_styles))
        .route("/styles/suggest", post(styles::controller::suggest_styles))
        .fallback(app::controller::fallback)
        // layers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        )
        .with_state(state)
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    tracing::error!(%err, "middleware failure");
    DefaultApiError::InternalServerError.value()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        dispatch::{
            errors::DispatchError,
            service::tests::{dispatcher_with, FakeProvider},
        },
        styles::config::DEFAULT_STYLES,
    };

    fn envy_with_keys(keys: &str) -> Envy {
        envy::from_iter(vec![("GEMINI_API_KEYS".to_string(), keys.to_string())]).unwrap()
    }

    fn test_app(provider: FakeProvider) -> Router {
        app(AppState {
            envy: Arc::new(envy_with_keys("k1,k2")),
            dispatcher: Arc::new(dispatcher_with(&["k1", "k2"], Arc::new(provider))),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn refuses_to_start_without_credentials() {
        let result = build_state(envy_with_keys(" , "));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn builds_state_with_configured_credentials() {
        let state = build_state(envy_with_keys("alpha,beta,gamma")).unwrap();

        assert_eq!(state.dispatcher.pool().len(), 3);
    }

    #[tokio::test]
    async fn root_reports_pool_size() {
        let response = test_app(FakeProvider::text("unused"))
            .oneshot(get_req("/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "online", "credentials": 2 })
        );
    }

    #[tokio::test]
    async fn generate_returns_image_url() {
        let response = test_app(FakeProvider::image("data:image/png;base64,AAAA"))
            .oneshot(post_json(
                "/images/generate",
                json!({
                    "prompt": "a fox in the snow at dusk",
                    "style": "Watercolor",
                    "quality": "Standard",
                    "expandPrompt": false
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "imageUrl": "data:image/png;base64,AAAA" })
        );
    }

    #[tokio::test]
    async fn gallery_reports_partial_failure_per_slot() {
        let provider = FakeProvider::new(|index, _| match index {
            2 => Err(DispatchError::ProviderError("quota exceeded".to_string())),
            _ => Ok(crate::provider::models::provider_reply::ProviderReply {
                media: Some(crate::provider::models::provider_reply::ReplyMedia {
                    url: "data:image/png;base64,AAAA".to_string(),
                }),
                text: None,
            }),
        });

        let response = test_app(provider)
            .oneshot(post_json(
                "/images/generate/gallery",
                json!({
                    "prompt": "a fox in the snow at dusk",
                    "style": "Watercolor",
                    "expandPrompt": false
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let slots = body["slots"].as_array().unwrap();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots.iter().filter(|s| s.get("error").is_some()).count(), 1);
        assert_eq!(
            slots.iter().filter(|s| s.get("imageUrl").is_some()).count(),
            3
        );
    }

    #[tokio::test]
    async fn short_prompt_is_rejected_before_dispatch() {
        let response = test_app(FakeProvider::image("data:image/png;base64,AAAA"))
            .oneshot(post_json(
                "/images/generate",
                json!({ "prompt": "fox", "style": "Watercolor" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blank_prompts_fail_galleries_before_any_dispatch() {
        let provider = Arc::new(FakeProvider::image("data:image/png;base64,AAAA"));
        let router = app(AppState {
            envy: Arc::new(envy_with_keys("k1,k2")),
            dispatcher: Arc::new(dispatcher_with(&["k1", "k2"], provider.clone())),
        });

        let requests = [
            post_json(
                "/images/generate/gallery",
                json!({ "prompt": "               ", "style": "Watercolor", "expandPrompt": false }),
            ),
            post_json(
                "/images/generate",
                json!({ "prompt": "a         ", "style": "Watercolor", "expandPrompt": false }),
            ),
            post_json(
                "/images/edit/gallery",
                json!({ "prompt": "   \n   ", "image": "data:image/png;base64,AAAA" }),
            ),
            post_json("/styles/suggest", json!({ "basePrompt": "  \r\n " })),
            post_json("/prompts/upscale", json!({ "prompt": "    " })),
        ];

        for request in requests {
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert!(provider.credentials_used().is_empty());
    }

    #[tokio::test]
    async fn padded_prompt_is_trimmed_before_dispatch() {
        let provider = Arc::new(FakeProvider::image("data:image/png;base64,AAAA"));
        let router = app(AppState {
            envy: Arc::new(envy_with_keys("k1")),
            dispatcher: Arc::new(dispatcher_with(&["k1"], provider.clone())),
        });

        let response = router
            .oneshot(post_json(
                "/images/generate",
                json!({ "prompt": "   a fox in the snow\n ", "style": " Watercolor ", "expandPrompt": false }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let instruction = provider.last_call().instruction();
        assert!(instruction.contains("Prompt: a fox in the snow."));
        assert!(instruction.contains("Style: Watercolor."));
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let response = test_app(FakeProvider::text("unused"))
            .oneshot(get_req("/videos"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "No such route.");
    }

    #[tokio::test]
    async fn malformed_image_is_rejected() {
        let response = test_app(FakeProvider::image("data:image/png;base64,AAAA"))
            .oneshot(post_json(
                "/images/edit",
                json!({ "prompt": "add a hat", "image": "not-a-data-uri" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let response = test_app(FakeProvider::image("data:image/png;base64,AAAA"))
            .oneshot(post_json("/images/upscale", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_bad_gateway() {
        let provider = FakeProvider::new(|_, _| {
            Err(DispatchError::ProviderError("model overloaded".to_string()))
        });

        let response = test_app(provider)
            .oneshot(post_json(
                "/prompts/upscale",
                json!({ "prompt": "a red balloon" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await["message"],
            "Provider error: model overloaded"
        );
    }

    #[tokio::test]
    async fn styles_lists_defaults() {
        let response = test_app(FakeProvider::text("unused"))
            .oneshot(get_req("/styles"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["styles"].as_array().map(Vec::len),
            Some(DEFAULT_STYLES.len())
        );
    }

    #[tokio::test]
    async fn explore_lists_six_prompts() {
        let response = test_app(FakeProvider::text("unused"))
            .oneshot(get_req("/prompts/explore"))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(6));
    }
}
