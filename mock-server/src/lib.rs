use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

const DISCORD_WEBHOOK_PREFIXES: [&str; 2] = [
    "https://discord.com/api/webhooks/",
    "https://discordapp.com/api/webhooks/",
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    fn failure(message: &str, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
            errors,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Webhook {
    pub id: Uuid,
    pub url: String,
}

#[derive(Deserialize)]
pub struct RegisterWebhook {
    pub url: Option<String>,
}

/// Knobs tests use to provoke client-side failures.
#[derive(Clone, Debug)]
pub struct Options {
    /// Sleep before answering any request.
    pub delay: Duration,
    /// Registrations beyond this count are rejected with 429.
    pub max_webhooks: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            max_webhooks: 5,
        }
    }
}

pub struct Backend {
    notices: Vec<Value>,
    webhooks: RwLock<Vec<Webhook>>,
    options: Options,
}

pub type Db = Arc<Backend>;

pub fn app() -> Router {
    app_with(Options::default())
}

pub fn app_with(options: Options) -> Router {
    let db: Db = Arc::new(Backend {
        notices: sample_notices(),
        webhooks: RwLock::new(Vec::new()),
        options,
    });
    let api = Router::new()
        .route("/notices/recent", get(recent_notices))
        .route("/stats", get(stats))
        .route("/webhooks", post(register_webhook))
        .route("/webhooks/system-health", get(system_health));
    Router::new().nest("/api", api).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Options::default()).await
}

pub async fn run_with(listener: TcpListener, options: Options) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(options)).await
}

fn sample_notices() -> Vec<Value> {
    vec![
        json!({
            "noticeNum": "2200123",
            "subject": "개인정보 보호법 일부개정법률안",
            "proposerCategory": "의원",
            "committee": "정무위원회",
            "link": "https://pal.assembly.go.kr/napal/lgsltpa/lgsltpaOngoing/view.do?lgsltPaId=PRC_A1B2",
            "postedAt": "2025-06-02T09:00:00+09:00"
        }),
        json!({
            "noticeNum": "2200124",
            "subject": "도로교통법 일부개정법률안",
            "proposerCategory": "정부",
            "committee": "행정안전위원회",
            "link": "https://pal.assembly.go.kr/napal/lgsltpa/lgsltpaOngoing/view.do?lgsltPaId=PRC_C3D4",
            "postedAt": "2025-06-02T10:30:00+09:00"
        }),
    ]
}

async fn pause(db: &Db) {
    if !db.options.delay.is_zero() {
        tokio::time::sleep(db.options.delay).await;
    }
}

async fn recent_notices(State(db): State<Db>) -> Json<Envelope<Vec<Value>>> {
    pause(&db).await;
    Json(Envelope::data(db.notices.clone()))
}

async fn stats(State(db): State<Db>) -> Json<Envelope<Value>> {
    pause(&db).await;
    let webhooks = db.webhooks.read().await.len();
    Json(Envelope::data(json!({
        "totalNotices": db.notices.len(),
        "webhooks": { "total": webhooks, "active": webhooks },
    })))
}

async fn system_health(State(db): State<Db>) -> Json<Envelope<Value>> {
    pause(&db).await;
    let webhooks = db.webhooks.read().await.len();
    Json(Envelope::data(json!({
        "status": "healthy",
        "webhooks": { "total": webhooks, "healthy": webhooks, "unhealthy": 0 },
    })))
}

async fn register_webhook(
    State(db): State<Db>,
    Json(input): Json<RegisterWebhook>,
) -> (StatusCode, Json<Envelope<Value>>) {
    pause(&db).await;

    let url = input.url.unwrap_or_default();
    let errors = validate_url(&url);
    if !errors.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Validation failed", Some(errors))),
        );
    }

    let mut webhooks = db.webhooks.write().await;
    if webhooks.iter().any(|w| w.url == url) {
        return (
            StatusCode::CONFLICT,
            Json(Envelope::failure("Webhook URL already exists", None)),
        );
    }
    if webhooks.len() >= db.options.max_webhooks {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(Envelope::failure("Webhook limit reached", None)),
        );
    }

    let webhook = Webhook {
        id: Uuid::new_v4(),
        url,
    };
    let id = webhook.id;
    webhooks.push(webhook);
    tracing::info!(%id, "webhook registered");
    (
        StatusCode::CREATED,
        Json(Envelope {
            success: true,
            data: Some(json!({ "id": id })),
            message: Some("Webhook registered".to_string()),
            errors: None,
        }),
    )
}

fn validate_url(url: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if url.trim().is_empty() {
        errors.push("Webhook URL is required.".to_string());
    } else if !DISCORD_WEBHOOK_PREFIXES.iter().any(|p| url.starts_with(p)) {
        errors.push("Webhook URL must be a Discord webhook URL.".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_skips_absent_fields() {
        let json = serde_json::to_value(Envelope::data(1)).unwrap();
        assert_eq!(json, json!({ "success": true, "data": 1 }));
    }

    #[test]
    fn failure_envelope_has_no_data() {
        let env: Envelope<Value> = Envelope::failure("nope", Some(vec!["a".to_string()]));
        let json = serde_json::to_value(env).unwrap();
        assert_eq!(json, json!({ "success": false, "message": "nope", "errors": ["a"] }));
    }

    #[test]
    fn validate_accepts_discord_urls() {
        assert!(validate_url("https://discord.com/api/webhooks/1/abc").is_empty());
        assert!(validate_url("https://discordapp.com/api/webhooks/1/abc").is_empty());
    }

    #[test]
    fn validate_rejects_other_urls() {
        assert_eq!(validate_url("").len(), 1);
        assert_eq!(validate_url("https://example.com/hook").len(), 1);
    }

    #[test]
    fn register_webhook_tolerates_missing_url() {
        let input: RegisterWebhook = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert!(input.url.is_none());
        assert_eq!(validate_url(&input.url.unwrap_or_default()), vec!["Webhook URL is required."]);
    }
}
