use std::net::SocketAddr;

use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    }
}

/// A private SQLite file, so the test can open a second connection to inspect rows.
fn file_database() -> (DatabaseConfig, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!("dp-e2e-{}.db", uuid::Uuid::new_v4()));
    let database = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    (database, path)
}

/// Serve the real router over TCP against the given store.
async fn start_server_with(database: &DatabaseConfig) -> anyhow::Result<TestApp> {
    let app = server::build_app(database).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

async fn start_server() -> anyhow::Result<TestApp> {
    start_server_with(&memory_database()).await
}

async fn create(app: &TestApp, body: serde_json::Value) -> anyhow::Result<serde_json::Value> {
    let res = reqwest::Client::new()
        .post(format!("{}/api/v1/example", app.base_url))
        .json(&body)
        .send()
        .await?;
    // 业务结果在响应体中，传输层状态始终为 200
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body,
        json!({"status":"UP","components":{"db":{"status":"UP"},"diskSpace":{"status":"UP"}}})
    );
    Ok(())
}

#[tokio::test]
async fn e2e_create_success() -> anyhow::Result<()> {
    let app = start_server().await?;

    let body = create(&app, json!({"userId": 1, "dpValue": 12345})).await?;

    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["response"], "DataProcessor created successfully");
    assert_eq!(body["statusCode"], 200);
    let request_id = body["requestId"].as_str().unwrap_or_default();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
    Ok(())
}

#[tokio::test]
async fn e2e_create_with_null_value_fails_validation() -> anyhow::Result<()> {
    let app = start_server().await?;

    let body = create(&app, json!({"userId": 1, "dpValue": null})).await?;

    assert_eq!(body["status"], "FAILURE");
    assert_eq!(body["response"], "DataProcessor doesn't exist");
    assert_eq!(body["statusCode"], 400);
    Ok(())
}

#[tokio::test]
async fn e2e_repeat_submission_overwrites() -> anyhow::Result<()> {
    let (database, path) = file_database();
    let app = start_server_with(&database).await?;

    let first = create(&app, json!({"userId": 7, "dpValue": 1})).await?;
    let second = create(&app, json!({"userId": 7, "dpValue": 2})).await?;

    assert_eq!(first["statusCode"], 200);
    assert_eq!(second["statusCode"], 200);
    assert_ne!(first["requestId"], second["requestId"]);

    let db = models::db::connect_with_config(&database).await?;
    let stored = models::data_processor::find(&db, 7).await?;
    assert_eq!(stored.map(|m| m.dp_value), Some(2));
    drop(db);
    std::fs::remove_file(path).ok();
    Ok(())
}
