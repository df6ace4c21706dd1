
use actix_http::StatusCode;
use actix_web::test;
use board_lib::Database;
use sea_orm::DbBackend;

#[tokio::test]
async fn test_not_found() -> anyhow::Result<()> {
    let db = Database::from_mock_db(DbBackend::MySql);
    let app = base::get_app(db).await;
    let req = test::TestRequest::get().uri("/").to_request();

    let resp = test::call_service(&app, req).await;
    let status_code = resp.status();

    let body = test::read_body(resp).await;
    let error: base::ErrorResponse = serde_json::from_slice(&body)?;

    assert_eq!(status_code, StatusCode::NOT_FOUND);
    assert_eq!(error.r#type, 301);
    assert_eq!(error.message, "not found");

    Ok(())
}

#[tokio::test]
async fn test_info() -> anyhow::Result<()> {
    #[derive(serde::Deserialize)]
    struct InfoResponse {
        service_name: String,
        api_version: String,
    }

    let db = Database::from_mock_db(DbBackend::MySql);
    let app = base::get_app(db).await;
    let req = test::TestRequest::get().uri("/info").to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status();

    let body = test::read_body(resp).await;
    let body: InfoResponse = serde_json::from_slice(&body)?;

    assert_eq!(status, 200);
    assert_eq!(body.service_name, "Community Board API");
    assert_eq!(body.api_version, env!("CARGO_PKG_VERSION"));

    Ok(())
}
