
use std::collections::BTreeMap;

use actix_http::StatusCode;
use actix_web::test;
use board_lib::Database;
use sea_orm::{DbBackend, MockDatabase, MockExecResult, Value};

fn post_row(id: u32, title: &str, author: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", id.into()),
        ("title", title.into()),
        ("author", author.into()),
        ("created_at", base::timestamp().into()),
    ])
}

#[tokio::test]
async fn search_joins_author_and_sorts_by_username() -> anyhow::Result<()> {
    let db = Database::from_mock_db_with_query_results(
        DbBackend::MySql,
        [
            vec![base::count_row(2)],
            vec![
                post_row(4, "Hello there", "bob"),
                post_row(2, "Hello world", "alice"),
            ],
        ],
    );
    let app = base::get_app(db.clone()).await;

    let req = test::TestRequest::get()
        .uri("/post/search?searchType=title&keyword=Hello&sort=author,desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert_eq!(body["content"][0]["author"], "bob");
    assert_eq!(body["pageable"]["totalElements"], 2);
    assert_eq!(body["pageable"]["sorted"], true);

    let log = format!("{:?}", db.sql_conn.into_transaction_log());
    assert!(log.contains("ORDER BY `members`.`username` DESC"), "{log}");
    assert!(log.contains("%Hello%"), "{log}");

    Ok(())
}

#[tokio::test]
async fn publish_requires_a_registered_author() -> anyhow::Result<()> {
    let db = Database::from_mock_db_with_query_results(
        DbBackend::MySql,
        [Vec::<entity::members::Model>::new()],
    );
    let app = base::get_app(db).await;

    let req = test::TestRequest::post()
        .uri("/post/publish")
        .set_json(serde_json::json!({
            "author": "nobody",
            "title": "First!",
            "content": "...",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();

    let body = test::read_body(resp).await;
    let error: base::ErrorResponse = serde_json::from_slice(&body)?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.r#type, 302);

    Ok(())
}

#[tokio::test]
async fn publish_inserts_and_returns_the_post() -> anyhow::Result<()> {
    let db = Database {
        sql_conn: MockDatabase::new(DbBackend::MySql)
            .append_query_results([vec![base::member(3, "carol")]])
            .append_query_results([vec![base::post(11, 3, "First!")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 11,
                rows_affected: 1,
            }])
            .into_connection(),
    };
    let app = base::get_app(db).await;

    let req = test::TestRequest::post()
        .uri("/post/publish")
        .set_json(serde_json::json!({
            "author": "carol",
            "title": "First!",
            "content": "Lorem ipsum dolor sit amet",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 11);
    assert_eq!(body["author"], "carol");
    assert_eq!(body["title"], "First!");
    assert!(body["created_at"].is_string());

    Ok(())
}

#[tokio::test]
async fn edit_updates_the_changed_fields() -> anyhow::Result<()> {
    let db = Database::from_mock_db_with_initial(
        DbBackend::MySql,
        [
            vec![base::post(5, 3, "Old title")],
            vec![base::post(5, 3, "New title")],
        ],
        [MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }],
    );
    let app = base::get_app(db.clone()).await;

    let req = test::TestRequest::post()
        .uri("/post/edit")
        .set_json(serde_json::json!({
            "post_id": 5,
            "title": "New title",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let log = format!("{:?}", db.sql_conn.into_transaction_log());
    assert!(log.contains("UPDATE `posts`"), "{log}");
    assert!(log.contains("New title"), "{log}");

    Ok(())
}

#[tokio::test]
async fn edit_unknown_post_is_an_error() -> anyhow::Result<()> {
    let db = Database::from_mock_db_with_query_results(
        DbBackend::MySql,
        [Vec::<entity::posts::Model>::new()],
    );
    let app = base::get_app(db).await;

    let req = test::TestRequest::post()
        .uri("/post/edit")
        .set_json(serde_json::json!({
            "post_id": 404,
            "title": "whatever",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();

    let body = test::read_body(resp).await;
    let error: base::ErrorResponse = serde_json::from_slice(&body)?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.r#type, 304);

    Ok(())
}

#[tokio::test]
async fn info_resolves_the_author_username() -> anyhow::Result<()> {
    let author_row = BTreeMap::from([("username", Into::<Value>::into("alice"))]);
    let db = Database {
        sql_conn: MockDatabase::new(DbBackend::MySql)
            .append_query_results([vec![base::post(2, 1, "Hello world")]])
            .append_query_results([vec![author_row]])
            .into_connection(),
    };
    let app = base::get_app(db).await;

    let req = test::TestRequest::get().uri("/post/info?id=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["author"], "alice");
    assert_eq!(body["title"], "Hello world");

    Ok(())
}
