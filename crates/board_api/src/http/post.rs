use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Json},
};
use board_lib::{internal, must, page};
use entity::{members, posts};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, EntityTrait, FromQueryResult,
    IntoSimpleExpr as _, QueryFilter, QuerySelect, sea_query::SimpleExpr,
};
use serde::{Deserialize, Serialize};
use tracing_actix_web::RequestId;

use crate::{
    ApiResponse, ApiResultExt as _, FitRequestId as _,
    utils::{ExtractDbConn, PageQuery, json},
};

pub fn post_scope() -> Scope {
    web::scope("/post")
        .route("/publish", web::post().to(publish))
        .route("/edit", web::post().to(edit))
        .route("/info", web::get().to(info))
        .route("/search", web::get().to(search))
}

/// Resolves a request-supplied sort field to a post column.
///
/// The listing always joins the author, so their username is sortable too.
fn sort_column(field: &str) -> Option<SimpleExpr> {
    let col = match field {
        "id" => posts::Column::Id.into_simple_expr(),
        "title" => posts::Column::Title.into_simple_expr(),
        "created_at" => posts::Column::CreatedAt.into_simple_expr(),
        "author" => members::Column::Username.into_simple_expr(),
        _ => return None,
    };
    Some(col)
}

#[derive(Deserialize)]
pub struct PublishBody {
    author: String,
    title: String,
    content: String,
}

#[derive(Serialize)]
struct PostResponse {
    id: u32,
    author: String,
    title: String,
    content: String,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

async fn publish(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<PublishBody>,
) -> ApiResponse<impl Responder> {
    let author = must::have_member(&conn, &body.author).await.fit(req_id)?;

    let new_post = posts::ActiveModel {
        member_id: Set(author.id),
        title: Set(body.title),
        content: Set(body.content),
        ..Default::default()
    };

    let post = new_post.insert(&conn).await.with_api_err().fit(req_id)?;

    json(PostResponse {
        id: post.id,
        author: author.username,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
    })
}

#[derive(Deserialize)]
pub struct EditBody {
    post_id: u32,
    title: Option<String>,
    content: Option<String>,
}

async fn edit(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<EditBody>,
) -> ApiResponse<impl Responder> {
    let post = must::have_post(&conn, body.post_id).await.fit(req_id)?;

    let mut updated_post = posts::ActiveModel::from(post);

    if let Some(title) = body.title {
        updated_post.title = Set(title);
    }
    if let Some(content) = body.content {
        updated_post.content = Set(content);
    }

    if updated_post.is_changed() {
        updated_post.update(&conn).await.with_api_err().fit(req_id)?;
    }

    Ok(HttpResponse::Ok().finish())
}

#[derive(Deserialize)]
pub struct InfoBody {
    id: u32,
}

#[derive(Serialize)]
struct InfoResponse {
    id: u32,
    title: String,
    content: String,
    author: String,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

pub async fn info(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    web::Query(body): web::Query<InfoBody>,
) -> ApiResponse<impl Responder> {
    let post = must::have_post(&conn, body.id).await.fit(req_id)?;

    let author = members::Entity::find_by_id(post.member_id)
        .select_only()
        .column(members::Column::Username)
        .into_tuple::<String>()
        .one(&conn)
        .await
        .with_api_err()
        .fit(req_id)?
        .ok_or_else(|| internal!("Member {} should be in database", post.member_id))
        .fit(req_id)?;

    json(InfoResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author,
        created_at: post.created_at,
        updated_at: post.updated_at,
    })
}

/// The searchable post fields.
#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PostSearchKind {
    Title,
    Content,
    Author,
}

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchType")]
    search_type: Option<PostSearchKind>,
    keyword: Option<String>,
}

#[derive(Serialize, FromQueryResult)]
struct PostListItem {
    id: u32,
    title: String,
    author: String,
    created_at: chrono::NaiveDateTime,
}

async fn search(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    PageQuery(page_req): PageQuery,
    web::Query(body): web::Query<SearchBody>,
) -> ApiResponse<impl Responder> {
    let mut select = posts::Entity::find().inner_join(members::Entity);

    let keyword = body.keyword.filter(|keyword| !keyword.is_empty());
    if let (Some(kind), Some(keyword)) = (body.search_type, keyword) {
        select = match kind {
            PostSearchKind::Title => select.filter(posts::Column::Title.contains(&keyword)),
            PostSearchKind::Content => select.filter(posts::Column::Content.contains(&keyword)),
            PostSearchKind::Author => select.filter(members::Column::Username.eq(&keyword)),
        };
    }

    let select = page::apply_sort(select, &page_req.sorts, sort_column)
        .select_only()
        .columns([
            posts::Column::Id,
            posts::Column::Title,
            posts::Column::CreatedAt,
        ])
        .column_as(members::Column::Username, "author")
        .into_model::<PostListItem>();

    let page = page::fetch_page(&conn, select, &page_req).await.fit(req_id)?;

    json(page)
}
