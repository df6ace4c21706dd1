use actix_web::{
    Responder, Scope,
    web::{self, Json},
};
use board_lib::{error::BoardError, page};
use entity::members;
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, EntityTrait, FromQueryResult,
    IntoSimpleExpr as _, QueryFilter, QuerySelect, sea_query::SimpleExpr,
};
use serde::{Deserialize, Serialize};
use tracing_actix_web::RequestId;

use crate::{
    ApiErrorKind, ApiResponse, ApiResultExt as _, FitRequestId as _,
    utils::{ExtractDbConn, PageQuery, json},
};

pub fn member_scope() -> Scope {
    web::scope("/member")
        .route("/register", web::post().to(register))
        .route("/info", web::get().to(info))
        .route("/search", web::get().to(search))
}

/// Resolves a request-supplied sort field to a member column.
///
/// This is the only place a request field name can become a column reference, so anything
/// not listed here is simply not sortable.
fn sort_column(field: &str) -> Option<SimpleExpr> {
    let col = match field {
        "id" => members::Column::Id,
        "username" => members::Column::Username,
        "email" => members::Column::Email,
        "created_at" => members::Column::CreatedAt,
        _ => return None,
    };
    Some(col.into_simple_expr())
}

#[derive(Deserialize)]
pub struct RegisterBody {
    username: String,
    name: String,
    email: String,
}

#[derive(Serialize)]
struct MemberResponse {
    id: u32,
    username: String,
    name: String,
    email: String,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

impl From<members::Model> for MemberResponse {
    fn from(member: members::Model) -> Self {
        Self {
            id: member.id,
            username: member.username,
            name: member.name,
            email: member.email,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

async fn register(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<RegisterBody>,
) -> ApiResponse<impl Responder> {
    let existing = board_lib::member::get_member_from_username(&conn, &body.username)
        .await
        .fit(req_id)?;
    if existing.is_some() {
        return Err(BoardError::MemberAlreadyExists(body.username)).fit(req_id);
    }

    let new_member = members::ActiveModel {
        username: Set(body.username),
        name: Set(body.name),
        email: Set(body.email),
        ..Default::default()
    };

    let member = new_member.insert(&conn).await.with_api_err().fit(req_id)?;

    json(MemberResponse::from(member))
}

#[derive(Deserialize)]
pub struct InfoBody {
    username: String,
}

#[derive(Serialize, FromQueryResult)]
struct InfoResponse {
    id: u32,
    username: String,
    name: String,
    email: String,
    created_at: chrono::NaiveDateTime,
}

pub async fn info(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    web::Query(body): web::Query<InfoBody>,
) -> ApiResponse<impl Responder> {
    let info = members::Entity::find()
        .filter(members::Column::Username.eq(&body.username))
        .select_only()
        .columns([
            members::Column::Id,
            members::Column::Username,
            members::Column::Name,
            members::Column::Email,
            members::Column::CreatedAt,
        ])
        .into_model::<InfoResponse>()
        .one(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    let Some(info) = info else {
        return Err(ApiErrorKind::from(BoardError::MemberNotFound(
            body.username,
        )))
        .fit(req_id);
    };

    json(info)
}

/// The searchable member fields.
#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum MemberSearchKind {
    Username,
    Email,
}

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchType")]
    search_type: Option<MemberSearchKind>,
    keyword: Option<String>,
}

#[derive(Serialize, FromQueryResult)]
struct MemberListItem {
    id: u32,
    username: String,
    name: String,
    created_at: chrono::NaiveDateTime,
}

async fn search(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    PageQuery(page_req): PageQuery,
    web::Query(body): web::Query<SearchBody>,
) -> ApiResponse<impl Responder> {
    let mut select = members::Entity::find();

    let keyword = body.keyword.filter(|keyword| !keyword.is_empty());
    if let (Some(kind), Some(keyword)) = (body.search_type, keyword) {
        let col = match kind {
            MemberSearchKind::Username => members::Column::Username,
            MemberSearchKind::Email => members::Column::Email,
        };
        select = select.filter(col.contains(&keyword));
    }

    let select = page::apply_sort(select, &page_req.sorts, sort_column)
        .select_only()
        .columns([
            members::Column::Id,
            members::Column::Username,
            members::Column::Name,
            members::Column::CreatedAt,
        ])
        .into_model::<MemberListItem>();

    let page = page::fetch_page(&conn, select, &page_req).await.fit(req_id)?;

    json(page)
}
