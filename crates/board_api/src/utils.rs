use std::{
    convert::Infallible,
    future::{Ready, ready},
};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use board_lib::{Database, page::PageRequest};
use sea_orm::DbConn;
use serde::Serialize;

/// Converts the provided body to a `200 OK` JSON responses.
pub fn json<T: Serialize, E>(obj: T) -> Result<HttpResponse, E> {
    Ok(HttpResponse::Ok().json(obj))
}

/// Extracts the SQL connection of the database registered in the app data.
pub struct ExtractDbConn(pub DbConn);

impl FromRequest for ExtractDbConn {
    type Error = Infallible;

    type Future = Ready<Result<Self, Infallible>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let db = req
            .app_data::<Database>()
            .expect("Database app data should be present")
            .clone();
        ready(Ok(Self(db.sql_conn)))
    }
}

/// Extracts the pagination request from the query string of the request.
///
/// Repeated `sort` parameters are kept in request order. A malformed query string degrades
/// to the default pagination, consistent with the clamping of
/// [`PageRequest::from_query_pairs`].
pub struct PageQuery(pub PageRequest);

impl FromRequest for PageQuery {
    type Error = Infallible;

    type Future = Ready<Result<Self, Infallible>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let page_req = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map(|pairs| PageRequest::from_query_pairs(pairs.into_inner()))
            .unwrap_or_default();
        ready(Ok(Self(page_req)))
    }
}
