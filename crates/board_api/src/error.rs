use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};
use tracing_actix_web::RequestId;

#[derive(thiserror::Error, Debug)]
#[repr(i32)] // i32 to be used with clients that don't support unsigned integers
#[rustfmt::skip]
pub enum ApiErrorKind {
    // Caution: when creating a new error, you must ensure its code isn't
    // in conflict with another one in `board_lib::error::BoardError`.

    // --------
    // --- Internal server errors
    // --------

    #[error(transparent)]
    IOError(#[from] std::io::Error) = 101,

    // ...Errors from board_lib

    #[error("unknown error: {0}")]
    Unknown(String) = 105,

    // --------
    // --- Logical errors
    // --------

    #[error("not found")]
    EndpointNotFound = 301,

    // ...Errors from board_lib

    #[error(transparent)]
    Lib(#[from] board_lib::error::BoardError),
}

#[derive(serde::Serialize)]
pub struct ApiErrorKindResponse {
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for ApiErrorKind {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let (r#type, status_code) = self.get_err_type_and_status_code();
        let message = self.to_string();

        HttpResponse::build(status_code).json(ApiErrorKindResponse { r#type, message })
    }
}

impl ApiErrorKind {
    pub fn get_err_type_and_status_code(&self) -> (i32, StatusCode) {
        use ApiErrorKind as E;
        use StatusCode as S;
        use board_lib::error::BoardError as LE;

        match self {
            E::IOError(_) => (101, S::INTERNAL_SERVER_ERROR),
            E::Lib(LE::DbError(_)) => (102, S::INTERNAL_SERVER_ERROR),
            E::Lib(LE::Internal(_)) => (103, S::INTERNAL_SERVER_ERROR),
            E::Unknown(_) => (105, S::INTERNAL_SERVER_ERROR),

            E::EndpointNotFound => (301, S::NOT_FOUND),
            E::Lib(LE::MemberNotFound(_)) => (302, S::BAD_REQUEST),
            E::Lib(LE::MemberAlreadyExists(_)) => (303, S::BAD_REQUEST),
            E::Lib(LE::PostNotFound(_)) => (304, S::BAD_REQUEST),
        }
    }
}

impl From<sea_orm::DbErr> for ApiErrorKind {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Lib(value.into())
    }
}

#[derive(Debug)]
pub struct TracedError {
    pub status_code: Option<StatusCode>,
    pub r#type: Option<i32>,
    pub request_id: RequestId,
    pub error: actix_web::Error,
}

impl fmt::Display for TracedError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for TracedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl TracedError {
    fn to_err_res(&self, r#type: i32) -> ErrorResponse {
        ErrorResponse {
            request_id: self.request_id.to_string(),
            r#type,
            message: self.error.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for TracedError {
    fn error_response(&self) -> HttpResponse {
        let r#type = self.r#type.unwrap_or(105);
        let status_code = self
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        HttpResponse::build(status_code).json(self.to_err_res(r#type))
    }
}

pub type ApiResult<T> = Result<T, ApiErrorKind>;

/// The type returned by the route handlers: either their response, or an error traced with
/// the ID of the request that raised it.
pub type ApiResponse<T> = Result<T, TracedError>;

/// Attaches the ID of the current request to the error of a [`Result`], so the response
/// keeps the trace of what failed.
pub trait FitRequestId<T> {
    fn fit(self, request_id: RequestId) -> ApiResponse<T>;
}

impl<T, E> FitRequestId<T> for Result<T, E>
where
    ApiErrorKind: From<E>,
{
    fn fit(self, request_id: RequestId) -> ApiResponse<T> {
        self.map_err(|e| {
            let error = ApiErrorKind::from(e);
            let (r#type, status_code) = error.get_err_type_and_status_code();
            TracedError {
                status_code: Some(status_code),
                r#type: Some(r#type),
                request_id,
                error: error.into(),
            }
        })
    }
}

/// Converts a `Result<T, E>` in which `E` is convertible to [`board_lib::error::BoardError`]
/// into an [`ApiResult<T>`].
pub trait ApiResultExt<T> {
    fn with_api_err(self) -> ApiResult<T>;
}

impl<T, E> ApiResultExt<T> for Result<T, E>
where
    board_lib::error::BoardError: From<E>,
{
    fn with_api_err(self) -> ApiResult<T> {
        self.map_err(board_lib::error::BoardError::from)
            .map_err(Into::into)
    }
}
