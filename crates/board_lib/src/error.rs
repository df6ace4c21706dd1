//! A module containing the [`BoardError`] struct, which contains various basic error types.

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum BoardError {
    // --------
    // --- Internal server errors
    // --------

    /// An error from the database.
    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),
    /// An internal error.
    #[error("internal error: {0}")]
    Internal(String),

    // --------
    // --- Logical errors
    // --------

    /// The member with the provided username was not found.
    #[error("member with username `{0}` not found in database")]
    MemberNotFound(
        /// The member username.
        String,
    ),
    /// A member with the provided username is already registered.
    #[error("member with username `{0}` already exists in database")]
    MemberAlreadyExists(
        /// The member username.
        String,
    ),
    /// The post with the provided ID was not found.
    #[error("post with id `{0}` not found in database")]
    PostNotFound(
        /// The post ID.
        u32,
    ),
}

/// Shortcut for creating an internal error, by formatting a message.
///
/// See [`BoardError::Internal`].
#[macro_export]
macro_rules! internal {
    ($($t:tt)*) => {{
        $crate::error::BoardError::Internal($crate::error::__private::format!($($t)*))
    }};
}

#[doc(hidden)]
pub mod __private {
    pub use std::format;
}

/// Represents the result of a computation that could return a [`BoardError`].
pub type BoardResult<T = ()> = Result<T, BoardError>;
