//! This module contains utility functions used to retrieve some objects from the database,
//! that must exist. This is why it is called `must`.
//!
//! This module is used when a route is called at a point where something must be already
//! registered in the database, like a member or a post.
//!
//! Unlike the Rust conventions, when such an object doesn't exist, the returned value isn't
//! `Option::None` but the corresponding error (for example, `BoardError::MemberNotFound`).
//! This makes the code cleaner thanks to the [`Try`](std::ops::Try) trait syntax, because at
//! some point we most likely want things to be already existing, without checking it
//! repeatedly and returning the error to the client.

use entity::{members, posts};
use sea_orm::ConnectionTrait;

use crate::{
    error::{BoardError, BoardResult},
    member, post,
};

/// Returns the member in the database bound to the provided username.
pub async fn have_member<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> BoardResult<members::Model> {
    member::get_member_from_username(conn, username)
        .await?
        .ok_or_else(|| BoardError::MemberNotFound(username.to_owned()))
}

/// Returns the post in the database bound to the provided ID.
pub async fn have_post<C: ConnectionTrait>(conn: &C, post_id: u32) -> BoardResult<posts::Model> {
    post::get_post_from_id(conn, post_id)
        .await?
        .ok_or(BoardError::PostNotFound(post_id))
}
