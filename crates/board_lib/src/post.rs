//! This module contains anything related to board posts in this library.

use entity::posts;
use sea_orm::{ConnectionTrait, EntityTrait as _};

use crate::error::BoardResult;

/// Returns the optional post from the provided ID.
pub async fn get_post_from_id<C: ConnectionTrait>(
    conn: &C,
    post_id: u32,
) -> BoardResult<Option<posts::Model>> {
    let post = posts::Entity::find_by_id(post_id).one(conn).await?;
    Ok(post)
}
