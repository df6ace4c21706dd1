//! This module contains anything related to board members in this library.

use entity::members;
use sea_orm::{ColumnTrait as _, ConnectionTrait, EntityTrait as _, QueryFilter as _};

use crate::error::BoardResult;

/// Returns the optional member from the provided username.
pub async fn get_member_from_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> BoardResult<Option<members::Model>> {
    let member = members::Entity::find()
        .filter(members::Column::Username.eq(username))
        .one(conn)
        .await?;
    Ok(member)
}
