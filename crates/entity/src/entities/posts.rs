use std::{future::ready, pin::Pin};

use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// A post published on the board.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    /// The post ID.
    #[sea_orm(primary_key)]
    pub id: u32,
    /// The ID of the member who published the post.
    pub member_id: u32,
    /// The post title.
    pub title: String,
    /// The post body.
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// When the post was published. Filled automatically on insert.
    pub created_at: DateTime,
    /// When the post was last edited. Refreshed automatically on save.
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Members,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn before_save<'a, 'async_trait, C>(
        mut self,
        _db: &'a C,
        insert: bool,
    ) -> Pin<Box<dyn Future<Output = Result<Self, DbErr>> + Send + 'async_trait>>
    where
        C: ConnectionTrait,
        C: 'async_trait,
        'a: 'async_trait,
        Self: Send + 'async_trait,
    {
        let now = chrono::Utc::now().naive_utc();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Box::pin(ready(Ok(self)))
    }
}
