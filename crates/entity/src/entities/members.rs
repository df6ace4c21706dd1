use std::{future::ready, pin::Pin};

use sea_orm::{ActiveValue::Set, entity::prelude::*};

/// A registered member in the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// The member ID.
    #[sea_orm(primary_key)]
    pub id: u32,
    /// The member username.
    #[sea_orm(unique)]
    pub username: String,
    /// The member display name.
    pub name: String,
    /// The member email address.
    pub email: String,
    /// When the member registered. Filled automatically on insert.
    pub created_at: DateTime,
    /// When the member was last modified. Refreshed automatically on save.
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
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
