pub mod members;
pub mod posts;

pub mod prelude {
    pub use super::members::Entity as Members;
    pub use super::posts::Entity as Posts;
}
