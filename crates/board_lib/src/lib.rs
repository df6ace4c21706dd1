//! The main crate of the Community Board API infrastructure.
//!
//! This crate contains the environment setup functions, the pagination and sorting core used by
//! the paged search endpoints, and the queries shared by the services related to the API.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the [`board_api`](../board_api_lib/index.html) package.

#![warn(missing_docs)]

mod env;

pub mod error;
pub mod member;
pub mod must;
pub mod page;
pub mod pool;
pub mod post;

pub use env::*;
pub use pool::Database;
