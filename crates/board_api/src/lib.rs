//! The Community Board API library that the program uses.
//!
//! The content of this library is only made for the API program.

pub mod configure;

mod env;
mod error;
mod http;
mod utils;

pub use env::*;
pub use error::*;
pub use http::api_route;
