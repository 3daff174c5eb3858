pub mod config;
pub mod database;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routing;
pub mod server;

pub use error::{Error, ValidationErrors};
pub use http::{FormRequest, HttpResponse, Request, Response};
pub use routing::Router;
pub use server::Server;
