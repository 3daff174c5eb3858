mod body;
mod form_request;
mod request;
mod response;

pub use body::{collect_body, parse_json};
pub use form_request::FormRequest;
pub use request::Request;
pub use response::{HttpResponse, Response};
