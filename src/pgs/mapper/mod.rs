mod request_map;
mod request_mapper;

pub use request_map::{RequestMap, RequestValue};
pub use request_mapper::{RequestEnvironment, RequestMapper};
