mod document;
mod payload;
mod response;
pub mod tree;

pub use document::Element;
pub use payload::NvpPayload;
pub use response::Response;
