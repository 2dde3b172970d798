//! Request extractors whose rejections go through `AppError`, so malformed
//! input gets the same error envelope as every other failure.

mod json;
mod path;

pub use json::ApiJson;
pub use path::ApiPath;
