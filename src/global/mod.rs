pub mod middleware;

pub use middleware::{request_tracing, REQUEST_ID_HEADER};
