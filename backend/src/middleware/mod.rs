//! Request middleware.
//!
//! Cross-cutting wrappers applied around the router. Register them so that
//! [`Trace`] is outermost, then [`Cors`], then [`JsonContentType`]; actix
//! runs the last `wrap` first.

pub mod cors;
pub mod json_content_type;
pub mod trace;

pub use cors::Cors;
pub use json_content_type::JsonContentType;
pub use trace::Trace;
