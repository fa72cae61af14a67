pub mod dot;
pub mod web;

pub use dot::start_dot_server;
pub use web::start_web_server;
