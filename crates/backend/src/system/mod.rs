pub mod api;
pub mod initialization;
pub mod middleware;
pub mod settings;
pub mod shutdown;
pub mod tracing;
