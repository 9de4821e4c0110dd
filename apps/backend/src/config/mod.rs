pub mod server;

pub use server::{GameLimits, ServerConfig};
