pub mod game_registry;

pub use game_registry::GameRegistry;
