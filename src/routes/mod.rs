// Axum handlers, one submodule per resource.
pub mod health;
pub mod players;
