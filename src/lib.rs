pub mod config;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
