pub mod auth;
pub mod config;
pub mod entities;
pub mod response;
pub mod state;
pub mod store;
pub mod time;
pub mod users;

#[cfg(test)]
mod fixtures;
