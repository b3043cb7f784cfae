pub mod api;
pub mod config;
pub mod core;

pub use config::CONFIG;
pub use core::errors::EnlistError;
pub use core::service::EnlistService;

#[cfg(test)]
mod tests; // Include integration tests
