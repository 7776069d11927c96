pub mod checkpoint;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod formatter;
pub mod server;
pub mod service;

#[cfg(test)]
pub mod test_utils;
