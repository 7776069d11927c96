pub mod auth;
pub mod futures_client;
pub mod requests;
