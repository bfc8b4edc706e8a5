pub mod auth;
pub mod config;
pub mod confirm;
pub mod connect;
pub mod dashboard;
pub mod db;
pub mod errors;
pub mod models;
pub mod profiles;
pub mod routes;
pub mod state;
pub mod updates;
