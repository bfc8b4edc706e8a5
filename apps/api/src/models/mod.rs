pub mod admin;
pub mod connect;
pub mod profile;
pub mod society_update;
