pub mod filter;
pub mod handlers;
pub mod moderation;
pub mod photos;
pub mod validation;
