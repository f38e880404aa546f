pub mod error;
pub mod json;
pub mod jwt;
pub mod logger;
