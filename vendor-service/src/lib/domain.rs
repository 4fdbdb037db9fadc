pub mod authentication;
pub mod transaction;
