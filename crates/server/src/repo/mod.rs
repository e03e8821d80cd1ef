pub mod enquiry;
pub mod refresh_token;
pub mod user;
