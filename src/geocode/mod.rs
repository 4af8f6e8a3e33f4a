pub mod handlers;
pub mod requests;
pub mod responses;
pub mod services;
