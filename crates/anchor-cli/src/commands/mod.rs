pub mod chat;
pub mod config;
pub mod helpers;
pub mod report;
