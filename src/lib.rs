pub mod errors;
pub mod http;
pub mod init;
pub mod logger;
pub mod pages;
pub mod server;
pub mod state;
