pub mod config;
pub mod options;
pub mod session;
pub mod settings;
pub mod users;
