pub mod ast;
pub mod cmd;
pub mod config;
pub mod driver;
pub mod error;
pub mod util;
