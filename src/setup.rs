pub mod init;
pub mod validator;

pub use init::{setup, ProblemInstance};
pub use validator::validate;
