pub mod help;
pub mod list;
pub mod login;
pub mod logout;
pub mod result;
pub mod status;

#[allow(unused_imports)]
pub use result::CommandResult;
