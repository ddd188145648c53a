//! CLI commands

mod init;
mod resolve;
mod validate;

pub use init::InitCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
