pub mod cli;
pub mod flexlm;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::cli::Cli;
pub use crate::configs::get_lmutil_path;
pub use crate::error::CheckError;
