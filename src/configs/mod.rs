pub mod env_validate;

pub use env_validate::get_lmutil_path;
