use std::path::PathBuf;

/// Default lmutil binary, resolved from the environment when the caller did
/// not pass a path on the command line.
pub fn get_lmutil_path() -> PathBuf {
    let path = std::env::var("LMUTIL_PATH").unwrap_or_else(|_| {
        log::warn!("LMUTIL_PATH not set, falling back to \"lmutil\" on PATH");
        "lmutil".to_string()
    });
    log::info!("Using lmutil at: {}", path);
    PathBuf::from(path)
}
