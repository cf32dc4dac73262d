use std::env;
use std::path::PathBuf;

use crate::env_or;

/// Where uploads land on disk and the URL prefix they are served under.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub public_base_url: String,
    pub max_file_size: usize,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            upload_dir: PathBuf::from(
                env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            ),
            public_base_url: env::var("UPLOAD_BASE_URL").unwrap_or_else(|_| "/uploads".to_string()),
            max_file_size: env_or("UPLOAD_MAX_BYTES", 5 * 1024 * 1024),
        }
    }
}
