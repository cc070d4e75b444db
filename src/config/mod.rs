pub mod load;
pub mod save;
pub mod types;

pub use save::save_config;
pub use types::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config, DEFAULT_BACKUP_PATH, DEFAULT_DESTINATION_PATH,
    DEFAULT_TARGET_PATH,
};
