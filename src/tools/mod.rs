mod file_tools;
mod path_validator;
mod volume_ejector;

pub use file_tools::{copy_tree, remove_contents};
pub use path_validator::{check_directory_exists, ensure_directory_exists};
pub use volume_ejector::{
    DiskutilEjector, EjectOutcome, NoopEjector, VolumeEjector, eject_volume, platform_ejector,
};
