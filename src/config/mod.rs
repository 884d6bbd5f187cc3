mod loader;
mod model;
mod resolve;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{
    CheckName, CustomRule, SeverityOverride, ValidationConfig, CONFIG_FILE_NAME, CONFIG_VERSION,
};
pub use resolve::{CompiledCheck, ResolvedRule, ResolvedRules};
