//! Config loader: assembles sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::RmcharsConfig;
use crate::error::RmcharsError;
use config::{Environment, File};
use std::path::Path;

/// Loads [`RmcharsConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, `<root>/.rmchars.toml`, then `RMCHARS_*` variables.
    pub fn load(root: &Path) -> Result<RmcharsConfig, RmcharsError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let builder = builder.add_source(Self::environment());

        let config: RmcharsConfig = builder.build()?.try_deserialize()?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// Defaults, the given file, then `RMCHARS_*` variables.
    pub fn load_from_file(path: &Path) -> Result<RmcharsConfig, RmcharsError> {
        if !path.is_file() {
            return Err(RmcharsError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config: RmcharsConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// `RMCHARS_COLLISION=skip`, `RMCHARS_CLASSIFIER__PLATFORM=windows`, ...
    fn environment() -> Environment {
        Environment::with_prefix("RMCHARS")
            .prefix_separator("_")
            .separator("__")
    }
}
