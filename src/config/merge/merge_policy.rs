//! Merge rules: defaults applied before any file or environment source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("collision", "fail")?
        .set_default("fixtures.wide_depth_limit", 4)?
        .set_default("logging.level", "off")?
        .set_default("logging.output", "stderr")
}
