//! Building the configuration loader from command-line arguments
//!
//! Properties are layered, later layers winning:
//!
//! 1. `[properties]` from the settings file
//! 2. the process environment (unless `--no-env`)
//! 3. `-D key=value` definitions, in order
//! 4. `--config`, written to the product's override property
//!
//! The classpath is the settings file's roots, then `--classpath` roots,
//! then the packaged defaults.

use crate::cli::Cli;
use crate::error::Result;
use crate::resources;
use hzcfg_core::{ConfigType, Properties, Settings, XmlConfigLoader};
use hzcfg_fs::{NormalizedPath, ResourceResolver};

/// Build a loader rooted at `working_dir`.
pub fn build_loader(cli: &Cli, working_dir: &NormalizedPath) -> Result<XmlConfigLoader> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(&working_dir.resolve(&path.to_string_lossy()))?,
        None => Settings::default(),
    };

    let config_type = cli
        .config_type
        .map(ConfigType::from)
        .or(settings.config_type)
        .unwrap_or_default();

    let environment = if cli.no_env {
        Properties::new()
    } else {
        Properties::from_env()
    };
    let properties = layer_properties(cli, config_type, &settings.properties, &environment)?;

    let mut classpath = settings.classpath(working_dir);
    for root in &cli.classpath {
        classpath.push_root(working_dir.resolve(&root.to_string_lossy()));
    }
    let classpath = resources::with_packaged_defaults(classpath);

    tracing::debug!(
        config_type = %config_type,
        roots = classpath.roots().len(),
        properties = properties.len(),
        "Built configuration loader"
    );

    let resources = ResourceResolver::new(working_dir.clone(), classpath);
    Ok(XmlConfigLoader::new(config_type, resources, properties))
}

fn layer_properties(
    cli: &Cli,
    config_type: ConfigType,
    base: &Properties,
    environment: &Properties,
) -> Result<Properties> {
    let mut properties = base.clone();
    properties.merge(environment);

    for definition in &cli.defines {
        let (key, value) = Properties::parse_definition(definition)?;
        properties.set(key, value);
    }

    if let Some(config) = &cli.config {
        properties.set(config_type.system_property(), config.clone());
    }

    Ok(properties)
}
