//! Locate command implementation

use colored::Colorize;
use hzcfg_core::{SourceDescriptor, XmlConfigLoader};
use serde_json::json;

use crate::error::Result;

/// Run the locate command
///
/// Only the search runs. The chosen document is not parsed.
pub fn run_locate(loader: &XmlConfigLoader, json: bool) -> Result<()> {
    let source = loader.locate()?;
    let descriptor = source.descriptor();

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(loader, descriptor))?);
        return Ok(());
    }

    println!("{}", "Configuration Source".bold());
    println!();
    println!("{}:  {}", "Product".dimmed(), loader.config_type().to_string().cyan());
    println!("{}:     {}", "Kind".dimmed(), descriptor.kind.to_string().green());
    println!("{}:   {}", "Origin".dimmed(), descriptor.origin());
    if let Some(resource) = descriptor.classpath_resource() {
        println!("{}: {}", "Resource".dimmed(), resource);
    }

    Ok(())
}

fn to_json(loader: &XmlConfigLoader, descriptor: &SourceDescriptor) -> serde_json::Value {
    json!({
        "type": loader.config_type().as_str(),
        "kind": descriptor.kind.as_str(),
        "origin": descriptor.origin(),
        "file": descriptor.config_file().map(|path| path.as_str().to_string()),
        "resource": descriptor.classpath_resource(),
    })
}
