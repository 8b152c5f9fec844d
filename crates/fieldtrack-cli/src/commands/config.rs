//! Config command implementation

use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

pub fn execute(config_file: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let config = load_config(config_file)?;

    if output.is_json() {
        let map: HashMap<String, serde_json::Value> = config
            .to_inspection_map()
            .into_iter()
            .map(|(key, (value, source))| {
                (key, serde_json::json!({ "value": value, "source": format!("{:?}", source) }))
            })
            .collect();
        return output.result(map);
    }

    output.section("Effective Configuration");
    let mut entries: Vec<_> = config.to_inspection_map().into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, (value, source)) in entries {
        output.kv(key, format!("{} ({:?})", value, source));
    }

    Ok(())
}
