use std::path::Path;

use serde::{Deserialize, Serialize};

/// Gap constants for one stacked layout policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackedConfig {
    /// Space between adjacent sibling subtree slots.
    pub stacking_gap: f32,
    /// Space between a parent's box edge and its children's boxes.
    pub growth_gap: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub grow_right: StackedConfig,
    pub grow_down: StackedConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grow_right: StackedConfig {
                stacking_gap: 20.0,
                growth_gap: 80.0,
            },
            grow_down: StackedConfig {
                stacking_gap: 80.0,
                growth_gap: 60.0,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    grow_right: Option<StackedConfigFile>,
    grow_down: Option<StackedConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StackedConfigFile {
    stacking_gap: Option<f32>,
    growth_gap: Option<f32>,
}

/// Loads a config file over the defaults. Strict JSON is tried first; JSON5
/// second, so hand-written files may carry comments and trailing commas.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(&contents)?,
    };
    apply_config_file(&mut config, parsed);
    Ok(config)
}

fn apply_config_file(config: &mut Config, parsed: ConfigFile) {
    let Some(layout) = parsed.layout else {
        return;
    };
    if let Some(grow_right) = layout.grow_right {
        apply_stacked(&mut config.layout.grow_right, &grow_right);
    }
    if let Some(grow_down) = layout.grow_down {
        apply_stacked(&mut config.layout.grow_down, &grow_down);
    }
}

fn apply_stacked(target: &mut StackedConfig, file: &StackedConfigFile) {
    if let Some(v) = file.stacking_gap {
        target.stacking_gap = v;
    }
    if let Some(v) = file.growth_gap {
        target.growth_gap = v;
    }
}
