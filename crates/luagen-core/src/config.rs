use std::fs;
use std::path::Path;

use heck::ToSnakeCase;
use serde::Deserialize;

/// Top-level project configuration loaded from `.luagen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LuagenConfig {
    /// Path to the API document (JSON or YAML).
    pub input: String,
    /// Path the generated Lua module is written to, overwriting.
    pub output: String,
    /// Lua module name; defaults to the snake-cased API title.
    pub module: Option<String>,
    /// Base URL baked into the generated client.
    pub base_url: Option<String>,
}

impl Default for LuagenConfig {
    fn default() -> Self {
        Self {
            input: "openapi.json".to_string(),
            output: "client.lua".to_string(),
            module: None,
            base_url: None,
        }
    }
}

impl LuagenConfig {
    /// Resolve the Lua module name, falling back to the API title.
    pub fn module_name(&self, title: &str) -> String {
        match self.module {
            Some(ref name) => name.clone(),
            None => title.to_snake_case(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".luagen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<LuagenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: LuagenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# luagen configuration
input: openapi.json
output: client.lua

# module: store_api            # Lua module name (defaults to the API title)
# base_url: https://api.example.com
"#
}
