// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const TICK_RATE_MS: u64 = {tick_rate_ms};
pub const ANIMATION_TICK_MS: u64 = {animation_tick_ms};

pub const LOG_FILE: &str = "{log_file}";
pub const LOG_FILTER: &str = "{log_filter}";
"#,
        mouse_enabled = config.mouse_enabled,
        tick_rate_ms = config.tick_rate_ms,
        animation_tick_ms = config.animation_tick_ms,
        log_file = config.log_file.escape_default(),
        log_filter = config.log_filter.escape_default(),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    tick_rate_ms: u64,
    animation_tick_ms: u64,
    log_file: String,
    log_filter: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            tick_rate_ms: 250,
            animation_tick_ms: 16,
            log_file: "segment-view.log".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;
    let mut in_logging = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys switch sections; indented keys belong to the current one
        let is_top_level = !line.starts_with(' ') && !line.starts_with('\t');
        if is_top_level && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_ui = trimmed.starts_with("ui:");
            in_logging = trimmed.starts_with("logging:");
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_ui {
                match key {
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    "tick_rate_ms" => config.tick_rate_ms = value.parse().unwrap_or(250),
                    "animation_tick_ms" => config.animation_tick_ms = value.parse().unwrap_or(16),
                    _ => {}
                }
            } else if in_logging {
                match key {
                    "file" => config.log_file = unquote(value).to_string(),
                    "filter" => config.log_filter = unquote(value).to_string(),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    // Find the colon separator
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}
