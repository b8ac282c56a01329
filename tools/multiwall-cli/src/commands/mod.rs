pub mod apply;
pub mod check;
pub mod compose;
pub mod config;
pub mod fit;
pub mod monitors;

use std::path::Path;

use anyhow::Context;
use multiwall_common::config::AppConfig;
use multiwall_compose_engine::FitStrategyKind;
use multiwall_platform_core::{ApplyTarget, DisplayLayout, LayoutSource};
use multiwall_platform_linux::{parse_xrandr, XrandrLayoutSource};

use crate::LayoutArgs;

/// Parse a `KEY=VALUE` command-line pair.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    let key = key.trim();
    if key.is_empty() || value.is_empty() {
        return Err(format!("expected KEY=VALUE, got {s:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse the configuration's string-keyed settings, failing on unknown keys.
pub fn validate_config(config: &AppConfig) -> anyhow::Result<(FitStrategyKind, ApplyTarget)> {
    let default_fit = config
        .default_fit
        .parse()
        .context("Invalid default_fit in configuration")?;
    let apply_target = config
        .apply_target
        .parse()
        .context("Invalid apply_target in configuration")?;
    Ok((default_fit, apply_target))
}

/// Discover the layout with xrandr, or read it from `--layout`.
pub fn load_layout(args: &LayoutArgs) -> anyhow::Result<DisplayLayout> {
    match &args.layout {
        Some(path) => read_layout_file(path),
        None => {
            let source = XrandrLayoutSource::new();
            source
                .discover()
                .with_context(|| format!("Failed to discover monitors with {}", source.name()))
        }
    }
}

/// A `.json` file holds a serialized layout; anything else is saved xrandr text.
fn read_layout_file(path: &Path) -> anyhow::Result<DisplayLayout> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let layout = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse layout JSON {}", path.display()))?
    } else {
        parse_xrandr(&content)
            .with_context(|| format!("Failed to parse xrandr output {}", path.display()))?
    };
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_pairs() {
        assert_eq!(
            parse_key_value("DP-1=/walls/a.jpg").unwrap(),
            ("DP-1".to_string(), "/walls/a.jpg".to_string())
        );
        assert_eq!(
            parse_key_value("HDMI-1=x=y.png").unwrap().1,
            "x=y.png".to_string()
        );
        assert!(parse_key_value("DP-1").is_err());
        assert!(parse_key_value("=tile").is_err());
        assert!(parse_key_value("DP-1=").is_err());
    }

    #[test]
    fn config_keys_are_validated() {
        let config = AppConfig::default();
        assert_eq!(
            validate_config(&config).unwrap(),
            (FitStrategyKind::Fill, ApplyTarget::Background)
        );

        let bad_fit = AppConfig {
            default_fit: "zoom".to_string(),
            ..AppConfig::default()
        };
        assert!(validate_config(&bad_fit).is_err());

        let bad_target = AppConfig {
            apply_target: "lockscreen".to_string(),
            ..AppConfig::default()
        };
        assert!(validate_config(&bad_target).is_err());
    }

    #[test]
    fn layout_file_formats() {
        let dir = std::env::temp_dir().join("multiwall_test_cli_layout");
        std::fs::create_dir_all(&dir).unwrap();

        let text = dir.join("xrandr.txt");
        std::fs::write(
            &text,
            "Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767\n\
             HDMI-1 connected primary 1920x1080+0+0 (normal) 0mm x 0mm\n",
        )
        .unwrap();
        let from_text = read_layout_file(&text).unwrap();
        assert_eq!(from_text.screens[0].devices[0].device_name, "HDMI-1");

        let json = dir.join("layout.json");
        std::fs::write(&json, serde_json::to_string(&from_text).unwrap()).unwrap();
        assert_eq!(read_layout_file(&json).unwrap(), from_text);

        std::fs::remove_dir_all(&dir).ok();
    }
}
