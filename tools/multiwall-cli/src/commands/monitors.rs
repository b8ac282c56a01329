//! List screens and monitors.

use multiwall_platform_core::active_device_bounds;

use crate::LayoutArgs;

pub fn run(args: &LayoutArgs, json: bool) -> anyhow::Result<()> {
    let layout = super::load_layout(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    for screen in &layout.screens {
        let marker = if screen.screen_number == args.screen {
            " (selected)"
        } else {
            ""
        };
        println!(
            "Screen {}: {}x{}{marker}",
            screen.screen_number, screen.current_width, screen.current_height
        );

        for device in &screen.devices {
            let state = if !device.is_connected {
                "disconnected".to_string()
            } else if device.is_active() {
                format!(
                    "{}x{}+{}+{}",
                    device.resolution_width,
                    device.resolution_height,
                    device.offset_width,
                    device.offset_height
                )
            } else {
                "connected, no mode".to_string()
            };
            println!(
                "  {} {state}{}",
                device.device_name,
                if device.is_primary { " (primary)" } else { "" }
            );
        }

        if let Some((x, y, w, h)) = active_device_bounds(screen) {
            if (x, y, w, h) != (0, 0, screen.current_width, screen.current_height) {
                println!("  Monitors cover {w}x{h}+{x}+{y}; uncovered canvas stays black");
            }
        }
    }

    Ok(())
}
