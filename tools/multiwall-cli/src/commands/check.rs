//! Check system capabilities.

use multiwall_platform_core::LayoutSource;
use multiwall_platform_linux::{detect_display_server, DisplayServer, XrandrLayoutSource};

pub fn run() -> anyhow::Result<()> {
    println!("Multiwall System Check");
    println!("{}", "=".repeat(50));

    // Display server
    let ds = detect_display_server();
    match ds {
        DisplayServer::Wayland => {
            println!("[OK] Display server: Wayland (xrandr reports XWayland outputs)")
        }
        DisplayServer::X11 => println!("[OK] Display server: X11"),
        _ => println!("[WARN] Display server: Unknown"),
    }

    // Check monitors
    match XrandrLayoutSource::new().discover() {
        Ok(layout) => {
            for screen in &layout.screens {
                let active = screen.devices.iter().filter(|d| d.is_active()).count();
                println!(
                    "[OK] Screen {}: {}x{}, {} active monitor(s)",
                    screen.screen_number, screen.current_width, screen.current_height, active
                );
            }
        }
        Err(e) => println!("[WARN] Monitor discovery failed: {e}"),
    }

    // Check tools
    let capabilities = multiwall_platform_linux::permissions::check_capabilities();
    println!();
    multiwall_platform_linux::permissions::print_capability_report(&capabilities);

    let all_required_ok = capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available);

    println!();
    if all_required_ok {
        println!("All required capabilities are available. Multiwall is ready.");
    } else {
        println!("Some required capabilities are missing. See above for fixes.");
    }

    Ok(())
}
