//! Output device diagnostics (`--audio-info`).

use cpal::traits::{DeviceTrait, HostTrait};

/// Logs the audio host, its output devices and their default configs
pub fn log_audio_info() {
    let host = cpal::default_host();
    log::info!("=== Audio Output Diagnostics ===");
    log::info!("Host: {:?}", host.id());

    let default_name = host.default_output_device().and_then(|d| d.name().ok());
    match &default_name {
        Some(name) => log::info!("Default output: {}", name),
        None => log::warn!("No default output device"),
    }

    let devices = match host.output_devices() {
        Ok(devices) => devices,
        Err(e) => {
            log::error!("Could not enumerate output devices: {}", e);
            return;
        }
    };

    for (idx, device) in devices.enumerate() {
        let name = device.name().unwrap_or_else(|_| "(unnamed)".to_string());
        let marker = if default_name.as_deref() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        match device.default_output_config() {
            Ok(config) => log::info!(
                "  [{}] {}{}: {} Hz, {} ch, {:?}",
                idx,
                name,
                marker,
                config.sample_rate().0,
                config.channels(),
                config.sample_format()
            ),
            Err(e) => log::info!("  [{}] {}{}: no usable config ({})", idx, name, marker, e),
        }
    }

    log::info!("=== End Diagnostics ===");
}
