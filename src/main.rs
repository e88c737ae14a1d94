use log::info;
use tokio::signal;
use virtual_mailbox_monitor::{MailNotifier, MockLightSensor, MonitorConfig, PeriodicMonitor};

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();
    info!("Starting Virtual Mailbox Monitor");

    // Load configuration
    let config = MonitorConfig::from_env();
    info!("Configuration loaded:");
    info!("  Poll interval: {}ms", config.poll_interval_ms);
    if let Some(seed) = config.sensor_seed {
        info!("  Sensor seed: {seed}");
    }

    let sensor = match config.sensor_seed {
        Some(seed) => MockLightSensor::from_seed(seed),
        None => MockLightSensor::from_entropy(),
    };

    let mut monitor = match PeriodicMonitor::new(&config, sensor, MailNotifier::new()) {
        Ok(monitor) => monitor,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    monitor.start();
    info!("Virtual Mailbox Monitor is running");
    info!("  - Press Ctrl+C to exit");

    // Wait for shutdown signal
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal");
        }
        Err(e) => {
            log::error!("Failed to listen for shutdown signal: {e}");
        }
    }

    monitor.stop();
    info!("Virtual Mailbox Monitor stopped");
}
