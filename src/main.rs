use anyhow::Result;
use pulse_core::{AppError, Config};
use pulse_state::{Dashboard, FetchOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, _validation) = Config::load_validated()?;
    pulse_core::init(&config)?;

    let dashboard = Dashboard::new(&config).map_err(AppError::from)?;

    let city = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.dashboard.default_city.clone());

    tracing::info!("Pulse dashboard started");

    let mut datasets = dashboard.subscribe_dataset();
    match dashboard.select_city_and_fetch(&city).await {
        FetchOutcome::Updated | FetchOutcome::Superseded => {}
        FetchOutcome::UnknownCity => println!("{} is not a known city; weather unavailable", city),
        FetchOutcome::Failed { user_message } => println!("Weather: {}", user_message),
    }

    let weather = dashboard.weather();
    println!("Pulse - Province Rescue Dashboard");
    println!("  City:      {}", dashboard.selected_city());
    println!("  Province:  {}", dashboard.selected_province());
    match weather.temperature {
        Some(t) => println!(
            "  Weather:   {}°C {} ({})",
            t,
            weather.icon.as_str(),
            weather.icon_color.as_str()
        ),
        None => println!("  Weather:   unavailable"),
    }

    let dataset = datasets.borrow_and_update().clone();
    println!("\nStatistics:");
    println!("  Rescues:          {}", dataset.total_rescues());
    println!("  Devices:          {}", dataset.device_stats.len());
    println!("  Donations:        {}", dataset.total_donations());
    println!("  Shocks:           {:.1}K", dataset.honor_summary.shock_count);
    println!("  Heartbeats:       {:.1}K", dataset.honor_summary.heartbeat_count);
    println!("  Lives saved:      {}", dataset.honor_summary.saved_lives);
    if let Some(peak) = dataset.timeline_bars.iter().max_by_key(|bar| bar.value) {
        println!(
            "  Busiest day:      {} {} ({:?})",
            peak.month, peak.day, peak.severity
        );
    }

    Ok(())
}
