//! Print the shape of a measurement database: row counts, observed date
//! range and the busiest stations.

use anyhow::{Context, Result};
use std::path::PathBuf;

use surfsup::dates::{DateWindow, TRAILING_WINDOW_DAYS};
use surfsup::Store;

const TOP_STATIONS: usize = 5;

#[tokio::main]
async fn main() -> Result<()> {
    let path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: inspect_store <DATABASE>")?;

    println!("Inspecting measurement store: {}", path.display());

    let store = Store::open(&path).context("opening database")?;
    let mut session = store.session().await.context("connecting to database")?;

    let stats = session.stats().await.context("reading dataset statistics")?;
    println!("\n=== DATASET ===");
    println!("  stations:     {}", stats.station_count);
    println!("  measurements: {}", stats.measurement_count);
    match (stats.first_date, stats.last_date) {
        (Some(first), Some(last)) => println!("  dates:        {} to {}", first, last),
        _ => println!("  dates:        (no measurements)"),
    }

    let window = DateWindow::default();
    let agrees =
        stats.first_date == Some(window.earliest) && stats.last_date == Some(window.latest);
    println!(
        "  configured:   {} to {} ({})",
        window.earliest,
        window.latest,
        if agrees { "matches" } else { "DIFFERS" }
    );
    println!(
        "  trailing:     from {}",
        window.trailing_start(TRAILING_WINDOW_DAYS)
    );

    println!("\n=== MOST ACTIVE STATIONS ===");
    let activity = session
        .station_activity()
        .await
        .context("counting measurements per station")?;
    for entry in activity.iter().take(TOP_STATIONS) {
        println!("  {:<14} {}", entry.station, entry.count);
    }
    if let [first, second, ..] = activity.as_slice() {
        if first.count == second.count {
            println!(
                "  note: {} and {} tie for most measurements",
                first.station, second.station
            );
        }
    }

    println!("\n=== STATIONS ===");
    for station in session.stations().await.context("listing stations")? {
        println!("  {:>3}  {}", station.id, station.station);
    }

    session.close().await?;
    Ok(())
}
