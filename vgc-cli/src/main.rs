use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info, warn};
use vgc_lib::{Gauge, PressureReading};

#[derive(Parser, Debug)]
#[command(author, version, about = "Poll a VGC gauge controller and republish the pressure")]
struct Args {
    /// Controller IP address or hostname
    host: String,

    /// Controller TCP port
    #[arg(short, long, default_value_t = vgc_lib::constants::DEFAULT_PORT)]
    port: u16,

    /// Scan period in seconds between reads
    #[arg(long, default_value_t = 6.0)]
    period: f64,

    /// Deadline in milliseconds applied to connect, send and receive
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,

    /// Number of readings to publish before exiting (default: unlimited)
    #[arg(short, long)]
    count: Option<u64>,

    /// Emit one JSON object per reading instead of text
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    if args.period <= 0.0 {
        error!("Scan period must be positive");
        std::process::exit(1);
    }

    let gauge = Gauge::with_port(args.host.clone(), args.port)
        .with_timeout(Duration::from_millis(args.timeout_ms));

    info!(
        "Polling {}:{} every {:.1} s",
        args.host, args.port, args.period
    );

    let mut timer = interval(Duration::from_secs_f64(args.period));
    let mut published = 0u64;
    let mut last_good: Option<PressureReading> = None;

    loop {
        if let Some(max) = args.count {
            if published >= max {
                break;
            }
        }

        timer.tick().await;

        match gauge.read_pressure().await {
            Ok(reading) => {
                publish(&reading, args.json);
                last_good = Some(reading);
                published += 1;
            }
            // Per-poll failures are non-fatal: log, keep the previously
            // published values standing, and stay on the scan period.
            Err(e) => match &last_good {
                Some(prev) => warn!(
                    "poll failed ({}), keeping reading from {}",
                    e,
                    prev.timestamp_iso8601()
                ),
                None => warn!("poll failed ({}), nothing published yet", e),
            },
        }
    }

    Ok(())
}

fn publish(reading: &PressureReading, json: bool) {
    if json {
        match serde_json::to_string(reading) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("failed to serialize reading: {}", e),
        }
    } else {
        println!(
            "pressure={:.6} timestamp={}",
            reading.mbar,
            reading.timestamp_iso8601()
        );
    }
}
