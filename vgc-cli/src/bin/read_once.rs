use clap::Parser;
use std::error::Error;
use std::time::Duration;
use vgc_lib::Gauge;

#[derive(Parser, Debug)]
#[command(about = "Read the pressure once and print it")]
struct Args {
    /// Controller IP address or hostname
    host: String,

    /// Controller TCP port
    #[arg(short, long, default_value_t = vgc_lib::constants::DEFAULT_PORT)]
    port: u16,

    /// Deadline in milliseconds applied to connect, send and receive
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let gauge = Gauge::with_port(args.host, args.port)
        .with_timeout(Duration::from_millis(args.timeout_ms));

    let reading = gauge.read_pressure().await?;

    println!("Pressure:  {:.6} mbar", reading.mbar);
    println!("Timestamp: {}", reading.timestamp_iso8601());

    Ok(())
}
