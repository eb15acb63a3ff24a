use clap::Parser;
use crossbeam_channel::bounded;
use msop_data::{FieldOfView, ReturnSelection};
use msop_driver::{run_driver, DriverConfig};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Reads MSOP packets from a LiDAR and prints per-rotation statistics.
#[derive(Parser, Debug)]
#[command(name = "LiDAR data receiver.", disable_version_flag = true)]
struct Args {
    /// Address to receive MSOP packets on
    #[arg(long, default_value = "0.0.0.0:6699")]
    listen: SocketAddr,

    /// Start of the field of view in degrees
    #[arg(long, default_value_t = 0.)]
    fov_start: f64,

    /// End of the field of view in degrees
    #[arg(long, default_value_t = 360.)]
    fov_end: f64,

    /// Use the last return when the strongest one is missing
    #[arg(long)]
    last_return_fallback: bool,

    /// Stop after this many rotations (0 = run forever)
    #[arg(long, default_value_t = 0)]
    frames: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = DriverConfig {
        listen_addr: args.listen,
        fov: FieldOfView::new(args.fov_start, args.fov_end),
        return_selection: if args.last_return_fallback {
            ReturnSelection::StrongestOrLast
        } else {
            ReturnSelection::Strongest
        },
    };

    let (terminator_tx, terminator_rx) = bounded(1);
    let mut printed_frames = 0;
    let result = run_driver(&config, &terminator_rx, |pipeline| {
        let stats = pipeline.stats();
        if stats.frames == printed_frames {
            return;
        }
        printed_frames = stats.frames;
        match serde_json::to_string(&stats) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("{e}"),
        }
        if args.frames != 0 && stats.frames >= args.frames {
            let _ = terminator_tx.try_send(true);
        }
    });

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
