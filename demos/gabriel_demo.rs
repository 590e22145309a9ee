//! Headless Gabriel graph demo.
//!
//! Run: cargo run --bin gabriel-demo -- --points 300 --seed 7

use clap::Parser;
use env_logger::Env;
use gabriel_demo::{DemoArgs, DemoConfig, run};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config: DemoConfig = DemoArgs::parse().into();

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    match run(&config, &mut rng) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
