use std::{env, process};
use getopts::Options;
use log::error;

mod config;
mod daily_digest;
mod errors;
mod initialization;
mod logger;
mod manager_openweather;
mod models;
mod render;
mod worker;

const DEFAULT_CONFIG_FILE: &str = "cityweather.toml";

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options] CITY", program);
    print!("{}", opts.usage(&brief));
}

fn main() {
    let args = env::args().collect::<Vec<String>>();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print help message")
        .optopt("c", "config", "path to the configuration file", "FILE")
        .optopt("d", "days", "number of forecast days to show", "DAYS");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if matches.opt_present("h") {
        print_usage(&args[0], &opts);
        return;
    }

    let city = matches.free.join(" ").trim().to_string();
    if city.is_empty() {
        eprintln!("Please enter a city name.");
        print_usage(&args[0], &opts);
        process::exit(2);
    }

    let config_file = matches.opt_str("c").unwrap_or(DEFAULT_CONFIG_FILE.to_string());

    let (config, owm) = match initialization::init(&config_file) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let max_days = matches
        .opt_str("d")
        .and_then(|d| d.parse::<usize>().ok())
        .unwrap_or(config.display.forecast_days);

    if let Err(e) = worker::run(&owm, &city, max_days) {
        error!("{}", e);
        eprintln!("Unable to fetch weather data. Please check the city name and try again.");
        process::exit(1);
    }
}
