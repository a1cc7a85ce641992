pub mod catalog;
pub mod cone_type;
pub mod constants;
pub mod errors;
pub mod menu;
pub mod order;
pub mod pricing;
pub mod receipt;
pub mod shop;
pub mod shop_config;
pub mod sundae;

use std::{env, io, process};

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use constants::CONFIG_FILE_PATH;
use shop::IceCreamShop;
use shop_config::load_config;

fn main() {
    // RUST_LOG overrides the level, warnings only so the menu stays readable
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_FILE_PATH.to_string());
    let config = load_config(&config_path).unwrap_or_else(|err| {
        error!("[CONFIG] {}", err);
        eprintln!("Error: {}", err);
        process::exit(1)
    });

    let stdin = io::stdin();
    let mut shop = IceCreamShop::new(&config, stdin.lock(), io::stdout());
    if let Err(err) = shop.run() {
        error!("[SHOP] {}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
