// src/main.rs

use log::{debug, error, warn};
use env_logger::Env;

use algos::config::AlgosConfig;
use algos::programs::Program;

fn main() {
    let (config, load_error) = match AlgosConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AlgosConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("ALGOS_LOG", &config.log_level)
        .write_style_or("ALGOS_LOG_STYLE", &config.log_style);
    env_logger::Builder::from_env(env).init();

    if let Some(e) = load_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }
    debug!("Configuration: {:?}", config);

    for program in Program::ALL {
        match program.run() {
            Ok(value) => println!("{}: {}", program, value),
            Err(e) => error!("{} failed: {}", program, e),
        }
    }
}
