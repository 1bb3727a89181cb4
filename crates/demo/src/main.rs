//! Player reflection demo.
//!
//! Prints the reflected properties of a `Player`, changes its fields, and
//! prints them again.
//!
//! # Usage
//!
//! ```bash
//! reflekt-demo
//! REFLEKT_LOG=reflekt_core=trace reflekt-demo
//! ```

use demo::config::DemoConfig;
use demo::tracing_setup;
use reflekt_core::reflect::Registries;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let (config, config_error) = match DemoConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (DemoConfig::default(), Some(err)),
    };
    tracing_setup::init(&config);

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "falling back to default configuration");
    }

    let registries = Registries::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = demo::run(&registries, &mut out).and_then(|_| Ok(out.flush()?));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            ExitCode::FAILURE
        }
    }
}
