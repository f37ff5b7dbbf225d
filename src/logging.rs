//! Logging setup
//!
//! Routes `tracing` events to the browser console.

use crate::config::AppConfig;

pub fn init(config: &AppConfig) {
    let wasm_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(config.tracing_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(wasm_config);
    tracing::info!("logging initialised at {}", config.tracing_level());
}
