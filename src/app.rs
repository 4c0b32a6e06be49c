pub use configuration::*;
pub use startup::{
    configure_routes,
    GatewayApp,
    StartupError,
};
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;
