use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use custom_error::custom_error;
use tracing_actix_web::TracingLogger;

use crate::app::configuration::Settings;
use crate::domain::{
    MailingListProvider,
    SubscriptionTarget,
};
use crate::routes::*;

const MAX_PENDING_CONNECTIONS: u32 = 128;

custom_error! {
///! The HTTP listener could not be started.
pub StartupError
    Bind{address: String, source: std::io::Error} = "Could not bind {address}: {source}",
    NoAddress{address: String} = "No socket was bound for {address}",
}

/// Register the gateway routes.
///
/// - `GET|POST /subscribe`
/// - `/health-check`, any method
///
/// Handlers read the provider `P` and the [`SubscriptionTarget`] from the
/// application data, which the caller registers.
pub fn configure_routes<P: MailingListProvider>(config: &mut web::ServiceConfig) {
    config
        .service(
            web::resource("/subscribe")
                .route(web::get().to(subscribe::<P>))
                .route(web::post().to(subscribe::<P>)),
        )
        .route("/health-check", web::route().to(health_check));
}

/// The HTTP server, bound and ready to serve.
pub struct GatewayApp {
    server: Server,
    port: u16,
}

impl GatewayApp {
    /// Bind the port from `settings` on every interface.
    pub fn build<P: MailingListProvider>(
        settings: &Settings,
        provider: P,
    ) -> Result<GatewayApp, StartupError> {
        GatewayApp::bind(&settings.application.binding_address(), settings, provider)
    }

    /// Bind an explicit `address`, e.g. `127.0.0.1:0` to get a random port.
    pub fn bind<P: MailingListProvider>(
        address: &str,
        settings: &Settings,
        provider: P,
    ) -> Result<GatewayApp, StartupError> {
        let provider = web::Data::new(provider);
        let target = web::Data::new(SubscriptionTarget::from(settings));

        // The factory runs once per worker, every worker shares the same
        // provider and target.
        let http_server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .app_data(provider.clone())
                .app_data(target.clone())
                .configure(configure_routes::<P>)
        })
        .backlog(MAX_PENDING_CONNECTIONS)
        .bind(address)
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })?;

        let port = http_server
            .addrs()
            .first()
            .map(|socket_address| socket_address.port())
            .ok_or_else(|| StartupError::NoAddress {
                address: address.to_string(),
            })?;

        Ok(GatewayApp {
            server: http_server.run(),
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
