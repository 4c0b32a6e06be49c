use anyhow::Context;
use clap::Parser;

use mailing_list_gateway::app::{
    load_configuration,
    setup_tracing,
    GatewayApp,
};
use mailing_list_gateway::cli::Cli;
use mailing_list_gateway::mailing_list_client::MailgunClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse();

    setup_tracing("mailing-list-gateway".into(), "info".into())?;

    let settings = load_configuration().context("Failed to load configuration")?;
    settings.log_resolved();

    let mailgun_client = MailgunClient::from_settings(&settings.mailgun)?;
    let app = GatewayApp::build(&settings, mailgun_client)?;
    tracing::info!("Listening on port {}", app.port());

    app.run_until_stopped().await?;
    Ok(())
}
