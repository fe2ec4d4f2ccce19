use keepalive::{configuration::get_configuration, probe::run_probe, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    // Set up tracing
    let subscriber = telemetry::get_subscriber("info".into(), telemetry::console_sink());
    telemetry::init_subscriber(subscriber);

    // Set up configuration
    let configuration = get_configuration()?;
    let client = configuration.probe.client()?;

    // The outcome is already logged; a failed probe is not a failed run
    let _ = run_probe(&client).await;
    Ok(())
}
