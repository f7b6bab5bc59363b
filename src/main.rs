use signup_ui::configuration;
use signup_ui::startup::Application;
use signup_ui::telemetry;

fn main() -> anyhow::Result<()> {
    let config = configuration::get_configuration()?;
    let subscriber = telemetry::get_subscriber(
        config.application.name.clone(),
        config.application.default_log_filter.clone(),
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber)?;

    let application = Application::build(config)?;
    application.run_until_stopped()?;

    Ok(())
}
