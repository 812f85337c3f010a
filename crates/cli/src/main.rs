use anyhow::Context;

use orderdesk_cli::{App, AppConfig, Console};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to read ORDERDESK_* configuration")?;
    orderdesk_observability::init(config.log_format);

    tracing::info!(
        payment_method = %config.payment_method,
        pause_on_exit = config.pause_on_exit,
        "starting order desk"
    );

    let mut app = App::from_config(&config);
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());

    if let Err(err) = app.run(&mut console) {
        tracing::error!(error = %err, "order session aborted");
        return Err(err).context("order session aborted");
    }

    tracing::info!(orders = app.store().len(), "order desk closed");
    Ok(())
}
