//! Run subcommand -- the polling loop.

use std::time::Duration;

use homewatch_core::{
    logging, Credentials, CycleOutcome, Poller, Settings, StatusClient, TelegramNotifier,
};

/// Start polling; with `once` execute a single cycle and exit.
pub fn run(once: bool, interval: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    logging::init(settings.log_file.as_deref())?;

    let credentials = Credentials::from_env()?;

    // HTTP clients block on this runtime from the loop thread.
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let source = StatusClient::new(
        settings.endpoint_url()?,
        &credentials.practicum_token,
        settings.request_timeout(),
    )?;
    let notifier = TelegramNotifier::new(
        &settings.telegram_api_base,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
        settings.request_timeout(),
    )?;

    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| settings.poll_interval());
    let mut poller = Poller::new(source, notifier, settings.lookback(), interval);

    if once {
        match poller.run_cycle()? {
            CycleOutcome::Notified(message) => println!("sent: {message}"),
            CycleOutcome::Unchanged => println!("no status change"),
        }
        return Ok(());
    }

    tracing::info!("polling every {}s", interval.as_secs());
    poller.run()
}
