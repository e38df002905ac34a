//! Send subcommand -- push one message through the configured chat.

use homewatch_core::{Credentials, Notifier, Settings, TelegramNotifier};

pub fn run(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    let credentials = Credentials::from_env()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let notifier = TelegramNotifier::new(
        &settings.telegram_api_base,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
        settings.request_timeout(),
    )?;
    notifier.send(message)?;

    println!("message sent");
    Ok(())
}
