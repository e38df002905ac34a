//! Check subcommand -- settings and credential diagnostics.

use homewatch_core::{Credentials, Settings};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    settings.endpoint_url()?;

    println!("endpoint: {}", settings.endpoint);
    println!("poll interval: {}s", settings.poll_interval_secs);
    println!("request timeout: {}s", settings.request_timeout_secs);
    match &settings.log_file {
        Some(path) => println!("log file: {}", path.display()),
        None => println!("log file: (disabled)"),
    }

    let credentials = Credentials::from_env()?;
    println!(
        "credentials: all present (chat id {})",
        credentials.telegram_chat_id
    );
    Ok(())
}
