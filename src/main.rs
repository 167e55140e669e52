use anyhow::Result;
use preference_kit::{config::Config, create_extension_adder};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preference_kit=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        available = config.available_languages.len(),
        preferred = %config.preferred_language,
        "Loaded configuration"
    );

    let language = config
        .available_languages
        .select(&config.preferred_language);
    info!(language = %language, "Selected code-samples language");

    let add_extension = create_extension_adder(config.preferences_extension.clone());
    let file_name = add_extension(&config.preferences_file);

    println!("language: {} ({})", language, language.native_name());
    println!("file: {}", file_name);

    Ok(())
}
