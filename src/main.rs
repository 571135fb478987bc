use toolcall_lib::config::{self, constants, models::Config};
use toolcall_lib::conversation::{ConversationRunner, initial_messages};
use toolcall_lib::providers::OpenAIProvider;
use toolcall_lib::tools;
use tracing::{Level, error, info, warn};

fn load_validated_config() -> anyhow::Result<Config> {
    let (config_path, explicit) = constants::config_file_path();
    info!("Loading configuration from {}", config_path);
    let config = config::load_config_or_default(&config_path, explicit)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    if let Err(val_errors) = config::validation::validate_config(&config) {
        error!("Configuration from {} is invalid: {:?}. Halting.", config_path, val_errors);
        return Err(anyhow::anyhow!("Invalid config: {:?}", val_errors));
    }
    info!("Configuration validated successfully.");
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = load_validated_config()?;

    let api_key = config.provider.resolve_api_key();
    if api_key.is_empty() {
        warn!(
            "{} is not set; the provider will reject the request",
            config.provider.api_key_env
        );
    }

    let provider = OpenAIProvider::new(&config.provider, api_key)
        .map_err(|e| anyhow::anyhow!("Failed to create provider: {}", e))?;
    let registry = tools::default_registry();

    let runner = ConversationRunner::new(&provider, &registry, config.model.clone())
        .with_missing_arguments_policy(config.on_missing_arguments);

    let mut stdout = std::io::stdout().lock();
    let outcome = runner
        .run(initial_messages(&config.system_prompt, &config.query), &mut stdout)
        .await?;

    info!(
        messages = outcome.messages.len(),
        used_tools = outcome.second_response.is_some(),
        "Conversation finished"
    );

    Ok(())
}
