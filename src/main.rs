use clap::Parser;
use graphic_designer_tool::utils::{logger, validation::Validate};
use graphic_designer_tool::{
    load_config, web, CliConfig, DesignerError, HeadlessRun, ImageGenerator, LocalStorage,
    OpenAiClient,
};
use std::sync::Arc;

fn fail(e: &DesignerError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the environment.
    let _ = dotenvy::dotenv();

    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting graphic-designer-tool");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let params = match load_config(&config.config) {
        Ok(params) => params,
        Err(e) => fail(&e),
    };
    if let Err(e) = params.validate() {
        fail(&e);
    }
    tracing::info!(
        "Parameters: {} image(s), {} at {}, quality {}",
        params.n_image,
        params.image_model,
        params.image_dim,
        params.image_quality
    );

    let provider = match OpenAiClient::from_env(config.api_base.clone()) {
        Ok(provider) => provider,
        Err(e) => fail(&e),
    };

    let generator = match ImageGenerator::from_params(provider, &params) {
        Ok(generator) => generator,
        Err(e) => fail(&e),
    };

    if let Some(prompt) = &config.prompt {
        let storage = LocalStorage::new(config.output_dir.clone());
        match HeadlessRun::new(&generator, storage).run(prompt).await {
            Ok(paths) => {
                for path in paths {
                    println!("📁 {}", path);
                }
            }
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    let app = web::create_router(Arc::new(generator));
    web::launch(app, &config.host, config.port).await?;

    Ok(())
}
