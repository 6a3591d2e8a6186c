//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dental_desk::adapters::ai::{OpenAiAdapter, UnconfiguredCompletion};
use dental_desk::adapters::store::SupabaseStore;
use dental_desk::adapters::ui::tui::TuiInputPort;
use dental_desk::ports::{ClinicStore, CompletionPort, InputPort};
use dental_desk::shared::config::AppConfig;
use dental_desk::usecases::{CatalogService, ChatService, ContactService, FaqService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    let cfg = AppConfig::load()?;

    // Logs go to stderr so they do not interleave with kiosk screens on stdout.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cfg.log_level_or_default().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    // --- Store: credentials are mandatory ---
    let (store_url, store_key) = match cfg.store_credentials() {
        Ok(creds) => creds,
        Err(e) => anyhow::bail!("{}. Set them in the environment or .env", e),
    };
    let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());
    info!(url = %store_url, "using hosted store");
    let store: Arc<dyn ClinicStore> =
        Arc::new(SupabaseStore::with_timeout(store_url, store_key, timeout));

    // --- Completion endpoint: optional; without a key every chat turn gets the fallback ---
    let completion: Arc<dyn CompletionPort> = match cfg.completion_api_key() {
        Some(key) => {
            let params = cfg.completion_params_or_default();
            info!(
                model = %params.model,
                url = %cfg.completion_api_url_or_default(),
                "chat assistant enabled"
            );
            Arc::new(OpenAiAdapter::with_timeout(
                cfg.completion_api_url_or_default(),
                key,
                params,
                timeout,
            ))
        }
        None => {
            warn!("GROQ_API_KEY not set, chat assistant will answer with the fallback message");
            Arc::new(UnconfiguredCompletion)
        }
    };

    // --- Services ---
    let catalog = Arc::new(CatalogService::new(Arc::clone(&store)));
    let faqs = Arc::new(FaqService::new(Arc::clone(&store)));
    let contact = Arc::new(ContactService::new(Arc::clone(&store)));
    let chat = Arc::new(ChatService::new(completion));

    dental_desk::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(catalog, faqs, contact, chat));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
