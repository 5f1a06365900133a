//! Growthwise Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use growthwise_engine::CompletionConfig;
use growthwise_player::ports::outbound::PlatformPort;
use growthwise_player::ui::presentation::services::AppConfig;

const ENV_LANGUAGE: &str = "GROWTHWISE_LANGUAGE";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_dotenv_from_repo_root();
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "growthwise_player=debug,growthwise_engine=debug,dioxus=info".into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Growthwise Player");

    // Platform
    let platform = growthwise_player::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Plan generation settings; the browser build has no process environment
    let app_config = AppConfig {
        completion: CompletionConfig::from_env(),
        language: std::env::var(ENV_LANGUAGE).ok(),
    };

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = match load_player_css() {
            Ok(css) => format!("<style>{}</style>", css),
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to unstyled window");
                String::new()
            }
        };
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(app_config)
        .launch(growthwise_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> anyhow::Result<String> {
    use anyhow::Context;

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/app.css");
    std::fs::read_to_string(&css_path)
        .with_context(|| format!("reading stylesheet {}", css_path.display()))
}
