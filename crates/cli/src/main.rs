//! `retro-theme` -- export retro design tokens as JSON.
//!
//! Builds a retro theme from a preset or a JSON config file and writes
//! the merged tokens, the override tree, or an entity report to stdout.
//! Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default   | Description                               |
//! |----------------------|----------|-----------|-------------------------------------------|
//! | `RETRO_THEME_PRESET` | no       | `classic` | `classic`, `vintage` or `neon`            |
//! | `RETRO_THEME_CONFIG` | no       | --        | Path to a JSON `RetroThemeConfig`; wins over the preset |
//! | `RETRO_THEME_OUTPUT` | no       | `tokens`  | `tokens`, `overrides` or `report`         |
//! | `RUST_LOG`           | no       | `retro_theme=info` | Log filter                       |

use std::io::Write;

use anyhow::Context;
use retro_theme_builder::{RetroThemeBuilder, RetroThemeConfig};
use retro_theme_core::RetroTheme;
use retro_theme_events::{publish_pending, EventBus};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod output;

use config::{ExportConfig, ThemeSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retro_theme=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExportConfig::from_env().context("Invalid configuration")?;
    tracing::info!(source = ?config.source, output = ?config.output, "Starting retro-theme export");

    let builder = RetroThemeBuilder::default();
    let mut theme = build(&builder, &config.source)?;

    let bus = EventBus::default();
    let mut rx = bus.subscribe();
    let listener = tokio::spawn(async move {
        while let Ok(envelope) = rx.recv().await {
            tracing::info!(
                event_type = %envelope.event_type,
                theme_id = %envelope.theme_id,
                "Theme event",
            );
        }
    });
    let published = publish_pending(&mut theme, &bus).context("Failed to publish theme events")?;
    drop(bus);
    listener.await.context("Event listener task failed")?;
    tracing::debug!(published, "Theme events drained");

    let rendered = output::render(&theme, config.output).context("Failed to render output")?;
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &rendered).context("Failed to write output")?;
    writeln!(stdout)?;

    Ok(())
}

fn build(builder: &RetroThemeBuilder, source: &ThemeSource) -> anyhow::Result<RetroTheme> {
    match source {
        ThemeSource::Preset(preset) => builder
            .build_from_preset(*preset)
            .with_context(|| format!("Failed to build preset '{preset}'")),
        ThemeSource::ConfigFile(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let theme_config: RetroThemeConfig = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            builder
                .build_from_config(&theme_config)
                .with_context(|| format!("Failed to build theme from {}", path.display()))
        }
    }
}
