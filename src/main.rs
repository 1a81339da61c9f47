use anyhow::Result;
use showreel_site::animate::TracingAnimator;
use showreel_site::app::Site;
use showreel_site::carousel::TracingCarousel;
use showreel_site::config::Config;
use showreel_site::dom::Document;
use showreel_site::i18n::CatalogValidator;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("showreel_site=info".parse()?),
        )
        .init();

    info!("Starting portfolio site engine");

    // Surface catalog authoring gaps before anything renders
    let report = CatalogValidator::validate();
    for gap in report.errors.iter().chain(report.warnings.iter()) {
        warn!("Catalog: {}", gap);
    }

    // Load configuration from environment
    let config = Config::from_env()?;

    let site = Site::new(
        config,
        Document::home(),
        Box::new(TracingAnimator),
        Box::new(TracingCarousel::new()),
    )?;

    site.on_language_change(|lang| info!("Language changed to {} ({})", lang, lang.native_name()));

    // Run the page-load sequence
    site.boot().await;

    info!(
        "Page booted in '{}' ({}) with testimonial panel {:?}",
        site.page().lang(),
        site.page().dir().as_str(),
        site.testimonial_panel()
    );

    // Walk through the other languages the way a visitor would
    for code in ["nl", "ar", "en"] {
        site.select_language(code).await;
    }

    info!("Done");
    Ok(())
}
