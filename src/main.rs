use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use encounter_guide::adapters::{
    BoundingBoxGeocoder, CachedLocationSource, FixedLocationSource, OpenAIConfig, OpenAIProvider,
    SimulatedAlertDispatcher, SimulatedBilling,
};
use encounter_guide::application::{
    AlertSession, AppCoordinator, CoordinatorSettings, GenerationSettings, GuidanceProvider,
    JurisdictionResolver, PurchaseOutcome, ResolutionOutcome, SharedCatalog,
};
use encounter_guide::config::AppConfig;
use encounter_guide::domain::guidance::{GuideCatalog, PurchaseKind};
use encounter_guide::domain::jurisdiction::ClassificationRules;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init();

    let ai = OpenAIProvider::new(
        OpenAIConfig::new(config.ai.api_key.clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?;
    let guidance = GuidanceProvider::new(
        Arc::new(ai),
        GenerationSettings {
            script_temperature: config.ai.script_temperature,
            script_max_tokens: config.ai.script_max_tokens,
            guide_temperature: config.ai.guide_temperature,
            guide_max_tokens: config.ai.guide_max_tokens,
        },
    );

    let resolver = JurisdictionResolver::new(
        Arc::new(CachedLocationSource::new(FixedLocationSource::new(
            config.location.device_position(),
        ))),
        Arc::new(BoundingBoxGeocoder::new(
            ClassificationRules::reference(),
            config.location.geocoder_latency(),
        )),
        config.location.position_options(),
    );

    let alert = AlertSession::new(
        Arc::new(SimulatedAlertDispatcher::new(config.timing.dispatch_delay())),
        config.timing.auto_reset_delay(),
    );

    let coordinator = AppCoordinator::new(
        resolver,
        guidance,
        alert,
        Arc::new(SimulatedBilling::new(config.timing.billing_delay())),
        SharedCatalog::new(GuideCatalog::with_sample_guides()),
        CoordinatorSettings {
            default_jurisdiction: config.location.default_jurisdiction()?,
            auto_raise_delay: config.timing.auto_raise_delay(),
        },
    );

    match coordinator.detect_location().await {
        ResolutionOutcome::Applied(jurisdiction) => info!(%jurisdiction, "location detected"),
        other => warn!(outcome = ?other, "using default jurisdiction"),
    }

    match coordinator
        .purchase_guide(PurchaseKind::JurisdictionSpecific)
        .await?
    {
        PurchaseOutcome::GuideUnlocked(guide) => {
            println!("{}", serde_json::to_string_pretty(&guide)?);
        }
        PurchaseOutcome::Unlocked(kind) => info!(%kind, "purchase unlocked"),
    }

    coordinator.add_emergency_contact("+1 (555) 010-0000").await?;
    coordinator.set_recording(true).await;
    tokio::time::sleep(config.timing.auto_raise_delay() + Duration::from_millis(50)).await;

    let receipt = coordinator.confirm_alert().await?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    coordinator.set_recording(false).await;

    tokio::time::sleep(config.timing.auto_reset_delay() + Duration::from_millis(50)).await;
    println!(
        "{}",
        serde_json::to_string_pretty(&coordinator.snapshot().await)?
    );

    Ok(())
}
