//! AppCoordinator - owns the user's selection, recording flag and alert session.
//!
//! # Ordering rules
//!
//! - Jurisdiction updates carry a generation number taken when the request is
//!   issued. A resolution result is applied only if no newer update (another
//!   resolution or a manual selection) was issued in the meantime.
//! - The auto-raise timer is armed by `set_recording(true)` and cancelled by
//!   `set_recording(false)`; a timer that fires after cancellation does nothing.
//! - Purchases for the same kind, jurisdiction and language run one at a time.
//!
//! # Locking
//!
//! Coordinator state is always locked before the alert session's state,
//! never the other way round.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::domain::alert::{AlertError, DispatchReceipt, EmergencyContact};
use crate::domain::foundation::{
    Coordinates, ErrorCode, Jurisdiction, Language, RecordingId, ValidationError,
};
use crate::domain::guidance::{LegalGuide, PurchaseKind, DEFAULT_SCENARIO};
use crate::ports::{BillingError, BillingGateway};

use super::alert_session::{AlertContext, AlertSession, AlertSnapshot};
use super::guidance_provider::GuidanceProvider;
use super::jurisdiction_resolver::{JurisdictionResolver, LocationUnavailable};
use super::shared_catalog::SharedCatalog;
use super::timer::TimerSlot;

/// Fixed parameters of a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorSettings {
    /// Selection used until a jurisdiction is resolved or chosen.
    pub default_jurisdiction: Jurisdiction,
    /// Delay between starting a recording and raising the alert prompt.
    pub auto_raise_delay: Duration,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            default_jurisdiction: Jurisdiction::default(),
            auto_raise_delay: Duration::from_millis(2000),
        }
    }
}

/// Result of a jurisdiction resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The resolved jurisdiction is now selected.
    Applied(Jurisdiction),
    /// A newer update was issued first; the result was discarded.
    Superseded { resolved: Jurisdiction },
    /// Nothing could be resolved; the selection is unchanged.
    Unavailable(LocationUnavailable),
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// A new guide was generated, cataloged and selected.
    GuideUnlocked(LegalGuide),
    /// The purchase carries no generated content.
    Unlocked(PurchaseKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("purchase declined: {0}")]
    BillingDeclined(String),

    #[error("billing unavailable: {0}")]
    BillingUnavailable(String),
}

impl PurchaseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PurchaseError::BillingDeclined(_) => ErrorCode::BillingDeclined,
            PurchaseError::BillingUnavailable(_) => ErrorCode::InternalError,
        }
    }
}

impl From<BillingError> for PurchaseError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Declined(reason) => PurchaseError::BillingDeclined(reason),
            BillingError::Unavailable(reason) => PurchaseError::BillingUnavailable(reason),
        }
    }
}

/// Point-in-time view of everything the presentation layer displays.
#[derive(Debug, Clone, Serialize)]
pub struct CoordinatorSnapshot {
    pub jurisdiction: Jurisdiction,
    pub language: Language,
    pub recording: bool,
    pub alert: AlertSnapshot,
    pub current_guide: Option<LegalGuide>,
}

type PurchaseKey = (PurchaseKind, Jurisdiction, Language);

#[derive(Debug)]
struct CoordinatorState {
    jurisdiction: Jurisdiction,
    language: Language,
    recording: bool,
    recording_id: Option<RecordingId>,
    current_guide: Option<LegalGuide>,
    last_known_location: Option<Coordinates>,
    contacts: Vec<EmergencyContact>,
    selection_generation: u64,
    auto_raise: TimerSlot,
}

impl CoordinatorState {
    fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            language: Language::default(),
            recording: false,
            recording_id: None,
            current_guide: None,
            last_known_location: None,
            contacts: Vec::new(),
            selection_generation: 0,
            auto_raise: TimerSlot::default(),
        }
    }

    /// Starts a new jurisdiction update and returns its generation.
    fn next_generation(&mut self) -> u64 {
        self.selection_generation += 1;
        self.selection_generation
    }
}

pub struct AppCoordinator {
    state: Arc<Mutex<CoordinatorState>>,
    alert: AlertSession,
    resolver: JurisdictionResolver,
    guidance: GuidanceProvider,
    billing: Arc<dyn BillingGateway>,
    catalog: SharedCatalog,
    purchase_locks: Mutex<HashMap<PurchaseKey, Arc<Mutex<()>>>>,
    settings: CoordinatorSettings,
}

impl AppCoordinator {
    pub fn new(
        resolver: JurisdictionResolver,
        guidance: GuidanceProvider,
        alert: AlertSession,
        billing: Arc<dyn BillingGateway>,
        catalog: SharedCatalog,
        settings: CoordinatorSettings,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(CoordinatorState::new(
                settings.default_jurisdiction,
            ))),
            alert,
            resolver,
            guidance,
            billing,
            catalog,
            purchase_locks: Mutex::new(HashMap::new()),
            settings,
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Queries
    // ════════════════════════════════════════════════════════════════════════

    pub async fn snapshot(&self) -> CoordinatorSnapshot {
        let state = self.state.lock().await;
        CoordinatorSnapshot {
            jurisdiction: state.jurisdiction,
            language: state.language,
            recording: state.recording,
            alert: self.alert.snapshot().await,
            current_guide: state.current_guide.clone(),
        }
    }

    pub async fn jurisdiction(&self) -> Jurisdiction {
        self.state.lock().await.jurisdiction
    }

    pub async fn language(&self) -> Language {
        self.state.lock().await.language
    }

    pub async fn is_recording(&self) -> bool {
        self.state.lock().await.recording
    }

    pub async fn current_guide(&self) -> Option<LegalGuide> {
        self.state.lock().await.current_guide.clone()
    }

    pub async fn last_known_location(&self) -> Option<Coordinates> {
        self.state.lock().await.last_known_location
    }

    pub async fn is_auto_raise_pending(&self) -> bool {
        self.state.lock().await.auto_raise.is_pending()
    }

    /// The alert session, for observing its status.
    pub fn alert(&self) -> &AlertSession {
        &self.alert
    }

    /// The guide catalog, for read access.
    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    // ════════════════════════════════════════════════════════════════════════
    // Selection
    // ════════════════════════════════════════════════════════════════════════

    /// Selects a jurisdiction manually. Any resolution still in flight will
    /// not override it.
    pub async fn set_jurisdiction(&self, jurisdiction: Jurisdiction) {
        let mut state = self.state.lock().await;
        state.next_generation();
        state.jurisdiction = jurisdiction;
        info!(%jurisdiction, "jurisdiction selected");
    }

    pub async fn set_language(&self, language: Language) {
        self.state.lock().await.language = language;
        info!(%language, "language selected");
    }

    /// Flips between the two supported languages and returns the new one.
    pub async fn toggle_language(&self) -> Language {
        let mut state = self.state.lock().await;
        state.language = state.language.toggled();
        info!(language = %state.language, "language toggled");
        state.language
    }

    /// Resolves a jurisdiction from coordinates and selects it unless a newer
    /// update was issued while the lookup was pending.
    pub async fn resolve_coordinates(&self, coords: Coordinates) -> ResolutionOutcome {
        let generation = self.state.lock().await.next_generation();
        let result = self.resolver.resolve(coords).await;
        self.apply_resolution(generation, result).await
    }

    /// Locates the device, remembers the position and resolves its
    /// jurisdiction.
    pub async fn detect_location(&self) -> ResolutionOutcome {
        let generation = self.state.lock().await.next_generation();

        let coords = match self.resolver.locate().await {
            Ok(coords) => coords,
            Err(err) => return self.apply_resolution(generation, Err(err)).await,
        };
        self.state.lock().await.last_known_location = Some(coords);

        let result = self.resolver.resolve(coords).await;
        self.apply_resolution(generation, result).await
    }

    async fn apply_resolution(
        &self,
        generation: u64,
        result: Result<Jurisdiction, LocationUnavailable>,
    ) -> ResolutionOutcome {
        let mut state = self.state.lock().await;
        match result {
            Ok(resolved) if state.selection_generation == generation => {
                state.jurisdiction = resolved;
                info!(jurisdiction = %resolved, generation, "jurisdiction resolved");
                ResolutionOutcome::Applied(resolved)
            }
            Ok(resolved) => {
                warn!(
                    %resolved,
                    generation,
                    latest = state.selection_generation,
                    "discarding stale jurisdiction resolution"
                );
                ResolutionOutcome::Superseded { resolved }
            }
            Err(err) => {
                warn!(
                    error = %err,
                    code = %err.code(),
                    kept = %state.jurisdiction,
                    "jurisdiction unavailable, keeping selection"
                );
                ResolutionOutcome::Unavailable(err)
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Recording and alerts
    // ════════════════════════════════════════════════════════════════════════

    /// Starts or stops recording.
    ///
    /// Starting arms the auto-raise timer (re-arming it if already pending).
    /// Stopping cancels a pending auto-raise but leaves an already raised
    /// alert untouched.
    pub async fn set_recording(&self, recording: bool) {
        let mut state = self.state.lock().await;
        let was_recording = state.recording;
        state.recording = recording;

        if !recording {
            if state.auto_raise.cancel() {
                info!("recording stopped, auto-raise cancelled");
            } else {
                info!("recording stopped");
            }
            return;
        }

        if !was_recording {
            state.recording_id = Some(RecordingId::new());
        }

        let ticket = state.auto_raise.arm();
        let shared = Arc::clone(&self.state);
        let alert = self.alert.clone();
        let delay = self.settings.auto_raise_delay;

        let handle = tokio::spawn(async move {
            sleep(delay).await;

            let mut state = shared.lock().await;
            if !state.auto_raise.fire(ticket) {
                return;
            }
            if !state.recording {
                debug!("auto-raise skipped, recording stopped");
                return;
            }
            if alert.raise().await {
                info!("alert raised automatically");
            }
        });

        state.auto_raise.set_handle(ticket, handle);
        info!(recording_id = ?state.recording_id, ?delay, "recording started");
    }

    /// Adds an emergency contact. Duplicates are ignored.
    pub async fn add_emergency_contact(
        &self,
        raw: &str,
    ) -> Result<EmergencyContact, ValidationError> {
        let contact = EmergencyContact::parse(raw)?;
        let mut state = self.state.lock().await;
        if !state.contacts.contains(&contact) {
            state.contacts.push(contact.clone());
        }
        Ok(contact)
    }

    pub async fn emergency_contacts(&self) -> Vec<EmergencyContact> {
        self.state.lock().await.contacts.clone()
    }

    pub async fn raise_alert(&self) -> bool {
        self.alert.raise().await
    }

    /// Confirms the active alert, sending the last known location, the
    /// emergency contacts and the most recent recording.
    pub async fn confirm_alert(&self) -> Result<DispatchReceipt, AlertError> {
        let context = {
            let state = self.state.lock().await;
            AlertContext {
                location: state.last_known_location,
                contacts: state.contacts.clone(),
                recorded_media: state.recording_id,
            }
        };
        self.alert.confirm(context).await
    }

    pub async fn cancel_alert(&self) -> Result<(), AlertError> {
        self.alert.cancel().await
    }

    // ════════════════════════════════════════════════════════════════════════
    // Purchases
    // ════════════════════════════════════════════════════════════════════════

    /// Charges for `kind` and, for jurisdiction-specific purchases, generates
    /// a guide for the current selection, appends it to the catalog and makes
    /// it the current guide.
    ///
    /// A failed charge changes nothing.
    pub async fn purchase_guide(&self, kind: PurchaseKind) -> Result<PurchaseOutcome, PurchaseError> {
        let (jurisdiction, language) = {
            let state = self.state.lock().await;
            (state.jurisdiction, state.language)
        };

        let key_lock = {
            let mut locks = self.purchase_locks.lock().await;
            Arc::clone(locks.entry((kind, jurisdiction, language)).or_default())
        };
        let _serialized = key_lock.lock().await;

        let receipt = self.billing.charge(kind).await.map_err(|err| {
            warn!(%kind, error = %err, "purchase failed");
            PurchaseError::from(err)
        })?;
        info!(%kind, receipt_id = %receipt.receipt_id, %jurisdiction, %language, "purchase completed");

        if !kind.generates_guide() {
            return Ok(PurchaseOutcome::Unlocked(kind));
        }

        let content = self.guidance.generate_guide(jurisdiction, language).await;
        let scripts = self
            .guidance
            .generate_script(jurisdiction, DEFAULT_SCENARIO, language)
            .await;
        let guide = LegalGuide::new(jurisdiction, language, content, scripts);

        self.catalog.append(guide.clone()).await;
        self.state.lock().await.current_guide = Some(guide.clone());
        info!(guide_id = %guide.id(), %jurisdiction, %language, "guide unlocked");

        Ok(PurchaseOutcome::GuideUnlocked(guide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        BoundingBoxGeocoder, FixedLocationSource, MockAIProvider, SimulatedAlertDispatcher,
        SimulatedBilling,
    };
    use crate::application::GenerationSettings;
    use crate::domain::alert::AlertStatus;
    use crate::domain::guidance::GuideCatalog;
    use crate::domain::jurisdiction::ClassificationRules;
    use crate::ports::PositionOptions;

    struct Fixture {
        coordinator: AppCoordinator,
        billing: SimulatedBilling,
        dispatcher: SimulatedAlertDispatcher,
    }

    fn fixture(position: Option<Coordinates>) -> Fixture {
        let billing = SimulatedBilling::new(Duration::from_millis(1500));
        let dispatcher = SimulatedAlertDispatcher::new(Duration::from_secs(2));
        let resolver = JurisdictionResolver::new(
            Arc::new(FixedLocationSource::new(position)),
            Arc::new(BoundingBoxGeocoder::new(
                ClassificationRules::reference(),
                Duration::from_secs(1),
            )),
            PositionOptions::default(),
        );
        let coordinator = AppCoordinator::new(
            resolver,
            GuidanceProvider::new(
                Arc::new(MockAIProvider::new()),
                GenerationSettings::default(),
            ),
            AlertSession::new(Arc::new(dispatcher.clone()), Duration::from_secs(3)),
            Arc::new(billing.clone()),
            SharedCatalog::new(GuideCatalog::with_sample_guides()),
            CoordinatorSettings::default(),
        );
        Fixture {
            coordinator,
            billing,
            dispatcher,
        }
    }

    fn state(name: &str) -> Jurisdiction {
        Jurisdiction::parse(name).unwrap()
    }

    #[tokio::test]
    async fn starts_with_default_selection() {
        let f = fixture(None);
        let snap = f.coordinator.snapshot().await;
        assert_eq!(snap.jurisdiction, state("California"));
        assert_eq!(snap.language, Language::English);
        assert!(!snap.recording);
        assert_eq!(snap.alert.status, AlertStatus::Idle);
        assert!(snap.current_guide.is_none());
    }

    #[tokio::test]
    async fn toggle_language_flips_twice_back() {
        let f = fixture(None);
        assert_eq!(f.coordinator.toggle_language().await, Language::Spanish);
        assert_eq!(f.coordinator.toggle_language().await, Language::English);
    }

    #[tokio::test(start_paused = true)]
    async fn detect_location_applies_and_remembers_position() {
        let austin = Coordinates::new(30.27, -97.74);
        let f = fixture(Some(austin));

        let outcome = f.coordinator.detect_location().await;

        assert_eq!(outcome, ResolutionOutcome::Applied(state("Texas")));
        assert_eq!(f.coordinator.jurisdiction().await, state("Texas"));
        assert_eq!(f.coordinator.last_known_location().await, Some(austin));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_detection_keeps_previous_selection() {
        let f = fixture(None);
        f.coordinator.set_jurisdiction(state("Ohio")).await;

        let outcome = f.coordinator.detect_location().await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Unavailable(LocationUnavailable::PermissionDenied)
        );
        assert_eq!(f.coordinator.jurisdiction().await, state("Ohio"));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_selection_beats_pending_resolution() {
        let f = fixture(None);

        let (outcome, ()) = tokio::join!(
            f.coordinator.resolve_coordinates(Coordinates::new(30.0, -97.0)),
            async {
                sleep(Duration::from_millis(100)).await;
                f.coordinator.set_jurisdiction(state("Maine")).await;
            }
        );

        assert_eq!(
            outcome,
            ResolutionOutcome::Superseded {
                resolved: state("Texas")
            }
        );
        assert_eq!(f.coordinator.jurisdiction().await, state("Maine"));
    }

    #[tokio::test(start_paused = true)]
    async fn recording_raises_alert_after_delay() {
        let f = fixture(None);

        f.coordinator.set_recording(true).await;
        assert!(f.coordinator.is_auto_raise_pending().await);

        sleep(Duration::from_millis(2001)).await;

        assert_eq!(f.coordinator.alert().status().await, AlertStatus::Active);
        assert!(!f.coordinator.is_auto_raise_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_recording_cancels_auto_raise() {
        let f = fixture(None);

        f.coordinator.set_recording(true).await;
        sleep(Duration::from_millis(500)).await;
        f.coordinator.set_recording(false).await;
        sleep(Duration::from_secs(5)).await;

        assert_eq!(f.coordinator.alert().status().await, AlertStatus::Idle);
        assert!(!f.coordinator.is_auto_raise_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_recording_leaves_active_alert() {
        let f = fixture(None);
        f.coordinator.set_recording(true).await;
        sleep(Duration::from_millis(2001)).await;

        f.coordinator.set_recording(false).await;

        assert_eq!(f.coordinator.alert().status().await, AlertStatus::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_recording_rearms_timer() {
        let f = fixture(None);

        f.coordinator.set_recording(true).await;
        sleep(Duration::from_millis(1500)).await;
        f.coordinator.set_recording(true).await;
        sleep(Duration::from_millis(1000)).await;

        assert_eq!(f.coordinator.alert().status().await, AlertStatus::Idle);

        sleep(Duration::from_millis(1001)).await;
        assert_eq!(f.coordinator.alert().status().await, AlertStatus::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_alert_sends_location_contacts_and_recording() {
        let here = Coordinates::new(40.71, -74.0);
        let f = fixture(Some(here));
        f.coordinator.detect_location().await;
        f.coordinator.add_emergency_contact("+1 555 000 1111").await.unwrap();
        f.coordinator.add_emergency_contact("+1 555 000 1111").await.unwrap();
        f.coordinator.set_recording(true).await;
        sleep(Duration::from_millis(2001)).await;

        let receipt = f.coordinator.confirm_alert().await.unwrap();

        assert_eq!(receipt.delivered_to, 1);
        let requests = f.dispatcher.requests();
        let sent = &requests[0];
        assert_eq!(sent.location, Some(here));
        assert!(sent.recorded_media.is_some());
        assert_eq!(f.coordinator.alert().status().await, AlertStatus::Sent);
    }

    #[tokio::test]
    async fn invalid_contact_is_rejected() {
        let f = fixture(None);
        assert!(f.coordinator.add_emergency_contact("??").await.is_err());
        assert!(f.coordinator.emergency_contacts().await.is_empty());
    }

    #[tokio::test]
    async fn cancel_alert_requires_active() {
        let f = fixture(None);
        assert!(f.coordinator.cancel_alert().await.is_err());
        assert!(f.coordinator.raise_alert().await);
        assert!(f.coordinator.cancel_alert().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn declined_purchase_changes_nothing() {
        let f = fixture(None);
        f.billing.set_declining(true);
        let before = f.coordinator.catalog().guides().await;

        let err = f
            .coordinator
            .purchase_guide(PurchaseKind::JurisdictionSpecific)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::BillingDeclined);
        assert_eq!(f.coordinator.catalog().guides().await, before);
        assert!(f.coordinator.current_guide().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn non_generating_purchase_only_unlocks() {
        let f = fixture(None);

        let outcome = f
            .coordinator
            .purchase_guide(PurchaseKind::PremiumAccess)
            .await
            .unwrap();

        assert_eq!(outcome, PurchaseOutcome::Unlocked(PurchaseKind::PremiumAccess));
        assert_eq!(f.coordinator.catalog().len().await, 2);
        assert_eq!(f.billing.charges().len(), 1);
    }
}
