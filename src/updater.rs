use crate::cache::CacheStore;
use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::detector::{ContextDetector, Detection};
use crate::error::Result;
use crate::estimator::Estimator;
use crate::formatting::estimate_summary;
use crate::types::UsageSnapshot;
use crate::utils::{ProcessInspector, PsInspector};
use tracing::{debug, info};

/// What a single run did
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Not invoked by the host tool; nothing to estimate
    NotHostContext { parent: Option<String> },
    /// No usable prior snapshot; cache left as is
    NoEstimate,
    /// Cache replaced with this snapshot
    Updated(UsageSnapshot),
}

/// One-shot read → estimate → write
pub struct Updater<C: Clock, P: ProcessInspector> {
    settings: Settings,
    clock: C,
    inspector: P,
    estimator: Estimator,
}

impl Updater<SystemClock, PsInspector> {
    pub fn from_settings(settings: Settings) -> Self {
        Self::new(settings, SystemClock, PsInspector)
    }
}

impl<C: Clock, P: ProcessInspector> Updater<C, P> {
    pub fn new(settings: Settings, clock: C, inspector: P) -> Self {
        Self {
            settings,
            clock,
            inspector,
            estimator: Estimator::default(),
        }
    }

    /// Run once. Errors leave the cache file untouched.
    pub fn run(&self) -> Result<UpdateOutcome> {
        if let Some(session_id) = &self.settings.session_id {
            info!("Detected session {}", session_id);
        }

        let detector = ContextDetector::new(&self.inspector, &self.settings.host_tool);
        let parent = match detector.detect() {
            Detection::Host { parent } => parent,
            Detection::NotHost { parent } => {
                debug!("parent process {:?} is not {}", parent, self.settings.host_tool);
                return Ok(UpdateOutcome::NotHostContext { parent });
            }
        };
        info!("Running from {} process", parent);

        let store = CacheStore::new(&self.settings.cache_path);
        let previous = store.load()?;

        let now = self.clock.now();
        let Some(estimate) = self.estimator.estimate(previous.as_ref(), now) else {
            return Ok(UpdateOutcome::NoEstimate);
        };
        info!("Estimated increase {}", estimate_summary(&estimate));

        let snapshot = estimate.to_snapshot(now);
        store.save(&snapshot)?;

        Ok(UpdateOutcome::Updated(snapshot))
    }
}
