//! Session result store port
//!
//! Holds the latest [`DesignPlan`] of one interactive session so the
//! presentation layer can re-render it without issuing new requests.

use std::sync::{Arc, Mutex, PoisonError};
use studio_domain::DesignPlan;

/// Single-slot, last-write-wins plan store.
pub trait PlanStore: Send + Sync {
    /// Replace the stored plan wholesale and return the stored handle.
    fn set(&self, plan: DesignPlan) -> Arc<DesignPlan>;

    /// The latest plan, if one has been stored.
    fn get(&self) -> Option<Arc<DesignPlan>>;

    /// Drop the stored plan.
    fn clear(&self);
}

/// In-memory store scoped to one session.
///
/// Writes are serialized by a mutex; readers get a cheap `Arc` clone of the
/// plan that was current when they asked.
#[derive(Default)]
pub struct SessionPlanStore {
    slot: Mutex<Option<Arc<DesignPlan>>>,
}

impl SessionPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanStore for SessionPlanStore {
    fn set(&self, plan: DesignPlan) -> Arc<DesignPlan> {
        let plan = Arc::new(plan);
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&plan));
        plan
    }

    fn get(&self) -> Option<Arc<DesignPlan>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
