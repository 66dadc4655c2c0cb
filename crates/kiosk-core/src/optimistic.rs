//! Caller-side optimistic updates with rollback.
//!
//! A screen shows a proposed value before the catalog service answers, then
//! either adopts the persisted row or falls back to the last confirmed one.
//! Nothing is retried here.

/// Per-entity state: the last known-good value, or a pending proposal on top of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Optimistic<T> {
    Confirmed(T),
    Tentative { prior: T, proposed: T },
}

impl<T: Clone> Optimistic<T> {
    pub fn confirmed(value: T) -> Self {
        Optimistic::Confirmed(value)
    }

    /// Value to render right now.
    pub fn current(&self) -> &T {
        match self {
            Optimistic::Confirmed(value) => value,
            Optimistic::Tentative { proposed, .. } => proposed,
        }
    }

    pub fn is_tentative(&self) -> bool {
        matches!(self, Optimistic::Tentative { .. })
    }

    /// Show `proposed` until the outcome arrives. A second proposal before
    /// settling keeps the original confirmed snapshot as the rollback target.
    pub fn propose(&mut self, proposed: T) {
        let prior = self.last_confirmed().clone();
        *self = Optimistic::Tentative { prior, proposed };
    }

    /// Adopt the persisted value on success, restore the snapshot on failure.
    pub fn settle<E>(&mut self, outcome: Result<T, E>) -> Result<&T, E> {
        match outcome {
            Ok(persisted) => {
                *self = Optimistic::Confirmed(persisted);
                Ok(self.current())
            }
            Err(e) => {
                let prior = self.last_confirmed().clone();
                *self = Optimistic::Confirmed(prior);
                Err(e)
            }
        }
    }

    fn last_confirmed(&self) -> &T {
        match self {
            Optimistic::Confirmed(value) => value,
            Optimistic::Tentative { prior, .. } => prior,
        }
    }
}
