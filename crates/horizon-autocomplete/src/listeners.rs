//! Scoped listener registrations.

use horizon_autocomplete_core::logging::targets;

use crate::dom::{Document, EventKind, ListenTarget, ListenerId};

/// A group of listeners acquired together and released together.
///
/// Each controller owns its own sets, so two controllers on the same page
/// never share or clobber registrations.
#[derive(Debug, Default)]
pub(crate) struct ListenerSet {
    registrations: Vec<(EventKind, ListenerId)>,
}

impl ListenerSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register every `(target, kind)` pair. Anything already held is
    /// released first.
    pub(crate) fn acquire<D: Document>(
        &mut self,
        document: &mut D,
        wanted: &[(ListenTarget, EventKind)],
    ) {
        self.release(document);
        self.registrations = wanted
            .iter()
            .map(|&(target, kind)| (kind, document.add_listener(target, kind)))
            .collect();
        tracing::trace!(
            target: targets::CONTROLLER,
            count = self.registrations.len(),
            "listeners acquired"
        );
    }

    /// Remove every registration. Safe to call when nothing is held.
    pub(crate) fn release<D: Document>(&mut self, document: &mut D) {
        if self.registrations.is_empty() {
            return;
        }
        for (_, id) in self.registrations.drain(..) {
            document.remove_listener(id);
        }
        tracing::trace!(target: targets::CONTROLLER, "listeners released");
    }

    /// Returns `true` if a listener for `kind` is held.
    pub(crate) fn listens_for(&self, kind: EventKind) -> bool {
        self.registrations.iter().any(|(k, _)| *k == kind)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
