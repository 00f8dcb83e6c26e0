//! Scoped binding registrations
//!
//! Every successful bind call returns a [`BindingHandle`]: the caller's
//! lever over one live binding. It adjusts the binding's configuration and
//! can tear down exactly that binding without touching the rest of the view.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::core::types::BindingConfig;
use crate::registry::{BindingId, BindingRegistry, ObjectId};

/// Owner of one live binding registration.
///
/// Dropping the handle leaves the binding in place; the binding lives until
/// [`unbind`](BindingHandle::unbind), an
/// [`unbind_view`](BindingRegistry::unbind_view) on its owning view, or a
/// viewmodel replacement removes it.
#[derive(Debug)]
pub struct BindingHandle {
    registry: Weak<BindingRegistry>,
    view: ObjectId,
    binding: BindingId,
    config: Rc<Cell<BindingConfig>>,
}

impl BindingHandle {
    pub(crate) fn new(
        registry: Weak<BindingRegistry>,
        view: ObjectId,
        binding: BindingId,
        config: Rc<Cell<BindingConfig>>,
    ) -> Self {
        Self {
            registry,
            view,
            binding,
            config,
        }
    }

    /// Adjusts the binding configuration in place.
    ///
    /// The configuration is read at event time, so changes made after the
    /// initial push are honoured on subsequent notifications and control
    /// events. Returns `&self` so several setup steps chain:
    ///
    /// ```ignore
    /// registry
    ///     .bind_text(&view, &entry, &vm, property)?
    ///     .setup(|config| config.two_way = true)
    ///     .setup(|config| config.update_trigger = UpdateTrigger::OnFocusLost);
    /// ```
    pub fn setup(&self, configure: impl FnOnce(&mut BindingConfig)) -> &Self {
        let mut config = self.config.get();
        configure(&mut config);
        self.config.set(config);
        self
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> BindingConfig {
        self.config.get()
    }

    /// Removes this binding from its registry and disconnects the handlers
    /// it holds. A no-op when the binding is already gone (view unbound,
    /// viewmodel replaced, or registry dropped).
    pub fn unbind(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove_binding(self.view, self.binding);
        }
    }
}
