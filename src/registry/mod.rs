// Copyright 2025 the uibind authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binding registry
//!
//! The registry tracks view ↔ viewmodel ↔ binding relationships:
//! - `view_models`: which viewmodel currently backs which view
//! - `bindings`: the live bindings declared under each view
//! - `subscriptions`: one property-changed subscription per distinct
//!   viewmodel, shared by every view that viewmodel backs
//!
//! # Invariants
//!
//! - Every binding stored under a view targets the viewmodel currently
//!   assigned to that view; swapping the viewmodel removes the bindings.
//! - The registry holds strong references to bound views, controls and
//!   viewmodels; `unbind_view` (or a viewmodel swap, or a handle's `unbind`)
//!   is what releases them and disconnects every hooked signal handler.
//! - The interior state borrow is never held across a user callback:
//!   refreshing a control can synchronously re-enter the registry through a
//!   control-side change handler, so refresh and unhook closures are
//!   collected under the borrow and invoked after it is released.
//!
//! All of this is single-threaded UI-thread state; the registry is neither
//! `Send` nor `Sync`.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::bindings::{self, BoundAdapter};
use crate::core::command::Command;
use crate::core::control::{Clickable, TextInput, Toggle};
use crate::core::property::Property;
use crate::core::signal::HandlerId;
use crate::core::types::BindingConfig;
use crate::core::view_model::ViewModel;

mod error;
mod handle;

pub use error::BindingError;
pub use handle::BindingHandle;

#[cfg(test)]
mod tests;

/// Identity key for registry maps: the address of an `Rc` allocation.
///
/// An id is only stored while the registry also holds a strong reference to
/// the object, so a key can never outlive its allocation and be reused by a
/// different registered object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct ObjectId(usize);

impl ObjectId {
    fn of<T: ?Sized>(object: &Rc<T>) -> Self {
        Self(Rc::as_ptr(object) as *const () as usize)
    }
}

/// Identifies one registered binding within its registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct BindingId(u64);

/// One live binding registered under a view.
struct BindingEntry {
    id: BindingId,
    /// Viewmodel property this binding refreshes on. `None` for command
    /// bindings, which follow the command's own signal instead.
    source_property: Option<&'static str>,
    /// Pushes the current viewmodel value into the control.
    refresh: Option<Rc<dyn Fn()>>,
    /// Disconnects the handlers hooked at declaration.
    unhook: Box<dyn FnOnce()>,
}

/// Viewmodel assignment for one view.
struct ViewSlot {
    /// Keeps the view alive while it is bound.
    _view: Rc<dyn Any>,
    view_model_id: ObjectId,
    /// The assigned viewmodel, kept as `Any` for typed retrieval through
    /// [`BindingRegistry::view_model_for`].
    view_model: Rc<dyn Any>,
}

/// Shared property-changed subscription for one distinct viewmodel.
struct Subscription {
    view_model: Rc<dyn ViewModel>,
    handler: HandlerId,
}

#[derive(Default)]
struct RegistryState {
    bindings: HashMap<ObjectId, Vec<BindingEntry>>,
    view_models: HashMap<ObjectId, ViewSlot>,
    subscriptions: HashMap<ObjectId, Subscription>,
    next_binding_id: u64,
}

impl RegistryState {
    /// Removes the subscription for `view_model_id` when no remaining view
    /// references that viewmodel. Call after the owning slot was removed.
    fn release_subscription(&mut self, view_model_id: ObjectId) -> Option<Subscription> {
        let still_referenced = self
            .view_models
            .values()
            .any(|slot| slot.view_model_id == view_model_id);
        if still_referenced {
            None
        } else {
            self.subscriptions.remove(&view_model_id)
        }
    }
}

/// Registry of declarative bindings between views, controls and viewmodels.
///
/// Constructed behind an `Rc` and typically owned by the application's UI
/// composition root. Independent registries do not share any state.
pub struct BindingRegistry {
    state: RefCell<RegistryState>,
}

impl BindingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(RegistryState::default()),
        })
    }

    /// Assigns `view_model` as the viewmodel backing `view`.
    ///
    /// If the view already had a viewmodel, all of the view's bindings are
    /// unbound first and the old viewmodel's change subscription is dropped
    /// unless another view still references it. The new viewmodel's
    /// `property_changed` signal is subscribed once per distinct viewmodel,
    /// however many views it backs.
    pub fn assign_view_model<V, M>(self: &Rc<Self>, view: &Rc<V>, view_model: &Rc<M>)
    where
        V: 'static,
        M: ViewModel + 'static,
    {
        let view_id = ObjectId::of(view);
        let view_model_id = ObjectId::of(view_model);

        let (old_entries, dropped, needs_subscription) = {
            let mut state = self.state.borrow_mut();

            let mut old_entries = Vec::new();
            let mut dropped = None;
            if let Some(old_slot) = state.view_models.remove(&view_id) {
                old_entries = state.bindings.remove(&view_id).unwrap_or_default();
                dropped = state.release_subscription(old_slot.view_model_id);
            }

            state.view_models.insert(
                view_id,
                ViewSlot {
                    _view: Rc::clone(view) as Rc<dyn Any>,
                    view_model_id,
                    view_model: Rc::clone(view_model) as Rc<dyn Any>,
                },
            );

            let needs_subscription = !state.subscriptions.contains_key(&view_model_id);
            (old_entries, dropped, needs_subscription)
        };

        // Teardown runs outside the borrow: unhooks call back into controls,
        // and disconnecting touches the old viewmodel's signal.
        let removed = old_entries.len();
        for entry in old_entries {
            (entry.unhook)();
        }
        if let Some(subscription) = dropped {
            subscription
                .view_model
                .property_changed()
                .disconnect(subscription.handler);
        }

        if needs_subscription {
            let registry = Rc::downgrade(self);
            let handler = view_model.property_changed().connect(move |property| {
                if let Some(registry) = registry.upgrade() {
                    registry.notify_property_changed(view_model_id, property);
                }
            });
            self.state.borrow_mut().subscriptions.insert(
                view_model_id,
                Subscription {
                    view_model: Rc::clone(view_model) as Rc<dyn ViewModel>,
                    handler,
                },
            );
        }

        debug!(
            view = ?view_id,
            view_model = ?view_model_id,
            removed_bindings = removed,
            "assigned viewmodel"
        );
    }

    /// Declares a two-way capable binding between a text-input control and a
    /// `String` viewmodel property.
    ///
    /// The binding starts one-way; enable write-back through the returned
    /// handle's [`setup`](BindingHandle::setup). The viewmodel's current
    /// value is pushed into the control before this returns.
    pub fn bind_text<V, C, M>(
        self: &Rc<Self>,
        view: &Rc<V>,
        control: &Rc<C>,
        view_model: &Rc<M>,
        property: Property<M, String>,
    ) -> Result<BindingHandle, BindingError>
    where
        V: 'static,
        C: TextInput + 'static,
        M: ViewModel + 'static,
    {
        self.check_declaration(view, view_model, Some(property.name()))?;
        let config = Rc::new(Cell::new(BindingConfig::default()));
        let adapter = bindings::text::bind(control, view_model, property, &config);
        Ok(self.register(ObjectId::of(view), Some(property.name()), adapter, config))
    }

    /// Declares a two-way capable binding between a toggle control and a
    /// `bool` viewmodel property.
    pub fn bind_toggle<V, C, M>(
        self: &Rc<Self>,
        view: &Rc<V>,
        control: &Rc<C>,
        view_model: &Rc<M>,
        property: Property<M, bool>,
    ) -> Result<BindingHandle, BindingError>
    where
        V: 'static,
        C: Toggle + 'static,
        M: ViewModel + 'static,
    {
        self.check_declaration(view, view_model, Some(property.name()))?;
        let config = Rc::new(Cell::new(BindingConfig::default()));
        let adapter = bindings::toggle::bind(control, view_model, property, &config);
        Ok(self.register(ObjectId::of(view), Some(property.name()), adapter, config))
    }

    /// Declares a one-way binding from any viewmodel property to any control
    /// property reachable through `set`.
    ///
    /// This is the generic label row of the dispatch table: no control-side
    /// signal is hooked and the viewmodel is never written, whatever the
    /// binding configuration says.
    pub fn bind_value<V, C, M, T, F>(
        self: &Rc<Self>,
        view: &Rc<V>,
        control: &Rc<C>,
        view_model: &Rc<M>,
        property: &'static str,
        get: fn(&M) -> T,
        set: F,
    ) -> Result<BindingHandle, BindingError>
    where
        V: 'static,
        C: 'static,
        M: ViewModel + 'static,
        T: 'static,
        F: Fn(&C, T) + 'static,
    {
        self.check_declaration(view, view_model, Some(property))?;
        let config = Rc::new(Cell::new(BindingConfig::default()));
        let adapter = bindings::value::bind(control, view_model, get, set);
        Ok(self.register(ObjectId::of(view), Some(property), adapter, config))
    }

    /// Declares a command binding between a button-like control and the
    /// command object `command_for` yields.
    ///
    /// Only `Button`, `MenuItem` and `ToolbarButton` control kinds support
    /// command bindings; anything else fails with
    /// [`BindingError::UnsupportedControl`] before any handler is hooked.
    /// The control's enabled state adopts the command's `can_execute` result
    /// immediately and follows its `can_execute_changed` signal thereafter.
    pub fn bind_command<V, C, M, F>(
        self: &Rc<Self>,
        view: &Rc<V>,
        control: &Rc<C>,
        view_model: &Rc<M>,
        command_for: F,
    ) -> Result<BindingHandle, BindingError>
    where
        V: 'static,
        C: Clickable + 'static,
        M: ViewModel + 'static,
        F: Fn(&M) -> Rc<dyn Command>,
    {
        self.check_declaration(view, view_model, None)?;
        let config = Rc::new(Cell::new(BindingConfig::default()));
        let adapter = bindings::command::bind(control, view_model, command_for)?;
        Ok(self.register(ObjectId::of(view), None, adapter, config))
    }

    /// Removes the view's viewmodel assignment and every binding declared
    /// under it, disconnecting all hooked handlers and releasing all strong
    /// references the registry held for the view.
    ///
    /// The viewmodel's change subscription is dropped only when no other
    /// view still references that viewmodel.
    pub fn unbind_view<V: 'static>(&self, view: &Rc<V>) -> Result<(), BindingError> {
        let view_id = ObjectId::of(view);

        let (entries, dropped) = {
            let mut state = self.state.borrow_mut();
            let slot = state
                .view_models
                .remove(&view_id)
                .ok_or(BindingError::UnknownView)?;
            let entries = state.bindings.remove(&view_id).unwrap_or_default();
            let dropped = state.release_subscription(slot.view_model_id);
            (entries, dropped)
        };

        debug!(view = ?view_id, bindings = entries.len(), "unbinding view");

        for entry in entries {
            (entry.unhook)();
        }
        if let Some(subscription) = dropped {
            subscription
                .view_model
                .property_changed()
                .disconnect(subscription.handler);
        }

        Ok(())
    }

    /// Returns the viewmodel assigned to `view`, downcast to `M`.
    ///
    /// `None` when the view has no assignment or the assignment is of a
    /// different concrete type.
    pub fn view_model_for<V, M>(&self, view: &Rc<V>) -> Option<Rc<M>>
    where
        V: 'static,
        M: ViewModel + 'static,
    {
        let state = self.state.borrow();
        let slot = state.view_models.get(&ObjectId::of(view))?;
        Rc::clone(&slot.view_model).downcast::<M>().ok()
    }

    /// True while `view` has an assigned viewmodel.
    pub fn is_bound<V: 'static>(&self, view: &Rc<V>) -> bool {
        self.state
            .borrow()
            .view_models
            .contains_key(&ObjectId::of(view))
    }

    /// Number of live bindings declared under `view`.
    pub fn binding_count<V: 'static>(&self, view: &Rc<V>) -> usize {
        self.state
            .borrow()
            .bindings
            .get(&ObjectId::of(view))
            .map_or(0, Vec::len)
    }

    /// Validates a declaration before anything is constructed or hooked.
    fn check_declaration<V, M>(
        &self,
        view: &Rc<V>,
        view_model: &Rc<M>,
        property: Option<&'static str>,
    ) -> Result<(), BindingError>
    where
        V: 'static,
        M: ViewModel + 'static,
    {
        if property.is_some_and(str::is_empty) {
            return Err(BindingError::EmptyPropertyName);
        }

        let state = self.state.borrow();
        let slot = state
            .view_models
            .get(&ObjectId::of(view))
            .ok_or(BindingError::NoViewModel)?;
        if slot.view_model_id != ObjectId::of(view_model) {
            return Err(BindingError::ViewModelMismatch);
        }
        Ok(())
    }

    /// Stores a constructed adapter under its view and runs the initial
    /// viewmodel→control push.
    fn register(
        self: &Rc<Self>,
        view_id: ObjectId,
        source_property: Option<&'static str>,
        adapter: BoundAdapter,
        config: Rc<Cell<BindingConfig>>,
    ) -> BindingHandle {
        let refresh = adapter.refresh.clone();
        let id = {
            let mut state = self.state.borrow_mut();
            state.next_binding_id += 1;
            let id = BindingId(state.next_binding_id);
            state.bindings.entry(view_id).or_default().push(BindingEntry {
                id,
                source_property,
                refresh: adapter.refresh,
                unhook: adapter.unhook,
            });
            id
        };

        trace!(view = ?view_id, property = ?source_property, "declared binding");

        // Initial push, after registration and outside the borrow.
        if let Some(refresh) = refresh {
            refresh();
        }

        BindingHandle::new(Rc::downgrade(self), view_id, id, config)
    }

    /// Fans a viewmodel property change out to every affected binding.
    ///
    /// A viewmodel may back several views at once; each view's bindings are
    /// filtered by source property. Command bindings carry no source
    /// property and never match.
    fn notify_property_changed(&self, view_model_id: ObjectId, property: &str) {
        let refreshes: Vec<Rc<dyn Fn()>> = {
            let state = self.state.borrow();
            state
                .view_models
                .iter()
                .filter(|(_, slot)| slot.view_model_id == view_model_id)
                .filter_map(|(view_id, _)| state.bindings.get(view_id))
                .flatten()
                .filter(|entry| entry.source_property == Some(property))
                .filter_map(|entry| entry.refresh.clone())
                .collect()
        };

        trace!(
            view_model = ?view_model_id,
            property,
            bindings = refreshes.len(),
            "propagating change"
        );

        for refresh in refreshes {
            refresh();
        }
    }

    /// Removes a single binding; the lever behind [`BindingHandle::unbind`].
    pub(crate) fn remove_binding(&self, view_id: ObjectId, binding_id: BindingId) {
        let entry = {
            let mut state = self.state.borrow_mut();
            let Some(entries) = state.bindings.get_mut(&view_id) else {
                return;
            };
            let Some(index) = entries.iter().position(|entry| entry.id == binding_id) else {
                return;
            };
            // Plain remove keeps declaration order for the survivors.
            entries.remove(index)
        };
        (entry.unhook)();
    }
}
