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

//! Declarative viewmodel data binding for desktop GUI views
//!
//! A view (window or panel) declares bindings between its widget properties
//! and the properties of a viewmodel object; the [`BindingRegistry`] keeps
//! both sides in sync and tears everything down again when the view closes.
//!
//! # Features
//!
//! - **Value bindings:** text, checked state, or any property reachable
//!   through a setter closure
//! - **Two-way updates:** opt-in write-back on change or on focus loss
//! - **Command bindings:** click-to-execute with automatic enabled-state
//!   tracking via a can-execute guard
//! - **Shared viewmodels:** one viewmodel may back several views at once
//! - **Leak-free teardown:** unbinding a view disconnects every hooked
//!   signal handler and releases every held reference
//!
//! # Architecture
//!
//! - **`core`:** toolkit-agnostic contracts (viewmodel, control, command),
//!   signal dispatch, property accessors, configuration types
//! - **`bindings`:** per-control-category adapters, one per row of the
//!   dispatch table (internal)
//! - **`registry`:** the binding registry, binding handles, errors
//!
//! The host toolkit is never a dependency: widgets reach the registry
//! through the small traits in [`core::control`], which mirror the
//! connect/disconnect signal surface of GTK-style toolkits.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use uibind::core::{Signal, ViewModel};
//! use uibind::registry::BindingRegistry;
//!
//! struct StatusViewModel {
//!     message: RefCell<String>,
//!     property_changed: Signal<str>,
//! }
//!
//! impl StatusViewModel {
//!     fn message(&self) -> String {
//!         self.message.borrow().clone()
//!     }
//!
//!     fn set_message(&self, value: String) {
//!         if *self.message.borrow() == value {
//!             return;
//!         }
//!         *self.message.borrow_mut() = value;
//!         self.property_changed.emit("message");
//!     }
//! }
//!
//! impl ViewModel for StatusViewModel {
//!     fn property_changed(&self) -> &Signal<str> {
//!         &self.property_changed
//!     }
//! }
//!
//! struct StatusBar {
//!     text: RefCell<String>,
//! }
//!
//! impl StatusBar {
//!     fn set_text(&self, value: String) {
//!         *self.text.borrow_mut() = value;
//!     }
//! }
//!
//! struct MainWindow;
//!
//! let registry = BindingRegistry::new();
//! let window = Rc::new(MainWindow);
//! let status_bar = Rc::new(StatusBar { text: RefCell::new(String::new()) });
//! let view_model = Rc::new(StatusViewModel {
//!     message: RefCell::new("ready".to_string()),
//!     property_changed: Signal::new(),
//! });
//!
//! registry.assign_view_model(&window, &view_model);
//! registry.bind_value(
//!     &window,
//!     &status_bar,
//!     &view_model,
//!     "message",
//!     StatusViewModel::message,
//!     StatusBar::set_text,
//! )?;
//!
//! // The initial push ran at declaration.
//! assert_eq!(*status_bar.text.borrow(), "ready");
//!
//! // Setter notifications propagate to the bound control.
//! view_model.set_message("saving".to_string());
//! assert_eq!(*status_bar.text.borrow(), "saving");
//!
//! // Unbinding stops propagation and releases every reference.
//! registry.unbind_view(&window)?;
//! view_model.set_message("idle".to_string());
//! assert_eq!(*status_bar.text.borrow(), "saving");
//! # Ok::<(), uibind::registry::BindingError>(())
//! ```

mod bindings;
pub mod core;
pub mod registry;

// Re-export commonly used types for convenience
pub use crate::core::{
    BindingConfig, Clickable, Command, Control, ControlKind, HandlerId, Property, RelayCommand,
    Signal, TextInput, Toggle, UpdateTrigger, ViewModel,
};
pub use crate::registry::{BindingError, BindingHandle, BindingRegistry};

#[cfg(test)]
pub(crate) mod testkit;
