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

//! Core type definitions for binding declaration
//!
//! This module defines the small, plain types a binding declaration is made
//! of:
//! - `ControlKind`: the closed set of control categories the dispatch table
//!   knows about
//! - `UpdateTrigger`: when a two-way binding copies the control value back
//! - `BindingConfig`: per-binding configuration, adjustable through a
//!   binding handle after declaration
//!
//! All types serialise, so view definitions that carry binding configuration
//! can be persisted alongside the rest of an application's settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a bindable control.
///
/// This is a closed set: binding behaviour is selected from a fixed dispatch
/// table keyed by category, not by open polymorphism over arbitrary widget
/// types. Host-toolkit adapters report their category through
/// [`Control::kind`](crate::core::Control::kind).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ControlKind {
    /// Single- or multi-line text editing control
    TextInput,
    /// Two-state control (check box, radio button, switch)
    Toggle,
    /// Display-only control bound one-way
    Label,
    /// Push button
    Button,
    /// Entry in a menu
    MenuItem,
    /// Button hosted in a toolbar
    ToolbarButton,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::TextInput => write!(f, "text input"),
            ControlKind::Toggle => write!(f, "toggle"),
            ControlKind::Label => write!(f, "label"),
            ControlKind::Button => write!(f, "button"),
            ControlKind::MenuItem => write!(f, "menu item"),
            ControlKind::ToolbarButton => write!(f, "toolbar button"),
        }
    }
}

/// When a two-way binding copies the control value back into the viewmodel.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum UpdateTrigger {
    /// Copy back every time the control reports a changed value.
    #[default]
    OnPropertyChanged,
    /// Copy back only when the control loses input focus.
    OnFocusLost,
}

/// Per-binding configuration.
///
/// Every value binding starts from `BindingConfig::default()` (one-way,
/// on-property-changed) and is adjusted through
/// [`BindingHandle::setup`](crate::registry::BindingHandle::setup). Changes
/// made after the initial push are honoured on subsequent control events.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BindingConfig {
    /// Control-side edits are copied back into the viewmodel. Default: false
    pub two_way: bool,
    /// Trigger for the control-to-viewmodel copy. Default: on property changed
    pub update_trigger: UpdateTrigger,
}
