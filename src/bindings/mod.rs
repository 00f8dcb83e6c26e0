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

//! Per-control-category binding adapters
//!
//! One adapter per row of the dispatch table:
//! - `text`: two-way capable text binding with a configurable update trigger
//! - `toggle`: two-way capable checked-state binding
//! - `value`: generic one-way binding through a caller-supplied setter
//! - `command`: click-to-command binding with enabled-state tracking
//!
//! An adapter constructor hooks whatever control- and command-side signals
//! its row requires and hands the registry two closures: `refresh` (push the
//! current viewmodel value into the control) and `unhook` (disconnect every
//! handler the adapter installed). The closures hold strong references to
//! the control and viewmodel; running `unhook` is what releases them.

use std::rc::Rc;

pub(crate) mod command;
pub(crate) mod text;
pub(crate) mod toggle;
pub(crate) mod value;

/// The registry-facing surface of one constructed binding.
pub(crate) struct BoundAdapter {
    /// Pushes the current viewmodel value into the control.
    /// `None` for command bindings, which ignore property changes.
    pub refresh: Option<Rc<dyn Fn()>>,
    /// Disconnects every handler this adapter installed.
    pub unhook: Box<dyn FnOnce()>,
}
