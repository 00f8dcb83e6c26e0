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

//! Command contract and the stock [`RelayCommand`] implementation
//!
//! A command is an invocable action guarded by a `can_execute` query. Command
//! bindings keep a button-like control's enabled state in sync with
//! `can_execute` and invoke `execute` on click, but only while the guard
//! holds.

use std::cell::Cell;

use crate::core::signal::Signal;

/// An invocable action with a can-execute guard.
pub trait Command {
    /// Whether the command may currently execute.
    fn can_execute(&self) -> bool;

    /// Runs the command's action.
    fn execute(&self);

    /// Signal raised when the result of [`can_execute`](Command::can_execute)
    /// may have changed.
    fn can_execute_changed(&self) -> &Signal<()>;
}

/// A [`Command`] wrapping an action closure and an explicit can-execute flag.
///
/// Viewmodels flip the flag with [`set_can_execute`]; the change signal is
/// raised only when the flag actually changes value.
///
/// [`set_can_execute`]: RelayCommand::set_can_execute
pub struct RelayCommand {
    action: Box<dyn Fn()>,
    can_execute: Cell<bool>,
    can_execute_changed: Signal<()>,
}

impl RelayCommand {
    /// Creates a command that starts out executable.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self {
            action: Box::new(action),
            can_execute: Cell::new(true),
            can_execute_changed: Signal::new(),
        }
    }

    /// Updates the can-execute flag, raising the change signal on a flip.
    pub fn set_can_execute(&self, can_execute: bool) {
        if self.can_execute.get() == can_execute {
            return;
        }
        self.can_execute.set(can_execute);
        self.can_execute_changed.emit(&());
    }
}

impl Command for RelayCommand {
    fn can_execute(&self) -> bool {
        self.can_execute.get()
    }

    fn execute(&self) {
        (self.action)();
    }

    fn can_execute_changed(&self) -> &Signal<()> {
        &self.can_execute_changed
    }
}
