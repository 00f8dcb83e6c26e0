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

//! src/core/mod.rs
//!
//! Core contracts and types
//!
//! This module contains the fundamental building blocks of the library:
//! - Signal dispatch for change notification
//! - The viewmodel, control and command contracts the registry binds across
//! - Named property accessor pairs
//! - Binding configuration types
//!
//! Everything here is host-toolkit agnostic and free of registry state, so
//! contracts can be implemented and unit-tested without a display server.

pub mod command;
pub mod control;
pub mod property;
pub mod signal;
pub mod types;
pub mod view_model;

pub use command::{Command, RelayCommand};
pub use control::{Clickable, Control, TextInput, Toggle};
pub use property::Property;
pub use signal::{HandlerId, Signal};
pub use types::{BindingConfig, ControlKind, UpdateTrigger};
pub use view_model::ViewModel;

#[cfg(test)]
mod tests;
