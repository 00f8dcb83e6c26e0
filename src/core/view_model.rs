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

//! Viewmodel contract

use crate::core::signal::Signal;

/// An object whose properties can be bound to controls.
///
/// The contract is deliberately small: a viewmodel exposes ordinary getter
/// and setter methods for its properties (handed to the registry as
/// [`Property`](crate::core::Property) accessor pairs) plus one signal that
/// reports the name of any property that changed. Setters are expected to
/// `emit` that signal after storing a new value, and to skip the emit when
/// the stored value is unchanged so that two-way bindings settle after a
/// single pass.
///
/// ```
/// use std::cell::RefCell;
/// use uibind::core::{Signal, ViewModel};
///
/// struct Person {
///     name: RefCell<String>,
///     property_changed: Signal<str>,
/// }
///
/// impl Person {
///     fn set_name(&self, value: String) {
///         if *self.name.borrow() == value {
///             return;
///         }
///         *self.name.borrow_mut() = value;
///         self.property_changed.emit("name");
///     }
/// }
///
/// impl ViewModel for Person {
///     fn property_changed(&self) -> &Signal<str> {
///         &self.property_changed
///     }
/// }
/// # let person = Person { name: RefCell::new(String::new()), property_changed: Signal::new() };
/// # person.set_name("Ada".to_string());
/// # assert_eq!(*person.name.borrow(), "Ada");
/// ```
pub trait ViewModel {
    /// Signal raised with the property name whenever an observable property
    /// changes.
    fn property_changed(&self) -> &Signal<str>;
}
