//! Named viewmodel property accessors
//!
//! Bindings never look properties up by name at runtime. The caller supplies
//! an explicit getter/setter pair at declaration time; the name is carried
//! alongside purely so the registry can match incoming change notifications
//! against the right bindings.

use std::fmt;

/// A named getter/setter pair for a viewmodel property.
///
/// Plain function pointers keep the type `Copy`, which lets one declaration
/// hand the same accessors to several adapter closures. Methods taking
/// `&self` coerce directly:
///
/// ```
/// # use std::cell::RefCell;
/// # use uibind::core::{Property, Signal};
/// # struct Vm { text: RefCell<String>, property_changed: Signal<str> }
/// # impl Vm {
/// #     fn text(&self) -> String { self.text.borrow().clone() }
/// #     fn set_text(&self, value: String) { *self.text.borrow_mut() = value; }
/// # }
/// let property = Property::new("text", Vm::text, Vm::set_text);
/// assert_eq!(property.name(), "text");
/// ```
pub struct Property<M, T> {
    name: &'static str,
    get: fn(&M) -> T,
    set: fn(&M, T),
}

impl<M, T> Property<M, T> {
    /// Creates an accessor pair under the name used in change notifications.
    pub fn new(name: &'static str, get: fn(&M) -> T, set: fn(&M, T)) -> Self {
        Self { name, get, set }
    }

    /// The property name as reported by the viewmodel's change signal.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the current value from `view_model`.
    pub(crate) fn get(&self, view_model: &M) -> T {
        (self.get)(view_model)
    }

    /// Writes `value` into `view_model`.
    pub(crate) fn set(&self, view_model: &M, value: T) {
        (self.set)(view_model, value)
    }
}

// Derived impls would demand `M: Clone`/`M: Copy`; function pointers copy
// regardless of the type parameters.
impl<M, T> Clone for Property<M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T> Copy for Property<M, T> {}

impl<M, T> fmt::Debug for Property<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("name", &self.name).finish()
    }
}
