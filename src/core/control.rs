//! Host-toolkit control contracts
//!
//! The registry never talks to a concrete widget toolkit. A view hands it
//! controls through these traits, which mirror the signal-handler surface of
//! GTK-style toolkits: `connect_*` methods install a handler and return a
//! [`HandlerId`] that is later passed to [`Control::disconnect`].
//!
//! Adapters over real widgets are expected to forward these calls to the
//! toolkit's native property accessors and events. Programmatic writes may
//! re-fire a control's change signal (GTK entries do); the binding adapters
//! are written so this cannot oscillate.

use crate::core::signal::HandlerId;
use crate::core::types::ControlKind;

/// Base contract for every bindable control.
pub trait Control {
    /// The control category used for binding dispatch.
    fn kind(&self) -> ControlKind;

    /// Drops a handler previously installed by one of the `connect_*`
    /// methods. Unknown ids are ignored.
    fn disconnect(&self, id: HandlerId);
}

/// A text editing control (entry, text box).
pub trait TextInput: Control {
    /// Current text value.
    fn text(&self) -> String;

    /// Replaces the text value.
    fn set_text(&self, text: &str);

    /// Invoked whenever the text value changes.
    fn connect_changed<F: Fn() + 'static>(&self, handler: F) -> HandlerId;

    /// Invoked when the control loses input focus.
    fn connect_focus_lost<F: Fn() + 'static>(&self, handler: F) -> HandlerId;
}

/// A two-state control (check box, radio button, switch).
pub trait Toggle: Control {
    /// Current checked state.
    fn is_active(&self) -> bool;

    /// Replaces the checked state.
    fn set_active(&self, active: bool);

    /// Invoked whenever the checked state flips.
    fn connect_toggled<F: Fn() + 'static>(&self, handler: F) -> HandlerId;
}

/// A control that invokes an action when activated (button, menu item,
/// toolbar button).
pub trait Clickable: Control {
    /// Enables or disables the control.
    fn set_enabled(&self, enabled: bool);

    /// Invoked when the control is clicked or otherwise activated.
    fn connect_clicked<F: Fn() + 'static>(&self, handler: F) -> HandlerId;
}
