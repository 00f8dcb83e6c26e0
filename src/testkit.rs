//! Test doubles for the host-toolkit and viewmodel contracts
//!
//! The fakes mirror real toolkit behaviour closely enough for binding
//! tests: programmatic writes raise the same change signals user edits
//! would, and writing an identical value does not re-fire (as with GTK
//! entries). Tests drive "user input" through the same setters plus the
//! explicit `lose_focus`/`click` helpers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::command::{Command, RelayCommand};
use crate::core::control::{Clickable, Control, TextInput, Toggle};
use crate::core::signal::{HandlerId, Signal};
use crate::core::types::ControlKind;
use crate::core::view_model::ViewModel;

/// Opaque view stand-in; only its identity matters.
pub(crate) struct TestView;

impl TestView {
    pub fn new() -> Rc<Self> {
        Rc::new(Self)
    }
}

/// Text-input fake with changed and focus-lost signals.
pub(crate) struct FakeTextBox {
    text: RefCell<String>,
    changed: Signal<()>,
    focus_lost: Signal<()>,
}

impl FakeTextBox {
    pub fn new(initial: &str) -> Rc<Self> {
        Rc::new(Self {
            text: RefCell::new(initial.to_string()),
            changed: Signal::new(),
            focus_lost: Signal::new(),
        })
    }

    /// Simulates the control losing input focus.
    pub fn lose_focus(&self) {
        self.focus_lost.emit(&());
    }
}

impl Control for FakeTextBox {
    fn kind(&self) -> ControlKind {
        ControlKind::TextInput
    }

    fn disconnect(&self, id: HandlerId) {
        self.changed.disconnect(id);
        self.focus_lost.disconnect(id);
    }
}

impl TextInput for FakeTextBox {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        if *self.text.borrow() == text {
            return;
        }
        *self.text.borrow_mut() = text.to_string();
        self.changed.emit(&());
    }

    fn connect_changed<F: Fn() + 'static>(&self, handler: F) -> HandlerId {
        self.changed.connect(move |_| handler())
    }

    fn connect_focus_lost<F: Fn() + 'static>(&self, handler: F) -> HandlerId {
        self.focus_lost.connect(move |_| handler())
    }
}

/// Toggle fake counting toggled emissions.
pub(crate) struct FakeCheckBox {
    active: Cell<bool>,
    toggled: Signal<()>,
    toggle_signals: Cell<usize>,
}

impl FakeCheckBox {
    pub fn new(active: bool) -> Rc<Self> {
        Rc::new(Self {
            active: Cell::new(active),
            toggled: Signal::new(),
            toggle_signals: Cell::new(0),
        })
    }

    /// How many times the toggled signal fired.
    pub fn toggle_signal_count(&self) -> usize {
        self.toggle_signals.get()
    }
}

impl Control for FakeCheckBox {
    fn kind(&self) -> ControlKind {
        ControlKind::Toggle
    }

    fn disconnect(&self, id: HandlerId) {
        self.toggled.disconnect(id);
    }
}

impl Toggle for FakeCheckBox {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        if self.active.get() == active {
            return;
        }
        self.active.set(active);
        self.toggle_signals.set(self.toggle_signals.get() + 1);
        self.toggled.emit(&());
    }

    fn connect_toggled<F: Fn() + 'static>(&self, handler: F) -> HandlerId {
        self.toggled.connect(move |_| handler())
    }
}

/// Clickable fake; the kind is configurable so dispatch rejections can be
/// exercised.
pub(crate) struct FakeButton {
    kind: ControlKind,
    enabled: Cell<bool>,
    clicked: Signal<()>,
}

impl FakeButton {
    pub fn new() -> Rc<Self> {
        Self::with_kind(ControlKind::Button)
    }

    pub fn with_kind(kind: ControlKind) -> Rc<Self> {
        Rc::new(Self {
            kind,
            enabled: Cell::new(true),
            clicked: Signal::new(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Raises the clicked signal. Gating on the enabled state is the
    /// binding's job, so the fake does not filter here.
    pub fn click(&self) {
        self.clicked.emit(&());
    }
}

impl Control for FakeButton {
    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn disconnect(&self, id: HandlerId) {
        self.clicked.disconnect(id);
    }
}

impl Clickable for FakeButton {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    fn connect_clicked<F: Fn() + 'static>(&self, handler: F) -> HandlerId {
        self.clicked.connect(move |_| handler())
    }
}

/// Display-only fake for generic one-way bindings.
pub(crate) struct FakeLabel {
    text: RefCell<String>,
}

impl FakeLabel {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            text: RefCell::new(String::new()),
        })
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn set_text(&self, value: String) {
        *self.text.borrow_mut() = value;
    }
}

/// Viewmodel double with a text property, a bool property and a command.
///
/// Setters skip the notification when the value is unchanged, as the
/// `ViewModel` contract asks of real implementations.
pub(crate) struct EditorViewModel {
    text: RefCell<String>,
    auto_save: Cell<bool>,
    save: Rc<RelayCommand>,
    property_changed: Signal<str>,
}

impl EditorViewModel {
    pub fn new(text: &str) -> Rc<Self> {
        Self::with_save_command(text, Rc::new(RelayCommand::new(|| {})))
    }

    pub fn with_save_command(text: &str, save: Rc<RelayCommand>) -> Rc<Self> {
        Rc::new(Self {
            text: RefCell::new(text.to_string()),
            auto_save: Cell::new(false),
            save,
            property_changed: Signal::new(),
        })
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn set_text(&self, value: String) {
        if *self.text.borrow() == value {
            return;
        }
        *self.text.borrow_mut() = value;
        self.property_changed.emit("text");
    }

    pub fn auto_save(&self) -> bool {
        self.auto_save.get()
    }

    pub fn set_auto_save(&self, value: bool) {
        if self.auto_save.get() == value {
            return;
        }
        self.auto_save.set(value);
        self.property_changed.emit("auto_save");
    }

    pub fn save_command(&self) -> Rc<dyn Command> {
        Rc::clone(&self.save) as Rc<dyn Command>
    }
}

impl ViewModel for EditorViewModel {
    fn property_changed(&self) -> &Signal<str> {
        &self.property_changed
    }
}
