//! Command binding adapter
//!
//! Dispatch is by the control's self-reported category only; the command
//! table is closed to button-like controls. The command object is fetched
//! once, at declaration, and the same instance is hooked and later unhooked.

use std::rc::Rc;

use crate::bindings::BoundAdapter;
use crate::core::command::Command;
use crate::core::control::Clickable;
use crate::core::types::ControlKind;
use crate::core::view_model::ViewModel;
use crate::registry::BindingError;

pub(crate) fn bind<C, M, F>(
    control: &Rc<C>,
    view_model: &Rc<M>,
    command_for: F,
) -> Result<BoundAdapter, BindingError>
where
    C: Clickable + 'static,
    M: ViewModel + 'static,
    F: Fn(&M) -> Rc<dyn Command>,
{
    let kind = control.kind();
    if !matches!(
        kind,
        ControlKind::Button | ControlKind::MenuItem | ControlKind::ToolbarButton
    ) {
        return Err(BindingError::UnsupportedControl(kind));
    }

    let command = command_for(view_model);

    let clicked_id = {
        let command = Rc::clone(&command);
        control.connect_clicked(move || {
            if command.can_execute() {
                command.execute();
            }
        })
    };

    let can_execute_id = {
        let handler_command = Rc::clone(&command);
        let control = Rc::clone(control);
        command
            .can_execute_changed()
            .connect(move |_| control.set_enabled(handler_command.can_execute()))
    };

    control.set_enabled(command.can_execute());

    let unhook: Box<dyn FnOnce()> = {
        let control = Rc::clone(control);
        Box::new(move || {
            control.disconnect(clicked_id);
            command.can_execute_changed().disconnect(can_execute_id);
        })
    };

    Ok(BoundAdapter {
        refresh: None,
        unhook,
    })
}
