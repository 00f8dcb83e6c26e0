//! Text-input binding adapter
//!
//! Viewmodel→control pushes always run. Control→viewmodel pushes run only
//! while the configuration says `two_way`, on the signal selected by the
//! update trigger: the control's changed signal for
//! `UpdateTrigger::OnPropertyChanged`, its focus-lost signal for
//! `UpdateTrigger::OnFocusLost`. The configuration cell is read at event
//! time, so `setup` calls after declaration take effect immediately.

use std::cell::Cell;
use std::rc::Rc;

use crate::bindings::BoundAdapter;
use crate::core::control::TextInput;
use crate::core::property::Property;
use crate::core::types::{BindingConfig, UpdateTrigger};
use crate::core::view_model::ViewModel;

pub(crate) fn bind<C, M>(
    control: &Rc<C>,
    view_model: &Rc<M>,
    property: Property<M, String>,
    config: &Rc<Cell<BindingConfig>>,
) -> BoundAdapter
where
    C: TextInput + 'static,
    M: ViewModel + 'static,
{
    let refresh: Rc<dyn Fn()> = {
        let control = Rc::clone(control);
        let view_model = Rc::clone(view_model);
        Rc::new(move || {
            let value = property.get(&view_model);
            // Writing an identical value back would re-fire the changed
            // signal on some toolkits; skip the no-op write.
            if control.text() != value {
                control.set_text(&value);
            }
        })
    };

    let changed_id = {
        let source = Rc::clone(control);
        let view_model = Rc::clone(view_model);
        let config = Rc::clone(config);
        control.connect_changed(move || {
            let config = config.get();
            if config.two_way && config.update_trigger == UpdateTrigger::OnPropertyChanged {
                property.set(&view_model, source.text());
            }
        })
    };

    let focus_lost_id = {
        let source = Rc::clone(control);
        let view_model = Rc::clone(view_model);
        let config = Rc::clone(config);
        control.connect_focus_lost(move || {
            let config = config.get();
            if config.two_way && config.update_trigger == UpdateTrigger::OnFocusLost {
                property.set(&view_model, source.text());
            }
        })
    };

    let unhook: Box<dyn FnOnce()> = {
        let control = Rc::clone(control);
        Box::new(move || {
            control.disconnect(changed_id);
            control.disconnect(focus_lost_id);
        })
    };

    BoundAdapter {
        refresh: Some(refresh),
        unhook,
    }
}
