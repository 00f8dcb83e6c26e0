//! Toggle binding adapter
//!
//! Checked-state edits commit immediately on the toggled signal when the
//! binding is two-way; the update trigger is not consulted (a toggle has no
//! intermediate editing state worth deferring).

use std::cell::Cell;
use std::rc::Rc;

use crate::bindings::BoundAdapter;
use crate::core::control::Toggle;
use crate::core::property::Property;
use crate::core::types::BindingConfig;
use crate::core::view_model::ViewModel;

pub(crate) fn bind<C, M>(
    control: &Rc<C>,
    view_model: &Rc<M>,
    property: Property<M, bool>,
    config: &Rc<Cell<BindingConfig>>,
) -> BoundAdapter
where
    C: Toggle + 'static,
    M: ViewModel + 'static,
{
    let refresh: Rc<dyn Fn()> = {
        let control = Rc::clone(control);
        let view_model = Rc::clone(view_model);
        Rc::new(move || {
            let value = property.get(&view_model);
            if control.is_active() != value {
                control.set_active(value);
            }
        })
    };

    let toggled_id = {
        let source = Rc::clone(control);
        let view_model = Rc::clone(view_model);
        let config = Rc::clone(config);
        control.connect_toggled(move || {
            if config.get().two_way {
                property.set(&view_model, source.is_active());
            }
        })
    };

    let unhook: Box<dyn FnOnce()> = {
        let control = Rc::clone(control);
        Box::new(move || control.disconnect(toggled_id))
    };

    BoundAdapter {
        refresh: Some(refresh),
        unhook,
    }
}
