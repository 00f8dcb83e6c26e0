//! Generic one-way binding adapter
//!
//! Covers labels and any other control the caller can write through a
//! setter closure. No control-side signals are hooked; the viewmodel is
//! never written, whatever the binding configuration says.

use std::rc::Rc;

use crate::bindings::BoundAdapter;
use crate::core::view_model::ViewModel;

pub(crate) fn bind<C, M, T, F>(
    control: &Rc<C>,
    view_model: &Rc<M>,
    get: fn(&M) -> T,
    set: F,
) -> BoundAdapter
where
    C: 'static,
    M: ViewModel + 'static,
    T: 'static,
    F: Fn(&C, T) + 'static,
{
    let refresh: Rc<dyn Fn()> = {
        let control = Rc::clone(control);
        let view_model = Rc::clone(view_model);
        Rc::new(move || set(&control, get(&view_model)))
    };

    BoundAdapter {
        refresh: Some(refresh),
        unhook: Box::new(|| {}),
    }
}
