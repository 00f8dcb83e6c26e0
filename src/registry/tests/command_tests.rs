use std::cell::Cell;
use std::rc::Rc;

use crate::core::command::{Command, RelayCommand};
use crate::registry::BindingRegistry;
use crate::testkit::{EditorViewModel, FakeButton, TestView};

fn counting_command() -> (Rc<RelayCommand>, Rc<Cell<u32>>) {
    let executions = Rc::new(Cell::new(0u32));
    let command = {
        let executions = Rc::clone(&executions);
        Rc::new(RelayCommand::new(move || {
            executions.set(executions.get() + 1)
        }))
    };
    (command, executions)
}

#[test]
fn test_enabled_state_adopts_can_execute_at_bind_time() {
    let (command, _executions) = counting_command();
    command.set_can_execute(false);

    let registry = BindingRegistry::new();
    let view = TestView::new();
    let view_model = EditorViewModel::with_save_command("", Rc::clone(&command));
    registry.assign_view_model(&view, &view_model);

    let button = FakeButton::new();
    assert!(button.is_enabled(), "fake buttons start enabled");

    registry
        .bind_command(&view, &button, &view_model, |vm| vm.save_command())
        .expect("binding should succeed");

    assert!(!button.is_enabled());
}

#[test]
fn test_enabled_state_follows_can_execute_changed() {
    let (command, _executions) = counting_command();

    let registry = BindingRegistry::new();
    let view = TestView::new();
    let view_model = EditorViewModel::with_save_command("", Rc::clone(&command));
    registry.assign_view_model(&view, &view_model);

    let button = FakeButton::new();
    registry
        .bind_command(&view, &button, &view_model, |vm| vm.save_command())
        .expect("binding should succeed");
    assert!(button.is_enabled());

    command.set_can_execute(false);
    assert!(!button.is_enabled());

    command.set_can_execute(true);
    assert!(button.is_enabled());
}

#[test]
fn test_click_executes_only_while_can_execute_holds() {
    let (command, executions) = counting_command();

    let registry = BindingRegistry::new();
    let view = TestView::new();
    let view_model = EditorViewModel::with_save_command("", Rc::clone(&command));
    registry.assign_view_model(&view, &view_model);

    let button = FakeButton::new();
    registry
        .bind_command(&view, &button, &view_model, |vm| vm.save_command())
        .expect("binding should succeed");

    button.click();
    assert_eq!(executions.get(), 1);

    command.set_can_execute(false);
    button.click();
    assert_eq!(executions.get(), 1, "guarded click must not execute");
}

#[test]
fn test_command_bindings_ignore_viewmodel_property_changes() {
    let (command, _executions) = counting_command();

    let registry = BindingRegistry::new();
    let view = TestView::new();
    let view_model = EditorViewModel::with_save_command("draft", Rc::clone(&command));
    registry.assign_view_model(&view, &view_model);

    let button = FakeButton::new();
    registry
        .bind_command(&view, &button, &view_model, |vm| vm.save_command())
        .expect("binding should succeed");

    command.set_can_execute(false);
    view_model.set_text("changed".to_string());

    assert!(
        !button.is_enabled(),
        "a property change must not re-evaluate the command"
    );
}

#[test]
fn test_replacing_the_viewmodel_unhooks_the_command() {
    let (command, executions) = counting_command();

    let registry = BindingRegistry::new();
    let view = TestView::new();
    let view_model = EditorViewModel::with_save_command("", Rc::clone(&command));
    registry.assign_view_model(&view, &view_model);

    let button = FakeButton::new();
    registry
        .bind_command(&view, &button, &view_model, |vm| vm.save_command())
        .expect("binding should succeed");

    button.click();
    assert_eq!(executions.get(), 1);

    let replacement = EditorViewModel::new("");
    registry.assign_view_model(&view, &replacement);

    button.click();
    assert_eq!(executions.get(), 1, "unhooked click must not execute");
    assert_eq!(
        command.can_execute_changed().handler_count(),
        0,
        "the command-side handler must be disconnected too"
    );
}
