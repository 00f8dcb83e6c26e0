use thiserror::Error;

use crate::core::types::ControlKind;

/// Errors surfaced while declaring or tearing down bindings.
///
/// Every failure is synchronous and reported to the caller of the offending
/// declarative call; nothing is retried or recovered automatically. A failed
/// declaration registers nothing and hooks nothing.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BindingError {
    /// Binding declared for a view with no assigned viewmodel.
    #[error("view has no assigned viewmodel; call assign_view_model first")]
    NoViewModel,
    /// Binding declared against a viewmodel other than the one assigned to
    /// its view.
    #[error("binding targets a viewmodel that is not assigned to its view")]
    ViewModelMismatch,
    /// Property accessor declared under an empty name.
    #[error("viewmodel property name must not be empty")]
    EmptyPropertyName,
    /// Command binding requested for a control category with no command
    /// adapter.
    #[error("command binding is not supported for {0} controls")]
    UnsupportedControl(ControlKind),
    /// Operation referenced a view unknown to the registry.
    #[error("view is not registered with this registry")]
    UnknownView,
}
