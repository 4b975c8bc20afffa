//! Message trait for hook payloads.

/// A marker trait for values carried by hooks: action arguments, filter
/// values and filter arguments.
///
/// Messages must be `Send + Sync + 'static` so a bus can be shared by `Arc`
/// and so handlers can be stored type-erased. Every such type is a message.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Hook payloads must be thread-safe and own their data."
)]
pub trait Message: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Message for T {}
