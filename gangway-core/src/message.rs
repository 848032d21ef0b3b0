//! Message trait for port payload types.

/// A marker trait for payloads carried on ports.
///
/// Payloads must be `Send + Sync + 'static` to be safe for async delivery.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct TokenRefreshed(String);
///
/// impl Message for TokenRefreshed {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "All port payloads in Gangway must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

// Common Message implementations
impl Message for () {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
