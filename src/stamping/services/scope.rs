//! Global read scope installed on every stamped type.

use crate::stamping::ports::GlobalScope;

/// Placeholder read scope registered alongside the stamping listeners.
///
/// It applies no filter; hosts can see that a type is user-stamped by the
/// presence of the scope name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStampsScope;

impl UserStampsScope {
    /// Name the scope is registered under.
    pub const NAME: &'static str = "user_stamps";
}

impl<Q> GlobalScope<Q> for UserStampsScope {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, _query: &mut Q, _model: &'static str) {}
}
