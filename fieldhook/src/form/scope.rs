//! Repetition contexts.

use std::fmt;

/// Handle of a repetition context: the form root, a repeater row, a
/// flexible-content layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub(crate) usize);

impl ScopeId {
    /// The root scope every form starts with.
    pub const ROOT: ScopeId = ScopeId(0);
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// A node of the scope tree.
#[derive(Debug, Clone)]
pub struct Scope {
    pub(crate) parent: Option<ScopeId>,
    pub(crate) template: bool,
}

impl Scope {
    /// The enclosing scope, `None` for the root.
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Whether this is a placeholder row cloned when a user adds a row.
    pub fn is_template(&self) -> bool {
        self.template
    }
}
