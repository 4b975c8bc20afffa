//! # Conditional logic
//!
//! Shows or hides fields depending on the values of other fields.
//!
//! A [`RuleItem`] governs one field key. Its [`Rule`]s test *toggle* fields;
//! under [`AllOrAny::All`] every rule must match for the field to show, under
//! [`AllOrAny::Any`] one is enough. Evaluation stops at the first rule that
//! settles the outcome.
//!
//! Repeated groups duplicate field keys per row, so a toggle is resolved
//! relative to each target instance: the sibling in the target's own row
//! wins, otherwise the nearest instance in an enclosing scope is used and the
//! decision is flagged `hide_all` (it applies to the whole column).

mod engine;
mod rule;

pub use engine::{ConditionalEngine, Resolved, resolve_toggle};
pub use rule::{AllOrAny, Operator, Rule, RuleItem};
