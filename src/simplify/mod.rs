//! Canonicalization and substitution over expression trees.

mod normalize;
mod substitute;

pub use normalize::{canonical_key, normalize};
pub use substitute::{Bindings, replace, substitute};
