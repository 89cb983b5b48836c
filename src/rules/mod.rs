//! Freecell rules: legality, execution and autocomplete.
//!
//! - `validate`: pure legality check for a proposed [`Move`](crate::core::Move)
//! - `apply`: mutate a board for an already-validated move
//! - `next_autocomplete_move`: the next mechanical foundation move

pub mod validate;
pub mod execute;
pub mod autocomplete;

pub use validate::{
    validate, validate_cascade_to_cascade, validate_to_cascade_single, validate_to_foundation,
    validate_to_reserve,
};
pub use execute::apply;
pub use autocomplete::next_autocomplete_move;
