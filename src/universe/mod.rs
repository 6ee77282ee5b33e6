//! Candidate universe
//!
//! Folds feedback into global letter constraints plus a positional mask, and
//! rescans the dictionary to find the words still consistent with everything
//! learned so far.

mod policy;
mod state;

pub use policy::MaskPolicy;
pub use state::{Narrowing, Universe};
