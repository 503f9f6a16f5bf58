//! Constraint compilation, entropy scoring, guess selection, and the session façade.

pub mod constraints;
pub mod entropy;
pub mod selector;
pub mod session;

pub use constraints::{ConstraintSet, Inconsistent};
pub use selector::{SelectorError, OPENING_GUESS};
pub use session::{CandidatesInfo, SessionId, SolverCore, SolverError, SuggestOutcome};
