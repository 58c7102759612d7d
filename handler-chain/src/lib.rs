//! # Handler chain
//!
//! Runs an ordered list of filter stages and then one terminal handler for each message. A
//! rejecting predicate stops the chain; transform stages rewrite the message the handler sees.
//! [`Dispatcher`] binds chains to gateway event kinds.

mod chain;
mod dispatcher;
mod stage;

pub use chain::{ChainOutcome, FilterOutcome, HandlerChain};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use stage::{Predicate, SideEffect, Stage, StageResult, Transform};
