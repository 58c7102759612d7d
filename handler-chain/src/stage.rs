//! Filter stages. A stage is one of three tagged kinds so that ordering and short-circuit
//! behavior stay explicit: a [`Predicate`] passes or rejects, a [`Transform`] rewrites the message
//! and passes, a [`SideEffect`] observes and passes.

use std::fmt;
use std::sync::Arc;

use dbot_core::Message;

/// Pass/reject check over a message.
pub trait Predicate: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, message: &Message) -> bool;
}

/// In-place rewrite of a message; always passes.
pub trait Transform: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, message: &mut Message);
}

/// Observation of a message (e.g. logging); always passes.
pub trait SideEffect: Send + Sync {
    fn name(&self) -> &str;
    fn run(&self, message: &Message);
}

/// Result of running one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageResult {
    Pass,
    Reject,
}

/// One entry of a filter chain.
#[derive(Clone)]
pub enum Stage {
    Predicate(Arc<dyn Predicate>),
    Transform(Arc<dyn Transform>),
    SideEffect(Arc<dyn SideEffect>),
}

impl Stage {
    pub fn predicate(p: impl Predicate + 'static) -> Self {
        Stage::Predicate(Arc::new(p))
    }

    pub fn transform(t: impl Transform + 'static) -> Self {
        Stage::Transform(Arc::new(t))
    }

    pub fn side_effect(s: impl SideEffect + 'static) -> Self {
        Stage::SideEffect(Arc::new(s))
    }

    pub fn name(&self) -> &str {
        match self {
            Stage::Predicate(p) => p.name(),
            Stage::Transform(t) => t.name(),
            Stage::SideEffect(s) => s.name(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Stage::Predicate(_) => "predicate",
            Stage::Transform(_) => "transform",
            Stage::SideEffect(_) => "side_effect",
        }
    }

    /// Runs the stage against `message`. Only predicates can reject.
    pub fn run(&self, message: &mut Message) -> StageResult {
        match self {
            Stage::Predicate(p) => {
                if p.check(message) {
                    StageResult::Pass
                } else {
                    StageResult::Reject
                }
            }
            Stage::Transform(t) => {
                t.apply(message);
                StageResult::Pass
            }
            Stage::SideEffect(s) => {
                s.run(message);
                StageResult::Pass
            }
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}
