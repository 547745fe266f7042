//! Declarative plans: an ordered list of stages that can be written as text and run against any source.

mod format;
mod stage;

use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::combinators::DropEnumerator;
use crate::combinators::TakeEnumerator;
use crate::combinators::UntilEnumerator;
use crate::combinators::WhereEnumerator;
use crate::enumerator::Enumerator;
use crate::error::Error;
use crate::predicate::EqualTo;
use crate::predicate::NotEqualTo;

pub use self::format::PlanFormat;
pub use self::stage::Stage;
pub use self::stage::StageKind;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan<T> {
    #[serde(default = "Vec::new")]
    pub stages: Vec<Stage<T>>,
}

impl<T> Plan<T> {
    /// Stages are run recursively, one stack frame each, so plan length is bounded.
    pub const MAX_STAGES: usize = 256;

    pub fn new(stages: Vec<Stage<T>>) -> Self {
        Self { stages }
    }

    /// Parses and validates a plan written in the given format.
    pub fn from_str_format(s: &str, format: PlanFormat) -> Result<Self, Error>
    where
        T: DeserializeOwned,
    {
        format.read_plan_str(s)?.validated()
    }

    /// Rejects plans that are too long, or that contain a `take` stage with a limit of zero.
    pub fn validated(self) -> Result<Self, Error> {
        if self.stages.len() > Self::MAX_STAGES {
            return Err(Error::TooManyStages { count: self.stages.len(), max: Self::MAX_STAGES })
        }

        for (index, stage) in self.stages.iter().enumerate() {
            if let Stage::Take { count: 0 } = stage {
                return Err(Error::ZeroTakeLimit { index })
            }
        }

        Ok(self)
    }

    /// Builds the chain of stages on top of `source` and collects what it produces.
    pub fn run(&self, source: &mut dyn Enumerator<Item = T>) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        Self::run_stages(&self.stages, source)
    }

    // Each stage lives in its own stack frame, borrowing the stage before it.
    fn run_stages(stages: &[Stage<T>], parent: &mut dyn Enumerator<Item = T>) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        let (stage, rest) = match stages.split_first() {
            None => return parent.to_vec(),
            Some(split) => split,
        };

        let kind = stage.kind();
        trace!(stage = kind.as_ref(), remaining = rest.len(), "applying plan stage");

        match stage {
            Stage::Drop { count } => {
                Self::run_stages(rest, &mut DropEnumerator::new(parent, *count))
            },
            Stage::Take { count } => {
                Self::run_stages(rest, &mut TakeEnumerator::new(parent, *count))
            },
            Stage::UntilEq { value } => {
                Self::run_stages(rest, &mut UntilEnumerator::new(parent, EqualTo(value.clone())))
            },
            Stage::WhereNeq { value } => {
                Self::run_stages(rest, &mut WhereEnumerator::new(parent, NotEqualTo(value.clone())))
            },
        }
    }
}

impl<T> Default for Plan<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Plans read as TOML by default.
impl<T: DeserializeOwned> FromStr for Plan<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_format(s, PlanFormat::Toml)
    }
}
