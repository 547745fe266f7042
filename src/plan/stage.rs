use serde::Deserialize;
use strum::{EnumDiscriminants, AsRefStr};

/// One value-parameterized step of a plan, mirroring a chain builder on `Enumerator`.
#[derive(Debug, Clone, PartialEq, Deserialize, EnumDiscriminants)]
#[serde(tag = "op", rename_all = "snake_case")]
#[strum_discriminants(name(StageKind), derive(AsRefStr))]
pub enum Stage<T> {
    Drop { count: usize },
    Take { count: usize },
    UntilEq { value: T },
    WhereNeq { value: T },
}

impl<T> Stage<T> {
    pub fn kind(&self) -> StageKind {
        self.into()
    }
}
