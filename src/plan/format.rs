use serde::de::DeserializeOwned;
use strum::{EnumString, EnumIter, AsRefStr};

use crate::error::Error;
use crate::plan::Plan;

/// Represents all the different text formats a plan can be written in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PlanFormat {
    #[strum(serialize = "TOML", serialize = "toml")]
    Toml,
    #[strum(serialize = "JSON", serialize = "json")]
    Json,
    #[strum(serialize = "YAML", serialize = "YML", serialize = "yaml", serialize = "yml")]
    Yaml,
}

impl PlanFormat {
    /// Deserializes a plan from text in this format, without validating it.
    pub fn read_plan_str<T: DeserializeOwned>(&self, s: &str) -> Result<Plan<T>, Error> {
        match self {
            Self::Toml => toml::from_str(s).map_err(Error::TomlDeserialize),
            Self::Json => serde_json::from_str(s).map_err(Error::JsonDeserialize),
            Self::Yaml => serde_yaml::from_str(s).map_err(Error::YamlDeserialize),
        }
    }
}
