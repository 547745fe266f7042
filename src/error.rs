use serde_json::Error as JsonError;
use serde_yaml::Error as YamlError;
use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("enumerator is exhausted")]
    Exhausted,
    #[error("plan has {count} stages, more than the maximum of {max}")]
    TooManyStages { count: usize, max: usize },
    #[error("take stage at index {index} has a limit of zero")]
    ZeroTakeLimit { index: usize },
    #[error("cannot deserialize TOML: {0}")]
    TomlDeserialize(#[source] TomlError),
    #[error("cannot deserialize JSON: {0}")]
    JsonDeserialize(#[source] JsonError),
    #[error("cannot deserialize YAML: {0}")]
    YamlDeserialize(#[source] YamlError),
}
