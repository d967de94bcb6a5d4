use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("Invalid parameter `{parameter}` = {value}: expected {expected}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },
}

pub type ImpactResult<T> = Result<T, ImpactError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid scenario `{name}`: {source}")]
    InvalidScenario {
        name: String,
        #[source]
        source: ImpactError,
    },

    #[error("Invalid physics constants: {0}")]
    InvalidConstants(#[source] ImpactError),

    #[error("{rejected} of {total} scenarios rejected: {names}")]
    RejectedScenarios {
        rejected: usize,
        total: usize,
        names: String,
    },
}
