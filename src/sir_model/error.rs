use thiserror::Error;

/// Invalid parameters, the engine refuses to start with them
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError{
    #[error("number of nodes has to be positive, got {0}")]
    NodeCount(usize),

    #[error("{name} has to be a probability in [0, 1], got {value}")]
    Probability{
        name: &'static str,
        value: f64
    },

    #[error("average node degree has to be finite and non negative, got {0}")]
    AvgDegree(f64),

    #[error("edge probability has to be in [0, 1], got {0}")]
    EdgeProbability(f64),

    #[error("max infection period ({max}) is shorter than the asymptomatic period ({asymptomatic})")]
    InfectionPeriods{
        asymptomatic: u32,
        max: u32
    },

    #[error("activation order is not a permutation of the {0} nodes")]
    ActivationOrder(usize),

    #[error("agent at node {node} has id {id}")]
    AgentId{
        node: usize,
        id: usize
    },

    #[error("invalid edge {from}-{to}: {reason}")]
    Edge{
        from: usize,
        to: usize,
        reason: String
    },
}

impl ConfigurationError{
    /// checks that `value` is a probability
    pub fn check_probability(name: &'static str, value: f64) -> Result<f64, Self>
    {
        if (0.0..=1.0).contains(&value){
            Ok(value)
        } else {
            Err(Self::Probability{name, value})
        }
    }
}

/// Everything that can go wrong while running one of the commands
#[derive(Debug, Error)]
pub enum SimError{
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unable to seed rng: {0}")]
    Rng(#[from] rand::Error),

    #[error("unable to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("histogram error: {0}")]
    Histogram(String),
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn probability_check()
    {
        assert_eq!(ConfigurationError::check_probability("x", 0.0), Ok(0.0));
        assert_eq!(ConfigurationError::check_probability("x", 1.0), Ok(1.0));
        assert!(ConfigurationError::check_probability("x", 1.000_1).is_err());
        assert!(ConfigurationError::check_probability("x", f64::NAN).is_err());
        let msg = ConfigurationError::check_probability("recovery_chance", -1.0)
            .unwrap_err()
            .to_string();
        assert!(msg.contains("recovery_chance"));
    }
}
