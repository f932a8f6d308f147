use{
    serde::{Serialize, Deserialize},
    crate::misc_types::*,
    super::*,
};

/// # Order in which the agents are activated during one time step
/// * recorded once at setup and reused for every step
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationOrder{
    Ascending,
    /// shuffled once at setup with the sir rng
    Shuffled,
}

impl Default for ActivationOrder{
    fn default() -> Self{
        ActivationOrder::Ascending
    }
}

fn default_asymptomatic_period() -> u32
{
    DEFAULT_ASYMPTOMATIC_PERIOD
}

fn default_max_infection_period() -> u32
{
    DEFAULT_MAX_INFECTION_PERIOD
}

/// # All parameters of one model
/// * the probabilities are copied into every agent
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VirusParams{
    pub num_nodes: usize,
    pub avg_node_degree: f64,
    pub initial_outbreak_size: usize,
    pub virus_spread_chance: f64,
    pub recovery_chance: f64,
    pub vaccinated_rate: f64,
    pub vaccine_effectiveness_rate: f64,
    pub virus_lethality_rate: f64,

    #[serde(default = "default_asymptomatic_period")]
    pub asymptomatic_period: u32,
    #[serde(default = "default_max_infection_period")]
    pub max_infection_period: u32,
    #[serde(default)]
    pub death_schedule: DeathSchedule,
    #[serde(default)]
    pub post_cap: PostCapPolicy,
    #[serde(default)]
    pub activation: ActivationOrder,

    pub graph_seed: u64,
    pub sir_seed: u64,
}

impl Default for VirusParams{
    fn default() -> Self{
        Self{
            num_nodes: DEFAULT_NUM_NODES,
            avg_node_degree: DEFAULT_AVG_NODE_DEGREE,
            initial_outbreak_size: DEFAULT_INITIAL_OUTBREAK,
            virus_spread_chance: DEFAULT_SPREAD_CHANCE,
            recovery_chance: DEFAULT_RECOVERY_CHANCE,
            vaccinated_rate: DEFAULT_VACCINATED_RATE,
            vaccine_effectiveness_rate: DEFAULT_VACCINE_EFFECTIVENESS,
            virus_lethality_rate: DEFAULT_LETHALITY,
            asymptomatic_period: DEFAULT_ASYMPTOMATIC_PERIOD,
            max_infection_period: DEFAULT_MAX_INFECTION_PERIOD,
            death_schedule: DeathSchedule::default(),
            post_cap: PostCapPolicy::default(),
            activation: ActivationOrder::default(),
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
        }
    }
}

impl VirusParams{
    /// Fails on the first invalid parameter
    pub fn validate(&self) -> Result<(), ConfigurationError>
    {
        if self.num_nodes == 0 {
            return Err(ConfigurationError::NodeCount(self.num_nodes));
        }
        if !self.avg_node_degree.is_finite() || self.avg_node_degree < 0.0 {
            return Err(ConfigurationError::AvgDegree(self.avg_node_degree));
        }
        ConfigurationError::check_probability("virus_spread_chance", self.virus_spread_chance)?;
        ConfigurationError::check_probability("recovery_chance", self.recovery_chance)?;
        ConfigurationError::check_probability("vaccinated_rate", self.vaccinated_rate)?;
        ConfigurationError::check_probability("vaccine_effectiveness_rate", self.vaccine_effectiveness_rate)?;
        ConfigurationError::check_probability("virus_lethality_rate", self.virus_lethality_rate)?;
        if self.max_infection_period < self.asymptomatic_period {
            return Err(
                ConfigurationError::InfectionPeriods{
                    asymptomatic: self.asymptomatic_period,
                    max: self.max_infection_period
                }
            );
        }
        Ok(())
    }

    /// Erdos-Renyi edge probability, capped at 1 (complete graph)
    pub fn edge_probability(&self) -> f64
    {
        (self.avg_node_degree / self.num_nodes as f64).min(1.0)
    }

    pub fn outbreak_size(&self) -> usize
    {
        self.initial_outbreak_size.min(self.num_nodes)
    }

    pub fn vaccination_draws(&self) -> usize
    {
        (self.num_nodes as f64 * self.vaccinated_rate).floor() as usize
    }

    pub fn rules(&self) -> TransitionRules
    {
        TransitionRules{
            asymptomatic_period: self.asymptomatic_period,
            max_infection_period: self.max_infection_period,
            death_schedule: self.death_schedule,
            post_cap: self.post_cap
        }
    }

    pub fn quick_name(&self) -> String
    {
        format!(
            "v{}N{}Deg{}Out{}Spread{}Rec{}Vac{}Eff{}Let{}Asym{}Max{}{:?}{:?}{:?}GS{}SS{}",
            crate::VERSION,
            self.num_nodes,
            self.avg_node_degree,
            self.initial_outbreak_size,
            self.virus_spread_chance,
            self.recovery_chance,
            self.vaccinated_rate,
            self.vaccine_effectiveness_rate,
            self.virus_lethality_rate,
            self.asymptomatic_period,
            self.max_infection_period,
            self.death_schedule,
            self.post_cap,
            self.activation,
            self.graph_seed,
            self.sir_seed
        )
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn defaults_are_valid()
    {
        let params = VirusParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.num_nodes, 10);
        assert!((params.edge_probability() - 0.3).abs() < 1e-12);
        assert_eq!(params.vaccination_draws(), 1);
    }

    #[test]
    fn invalid_parameters_are_rejected()
    {
        let bad = [
            VirusParams{num_nodes: 0, ..Default::default()},
            VirusParams{avg_node_degree: -1.0, ..Default::default()},
            VirusParams{avg_node_degree: f64::INFINITY, ..Default::default()},
            VirusParams{virus_spread_chance: 1.5, ..Default::default()},
            VirusParams{recovery_chance: -0.1, ..Default::default()},
            VirusParams{vaccinated_rate: 2.0, ..Default::default()},
            VirusParams{vaccine_effectiveness_rate: f64::NAN, ..Default::default()},
            VirusParams{virus_lethality_rate: 1.01, ..Default::default()},
            VirusParams{asymptomatic_period: 5, max_infection_period: 4, ..Default::default()},
        ];
        for params in bad.iter(){
            assert!(params.validate().is_err(), "{params:?}");
        }
    }

    #[test]
    fn outbreak_is_clamped_and_probability_capped()
    {
        let params = VirusParams{num_nodes: 2, avg_node_degree: 3.0, initial_outbreak_size: 7, ..Default::default()};
        assert_eq!(params.outbreak_size(), 2);
        assert_eq!(params.edge_probability(), 1.0);
    }

    #[test]
    fn file_names_differ_for_every_rule_setting()
    {
        let base = VirusParams::default();
        let variants = [
            VirusParams{activation: ActivationOrder::Shuffled, ..base.clone()},
            VirusParams{asymptomatic_period: 3, ..base.clone()},
            VirusParams{max_infection_period: 20, ..base.clone()},
            VirusParams{death_schedule: DeathSchedule::NormalDensity, ..base.clone()},
            VirusParams{post_cap: PostCapPolicy::StopInfecting, ..base.clone()},
        ];
        let mut names = vec![base.quick_name()];
        names.extend(variants.iter().map(VirusParams::quick_name));
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn optional_fields_fall_back_to_defaults()
    {
        let json = r#"{
            "num_nodes": 50,
            "avg_node_degree": 4.0,
            "initial_outbreak_size": 2,
            "virus_spread_chance": 0.4,
            "recovery_chance": 0.3,
            "vaccinated_rate": 0.1,
            "vaccine_effectiveness_rate": 0.5,
            "virus_lethality_rate": 0.5,
            "graph_seed": 1,
            "sir_seed": 2
        }"#;
        let params: VirusParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.rules(), TransitionRules::default());
        assert_eq!(params.activation, ActivationOrder::Ascending);

        let round: VirusParams = serde_json::from_str(&serde_json::to_string(&params).unwrap())
            .unwrap();
        assert_eq!(round, params);
    }
}
