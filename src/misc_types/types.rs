use{
    serde::{Serialize, Deserialize},
    crate::sir_model::HealthCounts,
};

pub const DEFAULT_NUM_NODES: usize = 10;
pub const DEFAULT_AVG_NODE_DEGREE: f64 = 3.0;
pub const DEFAULT_INITIAL_OUTBREAK: usize = 1;
pub const DEFAULT_SPREAD_CHANCE: f64 = 0.4;
pub const DEFAULT_RECOVERY_CHANCE: f64 = 0.3;
pub const DEFAULT_VACCINATED_RATE: f64 = 0.1;
pub const DEFAULT_VACCINE_EFFECTIVENESS: f64 = 0.5;
pub const DEFAULT_LETHALITY: f64 = 0.5;

pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;

pub const DEFAULT_STEPS: usize = 50;
pub const DEFAULT_SAMPLES_SIMPLE_SAMPLE: usize = 10000;

#[derive(Serialize, Deserialize, Clone, Debug, Copy, PartialEq, Eq)]
pub enum MeasureType {
    // dead at the end of the run
    D,
    // ever infected
    C,
}

impl MeasureType{
    pub fn name(self) -> &'static str
    {
        match self{
            Self::D => "D",
            Self::C => "C",
        }
    }

    pub fn measure(self, counts: &HealthCounts) -> u32
    {
        let value = match self{
            Self::D => counts.dead,
            Self::C => counts.ever_infected(),
        };
        value as u32
    }
}
