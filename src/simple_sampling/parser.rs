use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::num::*,
    crate::sir_model::*,
    crate::misc_types::*,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Do a simple sampling simulation and get P(D) and P(C)
pub struct SimpleSampleScan
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl SimpleSampleScan {
    pub fn parse(&self) -> Result<(SimpleSampleParam, Value), SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        let (param, json) = self.parse()?;
        super::execute::execute_sir(param, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimpleSampleParam
{
    #[serde(flatten)]
    pub model: VirusParams,
    pub steps: usize,
    pub samples: usize,
    /// draw a new contact network for every sample instead of reusing the one from `graph_seed`
    pub resample_graph: bool,
}

impl SimpleSampleParam
{
    pub fn quick_name(
        &self,
        num_threads: Option<NonZeroUsize>,
        measure_type: MeasureType
    ) -> String
    {
        let j = match num_threads
        {
            None => "".to_owned(),
            Some(v) => format!("j{}", v)
        };
        format!(
            "{}SimpleSampling_Measure{}Steps{}Sam{}{}THR{}.dat",
            self.model.quick_name(),
            measure_type.name(),
            self.steps,
            self.samples,
            if self.resample_graph {"Resample"} else {""},
            j
        )
    }
}

impl Default for SimpleSampleParam
{
    fn default() -> Self {
        Self{
            model: VirusParams{
                num_nodes: 1000,
                avg_node_degree: 10.0,
                virus_spread_chance: 0.9,
                vaccine_effectiveness_rate: 0.9,
                virus_lethality_rate: 0.2,
                ..VirusParams::default()
            },
            steps: DEFAULT_STEPS,
            samples: DEFAULT_SAMPLES_SIMPLE_SAMPLE,
            resample_graph: true
        }
    }
}
