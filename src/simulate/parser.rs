use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    crate::sir_model::*,
    crate::misc_types::*,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Run a single simulation and write the curves of all health states
pub struct Simulate
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Also write the network portrayal of the final state (json) to this file
    #[structopt(long)]
    portrayal: Option<String>,

    /// Also store the final state (bincode) in this file
    #[structopt(long)]
    save_state: Option<String>,

    /// Continue a state stored with --save-state instead of creating a new network
    #[structopt(long)]
    resume: Option<String>,
}

impl Simulate {
    pub fn parse(&self) -> Result<(SimulateParam, Value), SimError>
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self) -> Result<(), SimError>
    {
        let (param, json) = self.parse()?;
        super::execute::execute_simulation(
            param,
            json,
            super::execute::SimulateFiles{
                portrayal: self.portrayal.as_deref(),
                save_state: self.save_state.as_deref(),
                resume: self.resume.as_deref()
            }
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulateParam
{
    #[serde(flatten)]
    pub model: VirusParams,
    pub steps: usize,
}

impl SimulateParam
{
    pub fn quick_name(&self) -> String
    {
        format!(
            "{}Simulate_Steps{}.dat",
            self.model.quick_name(),
            self.steps
        )
    }
}

impl Default for SimulateParam
{
    fn default() -> Self {
        Self{
            model: VirusParams::default(),
            steps: DEFAULT_STEPS
        }
    }
}
