use {
    super::parser::*,
    serde_json::Value,
    std::{fs::File, io::{BufReader, BufWriter}},
    log::info,
    crate::sir_model::*,
};

/// optional files of the simulate command
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulateFiles<'a>{
    pub portrayal: Option<&'a str>,
    pub save_state: Option<&'a str>,
    pub resume: Option<&'a str>,
}

pub fn execute_simulation(
    param: SimulateParam,
    json: Value,
    files: SimulateFiles
) -> Result<(), SimError>
{
    let engine = SimulationEngine::new(param.model.clone())?;
    let run = match files.resume{
        None => engine.run(param.steps)?,
        Some(path) => {
            info!("Resuming from {path}");
            let reader = BufReader::new(File::open(path)?);
            let state = StateDump::read_bincode(reader)?
                .into_state()?;
            engine.run_state(state, param.steps, &mut engine.sir_rng())
        }
    };

    if let Some(last) = run.last_snapshot(){
        info!(
            "after {} steps: {} infected, {} recovered, {} dead, mortality {}",
            last.step,
            last.counts.infected,
            last.counts.recovered,
            last.counts.dead,
            last.mortality
        );
    }
    if run.state.is_extinct(){
        info!("no infected agents left");
    }

    let name = param.quick_name();
    let mut writer = CurveWriter::create(&name)?;
    writer.write_header(&[json])?;
    writer.write_curve(&run.snapshots)?;
    writer.into_inner()?;

    if let Some(path) = files.portrayal{
        info!("Creating {path}");
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &run.state.portrayal())?;
    }

    if let Some(path) = files.save_state{
        info!("Creating {path}");
        let file = BufWriter::new(File::create(path)?);
        run.state.dump().write_bincode(file)?;
    }
    Ok(())
}
