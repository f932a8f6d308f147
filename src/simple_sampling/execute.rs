use {
    super::parser::*,
    serde_json::Value,
    std::{num::*, fs::File, io::{BufWriter, Write}},
    crate::*,
    crate::sir_model::*,
    crate::misc_types::*,
    crate::stats_methods::*,
    rayon::prelude::*,
    rand::SeedableRng,
    rand_pcg::Pcg64,
    net_ensembles::sampling::{HistU32Fast, Histogram},
    log::info,
};

struct ThreadResult{
    hist_d: HistU32Fast,
    hist_c: HistU32Fast,
    dead: Vec<u32>,
    ever_infected: Vec<u32>,
}

fn new_hist(num_nodes: usize) -> Result<HistU32Fast, SimError>
{
    HistU32Fast::new_inclusive(0, num_nodes as u32)
        .map_err(|e| SimError::Histogram(format!("{e:?}")))
}

fn samples_of_thread(samples: usize, threads: usize, index: usize) -> usize
{
    samples / threads + usize::from(index < samples % threads)
}

pub fn execute_sir(
    param: SimpleSampleParam,
    json: Value,
    num_threads: Option<NonZeroUsize>
) -> Result<(), SimError>
{
    let engine = SimulationEngine::new(param.model.clone())?;
    let n = param.model.num_nodes;

    let j = num_threads.map_or(1, NonZeroUsize::get);
    // limit number of threads to j
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(j)
        .build()?;

    let mut graph_rng = engine.graph_rng();
    let mut sir_rng = engine.sir_rng();

    let shared_graph = if param.resample_graph {
        None
    } else {
        Some(engine.build_graph(&mut graph_rng)?)
    };

    let mut rngs = Vec::with_capacity(j);
    for _ in 0..j{
        rngs.push(
            (
                Pcg64::from_rng(&mut graph_rng)?,
                Pcg64::from_rng(&mut sir_rng)?
            )
        );
    }

    let bar = indication_bar(param.samples as u64);

    let results: Result<Vec<ThreadResult>, SimError> = pool.install(
        ||
        rngs.par_iter_mut()
            .enumerate()
            .map(
                |(index, (thread_graph_rng, thread_sir_rng))| -> Result<ThreadResult, SimError>
                {
                    let mut hist_d = new_hist(n)?;
                    let mut hist_c = hist_d.clone();
                    let amount = samples_of_thread(param.samples, j, index);
                    let mut dead = Vec::with_capacity(amount);
                    let mut ever_infected = Vec::with_capacity(amount);

                    for _ in 0..amount
                    {
                        let run = match shared_graph.as_ref(){
                            Some(graph) => engine.run_on_graph(graph.clone(), param.steps, thread_sir_rng),
                            None => engine.run_with(param.steps, thread_graph_rng, thread_sir_rng)?
                        };
                        let counts = run.state.counts();
                        let d = MeasureType::D.measure(&counts);
                        let c = MeasureType::C.measure(&counts);
                        hist_d.increment_quiet(d);
                        hist_c.increment_quiet(c);
                        dead.push(d);
                        ever_infected.push(c);
                        bar.inc(1);
                    }
                    Ok(ThreadResult{hist_d, hist_c, dead, ever_infected})
                }
            ).collect()
    );
    bar.finish_with_message("Done");

    let mut results = results?;
    let mut combined = match results.pop(){
        Some(res) => res,
        None => return Ok(())
    };

    for res in results{
        combined.hist_d.try_add(&res.hist_d)
            .map_err(|e| SimError::Histogram(format!("{e:?}")))?;
        combined.hist_c.try_add(&res.hist_c)
            .map_err(|e| SimError::Histogram(format!("{e:?}")))?;
        combined.dead.extend(res.dead);
        combined.ever_infected.extend(res.ever_infected);
    }

    let frac = Some(n as f64);
    let mut bootstrap_rng = Pcg64::from_rng(&mut sir_rng)?;
    let outputs = [
        (MeasureType::D, &combined.hist_d, &combined.dead),
        (MeasureType::C, &combined.hist_c, &combined.ever_infected)
    ];
    for (measure, hist, values) in outputs
    {
        let var = MyVarianceBootstrap::from_slice(values, frac, &mut bootstrap_rng);
        if let Some(var) = var.as_ref(){
            info!(
                "{}/N: mean {} ± {}, variance {} ± {}",
                measure.name(),
                var.mean,
                var.mean_err,
                var.var,
                var.var_err
            );
        }
        let name = param.quick_name(num_threads, measure);
        hist_to_file(hist, var.as_ref(), name, &json)?;
    }
    Ok(())
}

pub fn norm_hist(hist: &HistU32Fast) -> Vec<f64>
{
    let total: usize = hist.hist().iter().sum();
    let total = total as f64;
    hist.hist()
        .iter()
        .map(|&hits| if total > 0.0 {hits as f64 / total} else {0.0})
        .collect()
}

pub fn hist_to_file(
    hist: &HistU32Fast,
    var: Option<&MyVarianceBootstrap>,
    file_name: String,
    json: &Value
) -> std::io::Result<()>
{
    info!("Creating {}", &file_name);
    let file = File::create(file_name)?;
    let buf = BufWriter::new(file);
    write_hist(hist, var, json, buf)
}

/// mean and variance are divided by the number of nodes
pub fn write_hist<W: Write>(
    hist: &HistU32Fast,
    var: Option<&MyVarianceBootstrap>,
    json: &Value,
    mut buf: W
) -> std::io::Result<()>
{
    let normed = norm_hist(hist);
    write!(buf, "#")?;
    serde_json::to_writer(&mut buf, json)?;
    writeln!(buf)?;
    if let Some(var) = var{
        writeln!(buf, "#mean {} mean_err {} variance {} variance_err {}", var.mean, var.mean_err, var.var, var.var_err)?;
    }
    writeln!(buf, "#bin hits probability")?;

    for ((bin, hits), prob) in hist.bin_hits_iter().zip(normed)
    {
        writeln!(buf, "{} {} {}", bin, hits, prob)?;
    }
    buf.flush()
}
