use{
    std::time::Instant,
    structopt::StructOpt,
    indicatif::*,
    log::{info, error},
};

pub mod sir_model;
pub mod misc_types;
pub mod stats_methods;
pub mod json_parsing;
pub mod logging;
pub mod simulate;
pub mod simple_sampling;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    logging::init_logging(logging::level_from_env());
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    let res = match opt{
        CmdOption::Simulate(o) => o.execute(),
        CmdOption::SimpleSample(o) => o.execute(),
    };
    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
    info!("Execution took {}", humantime::format_duration(start_time.elapsed()))
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Virus spreading on a random contact network")]
pub enum CmdOption
{
    Simulate(simulate::Simulate),
    SimpleSample(simple_sampling::SimpleSampleScan),
}
