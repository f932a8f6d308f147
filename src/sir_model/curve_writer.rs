use{
    std::{
        fs::File,
        io::{Write, BufWriter},
        path::Path,
    },
    serde_json::Value,
    log::info,
    super::*,
};

const CURVE_HEADER: &str = "#step unvaccinated vaccinated infected recovered dead resistant_susceptible_ratio mortality alive_dead_ratio";

/// # Writes the metric time series of a run
/// * lines starting with `#` are comments, the first ones contain the parameters as json
/// * one line per time step afterwards
pub struct CurveWriter<W: Write>
{
    writer: W,
}

impl CurveWriter<BufWriter<File>>
{
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self>
    {
        info!("Creating {}", path.as_ref().display());
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CurveWriter<W>
{
    pub fn new(writer: W) -> Self
    {
        Self{writer}
    }

    pub fn write_header(&mut self, jsons: &[Value]) -> std::io::Result<()>
    {
        write_jsons(jsons, &mut self.writer)?;
        writeln!(self.writer, "{CURVE_HEADER}")
    }

    pub fn write_snapshot(&mut self, snapshot: &MetricSnapshot) -> std::io::Result<()>
    {
        let c = &snapshot.counts;
        writeln!(
            self.writer,
            "{} {} {} {} {} {} {} {} {}",
            snapshot.step,
            c.unvaccinated_susceptible,
            c.vaccinated_susceptible,
            c.infected,
            c.recovered,
            c.dead,
            snapshot.resistant_susceptible_ratio,
            snapshot.mortality,
            snapshot.alive_dead_ratio
        )
    }

    pub fn write_curve(&mut self, snapshots: &[MetricSnapshot]) -> std::io::Result<()>
    {
        snapshots.iter()
            .try_for_each(|snapshot| self.write_snapshot(snapshot))
    }

    pub fn into_inner(mut self) -> std::io::Result<W>
    {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> std::io::Result<()>
{
    for j in jsons{
        write!(writer, "#")?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer)?;
    }
    Ok(())
}
