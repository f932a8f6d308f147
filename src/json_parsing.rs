use{
    std::{fs::File, io::BufReader, process::exit},
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    log::info,
    crate::sir_model::SimError,
};

/// # Read the parameters from a json file
/// * without a file, the default parameters are printed as json and the program exits,
///  this output can be used as a template
/// * also returns the parsed json, it is written into the headers of the output files
pub fn parse<T>(file: Option<&String>) -> Result<(T, Value), SimError>
where T: Default + Serialize + DeserializeOwned
{
    match file
    {
        None => {
            let example = T::default();
            serde_json::to_writer_pretty(std::io::stdout(), &example)?;
            println!();
            exit(0);
        },
        Some(path) => {
            info!("Reading parameters from {path}");
            let reader = BufReader::new(File::open(path)?);
            parse_reader(reader)
        }
    }
}

pub fn parse_reader<T, R>(reader: R) -> Result<(T, Value), SimError>
where T: DeserializeOwned,
    R: std::io::Read
{
    let json: Value = serde_json::from_reader(reader)?;
    let opt: T = serde_json::from_value(json.clone())?;
    Ok((opt, json))
}

#[cfg(test)]
mod tests{
    use super::*;
    use crate::sir_model::VirusParams;

    #[test]
    fn defaults_survive_the_json_template()
    {
        let template = serde_json::to_string_pretty(&VirusParams::default()).unwrap();
        let (params, json): (VirusParams, Value) = parse_reader(template.as_bytes()).unwrap();
        assert_eq!(params, VirusParams::default());
        assert_eq!(json["num_nodes"], 10);
    }

    #[test]
    fn broken_json_is_an_error()
    {
        let res: Result<(VirusParams, Value), _> = parse_reader(r#"{"num_nodes": "ten"}"#.as_bytes());
        assert!(matches!(res, Err(SimError::Json(_))));
    }
}
