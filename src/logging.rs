use{
    log::LevelFilter,
    log4rs::{
        append::console::ConsoleAppender,
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
        Config,
    },
};

/// environment variable to choose the log level, e.g. `VIRUS_LOG=debug`
pub const LOG_ENV: &str = "VIRUS_LOG";

// ISO 8601 timestamp and color coded level
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

pub fn level_from_env() -> LevelFilter
{
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Console logger, has to be called once at program start
pub fn init_logging(level: LevelFilter)
{
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level));
    match config{
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config){
                eprintln!("logger already initialized: {e}");
            }
        },
        Err(e) => eprintln!("invalid logging config: {e}")
    }
}
