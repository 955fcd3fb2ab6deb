use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const PATTERN: &str = "{d(%Y/%m/%d %H:%M:%S%.3f)} {l} - {m}{n}";

pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Route log output to stderr so stdout only carries list output.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_filter))
        .context("invalid logger configuration")?;

    log4rs::init_config(config).context("logger already initialized")?;
    Ok(())
}
