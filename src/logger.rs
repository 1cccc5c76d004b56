use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use crate::config::General;
use crate::errors::CityWeatherInitError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up the log4rs logger with a file appender and, if configured,
/// a console appender. Must be called once before any log output.
///
/// # Arguments
///
/// * 'general' - the general configuration section
pub fn init_logger(general: &General) -> Result<log4rs::Handle, CityWeatherInitError> {
    let log_file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut config = Config::builder()
        .appender(Appender::builder().build("log_file", Box::new(log_file)));

    let mut root = Root::builder().appender("log_file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();

        config = config.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = config.build(root.build(general.log_level))?;

    Ok(log4rs::init_config(config)?)
}
