use std::io::Write;

use crate::common::*;

use crate::model::configs::log_config::*;

#[doc = "Line layout for the log file: timestamp, level, module, message"]
fn log_line_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

#[doc = "전역 로거설정: rotated file output plus warnings and errors on stderr"]
/// # Arguments
/// * `log_config` - where and how log files are written
/// * `log_level` - flexi_logger spec string such as `info` or `school_message_composer=debug`
///
/// # Returns
/// * `anyhow::Result<LoggerHandle>` - keep the handle alive for the lifetime of the program
pub fn set_global_logger(log_config: &LogConfig, log_level: &str) -> anyhow::Result<LoggerHandle> {
    let file_spec: FileSpec = FileSpec::default()
        .directory(log_config.log_dir())
        .basename(log_config.file_basename());

    let handle: LoggerHandle = Logger::try_with_str(log_level)
        .context("[logger_utils -> set_global_logger] invalid log level")?
        .log_to_file(file_spec)
        .rotate(
            Criterion::Age(log_config.rotate_by().age()),
            Naming::Numbers,
            Cleanup::KeepLogFiles(*log_config.keep_log_files()),
        )
        .format_for_files(log_line_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .context("[logger_utils -> set_global_logger] unable to start logger")?;

    Ok(handle)
}
