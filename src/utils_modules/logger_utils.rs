use crate::common::*;

#[doc = r#"
    Starts the global logger.

    Records go to a daily-rotated file under `log_dir` (10 files kept) and are
    duplicated to stdout, which is where the operator reads the status lines.
    `RUST_LOG` overrides the default `info` level. The returned handle must be
    kept alive for as long as the program logs.
"#]
pub fn set_global_logger(log_dir: &str) -> anyhow::Result<LoggerHandle> {
    let log_spec: String = env::var("RUST_LOG").unwrap_or_else(|_| String::from("info"));

    let handle: LoggerHandle = Logger::try_with_str(&log_spec)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("ads_metrics_visualizer")
                .suffix("log"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .duplicate_to_stdout(Duplicate::All)
        .start()
        .map_err(|e| anyhow!("[set_global_logger] Failed to start logger: {:?}", e))?;

    Ok(handle)
}

#[doc = "`[timestamp] [LEVEL] T[thread] message`"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        record.args()
    )
}
