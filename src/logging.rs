//! 실행 로그
//!
//! 실행마다 `troubleshoot_YYYYmmdd_HHMMSS.log` 파일 하나를 만들고
//! `tracing` 이벤트를 `2024-05-01 10:00:00 [INFO]: message` 형식의 줄로 기록합니다.

use crate::error::{Result, TroubleshootError};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{error, info, Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// 로그 한 줄 포맷: `<timestamp> [<LEVEL>]: <message>`
pub struct RunLogFormat;

impl<S, N> FormatEvent<S, N> for RunLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} [{}]: ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// 실행 시각 기준 로그 파일 이름
pub fn log_file_name(started_at: DateTime<Local>) -> String {
    format!("troubleshoot_{}.log", started_at.format("%Y%m%d_%H%M%S"))
}

/// 이번 실행의 로그 파일을 열고 전역 subscriber로 등록합니다.
pub fn init_run_log(logs_dir: &Path) -> Result<PathBuf> {
    let path = logs_dir.join(log_file_name(Local::now()));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| TroubleshootError::LogInit {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .with_writer(Arc::new(file))
        .event_format(RunLogFormat)
        .try_init()
        .map_err(|e| TroubleshootError::LogInit {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok(path)
}

/// `retention_days`보다 오래된 `*.log` 파일 삭제
///
/// 개별 파일 실패는 로그만 남기고 나머지 파일 정리를 계속합니다.
/// 삭제한 파일 수를 반환합니다.
pub fn cleanup_old_logs(logs_dir: &Path, retention_days: u64) -> usize {
    let max_age = Duration::from_secs(retention_days.saturating_mul(24 * 60 * 60));
    let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
        return 0;
    };

    let pattern = logs_dir.join("*.log");
    let entries = match glob::glob(&pattern.to_string_lossy()) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Invalid log file pattern {}: {}", pattern.display(), e);
            return 0;
        }
    };

    let mut deleted = 0;
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                error!("Failed to read log directory entry: {}", e);
                continue;
            }
        };

        match remove_if_older(&path, cutoff) {
            Ok(true) => {
                info!("Deleted old log file: {}", path.display());
                deleted += 1;
            }
            Ok(false) => {}
            Err(e @ TroubleshootError::LogDelete { .. }) => error!("{}", e),
            Err(e) => error!("Failed to process log file {}: {}", path.display(), e),
        }
    }

    deleted
}

fn remove_if_older(path: &Path, cutoff: SystemTime) -> Result<bool> {
    let modified = fs::metadata(path)?.modified()?;
    if modified >= cutoff {
        return Ok(false);
    }

    fs::remove_file(path).map_err(|source| TroubleshootError::LogDelete {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// 테스트용: 현재 스레드의 로그를 메모리에 캡처
#[cfg(test)]
pub(crate) mod capture {
    use super::RunLogFormat;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::subscriber::DefaultGuard;
    use tracing::Level;

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub struct CapturedLog {
        buf: Arc<Mutex<Vec<u8>>>,
        _guard: DefaultGuard,
    }

    impl CapturedLog {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.buf.lock().unwrap()).to_string()
        }

        /// 해당 레벨로 시작하는 엔트리들 (`[WARN]: ` 뒤의 메시지)
        pub fn entries(&self, level: &str) -> Vec<String> {
            let marker = format!("[{}]: ", level);
            self.contents()
                .lines()
                .filter_map(|line| line.split_once(&marker).map(|(_, msg)| msg.to_string()))
                .collect()
        }
    }

    pub fn capture() -> CapturedLog {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = SharedBuf(buf.clone());

        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(Level::INFO)
            .with_writer(move || writer.clone())
            .event_format(RunLogFormat)
            .finish();

        CapturedLog {
            buf,
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
