use clap::Parser;
use colored::*;
use macos_troubleshooter::cli::Cli;
use macos_troubleshooter::commands::Dispatcher;
use macos_troubleshooter::config::{AppPaths, Config};
use macos_troubleshooter::context::RunContext;
use macos_troubleshooter::error::Result;
use macos_troubleshooter::executor::ShellExecutor;
use macos_troubleshooter::logging;
use macos_troubleshooter::registry::Registry;
use std::path::PathBuf;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match AppPaths::resolve() {
        Ok(paths) => Some(paths),
        Err(e) => {
            eprintln!("{} {}", "[!]".yellow(), e);
            None
        }
    };

    let (config, log_file) = match &paths {
        Some(paths) => prepare(paths),
        None => (Config::fallback(), None),
    };

    let ctx = RunContext::new(cli.run_options(), config, log_file);
    let executor = ShellExecutor::new();

    Dispatcher::new(&ctx, Registry::builtin(), &executor)
        .dispatch()
        .await;

    if let (Some(paths), Some(days)) = (&paths, ctx.config.log_retention_days()) {
        logging::cleanup_old_logs(&paths.logs_dir, days);
    }

    // 사용자 에러(알 수 없는 명령어 등)도 정상 종료
    Ok(())
}

/// 로그 디렉토리/설정 파일 준비, 실행 로그 시작, 설정 로드
///
/// 어느 단계가 실패해도 안전한 기본값으로 계속 진행합니다.
fn prepare(paths: &AppPaths) -> (Config, Option<PathBuf>) {
    if let Err(e) = paths.ensure_dirs() {
        eprintln!("{} {}", "[!]".yellow(), e);
    }

    let init_result = Config::ensure_exists(&paths.config_file);

    let log_file = match logging::init_run_log(&paths.logs_dir) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("{} {}", "[!]".yellow(), e);
            None
        }
    };

    if let Err(e) = init_result {
        error!("Failed to write default config: {}", e);
    }

    let config = Config::load(&paths.config_file).unwrap_or_else(|e| {
        error!("{}", e);
        Config::fallback()
    });

    (config, log_file)
}
