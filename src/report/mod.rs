use crate::config::SafetyConfig;
use crate::context::RunOptions;
use crate::error::TroubleshootError;
use crate::executor::{ExecutionResult, ShellCommand};
use colored::*;
use tracing::{error, info, warn};

const SEPARATOR_WIDTH: usize = 40;

/// 실행 로그 기록과 콘솔 출력 담당
///
/// 콘솔 출력은 `quiet`/`verbose`에 따라 걸러지고, 로그 기록은 항상 남습니다.
pub struct Reporter<'a> {
    options: &'a RunOptions,
    safety: &'a SafetyConfig,
}

impl<'a> Reporter<'a> {
    pub fn new(options: &'a RunOptions, safety: &'a SafetyConfig) -> Self {
        Self { options, safety }
    }

    /// 실행된 명령어 하나에 대한 로그 엔트리
    pub fn record(&self, label: &str, command: &ShellCommand, result: &ExecutionResult) {
        info!(
            "{}: {} (took {:.2}s)",
            label, result.command_name, result.duration_seconds
        );

        if self.safety.save_diagnostics_enabled {
            info!("Output: {}", result.output);
        }

        if !result.success() {
            warn!("Command exited with status {}: {}", result.exit_code, command);
        }
    }

    /// 셸을 띄우지 못한 경우
    pub fn record_failure(&self, label: &str, name: &str, err: &TroubleshootError) {
        info!("{}: {} (failed to start)", label, name);
        error!("{}", err);
        eprintln!("{} {}", "[X]".red(), err);
    }

    pub fn record_manual(&self, name: &str) {
        info!("Manual instruction shown: {}", name);
    }

    /// 본문 출력 (quiet면 생략)
    pub fn say(&self, message: &str) {
        if self.options.shows_body() {
            println!("{}", message);
        }
    }

    /// 명령어 출력 그대로 표시 (quiet면 생략)
    pub fn output(&self, output: &str) {
        if self.options.shows_body() {
            println!("{}", strip_trailing_newline(output));
        }
    }

    /// 실행 중 표시
    pub fn step(&self, description: &str) {
        if self.options.shows_body() {
            println!("  {} {}...", "Running:".cyan(), description);
        }
    }

    /// verbose일 때 출력 전체를 구분선과 함께 표시
    pub fn dump(&self, output: &str) {
        if self.options.shows_detail() {
            println!("{}", frame_output(output));
        }
    }

    /// verbose일 때 소요 시간 표시
    pub fn duration(&self, seconds: f64) {
        if self.options.shows_detail() {
            println!("Command completed in {:.2}s", seconds);
        }
    }

    /// 사용자 경고 (quiet여도 표시)
    pub fn warn_user(&self, message: &str) {
        eprintln!("{} {}", "[!] Warning:".yellow().bold(), message);
    }

    /// 사용자 에러 (quiet여도 표시)
    pub fn error_user(&self, message: &str) {
        eprintln!("{} {}", "[X] Error:".red().bold(), message);
    }

    pub fn options(&self) -> &RunOptions {
        self.options
    }
}

/// 마지막 줄바꿈 하나만 제거
pub fn strip_trailing_newline(output: &str) -> &str {
    output
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(output)
}

/// 출력 앞뒤에 `=` 구분선을 두고 각 줄을 네 칸 들여씁니다.
pub fn frame_output(output: &str) -> String {
    let separator = format!("  {}", "=".repeat(SEPARATOR_WIDTH));
    let mut framed = separator.clone();
    framed.push('\n');
    for line in output.lines() {
        framed.push_str("    ");
        framed.push_str(line);
        framed.push('\n');
    }
    framed.push_str(&separator);
    framed
}
