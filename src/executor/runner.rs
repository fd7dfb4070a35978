use super::{ExecutionResult, Executor, ShellCommand};
use crate::error::{Result, TroubleshootError};
use async_trait::async_trait;
use std::time::Instant;
use tokio::process::Command;

/// `bash -c`로 명령어를 실행하는 기본 실행기
///
/// 타임아웃은 없습니다. 멈춘 명령어는 전체 실행을 멈춥니다.
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }

    /// 여러 줄 스크립트의 모든 줄에서 stderr가 stdout으로 합쳐지도록 감쌉니다.
    fn script(command: &ShellCommand) -> String {
        format!("exec 2>&1\n{}", command.as_str())
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Executor for ShellExecutor {
    async fn run(&self, command_name: &str, command: &ShellCommand) -> Result<ExecutionResult> {
        let start_time = Instant::now();

        let output = Command::new("bash")
            .arg("-c")
            .arg(Self::script(command))
            .output()
            .await
            .map_err(|source| TroubleshootError::SpawnFailed {
                command: command_name.to_string(),
                source,
            })?;

        let duration_seconds = start_time.elapsed().as_secs_f64();

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        // exec 이전에 bash가 직접 남긴 메시지
        if !output.stderr.is_empty() {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        Ok(ExecutionResult {
            command_name: command_name.to_string(),
            output: text,
            exit_code: output.status.code().unwrap_or(-1),
            duration_seconds,
        })
    }
}
