pub mod gate;
pub mod runner;

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

pub use gate::{Permit, SafetyGate};
pub use runner::ShellExecutor;

/// 셸에 그대로 넘길 명령어 텍스트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    text: String,
}

impl ShellCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// 명령어 한 번 실행한 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub command_name: String,
    /// stdout + stderr (섞인 순서 그대로)
    pub output: String,
    /// 시그널로 종료된 경우 -1
    pub exit_code: i32,
    pub duration_seconds: f64,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// 명령어 실행기
///
/// 0이 아닌 종료 코드는 에러가 아니라 결과 값입니다.
/// 셸 자체를 띄우지 못한 경우에만 `Err`를 반환합니다.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn run(&self, command_name: &str, command: &ShellCommand) -> Result<ExecutionResult>;
}
