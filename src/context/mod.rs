use crate::config::{Config, SafetyConfig};
use std::path::PathBuf;

/// 실행 모드
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Diagnose,
    Repair,
    Optimize,
    Custom(String),
    List,
    Help,
    Version,
}

/// 커맨드라인에서 한 번 만들어지는 실행 옵션
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    /// safe mode 무시
    pub force: bool,
    pub verbose: bool,
    /// 에러 외 출력 억제. verbose보다 우선
    pub quiet: bool,
}

impl RunOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            force: false,
            verbose: false,
            quiet: false,
        }
    }

    /// 콘솔 본문 출력 여부
    pub fn shows_body(&self) -> bool {
        !self.quiet
    }

    /// 전체 출력 덤프와 소요 시간 표시 여부
    pub fn shows_detail(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// 시작 시 한 번 만들어져 Dispatcher/Reporter에 참조로 전달되는 실행 컨텍스트
#[derive(Debug, Clone)]
pub struct RunContext {
    pub options: RunOptions,
    pub config: Config,
    pub safety: SafetyConfig,
    /// 이번 실행의 로그 파일 (열지 못했으면 None)
    pub log_file: Option<PathBuf>,
}

impl RunContext {
    pub fn new(options: RunOptions, config: Config, log_file: Option<PathBuf>) -> Self {
        let safety = config.safety();
        Self {
            options,
            config,
            safety,
            log_file,
        }
    }
}
