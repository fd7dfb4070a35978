use crate::error::{Result, TroubleshootError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정/로그가 저장되는 경로들
///
/// 기본 위치는 ~/.macos_troubleshooter 입니다.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub base_dir: PathBuf,
    pub config_file: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    /// 홈 디렉토리 기준 경로
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            TroubleshootError::ConfigError("Could not find home directory".to_string())
        })?;
        Ok(Self::under(home.join(".macos_troubleshooter")))
    }

    pub fn under(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            config_file: base_dir.join("config.toml"),
            logs_dir: base_dir.join("logs"),
            base_dir,
        }
    }

    /// 로그 디렉토리 생성 (없으면)
    pub fn ensure_dirs(&self) -> Result<()> {
        if !self.logs_dir.exists() {
            fs::create_dir_all(&self.logs_dir)?;
        }
        Ok(())
    }
}

/// 사용자 설정
///
/// 설정 파일은 ~/.macos_troubleshooter/config.toml에 저장됩니다.
/// 빠진 키는 필드별 기본값을 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 상세 출력 선호 (현재 실행 로직에서는 사용하지 않음)
    #[serde(default = "default_true")]
    pub verbose_output: bool,

    /// 명령어 출력 전체를 로그에 저장
    #[serde(default = "default_true")]
    pub save_diagnostics: bool,

    /// 이 일수보다 오래된 로그 파일 삭제. 없거나 0 이하면 정리하지 않음
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_clear_logs: Option<i64>,

    /// sudo 타임아웃 (초). 읽기만 하고 사용하지 않음
    #[serde(default = "default_sudo_timeout")]
    pub sudo_timeout: u64,

    /// 위험하거나 sudo가 필요한 명령어 차단
    #[serde(default = "default_true")]
    pub safe_mode: bool,
}

fn default_true() -> bool {
    true
}

fn default_auto_clear_logs() -> i64 {
    30
}

fn default_sudo_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_output: default_true(),
            save_diagnostics: default_true(),
            auto_clear_logs: Some(default_auto_clear_logs()),
            sudo_timeout: default_sudo_timeout(),
            safe_mode: default_true(),
        }
    }
}

/// 안전 게이트가 참조하는 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyConfig {
    pub safe_mode_enabled: bool,
    pub save_diagnostics_enabled: bool,
}

impl Config {
    /// 설정 파일을 읽지 못했을 때 쓰는 안전한 기본값 (로그 정리 없음)
    pub fn fallback() -> Self {
        Self {
            auto_clear_logs: None,
            ..Self::default()
        }
    }

    /// 설정 파일에서 로드
    pub fn load(path: &Path) -> Result<Self> {
        let load_err = |reason: String| TroubleshootError::ConfigLoad {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        toml::from_str(&content).map_err(|e| load_err(e.to_string()))
    }

    /// 설정을 파일에 저장
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| TroubleshootError::ConfigError(e.to_string()))?;

        fs::write(path, toml_string)?;

        Ok(())
    }

    /// 설정 파일이 없으면 기본값으로 생성. 새로 만들었으면 true
    pub fn ensure_exists(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    pub fn safety(&self) -> SafetyConfig {
        SafetyConfig {
            safe_mode_enabled: self.safe_mode,
            save_diagnostics_enabled: self.save_diagnostics,
        }
    }

    /// 로그 정리 기준 일수 (비활성화면 None)
    pub fn log_retention_days(&self) -> Option<u64> {
        self.auto_clear_logs
            .filter(|days| *days > 0)
            .map(|days| days as u64)
    }
}
