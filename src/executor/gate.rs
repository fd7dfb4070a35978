use crate::config::SafetyConfig;
use crate::context::RunOptions;
use crate::registry::CommandSpec;

/// 안전 게이트 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permit {
    Allowed,
    DeniedDestructive,
    DeniedElevation,
}

impl Permit {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Permit::Allowed)
    }

    /// 거부 시 사용자에게 보여줄 경고
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Permit::Allowed => None,
            Permit::DeniedDestructive => Some(
                "This command is potentially dangerous and may cause data loss or system issues.",
            ),
            Permit::DeniedElevation => Some("This command requires sudo privileges."),
        }
    }
}

/// safe mode와 `--force`로 실행 허용 여부를 결정합니다.
pub struct SafetyGate;

impl SafetyGate {
    /// 판정 순서: 수동 명령어 → 파괴적 명령어 → sudo 필요 명령어
    pub fn permit(spec: &CommandSpec, opts: &RunOptions, cfg: &SafetyConfig) -> Permit {
        if spec.is_manual_only {
            return Permit::Allowed;
        }

        let guarded = cfg.safe_mode_enabled && !opts.force;

        if spec.is_destructive && guarded {
            Permit::DeniedDestructive
        } else if spec.requires_elevation && guarded {
            Permit::DeniedElevation
        } else {
            Permit::Allowed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Mode;
    use crate::registry::Registry;

    fn opts(force: bool) -> RunOptions {
        RunOptions {
            mode: Mode::Repair,
            force,
            verbose: false,
            quiet: false,
        }
    }

    fn safety(safe_mode: bool) -> SafetyConfig {
        SafetyConfig {
            safe_mode_enabled: safe_mode,
            save_diagnostics_enabled: true,
        }
    }

    #[test]
    fn test_destructive_commands() {
        let destructive: Vec<&CommandSpec> = Registry::builtin()
            .list_all()
            .map(|(_, s)| s)
            .filter(|s| s.is_destructive)
            .collect();
        assert!(!destructive.is_empty());

        for spec in destructive {
            assert_eq!(
                SafetyGate::permit(spec, &opts(false), &safety(true)),
                Permit::DeniedDestructive,
                "{}",
                spec.name
            );
            assert_eq!(SafetyGate::permit(spec, &opts(true), &safety(true)), Permit::Allowed);
            assert_eq!(SafetyGate::permit(spec, &opts(false), &safety(false)), Permit::Allowed);
        }
    }

    #[test]
    fn test_elevated_commands() {
        let spec = Registry::builtin().lookup("clear_dns_cache").unwrap();

        assert_eq!(
            SafetyGate::permit(spec, &opts(false), &safety(true)),
            Permit::DeniedElevation
        );
        assert_eq!(SafetyGate::permit(spec, &opts(true), &safety(true)), Permit::Allowed);
        assert_eq!(SafetyGate::permit(spec, &opts(false), &safety(false)), Permit::Allowed);
    }

    #[test]
    fn test_destructive_checked_before_elevation() {
        let spec = Registry::builtin().lookup("full_system_scan").unwrap();
        assert_eq!(
            SafetyGate::permit(spec, &opts(false), &safety(true)),
            Permit::DeniedDestructive
        );
    }

    #[test]
    fn test_manual_always_allowed() {
        let spec = CommandSpec::new("manual", "do it by hand", "manual")
            .manual()
            .elevated()
            .destructive();
        assert_eq!(SafetyGate::permit(&spec, &opts(false), &safety(true)), Permit::Allowed);
    }

    #[test]
    fn test_plain_command_allowed() {
        let spec = Registry::builtin().lookup("restart_finder").unwrap();
        assert_eq!(SafetyGate::permit(spec, &opts(false), &safety(true)), Permit::Allowed);
    }

    #[test]
    fn test_warnings() {
        assert!(Permit::Allowed.warning().is_none());
        assert!(Permit::DeniedElevation.warning().unwrap().contains("sudo"));
        assert!(Permit::DeniedDestructive.warning().unwrap().contains("dangerous"));
    }
}
