use super::CommandSpec;

/// 진단 명령어 (읽기 전용, 플래그 없음)
pub const DIAGNOSTICS: &[CommandSpec] = &[
    CommandSpec::new(
        "system_info",
        "system_profiler SPSoftwareDataType SPHardwareDataType",
        "Basic system information",
    ),
    CommandSpec::new("disk_space", "df -h", "Disk space usage"),
    CommandSpec::new(
        "memory_usage",
        "vm_stat && top -l 1 -n 0 | grep PhysMem",
        "Memory usage statistics",
    ),
    CommandSpec::new(
        "network_status",
        "networksetup -listallhardwareports && ifconfig && ping -c 3 google.com",
        "Network interface status and connectivity test",
    ),
    CommandSpec::new(
        "running_processes",
        "ps aux | sort -nrk 3,3 | head -20",
        "Top 20 CPU-intensive processes",
    ),
    CommandSpec::new(
        "system_load",
        "sysctl -n vm.loadavg && iostat",
        "System load and I/O statistics",
    ),
    CommandSpec::new(
        "launch_agents",
        "ls -la ~/Library/LaunchAgents /Library/LaunchAgents /Library/LaunchDaemons",
        "List of launch agents and daemons",
    ),
    CommandSpec::new(
        "recent_crashes",
        "find ~/Library/Logs/DiagnosticReports -type f -mtime -7 | head -20",
        "Recent application crashes",
    ),
    CommandSpec::new(
        "system_logs",
        r#"log show --predicate "eventMessage contains \"error\" OR eventMessage contains \"fail\"" --last 1h | tail -100"#,
        "Recent system log errors",
    ),
    CommandSpec::new(
        "open_files",
        r#"lsof | grep -v "^COMMAND\|grep" | wc -l"#,
        "Total open file descriptors",
    ),
];

/// 복구 명령어
pub const REPAIRS: &[CommandSpec] = &[
    CommandSpec::new(
        "clear_dns_cache",
        "sudo dscacheutil -flushcache && sudo killall -HUP mDNSResponder",
        "Clear DNS cache",
    )
    .elevated(),
    CommandSpec::new(
        "repair_disk_permissions",
        "sudo diskutil repairPermissions /",
        "Repair disk permissions",
    )
    .elevated(),
    CommandSpec::new(
        "rebuild_spotlight_index",
        "sudo mdutil -E /",
        "Rebuild Spotlight index",
    )
    .elevated(),
    CommandSpec::new(
        "clear_font_cache",
        "sudo atsutil databases -remove",
        "Clear font cache",
    )
    .elevated(),
    CommandSpec::new(
        "verify_system_files",
        "sudo /usr/libexec/repair_packages --verify --standard-pkgs --volume /",
        "Verify system files integrity",
    )
    .elevated(),
    CommandSpec::new("restart_finder", "killall Finder", "Restart Finder"),
    CommandSpec::new(
        "clear_nvram",
        "Restart your Mac and hold Command+Option+P+R until you hear the startup sound twice",
        "Instructions to clear NVRAM",
    )
    .manual(),
    CommandSpec::new(
        "clear_application_cache",
        r"find ~/Library/Caches -type d -exec rm -rf {} \; 2>/dev/null || true",
        "Clear user application caches",
    )
    .destructive(),
    CommandSpec::new(
        "full_system_scan",
        "sudo tmutil verifychecksums / && sudo fsck -fy",
        "Run full system file check",
    )
    .elevated()
    .destructive(),
];

/// 최적화 명령어
pub const OPTIMIZATIONS: &[CommandSpec] = &[
    CommandSpec::new("clear_system_cache", "sudo purge", "Clear system memory cache").elevated(),
    CommandSpec::new(
        "reindex_mail",
        r"rm -rf ~/Library/Mail/V*/MailData/Envelope\ Index && killall Mail",
        "Reindex Apple Mail database",
    ),
    CommandSpec::new(
        "disable_animations",
        "defaults write com.apple.finder DisableAllAnimations -bool true
defaults write com.apple.dock launchanim -bool false
defaults write NSGlobalDomain NSAutomaticWindowAnimationsEnabled -bool false
killall Finder
killall Dock
",
        "Disable system animations for performance",
    ),
    CommandSpec::new(
        "enable_animations",
        "defaults delete com.apple.finder DisableAllAnimations
defaults delete com.apple.dock launchanim
defaults delete NSGlobalDomain NSAutomaticWindowAnimationsEnabled
killall Finder
killall Dock
",
        "Enable system animations",
    ),
];
