pub mod catalog;

use crate::executor::ShellCommand;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// 명령어 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Diagnostic,
    Repair,
    Optimization,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Diagnostic => "diagnostic",
            Category::Repair => "repair",
            Category::Optimization => "optimization",
        }
    }

    /// 실행 로그에 쓰이는 라벨
    pub fn log_label(&self) -> &'static str {
        match self {
            Category::Diagnostic => "Diagnostic",
            Category::Repair => "Repair",
            Category::Optimization => "Optimization",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 미리 정의된 명령어 하나
///
/// 프로세스 시작 시 정적 데이터로 정의되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// 고유 이름 (`--custom`에 쓰이는 키)
    pub name: &'static str,
    /// 셸에 넘길 텍스트 (여러 줄 가능). 수동 명령어는 안내 문구
    pub shell_text: &'static str,
    pub description: &'static str,
    /// sudo 필요 여부
    pub requires_elevation: bool,
    /// 데이터 손실 가능성
    pub is_destructive: bool,
    /// 실행하지 않고 안내만 출력
    pub is_manual_only: bool,
}

impl CommandSpec {
    pub const fn new(name: &'static str, shell_text: &'static str, description: &'static str) -> Self {
        Self {
            name,
            shell_text,
            description,
            requires_elevation: false,
            is_destructive: false,
            is_manual_only: false,
        }
    }

    pub const fn elevated(mut self) -> Self {
        self.requires_elevation = true;
        self
    }

    pub const fn destructive(mut self) -> Self {
        self.is_destructive = true;
        self
    }

    pub const fn manual(mut self) -> Self {
        self.is_manual_only = true;
        self
    }

    /// Executor에 넘길 명령어 값
    pub fn command(&self) -> ShellCommand {
        ShellCommand::new(self.shell_text)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    category: Category,
    spec: CommandSpec,
}

/// 전체 명령어 레지스트리
///
/// 세 분류를 하나의 테이블로 합치고 이름으로 조회합니다.
/// 같은 이름이 여러 분류에 있으면 진단 > 복구 > 최적화 순서로 먼저 선언된 쪽이 이깁니다.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
    by_name: HashMap<&'static str, usize>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    Registry::from_tables(&[
        (Category::Diagnostic, catalog::DIAGNOSTICS),
        (Category::Repair, catalog::REPAIRS),
        (Category::Optimization, catalog::OPTIMIZATIONS),
    ])
});

impl Registry {
    /// 내장 명령어 레지스트리 (한 번만 생성)
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// 분류별 테이블로 레지스트리 생성. 테이블은 우선순위 순서로 전달해야 합니다.
    pub fn from_tables(tables: &[(Category, &[CommandSpec])]) -> Self {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();

        for (category, specs) in tables {
            for spec in specs.iter() {
                by_name.entry(spec.name).or_insert(entries.len());
                entries.push(Entry {
                    category: *category,
                    spec: *spec,
                });
            }
        }

        Self { entries, by_name }
    }

    /// 이름으로 명령어 조회
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.lookup_with_category(name).map(|(_, spec)| spec)
    }

    pub fn lookup_with_category(&self, name: &str) -> Option<(Category, &CommandSpec)> {
        self.by_name.get(name).map(|&idx| {
            let entry = &self.entries[idx];
            (entry.category, &entry.spec)
        })
    }

    /// 선언 순서대로 전체 목록 (`--list-commands` 출력용)
    pub fn list_all(&self) -> impl Iterator<Item = (Category, &CommandSpec)> {
        self.entries.iter().map(|e| (e.category, &e.spec))
    }

    /// 한 분류의 명령어들 (선언 순서)
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CommandSpec> {
        self.entries
            .iter()
            .filter(move |e| e.category == category)
            .map(|e| &e.spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
