//! 모드별 실행 (Dispatcher)
//!
//! 모든 모드는 레지스트리 선언 순서대로 한 번에 하나씩 명령어를 실행합니다.

pub mod custom;
pub mod diagnose;
pub mod list;
pub mod optimize;
pub mod repair;

use crate::cli::Cli;
use crate::context::{Mode, RunContext};
use crate::executor::{ExecutionResult, Executor, Permit, SafetyGate};
use crate::registry::{Category, CommandSpec, Registry};
use crate::report::Reporter;

/// 실행 모드 하나의 집계 결과
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 실행된 명령어 결과 (실행 순서)
    pub results: Vec<ExecutionResult>,
    /// 게이트에 막혔거나 수동 명령어라 건너뛴 이름
    pub skipped: Vec<&'static str>,
    /// 셸을 띄우지 못한 이름
    pub failed_to_start: Vec<&'static str>,
}

impl RunSummary {
    pub fn executed_names(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.command_name.as_str()).collect()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.success()).count()
    }
}

/// dispatch 결과
#[derive(Debug)]
pub enum DispatchOutcome {
    /// help/version/list
    Static,
    UnknownCommand(String),
    Denied { name: String, permit: Permit },
    ManualInstruction(String),
    Completed(RunSummary),
}

pub struct Dispatcher<'a> {
    ctx: &'a RunContext,
    registry: &'a Registry,
    executor: &'a dyn Executor,
    reporter: Reporter<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(ctx: &'a RunContext, registry: &'a Registry, executor: &'a dyn Executor) -> Self {
        Self {
            ctx,
            registry,
            executor,
            reporter: Reporter::new(&ctx.options, &ctx.safety),
        }
    }

    pub async fn dispatch(&self) -> DispatchOutcome {
        match &self.ctx.options.mode {
            Mode::Help => {
                println!("{}", Cli::version_text());
                println!("{}", Cli::help_text());
                DispatchOutcome::Static
            }
            Mode::Version => {
                println!("{}", Cli::version_text());
                DispatchOutcome::Static
            }
            Mode::List => {
                print!("{}", list::render(self.registry));
                DispatchOutcome::Static
            }
            Mode::Custom(name) => self.run_custom(name).await,
            Mode::Diagnose => DispatchOutcome::Completed(self.run_diagnostics().await),
            Mode::Repair => DispatchOutcome::Completed(self.run_repairs().await),
            Mode::Optimize => DispatchOutcome::Completed(self.run_optimizations().await),
        }
    }

    fn permit(&self, spec: &CommandSpec) -> Permit {
        SafetyGate::permit(spec, &self.ctx.options, &self.ctx.safety)
    }

    /// 명령어 하나 실행 후 로그 기록. 셸을 띄우지 못하면 None
    async fn execute(&self, label: &str, spec: &CommandSpec) -> Option<ExecutionResult> {
        let command = spec.command();
        match self.executor.run(spec.name, &command).await {
            Ok(result) => {
                self.reporter.record(label, &command, &result);
                Some(result)
            }
            Err(e) => {
                self.reporter.record_failure(label, spec.name, &e);
                None
            }
        }
    }

    /// 복구/최적화 공통 루프: 게이트 통과한 명령어만 실행하고 결과를 바로 출력
    async fn run_category(&self, category: Category) -> RunSummary {
        let mut summary = RunSummary::default();

        for spec in self.registry.in_category(category) {
            // 수동 명령어는 일괄 실행에서 항상 제외 (--force여도)
            if spec.is_manual_only || !self.permit(spec).is_allowed() {
                summary.skipped.push(spec.name);
                continue;
            }

            self.reporter.step(spec.description);

            match self.execute(category.log_label(), spec).await {
                Some(result) => {
                    self.reporter.dump(&result.output);
                    summary.results.push(result);
                }
                None => summary.failed_to_start.push(spec.name),
            }
        }

        summary
    }
}
