use super::{DispatchOutcome, Dispatcher, RunSummary};
use crate::error::TroubleshootError;
use colored::*;

const CUSTOM_LABEL: &str = "Ran command";

impl<'a> Dispatcher<'a> {
    /// 이름으로 명령어 하나 실행 (`--custom NAME`)
    pub async fn run_custom(&self, name: &str) -> DispatchOutcome {
        let Some(spec) = self.registry.lookup(name) else {
            self.reporter
                .error_user(&TroubleshootError::UnknownCommand(name.to_string()).to_string());
            return DispatchOutcome::UnknownCommand(name.to_string());
        };

        let permit = self.permit(spec);
        if let Some(warning) = permit.warning() {
            self.reporter.warn_user(warning);
            eprintln!("Use {} to run anyway.", "--force".yellow());
            return DispatchOutcome::Denied {
                name: spec.name.to_string(),
                permit,
            };
        }

        if spec.is_manual_only {
            println!("{} {}", "Manual instruction:".cyan().bold(), spec.shell_text);
            self.reporter.record_manual(spec.name);
            return DispatchOutcome::ManualInstruction(spec.shell_text.to_string());
        }

        self.reporter
            .say(&format!("{} {}", "Running:".cyan(), spec.description));

        let mut summary = RunSummary::default();
        match self.execute(CUSTOM_LABEL, spec).await {
            Some(result) => {
                self.reporter.output(&result.output);
                self.reporter.duration(result.duration_seconds);
                summary.results.push(result);
            }
            None => summary.failed_to_start.push(spec.name),
        }

        DispatchOutcome::Completed(summary)
    }
}
