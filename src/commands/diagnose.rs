use super::{Dispatcher, RunSummary};
use crate::registry::Category;
use crate::report::frame_output;
use crate::ui::create_spinner;
use colored::*;

impl<'a> Dispatcher<'a> {
    /// 전체 진단 실행 후 요약 출력
    pub async fn run_diagnostics(&self) -> RunSummary {
        let options = self.reporter.options();
        self.reporter.say(&format!(
            "{} Running full system diagnostics...",
            "[>>]".cyan().bold()
        ));

        let mut summary = RunSummary::default();
        let mut descriptions = Vec::new();

        for spec in self.registry.in_category(Category::Diagnostic) {
            // 진단 명령어에는 플래그가 없지만 게이트는 거칩니다
            if !self.permit(spec).is_allowed() {
                summary.skipped.push(spec.name);
                continue;
            }

            if options.verbose {
                self.reporter.step(spec.description);
            }

            let spinner = (options.shows_body() && !options.verbose)
                .then(|| create_spinner(&format!("Running: {}...", spec.description)));

            let result = self.execute(Category::Diagnostic.log_label(), spec).await;

            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            match result {
                Some(result) => {
                    descriptions.push(spec.description);
                    summary.results.push(result);
                }
                None => summary.failed_to_start.push(spec.name),
            }
        }

        if options.shows_body() {
            println!("\n{}", "Diagnostic Results:".bold());
            for (description, result) in descriptions.iter().zip(&summary.results) {
                let status = if result.success() {
                    "Completed".green()
                } else {
                    "Completed".yellow()
                };
                println!(
                    "  {}: {} in {:.2}s",
                    description, status, result.duration_seconds
                );

                if options.verbose {
                    println!("{}", frame_output(&result.output));
                    println!();
                }
            }

            match &self.ctx.log_file {
                Some(path) => println!(
                    "\n{} Full diagnostics complete. Log saved to: {}",
                    "[OK]".green(),
                    path.display()
                ),
                None => println!("\n{} Full diagnostics complete.", "[OK]".green()),
            }
        }

        summary
    }
}
