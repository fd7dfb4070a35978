use super::{Dispatcher, RunSummary};
use crate::registry::Category;
use colored::*;

impl<'a> Dispatcher<'a> {
    /// 최적화 명령어 일괄 실행
    pub async fn run_optimizations(&self) -> RunSummary {
        self.reporter.say(&format!(
            "{} Running system optimizations...",
            "[>>]".cyan().bold()
        ));

        let summary = self.run_category(Category::Optimization).await;

        self.reporter
            .say(&format!("\n{} System optimizations complete.", "[OK]".green()));

        summary
    }
}
