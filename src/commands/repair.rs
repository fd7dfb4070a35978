use super::{Dispatcher, RunSummary};
use crate::registry::Category;
use colored::*;

impl<'a> Dispatcher<'a> {
    /// 복구 명령어 일괄 실행
    ///
    /// 게이트에 막힌 명령어와 수동 명령어는 조용히 건너뜁니다.
    pub async fn run_repairs(&self) -> RunSummary {
        self.reporter
            .say(&format!("{} Running system repairs...", "[>>]".cyan().bold()));

        let summary = self.run_category(Category::Repair).await;

        self.reporter.say(&format!(
            "\n{} System repairs complete. Some changes may require a restart to take effect.",
            "[OK]".green()
        ));

        summary
    }
}
