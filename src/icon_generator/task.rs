//! # 任务与结果模型
//!
//! ## 设计思路
//!
//! 每个输出文件对应一个 `IconTask`，任务之间互不依赖。
//! 单个任务的成功/失败记录在 `TaskOutcome` 中，整批结果汇总为 `GenerationReport`，
//! 失败不会中断后续任务。

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::IconError;

pub const FAB_FILE_NAME: &str = "fab_icon.png";

/// 一次生成中的单个输出任务。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTask {
    /// 标准图标，输出 `icon{size}.png`。
    Standard(u32),
    /// FAB 图标，输出 `fab_icon.png`。
    Fab,
}

impl IconTask {
    pub fn file_name(&self) -> String {
        match self {
            Self::Standard(size) => format!("icon{}.png", size),
            Self::Fab => FAB_FILE_NAME.to_string(),
        }
    }

    /// 日志中用于标识任务的文本：标准图标为尺寸，FAB 为 `FAB icon`。
    pub fn label(&self) -> String {
        match self {
            Self::Standard(size) => size.to_string(),
            Self::Fab => "FAB icon".to_string(),
        }
    }
}

impl fmt::Display for IconTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// 单个任务的执行结果。
#[derive(Debug)]
pub struct TaskOutcome {
    pub task: IconTask,
    /// 成功时为写入的文件路径。
    pub result: Result<PathBuf, IconError>,
    pub elapsed: Duration,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// 整批生成的结果汇总，按任务执行顺序保存。
#[derive(Debug, Default)]
pub struct GenerationReport {
    outcomes: Vec<TaskOutcome>,
}

impl GenerationReport {
    pub fn push(&mut self, outcome: TaskOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn outcome_for(&self, task: IconTask) -> Option<&TaskOutcome> {
        self.outcomes.iter().find(|o| o.task == task)
    }

    pub fn is_complete_success(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(TaskOutcome::is_success)
    }

    pub fn summary(&self) -> String {
        let ok = self.succeeded().count();
        let failed = self.outcomes.len() - ok;
        if failed == 0 {
            format!("全部完成：{} 个图标已生成", ok)
        } else {
            let labels: Vec<String> = self.failed().map(|o| o.task.label()).collect();
            format!(
                "完成：成功 {} 个，失败 {} 个（{}）",
                ok,
                failed,
                labels.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(task: IconTask, ok: bool) -> TaskOutcome {
        TaskOutcome {
            task,
            result: if ok {
                Ok(PathBuf::from(task.file_name()))
            } else {
                Err(IconError::FileSystem("文件不存在".to_string()))
            },
            elapsed: Duration::from_millis(1),
        }
    }

    #[test]
    fn file_names_and_labels() {
        assert_eq!(IconTask::Standard(16).file_name(), "icon16.png");
        assert_eq!(IconTask::Standard(128).file_name(), "icon128.png");
        assert_eq!(IconTask::Fab.file_name(), "fab_icon.png");
        assert_eq!(IconTask::Standard(48).to_string(), "48");
        assert_eq!(IconTask::Fab.to_string(), "FAB icon");
    }

    #[test]
    fn report_counts_and_summary() {
        let mut report = GenerationReport::default();
        report.push(outcome(IconTask::Standard(16), true));
        report.push(outcome(IconTask::Standard(48), false));
        report.push(outcome(IconTask::Fab, true));

        assert_eq!(report.succeeded().count(), 2);
        assert_eq!(report.failed().count(), 1);
        assert!(!report.is_complete_success());
        assert!(report.outcome_for(IconTask::Fab).is_some_and(TaskOutcome::is_success));
        assert!(report.summary().contains("失败 1 个（48）"));
    }

    #[test]
    fn empty_report_is_not_complete_success() {
        let report = GenerationReport::default();
        assert!(!report.is_complete_success());

        let mut full = GenerationReport::default();
        full.push(outcome(IconTask::Fab, true));
        assert!(full.is_complete_success());
        assert_eq!(full.summary(), "全部完成：1 个图标已生成");
    }
}
