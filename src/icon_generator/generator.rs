//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，处理链路固定为：
//! 1. 校验配置
//! 2. 确保输出目录存在
//! 3. 依次执行每个图标任务（加载 → 渲染 → 写盘）
//! 4. 汇总结果
//!
//! ## 实现思路
//!
//! - 每个任务独立加载源图，任务之间不共享任何可变状态。
//! - 单个任务失败只记录到 `TaskOutcome`，整批继续执行。
//! - 记录 `load/render/save/total` 阶段耗时，便于排查慢图。

use std::path::PathBuf;
use std::time::Instant;

use super::task::{GenerationReport, IconTask, TaskOutcome};
use super::{FabVariant, IconConfig, IconError, IconStrategy};
use crate::storage;

/// 图标生成器。
pub struct IconGenerator {
    pub(super) config: IconConfig,
}

impl IconGenerator {
    /// # 示例
    /// ```rust,ignore
    /// use extension_icons::icon_generator::{IconConfig, IconGenerator};
    ///
    /// let report = IconGenerator::new(IconConfig::default()).run()?;
    /// println!("{}", report.summary());
    /// # Ok::<(), extension_icons::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 按配置展开任务列表：先标准图标（按尺寸顺序），最后是 FAB。
    pub fn tasks(&self) -> Vec<IconTask> {
        self.config
            .target_sizes
            .iter()
            .map(|&size| IconTask::Standard(size))
            .chain(std::iter::once(IconTask::Fab))
            .collect()
    }

    /// 执行整批生成。
    ///
    /// 只有配置非法时返回 `Err`；单个图标失败记录在报告里。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        self.config.validate()?;
        let total_start = Instant::now();

        log::info!(
            "🚀 开始生成图标 - 源: {} 输出目录: {} 策略: {} / {}",
            self.config.source_path.display(),
            self.config.output_dir.display(),
            self.config.icon_strategy,
            self.config.fab_variant
        );

        // 目录创建失败时任务仍然执行，各自在写盘阶段报告错误
        if let Err(err) = storage::ensure_output_dir(&self.config.output_dir) {
            log::error!("❌ 输出目录不可用：{}", err);
        }

        let mut report = GenerationReport::default();
        for task in self.tasks() {
            let outcome = self.run_task(task);
            let elapsed_ms = outcome.elapsed.as_millis();
            match &outcome.result {
                Ok(path) => log::info!("✅ Saved {}（{}ms）", path.display(), elapsed_ms),
                Err(err) => {
                    log::error!("❌ Error processing {}: {}（{}ms）", task, err, elapsed_ms)
                }
            }
            report.push(outcome);
        }

        log::info!(
            "🏁 {}（总耗时 {}ms）",
            report.summary(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }

    fn run_task(&self, task: IconTask) -> TaskOutcome {
        let start = Instant::now();
        let result = match task {
            IconTask::Standard(size) => self.generate_standard_icon(task, size),
            IconTask::Fab => self.generate_fab_icon(task),
        };

        TaskOutcome {
            task,
            result,
            elapsed: start.elapsed(),
        }
    }

    fn generate_standard_icon(&self, task: IconTask, size: u32) -> Result<PathBuf, IconError> {
        let config = &self.config;
        let load_start = Instant::now();
        let source = self.load_rgba(&config.source_path)?;
        let load_ms = load_start.elapsed().as_millis();

        let render_start = Instant::now();
        let icon = match config.icon_strategy {
            IconStrategy::CircleBadge => {
                Self::render_circle_badge(&source, size, config.resize_filter)
            }
            IconStrategy::CropToSquare => {
                Self::render_cropped_square(&source, size, config.resize_filter)
            }
        };
        let render_ms = render_start.elapsed().as_millis();

        self.save(task, &icon, load_ms, render_ms)
    }

    fn generate_fab_icon(&self, task: IconTask) -> Result<PathBuf, IconError> {
        let config = &self.config;
        let load_start = Instant::now();
        let source_path = match config.fab_variant {
            FabVariant::PaddedTransparent => &config.secondary_source_path,
            FabVariant::PlainResize => &config.source_path,
        };
        let source = self.load_rgba(source_path)?;
        let load_ms = load_start.elapsed().as_millis();

        let render_start = Instant::now();
        let icon = match config.fab_variant {
            FabVariant::PaddedTransparent => {
                Self::render_padded_fab(source, config.fab_size, config.resize_filter)
            }
            FabVariant::PlainResize => {
                Self::render_plain_fab(&source, config.fab_size, config.resize_filter)
            }
        };
        let render_ms = render_start.elapsed().as_millis();

        self.save(task, &icon, load_ms, render_ms)
    }

    fn save(
        &self,
        task: IconTask,
        icon: &image::RgbaImage,
        load_ms: u128,
        render_ms: u128,
    ) -> Result<PathBuf, IconError> {
        let path = self.config.output_dir.join(task.file_name());
        let save_start = Instant::now();
        storage::save_png(icon, &path)?;

        log::debug!(
            "⏱️ {} 阶段耗时 load={}ms render={}ms save={}ms",
            task.file_name(),
            load_ms,
            render_ms,
            save_start.elapsed().as_millis()
        );

        Ok(path)
    }
}
