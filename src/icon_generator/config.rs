//! # 配置模块
//!
//! ## 设计思路
//!
//! 把原本散落在脚本里的路径、尺寸、策略常量集中到 `IconConfig`，
//! 由调用方显式传入生成器，测试可以把输入输出指向临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产使用的固定路径与尺寸。
//! - `IconStrategy` / `FabVariant` 显式选择两套实现中的一套，默认走圆形徽章 + 透明留白 FAB。
//! - `validate` 在任何任务开始前拦截非法配置。

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use image::imageops::FilterType;

use super::IconError;
use super::compose::supersample_scale;

/// 浏览器扩展工具栏图标尺寸。
pub const DEFAULT_TARGET_SIZES: [u32; 3] = [16, 48, 128];
/// FAB 图标边长。
pub const DEFAULT_FAB_SIZE: u32 = 128;
/// 单个图标允许的最大边长；圆形徽章另受超采样画布像素上限约束。
pub const MAX_ICON_SIZE: u32 = 4096;

/// 标准图标的生成策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStrategy {
    /// 白色圆形底 + 居中 logo，超采样后缩小。
    CircleBadge,
    /// 取源图中心最大正方形后直接缩放。
    CropToSquare,
}

impl IconStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CircleBadge => "circle-badge",
            Self::CropToSquare => "crop-to-square",
        }
    }
}

impl fmt::Display for IconStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FAB 图标的生成方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabVariant {
    /// 读取副图，裁掉透明边后按 20% 留白补成正方形。
    PaddedTransparent,
    /// 读取主图，直接缩放到目标尺寸。
    PlainResize,
}

impl FabVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaddedTransparent => "padded-transparent",
            Self::PlainResize => "plain-resize",
        }
    }
}

impl fmt::Display for FabVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 主 logo 路径，标准图标（以及 `PlainResize` FAB）的来源。
    pub source_path: PathBuf,
    /// 副图路径，仅 `PaddedTransparent` FAB 使用。
    pub secondary_source_path: PathBuf,
    /// 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 标准图标尺寸列表，每个尺寸输出 `icon{size}.png`。
    pub target_sizes: Vec<u32>,
    /// FAB 图标边长，输出 `fab_icon.png`。
    pub fab_size: u32,
    pub icon_strategy: IconStrategy,
    pub fab_variant: FabVariant,
    /// 所有缩放步骤共用的滤镜。
    pub resize_filter: FilterType,
    /// 源文件体积上限（字节）。
    pub max_file_size: u64,
    /// 解码前按图片头校验的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("GhostRelayLogo.png"),
            secondary_source_path: PathBuf::from("GhostSimple.png"),
            output_dir: PathBuf::from("chrome-extension").join("icons"),
            target_sizes: DEFAULT_TARGET_SIZES.to_vec(),
            fab_size: DEFAULT_FAB_SIZE,
            icon_strategy: IconStrategy::CircleBadge,
            fab_variant: FabVariant::PaddedTransparent,
            resize_filter: FilterType::Lanczos3,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl IconConfig {
    /// 校验配置是否可以安全执行。
    ///
    /// 重复尺寸会导致同一文件被写两次，因此同样视为非法。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.target_sizes.is_empty() {
            return Err(IconError::InvalidConfig("target_sizes 不能为空".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.target_sizes.len());
        for &size in &self.target_sizes {
            Self::validate_size("target_sizes", size)?;
            if !seen.insert(size) {
                return Err(IconError::InvalidConfig(format!(
                    "target_sizes 存在重复尺寸：{}",
                    size
                )));
            }
        }

        Self::validate_size("fab_size", self.fab_size)?;

        if self.max_file_size == 0 || self.max_decoded_pixels == 0 {
            return Err(IconError::InvalidConfig(
                "max_file_size 与 max_decoded_pixels 必须大于 0".to_string(),
            ));
        }

        if self.icon_strategy == IconStrategy::CircleBadge {
            for &size in &self.target_sizes {
                self.validate_badge_canvas(size)?;
            }
        }

        Ok(())
    }

    /// 圆形徽章的超采样画布同样受 `max_decoded_pixels` 约束，
    /// 否则大尺寸图标会在渲染阶段分配超大缓冲。
    fn validate_badge_canvas(&self, size: u32) -> Result<(), IconError> {
        let side = size as u64 * supersample_scale(size) as u64;
        let pixels = side * side;
        if pixels > self.max_decoded_pixels {
            return Err(IconError::InvalidConfig(format!(
                "icon{}.png 的超采样画布过大：{}x{}（{} 像素，限制：{} 像素）",
                size, side, side, pixels, self.max_decoded_pixels
            )));
        }
        Ok(())
    }

    fn validate_size(field: &str, size: u32) -> Result<(), IconError> {
        if !(1..=MAX_ICON_SIZE).contains(&size) {
            return Err(IconError::InvalidConfig(format!(
                "{} 必须在 1~{} 之间：{}",
                field, MAX_ICON_SIZE, size
            )));
        }
        Ok(())
    }
}
