//! 输出目录与 PNG 写盘模块
//!
//! # 设计思路
//!
//! 统一管理图标输出目录与文件写入，上层只关心“把这张图写到这个路径”。
//!
//! # 实现思路
//!
//! - 目录不存在时自动 `create_dir_all`，重复调用是幂等的。
//! - 写盘统一使用 PNG 编码；I/O 失败归为 `FileSystem`，其余编码失败归为 `Encode`。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::IconError;

/// 确保输出目录存在。
///
/// # 返回
/// - `Ok(PathBuf)` — 可用的输出目录
/// - `Err(IconError::FileSystem)` — 路径被文件占用或无法创建
pub fn ensure_output_dir(dir: &Path) -> Result<PathBuf, IconError> {
    if dir.is_dir() {
        return Ok(dir.to_path_buf());
    }

    if dir.exists() {
        return Err(IconError::FileSystem(format!(
            "输出路径已存在但不是目录：{}",
            dir.display()
        )));
    }

    fs::create_dir_all(dir).map_err(|e| {
        IconError::FileSystem(format!("创建输出目录 '{}' 失败：{}", dir.display(), e))
    })?;
    log::info!("📂 已创建输出目录：{}", dir.display());

    Ok(dir.to_path_buf())
}

/// 将 RGBA 图像按 PNG 格式写入 `path`，已存在则覆盖。
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => {
                IconError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), io))
            }
            other => IconError::Encode(format!("PNG 编码 '{}' 失败：{}", path.display(), other)),
        })
}
