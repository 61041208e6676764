//! # 扩展图标生成工具 — 程序入口
//!
//! 本文件只负责日志初始化与固定配置，生成逻辑见 `icon_generator`。
//! 单个图标失败只打印日志，进程始终正常退出。

use extension_icons::{IconConfig, IconGenerator};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = IconGenerator::new(IconConfig::default());
    match generator.run() {
        Ok(report) => {
            for outcome in report.failed() {
                if let Err(err) = &outcome.result {
                    log::warn!("⚠️ {} 未生成：{}", outcome.task.file_name(), err);
                }
            }
            log::info!("图标生成结束：{}", report.summary());
        }
        Err(err) => {
            log::error!("配置无效，未生成任何图标: {err}");
        }
    }
}
