//! # 扩展图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   固定路径配置 + env_logger 初始化               │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ IconGenerator::run() -> GenerationReport
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── IconError (统一错误类型)             │
//! │  │                                                       │
//! │  ├─ icon_generator   源图加载·合成·缩放·任务编排          │
//! │  │   ├─ icon16/48/128.png   圆形徽章 或 居中裁剪          │
//! │  │   └─ fab_icon.png        透明留白 或 直接缩放          │
//! │  │                                                       │
//! │  └─ storage ──────── 输出目录创建 + PNG 写盘              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `IconError` |
//! | [`icon_generator`] | 配置、任务列表、渲染与整批编排 |
//! | [`storage`] | 输出目录的幂等创建与 PNG 写入 |

pub mod error;
pub mod icon_generator;
pub mod storage;

pub use error::IconError;
pub use icon_generator::{GenerationReport, IconConfig, IconGenerator};
