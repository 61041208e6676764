//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 图标生成链路（读取 → 校验 → 解码 → 合成 → 缩放 → 写盘）中的所有失败
//! 都收敛到 `IconError` 一个枚举，避免字符串拼接式错误处理。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 每个分支只携带一段描述文本，由产生错误的阶段负责拼好上下文（路径、尺寸等）。
//! - 单个图标任务的错误会被收集进 `TaskOutcome`，不会中断整批生成。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 源文件缺失/不可读，或输出目录、输出文件写入失败
    #[error("文件错误：{0}")]
    FileSystem(String),

    /// 文件签名不是图片，或格式无法识别
    #[error("格式错误：{0}")]
    InvalidFormat(String),

    /// 配置非法（尺寸列表、资源上限等），在任何任务执行前返回
    #[error("配置错误：{0}")]
    InvalidConfig(String),

    /// 解码失败或缩放缓冲区异常
    #[error("解码错误：{0}")]
    Decode(String),

    /// PNG 编码失败
    #[error("编码错误：{0}")]
    Encode(String),

    /// 文件体积或像素数超过上限
    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
