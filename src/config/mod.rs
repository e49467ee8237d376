// ==========================================
// 绿色燃料展望 - 配置层
// ==========================================
// 职责: 仪表盘配置加载与校验, 支持环境变量覆写
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{env_keys, ConfigManager, DashboardConfig};
pub use error::ConfigError;
