// ==========================================
// 绿色燃料展望 - 应用层
// ==========================================
// 职责: 装配配置、仓储与 API, 供命令行入口使用
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
