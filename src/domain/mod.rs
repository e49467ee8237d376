// ==========================================
// 绿色燃料展望 - 领域模型层
// ==========================================
// 职责: 定义规范长表与领域枚举
// 红线: 不含文件读取逻辑, 不含变换逻辑
// ==========================================

pub mod table;
pub mod types;

// 重导出核心类型
pub use table::{DemandRecord, GroupedRow, GroupedTable, KeyValue, LongTable, PivotRow, PivotTable};
pub use types::{DatasetKind, Dim, FocusMode};
