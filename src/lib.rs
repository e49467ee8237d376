// ==========================================
// 绿色燃料展望 - 核心库
// ==========================================
// 系统定位: 交通 / 工业终端能源需求情景展望（至 2050 年）
// 数据流: 原始文件 → 加载器 → 规范长表（缓存）→ 变换引擎 → 视图表
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 规范长表与枚举
pub mod domain;

// 分类参考层 - 静态映射与解析
pub mod taxonomy;

// 导入层 - 外部数据
pub mod importer;

// 数据仓储层 - 带缓存的数据集访问
pub mod repository;

// 引擎层 - 纯变换
pub mod engine;

// 配置层 - 仪表盘配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// API 层 - 仪表盘接口
pub mod api;

// 应用层 - 装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{DatasetKind, DemandRecord, Dim, FocusMode, GroupedTable, LongTable, PivotTable};

// 导入
pub use importer::{DatasetLoader, ImportError, LoadReport};

// 仓储
pub use repository::{DatasetRepository, DatasetSources};

// 引擎
pub use engine::{TransformError, TransformResult};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardView, Selection, Widget};

// 配置
pub use config::{ConfigManager, DashboardConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Green Fuels and Energy Demand Outlook";
