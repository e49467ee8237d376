// ==========================================
// 绿色燃料展望 - API 层
// ==========================================
// 职责: 提供仪表盘查询接口, 供命令行与展示层调用
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use dto::{
    DashboardView, DemandHeatmaps, FocusedFuelMix, IndustryTab, Selection, TopCountriesView,
    TransportTab, UnavailableDataset, Widget,
};
pub use error::{ApiError, ApiResult};
