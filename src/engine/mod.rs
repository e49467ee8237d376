// ==========================================
// 绿色燃料展望 - 变换引擎层
// ==========================================
// 职责: 对规范长表做筛选 / 聚合 / 焦点重标注 / 指标计算
// 红线: 引擎无状态, 不读文件; 每次调用返回新表
// ==========================================

pub mod aggregation;
pub mod error;
pub mod focus;
pub mod fuel_mix;
pub mod geo;
pub mod industry;
pub mod metrics;
pub mod ranking;
pub mod transport;

// 重导出核心函数
pub use aggregation::{country_demand, filter_by, group_sum, pivot, pivot_with_columns};
pub use error::{TransformError, TransformResult};
pub use focus::apply_focus;
pub use fuel_mix::{eu_fuel_aggregate, fuel_mix, headline_kpis, sector_fuel_mix, HeadlineKpis};
pub use geo::{category_choropleths, choropleth, ChoroplethCell, ChoroplethMap};
pub use industry::{category_stack, industry_split, IndustrySplit};
pub use metrics::{
    argmax_category, growth, sector_headline, share, value_at_year, Growth, SectorHeadline,
    TopCategory,
};
pub use ranking::{top_countries_series, top_n_by_total, RankedCountry, TopCountries};
pub use transport::{
    category_rows, fuel_breakdown, main_category_stack, transport_sub_split, FuelBreakdownRow,
    TransportSubSplit,
};
