// ==========================================
// 绿色燃料展望 - 分类参考层
// ==========================================
// 职责: 静态参考数据 + 纯解析函数
// ==========================================

pub mod mappings;
pub mod resolver;

pub use resolver::{
    country_display_name, country_name, display_label, fuel_order_index, is_fossil_carrier,
    is_ptx_carrier, iso_alpha3, lookup, main_category, resolve_main_and_fuel, sub_category_label,
};
