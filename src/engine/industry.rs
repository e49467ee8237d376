// ==========================================
// 绿色燃料展望 - 工业数据变换
// ==========================================

use crate::domain::{Dim, GroupedTable, LongTable, PivotTable};
use crate::engine::aggregation::{filter_by, group_sum, pivot};
use crate::taxonomy::mappings::OVERALL_DEMAND;
use serde::Serialize;

/// Year × Category 堆叠表
pub fn category_stack(industry_country: &LongTable) -> PivotTable {
    pivot(&group_sum(industry_country, &[Dim::Year, Dim::Category]))
}

/// 工业饼图输入: 按类别 / 按材料
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustrySplit {
    pub year: i32,
    pub by_category: GroupedTable,
    pub by_material: GroupedTable,
}

/// 指定年份的类别与材料拆分, 剔除 "Overall Demand" 汇总行/列
pub fn industry_split(industry: &LongTable, year: i32) -> IndustrySplit {
    let rows = filter_by(industry, None, Some(year))
        .select(|r| r.category != OVERALL_DEMAND && r.group_or_empty() != OVERALL_DEMAND);

    IndustrySplit {
        year,
        by_category: group_sum(&rows, &[Dim::Category]),
        by_material: group_sum(&rows, &[Dim::Group]),
    }
}
