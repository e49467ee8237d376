// ==========================================
// 绿色燃料展望 - 分析焦点过滤
// ==========================================
// 输入: 带燃料组的长表（综合数据集）
// 输出: 按焦点筛选/重标注后的新表
// 红线: 每个焦点都是纯函数; AllCarriers 为恒等变换
// ==========================================

use crate::domain::{DemandRecord, FocusMode, LongTable};
use crate::taxonomy::mappings::{FOSSIL_FUELS, GREEN_FUELS, HYDROGEN, OTHER_GREEN_FUELS};
use crate::taxonomy::{is_fossil_carrier, is_ptx_carrier};
use tracing::instrument;

/// 按焦点对燃料组筛选并重标注
#[instrument(skip(table), fields(rows = table.len()))]
pub fn apply_focus(table: &LongTable, focus: FocusMode) -> LongTable {
    match focus {
        FocusMode::AllCarriers => table.clone(),
        FocusMode::GreenOnly => table.select(|r| r.group.as_deref().is_some_and(is_ptx_carrier)),
        FocusMode::HydrogenVsOtherGreen => table.filter_map(|r| {
            let group = r.group.as_deref()?;
            if !is_ptx_carrier(group) {
                return None;
            }
            let label = if group == HYDROGEN { HYDROGEN } else { OTHER_GREEN_FUELS };
            Some(relabel(r, label))
        }),
        FocusMode::GreenVsFossil => table.filter_map(|r| {
            let group = r.group.as_deref()?;
            if is_ptx_carrier(group) {
                Some(relabel(r, GREEN_FUELS))
            } else if is_fossil_carrier(group) {
                Some(relabel(r, FOSSIL_FUELS))
            } else {
                None
            }
        }),
    }
}

fn relabel(record: &DemandRecord, group: &str) -> DemandRecord {
    DemandRecord {
        group: Some(group.to_string()),
        ..record.clone()
    }
}
