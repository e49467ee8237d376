// ==========================================
// 绿色燃料展望 - 分类解析
// ==========================================
// 职责: 最长前缀匹配 / 展示名映射 / 国家名映射
// 红线: 全部为全函数, 未知输入不报错
// ==========================================

use crate::taxonomy::mappings::{
    CATEGORY_DISPLAY_LABELS, EU27, EU27_NAME, FOSSIL_CARRIERS, FUEL_ORDER_FULL, ISO2_TO_ISO3,
    ISO_TO_COUNTRY, MAIN_CATEGORY_MAPPING, PTX_CARRIERS, SUB_CATEGORY_LABELS,
};

const SEPARATOR: char = '|';

/// 在 (键, 值) 静态表中查找
pub fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// 将类别路径拆为 (匹配的前缀, 燃料后缀)
///
/// # 规则
/// - 前缀按长度降序尝试, 首个命中者胜出（同长度保持传入顺序）
/// - 后缀去掉前导分隔符 '|'
/// - 无前缀命中时返回 (None, 原路径)，由调用方识别未知类别
pub fn resolve_main_and_fuel<'c, 'p>(
    category_path: &'c str,
    known_prefixes: &[&'p str],
) -> (Option<&'p str>, &'c str) {
    let mut sorted: Vec<&'p str> = known_prefixes.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    for prefix in sorted {
        if let Some(remainder) = category_path.strip_prefix(prefix) {
            let fuel = remainder.strip_prefix(SEPARATOR).unwrap_or(remainder);
            return (Some(prefix), fuel);
        }
    }

    (None, category_path)
}

/// 类别路径 → 长展示名；未知路径原样返回
pub fn display_label(category_path: &str) -> &str {
    lookup(CATEGORY_DISPLAY_LABELS, category_path).unwrap_or(category_path)
}

/// 类别路径 → 饼图短标签
pub fn sub_category_label(category_path: &str) -> Option<&'static str> {
    lookup(SUB_CATEGORY_LABELS, category_path)
}

/// 类别路径 → 主类别（Road / Aviation / Rail / Shipping）
pub fn main_category(category_path: &str) -> Option<&'static str> {
    lookup(MAIN_CATEGORY_MAPPING, category_path)
}

/// 国家代码 → 国家名
pub fn country_name(code: &str) -> Option<&'static str> {
    if code == EU27 {
        return Some(EU27_NAME);
    }
    lookup(ISO_TO_COUNTRY, code)
}

/// 国家代码 → "<全名> (<代码>)"；未知代码原样返回
pub fn country_display_name(code: &str) -> String {
    match country_name(code) {
        Some(name) => format!("{} ({})", name, code),
        None => code.to_string(),
    }
}

/// ISO-2 → ISO-3；聚合代码与未知代码返回 None
pub fn iso_alpha3(code: &str) -> Option<&'static str> {
    lookup(ISO2_TO_ISO3, code)
}

pub fn is_ptx_carrier(fuel_group: &str) -> bool {
    PTX_CARRIERS.contains(&fuel_group)
}

pub fn is_fossil_carrier(fuel_group: &str) -> bool {
    FOSSIL_CARRIERS.contains(&fuel_group)
}

/// 燃料组排序位次；未列出的排在最后
pub fn fuel_order_index(fuel_group: &str) -> usize {
    FUEL_ORDER_FULL
        .iter()
        .position(|f| *f == fuel_group)
        .unwrap_or(FUEL_ORDER_FULL.len())
}
