// ==========================================
// 绿色燃料展望 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 数值与年份解析 / 单位换算
// ==========================================

/// 工业源数据单位 → EJ 的换算因子（× 3.6 × 1e-6）
pub const INDUSTRY_TO_EJ_FACTOR: f64 = 3.6;
pub const INDUSTRY_TO_EJ_SCALE: f64 = 0.000001;

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 标准化 NULL 值（空字符串/空白 → None）
    pub fn normalize_null(&self, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// 严格数值解析
    ///
    /// - 兼容逗号小数: 仅一个逗号且其后 1-2 位数字（"1,5" → 1.5）
    /// - 千分位写法（"1,000"）视为无法解析
    /// - NaN / Inf 视为无法解析
    pub fn parse_numeric(&self, value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed = trimmed
            .parse::<f64>()
            .ok()
            .or_else(|| Self::parse_decimal_comma(trimmed))?;

        if parsed.is_finite() {
            Some(parsed)
        } else {
            None
        }
    }

    fn parse_decimal_comma(value: &str) -> Option<f64> {
        let (whole, fraction) = value.split_once(',')?;
        let decimal_comma = !whole.contains('.')
            && (1..=2).contains(&fraction.len())
            && fraction.bytes().all(|b| b.is_ascii_digit());
        if !decimal_comma {
            return None;
        }
        format!("{}.{}", whole, fraction).parse::<f64>().ok()
    }

    /// 宽松数值解析: 非数值单元格强制为 0
    pub fn coerce_numeric(&self, value: &str) -> f64 {
        self.parse_numeric(value).unwrap_or(0.0)
    }

    /// 年份解析（兼容 Excel 浮点 "2030.0"）
    ///
    /// 超出 i32 范围的值视为无法解析, 不做饱和截断
    pub fn parse_year(&self, value: &str) -> Option<i32> {
        let trimmed = value.trim();
        if let Ok(year) = trimmed.parse::<i32>() {
            return Some(year);
        }

        let as_float = trimmed.parse::<f64>().ok()?;
        if !as_float.is_finite() || as_float.fract() != 0.0 {
            return None;
        }
        if as_float < f64::from(i32::MIN) || as_float > f64::from(i32::MAX) {
            return None;
        }
        i32::try_from(as_float as i64).ok()
    }

    /// 工业源数据单位换算为 EJ
    pub fn to_exajoules(&self, raw: f64) -> f64 {
        raw * INDUSTRY_TO_EJ_FACTOR * INDUSTRY_TO_EJ_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null("  "), None);
        assert_eq!(cleaner.normalize_null(""), None);
        assert_eq!(cleaner.normalize_null("  DE "), Some("DE".to_string()));
    }

    #[test]
    fn test_parse_numeric() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_numeric("2.5"), Some(2.5));
        assert_eq!(cleaner.parse_numeric(" 1,5 "), Some(1.5));
        assert_eq!(cleaner.parse_numeric("0,25"), Some(0.25));
        assert_eq!(cleaner.parse_numeric("1e-3"), Some(0.001));
        assert_eq!(cleaner.parse_numeric("NaN"), None);
        assert_eq!(cleaner.parse_numeric("inf"), None);
        assert_eq!(cleaner.parse_numeric("n/a"), None);
        assert_eq!(cleaner.parse_numeric(""), None);
    }

    #[test]
    fn test_coerce_numeric_defaults_to_zero() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.coerce_numeric("-"), 0.0);
        assert_eq!(cleaner.coerce_numeric("3"), 3.0);
    }

    #[test]
    fn test_parse_year() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_year("2030"), Some(2030));
        assert_eq!(cleaner.parse_year("2030.0"), Some(2030));
        assert_eq!(cleaner.parse_year("2030.5"), None);
        assert_eq!(cleaner.parse_year("year"), None);
    }

    #[test]
    fn test_parse_year_rejects_out_of_range() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_year("99999999999"), None);
        assert_eq!(cleaner.parse_year("-1e12"), None);
        assert_eq!(cleaner.parse_year("1e10"), None);
        assert_eq!(cleaner.parse_year("2.05e3"), Some(2050));
    }

    #[test]
    fn test_parse_numeric_thousands_separator() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_numeric("1,000"), None);
        assert_eq!(cleaner.parse_numeric("1,000,000"), None);
        assert_eq!(cleaner.parse_numeric("1.5,2"), None);
        assert_eq!(cleaner.parse_numeric("-3,75"), Some(-3.75));
    }

    #[test]
    fn test_to_exajoules_is_deterministic() {
        let cleaner = DataCleaner;
        let first = cleaner.to_exajoules(1_000_000.0);
        let second = cleaner.to_exajoules(1_000_000.0);
        assert_eq!(first.to_bits(), second.to_bits());
        assert!((first - 3.6).abs() < 1e-12);
    }
}
