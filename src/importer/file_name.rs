// ==========================================
// 绿色燃料展望 - 文件名解析
// ==========================================
// 工业: {year}_{country}.xlsx
// 综合: *_{country}.{csv|xlsx}
// 红线: 文件名解析失败是硬错误（整个加载中止）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::path::Path;

fn malformed(file_name: &str, message: &str) -> ImportError {
    ImportError::MalformedFileName {
        file_name: file_name.to_string(),
        message: message.to_string(),
    }
}

/// 解析工业文件名 `{year}_{country}.xlsx`
///
/// # 返回
/// - Ok((year, country))
/// - Err(MalformedFileName): 段数不为 2、年份非整数或国家代码为空
pub fn parse_industry_file_name(file_name: &str) -> ImportResult<(i32, String)> {
    let stem = file_name.strip_suffix(".xlsx").unwrap_or(file_name);
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() != 2 {
        return Err(malformed(file_name, "期望格式 {year}_{country}.xlsx"));
    }

    let year = parts[0]
        .trim()
        .parse::<i32>()
        .map_err(|_| malformed(file_name, "年份不是整数"))?;

    let country = parts[1].trim();
    if country.is_empty() {
        return Err(malformed(file_name, "缺少国家代码"));
    }

    Ok((year, country.to_string()))
}

/// 从文件名后缀提取国家代码（最后一个 '_' 之后, 第一个 '.' 之前）
///
/// 例: `PtX_demand_DE.xlsx` → `DE`
pub fn parse_country_suffix(file_name: &str) -> ImportResult<String> {
    let last_segment = file_name.rsplit('_').next().unwrap_or(file_name);
    let country = last_segment.split('.').next().unwrap_or("").trim();
    if country.is_empty() {
        return Err(malformed(file_name, "缺少国家代码"));
    }
    Ok(country.to_string())
}

/// 文件名是否以任一扩展名结尾（大小写敏感, 与源数据约定一致）
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| extensions.iter().any(|ext| name.ends_with(ext)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_industry_file_name() {
        assert_eq!(
            parse_industry_file_name("2030_DE.xlsx").unwrap(),
            (2030, "DE".to_string())
        );
        assert_eq!(
            parse_industry_file_name("2050_EU27.xlsx").unwrap(),
            (2050, "EU27".to_string())
        );
    }

    #[test]
    fn test_parse_industry_file_name_malformed() {
        assert!(parse_industry_file_name("DE.xlsx").is_err());
        assert!(parse_industry_file_name("20x0_DE.xlsx").is_err());
        assert!(parse_industry_file_name("2030_.xlsx").is_err());
        assert!(parse_industry_file_name("2030_DE_extra.xlsx").is_err());
    }

    #[test]
    fn test_parse_country_suffix() {
        assert_eq!(parse_country_suffix("PtX_demand_DE.xlsx").unwrap(), "DE");
        assert_eq!(parse_country_suffix("PtX_demand_EU27.csv").unwrap(), "EU27");
        assert_eq!(parse_country_suffix("FR.csv").unwrap(), "FR");
    }

    #[test]
    fn test_parse_country_suffix_empty_is_error() {
        let err = parse_country_suffix("PtX_demand_.csv").unwrap_err();
        assert!(matches!(err, ImportError::MalformedFileName { .. }));
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("/d/2030_DE.xlsx"), &[".xlsx"]));
        assert!(!has_extension(Path::new("/d/notes.txt"), &[".xlsx", ".csv"]));
    }
}
