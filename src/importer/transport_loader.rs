// ==========================================
// 绿色燃料展望 - 交通数据加载器
// ==========================================
// 输入: 单个 CSV，列含 Country / Year / Category / Value（其余列忽略）
// 输出: 交通规范长表
// 策略: 缺列 → 中止; 单行年份/数值无法解析 → 跳过并告警
// ==========================================

use crate::domain::{DatasetKind, DemandRecord, LongTable};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::directory::file_label;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, RawSheet};
use crate::importer::importer_trait::{DatasetLoader, FileParser, LoadOutcome};
use crate::importer::load_report::LoadReport;
use std::path::Path;
use tracing::instrument;

pub const COL_COUNTRY: &str = "Country";
pub const COL_YEAR: &str = "Year";
pub const COL_CATEGORY: &str = "Category";
pub const COL_VALUE: &str = "Value";

struct TransportColumns {
    country: usize,
    year: usize,
    category: usize,
    value: usize,
}

pub struct TransportLoader {
    parser: CsvParser,
    cleaner: DataCleaner,
}

impl TransportLoader {
    pub fn new() -> Self {
        Self {
            parser: CsvParser,
            cleaner: DataCleaner,
        }
    }

    /// 单行映射; 失败时返回 MalformedRecord, 由调用方跳过
    fn map_row(&self, row: &[String], cols: &TransportColumns, location: &str) -> ImportResult<DemandRecord> {
        let country = self
            .cleaner
            .normalize_null(RawSheet::cell(row, cols.country))
            .ok_or_else(|| ImportError::malformed(location, "Country 为空"))?;

        let year_raw = RawSheet::cell(row, cols.year);
        let year = self
            .cleaner
            .parse_year(year_raw)
            .ok_or_else(|| ImportError::malformed(location, format!("Year 不是整数: '{}'", year_raw)))?;

        let category = self
            .cleaner
            .normalize_null(RawSheet::cell(row, cols.category))
            .ok_or_else(|| ImportError::malformed(location, "Category 为空"))?;

        let value_raw = RawSheet::cell(row, cols.value);
        let value = self
            .cleaner
            .parse_numeric(value_raw)
            .ok_or_else(|| ImportError::malformed(location, format!("Value 不是数值: '{}'", value_raw)))?;

        Ok(DemandRecord::new(country, year, category, value))
    }
}

impl Default for TransportLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader for TransportLoader {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Transport
    }

    #[instrument(skip(self), fields(source = %source.display()))]
    fn load(&self, source: &Path) -> ImportResult<LoadOutcome> {
        let mut report = LoadReport::new(DatasetKind::Transport, source);
        let file = file_label(source);

        let sheet = self.parser.parse_sheet(source)?;
        let cols = TransportColumns {
            country: sheet.require_column(COL_COUNTRY, &file)?,
            year: sheet.require_column(COL_YEAR, &file)?,
            category: sheet.require_column(COL_CATEGORY, &file)?,
            value: sheet.require_column(COL_VALUE, &file)?,
        };
        report.files_read = 1;

        let mut rows = Vec::with_capacity(sheet.rows.len());
        for (idx, row) in sheet.rows.iter().enumerate() {
            // 行号从表头之后开始计
            let location = format!("{}:{}", file, idx + 2);
            match self.map_row(row, &cols, &location) {
                Ok(record) => rows.push(record),
                Err(e) => report.skip(location, e.to_string()),
            }
        }

        report.rows_loaded = rows.len();
        tracing::info!(
            rows = report.rows_loaded,
            skipped = report.skipped.len(),
            "交通数据加载完成"
        );

        Ok(LoadOutcome {
            table: LongTable::new(DatasetKind::Transport, rows),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::ImportError;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_transport_casts_year() {
        let file = write_csv(
            "Model,Country,Year,Category,Value\n\
             REMIND,DE,2030.0,FE|Transport|Pass|Rail,0.25\n\
             REMIND,FR,2050,FE|Transport|Pass|Rail,0.5\n",
        );

        let outcome = TransportLoader::new().load(file.path()).unwrap();
        let rows = outcome.table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2030);
        assert_eq!(rows[0].category, "FE|Transport|Pass|Rail");
        assert_eq!(rows[1].value, 0.5);
        assert!(rows[0].group.is_none());
    }

    #[test]
    fn test_malformed_rows_are_skipped_with_report() {
        let file = write_csv(
            "Country,Year,Category,Value\n\
             DE,20x0,FE|Transport|Pass|Rail,0.25\n\
             DE,2030,FE|Transport|Pass|Rail,abc\n\
             DE,2030,FE|Transport|Pass|Rail,1.0\n",
        );

        let outcome = TransportLoader::new().load(file.path()).unwrap();
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.report.skipped.len(), 2);
        assert!(outcome.report.skipped[0].location.ends_with(":2"));
    }

    #[test]
    fn test_out_of_range_year_is_skipped() {
        let file = write_csv(
            "Country,Year,Category,Value\n\
             DE,99999999999,FE|Transport|Pass|Rail,1.0\n\
             DE,-1e12,FE|Transport|Pass|Rail,1.0\n\
             DE,2050,FE|Transport|Pass|Rail,1.0\n",
        );

        let outcome = TransportLoader::new().load(file.path()).unwrap();
        assert_eq!(outcome.table.years(), vec![2050]);
        assert_eq!(outcome.report.skipped.len(), 2);
    }

    #[test]
    fn test_skip_reason_is_malformed_record() {
        let file = write_csv("Country,Year,Category,Value\n,2030,FE|Transport|Pass|Rail,1.0\n");
        let outcome = TransportLoader::new().load(file.path()).unwrap();

        let skipped = &outcome.report.skipped[0];
        let expected = ImportError::malformed(skipped.location.clone(), "Country 为空").to_string();
        assert_eq!(skipped.reason, expected);
        assert!(skipped.reason.starts_with("记录格式错误"));
    }

    #[test]
    fn test_missing_column_aborts() {
        let file = write_csv("Country,Year,Value\nDE,2030,1.0\n");
        let err = TransportLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn { .. }));
    }

    #[test]
    fn test_missing_file_is_data_source_error() {
        let err = TransportLoader::new()
            .load(Path::new("/no/such/transport.csv"))
            .unwrap_err();
        assert!(err.is_data_source_error());
    }
}
