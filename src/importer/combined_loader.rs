// ==========================================
// 绿色燃料展望 - 综合(PtX)输出加载器
// ==========================================
// 输入: 目录, 文件名 *_{country}.{csv|xlsx}
//       列: FuelGroup / Year / 每个部门一列
// 输出: 综合规范长表（Sector, FuelGroup, Value）
// 红线: 剔除 FuelGroup == "Overall Demand" 的预聚合行, 防止重复计数
// ==========================================

use crate::domain::{DatasetKind, DemandRecord, LongTable};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::directory::{file_label, list_source_files};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_name::parse_country_suffix;
use crate::importer::file_parser::{RawSheet, UniversalFileParser};
use crate::importer::importer_trait::{DatasetLoader, FileParser, LoadOutcome};
use crate::importer::load_report::LoadReport;
use crate::taxonomy::mappings::OVERALL_DEMAND;
use std::path::Path;
use tracing::instrument;

pub const COMBINED_EXTENSIONS: &[&str] = &[".xlsx", ".csv"];
pub const COL_FUEL_GROUP: &str = "FuelGroup";
pub const COL_YEAR: &str = "Year";

pub struct CombinedLoader {
    parser: Box<dyn FileParser>,
    cleaner: DataCleaner,
}

impl CombinedLoader {
    pub fn new() -> Self {
        Self::with_parser(Box::new(UniversalFileParser))
    }

    pub fn with_parser(parser: Box<dyn FileParser>) -> Self {
        Self {
            parser,
            cleaner: DataCleaner,
        }
    }

    /// 宽表逆透视: (FuelGroup, Year) × 部门列 → 长表行
    ///
    /// 缺少 FuelGroup/Year 列时返回 MalformedRecord, 由调用方跳过该文件;
    /// 年份无法解析的行记入加载报告后跳过
    pub fn unpivot_wide(
        &self,
        sheet: &RawSheet,
        country: &str,
        file: &str,
        report: &mut LoadReport,
    ) -> ImportResult<Vec<DemandRecord>> {
        let fuel_idx = sheet
            .column_index(COL_FUEL_GROUP)
            .ok_or_else(|| ImportError::malformed(file, format!("缺少必需列: {}", COL_FUEL_GROUP)))?;
        let year_idx = sheet
            .column_index(COL_YEAR)
            .ok_or_else(|| ImportError::malformed(file, format!("缺少必需列: {}", COL_YEAR)))?;

        let sectors: Vec<(usize, &str)> = sheet
            .headers
            .iter()
            .enumerate()
            .filter(|(idx, name)| *idx != fuel_idx && *idx != year_idx && !name.is_empty())
            .map(|(idx, name)| (idx, name.as_str()))
            .collect();

        let mut records = Vec::new();
        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let fuel_group = self.cleaner.clean_text(RawSheet::cell(row, fuel_idx));
            if fuel_group == OVERALL_DEMAND {
                report.subtotal_rows_dropped += 1;
                continue;
            }

            let year_raw = RawSheet::cell(row, year_idx);
            let year = match self.cleaner.parse_year(year_raw) {
                Some(y) => y,
                None => {
                    let location = format!("{}:{}", file, row_idx + 2);
                    let err = ImportError::malformed(location.clone(), format!("Year 不是整数: '{}'", year_raw));
                    report.skip(location, err.to_string());
                    continue;
                }
            };

            for (idx, sector) in &sectors {
                let value = self.cleaner.coerce_numeric(RawSheet::cell(row, *idx));
                records.push(
                    DemandRecord::new(country, year, *sector, value)
                        .with_group(fuel_group.clone()),
                );
            }
        }

        Ok(records)
    }
}

impl Default for CombinedLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader for CombinedLoader {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Combined
    }

    #[instrument(skip(self), fields(source = %source.display()))]
    fn load(&self, source: &Path) -> ImportResult<LoadOutcome> {
        let mut report = LoadReport::new(DatasetKind::Combined, source);
        let files = list_source_files(source, COMBINED_EXTENSIONS)?;

        let mut rows = Vec::new();
        for path in files {
            let name = file_label(&path);
            let country = parse_country_suffix(&name)?;

            let sheet = match self.parser.parse_sheet(&path) {
                Ok(sheet) => sheet,
                Err(e) => {
                    report.skip(name, e.to_string());
                    continue;
                }
            };

            match self.unpivot_wide(&sheet, &country, &name, &mut report) {
                Ok(records) => {
                    tracing::debug!(file = %name, country = %country, rows = records.len(), "综合输出文件解析完成");
                    report.files_read += 1;
                    rows.extend(records);
                }
                Err(e) => report.skip(name, e.to_string()),
            }
        }

        report.rows_loaded = rows.len();
        tracing::info!(
            files = report.files_read,
            rows = report.rows_loaded,
            subtotals_dropped = report.subtotal_rows_dropped,
            skipped = report.skipped.len(),
            "综合输出加载完成"
        );

        Ok(LoadOutcome {
            table: LongTable::new(DatasetKind::Combined, rows),
            report,
        })
    }
}
