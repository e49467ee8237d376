// ==========================================
// 绿色燃料展望 - 工业数据加载器
// ==========================================
// 输入: 目录, 文件名 {year}_{country}.xlsx
//       工作表 = Material（行）× Sector（列）矩阵, 首列为材料名
// 输出: 工业规范长表（Category = Sector, Material, Value[EJ]）
// 策略: 文件名无法解析 → 中止; 单文件解析失败 → 跳过并告警
// ==========================================

use crate::domain::{DatasetKind, DemandRecord, LongTable};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::directory::{file_label, list_source_files};
use crate::importer::error::ImportResult;
use crate::importer::file_name::parse_industry_file_name;
use crate::importer::file_parser::{ExcelParser, RawSheet};
use crate::importer::importer_trait::{DatasetLoader, FileParser, LoadOutcome};
use crate::importer::load_report::LoadReport;
use std::path::Path;
use tracing::instrument;

pub const INDUSTRY_EXTENSIONS: &[&str] = &[".xlsx"];

pub struct IndustryLoader {
    parser: Box<dyn FileParser>,
    cleaner: DataCleaner,
}

impl IndustryLoader {
    pub fn new() -> Self {
        Self::with_parser(Box::new(ExcelParser))
    }

    pub fn with_parser(parser: Box<dyn FileParser>) -> Self {
        Self {
            parser,
            cleaner: DataCleaner,
        }
    }

    /// 矩阵逆透视: 每个 (材料, 部门) 单元格一行
    ///
    /// - 非数值单元格强制为 0
    /// - 数值 × 3.6 × 1e-6 换算为 EJ
    /// - 表头为空的列与材料名为空的行不产生记录
    pub fn unpivot_matrix(
        &self,
        sheet: &RawSheet,
        year: i32,
        country: &str,
    ) -> Vec<DemandRecord> {
        let sectors: Vec<(usize, &str)> = sheet
            .headers
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, name)| !name.is_empty())
            .map(|(idx, name)| (idx, name.as_str()))
            .collect();

        let mut records = Vec::with_capacity(sheet.rows.len() * sectors.len());
        for row in &sheet.rows {
            let material = match self.cleaner.normalize_null(RawSheet::cell(row, 0)) {
                Some(m) => m,
                None => continue,
            };

            for (idx, sector) in &sectors {
                let raw = self.cleaner.coerce_numeric(RawSheet::cell(row, *idx));
                records.push(
                    DemandRecord::new(country, year, *sector, self.cleaner.to_exajoules(raw))
                        .with_group(material.clone()),
                );
            }
        }
        records
    }
}

impl Default for IndustryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader for IndustryLoader {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Industry
    }

    #[instrument(skip(self), fields(source = %source.display()))]
    fn load(&self, source: &Path) -> ImportResult<LoadOutcome> {
        let mut report = LoadReport::new(DatasetKind::Industry, source);
        let files = list_source_files(source, INDUSTRY_EXTENSIONS)?;

        let mut rows = Vec::new();
        for path in files {
            let name = file_label(&path);
            let (year, country) = parse_industry_file_name(&name)?;

            let sheet = match self.parser.parse_sheet(&path) {
                Ok(sheet) => sheet,
                Err(e) => {
                    report.skip(name, e.to_string());
                    continue;
                }
            };

            let records = self.unpivot_matrix(&sheet, year, &country);
            tracing::debug!(file = %name, rows = records.len(), "工业文件解析完成");
            report.files_read += 1;
            rows.extend(records);
        }

        report.rows_loaded = rows.len();
        tracing::info!(
            files = report.files_read,
            rows = report.rows_loaded,
            skipped = report.skipped.len(),
            "工业数据加载完成"
        );

        Ok(LoadOutcome {
            table: LongTable::new(DatasetKind::Industry, rows),
            report,
        })
    }
}
