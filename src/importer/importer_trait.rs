// ==========================================
// 绿色燃料展望 - 导入 Trait
// ==========================================
// 职责: 定义文件解析与数据集加载接口（不包含实现）
// ==========================================

use crate::domain::{DatasetKind, LongTable};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::RawSheet;
use crate::importer::load_report::LoadReport;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件首个工作表为有序表头 + 字符串单元格
    ///
    /// # 返回
    /// - Ok(RawSheet): 表头 + 数据行（空白行已跳过）
    /// - Err: 文件不存在、格式错误
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<RawSheet>;
}

// ==========================================
// DatasetLoader Trait
// ==========================================
// 用途: 数据集加载接口
// 实现者: TransportLoader, IndustryLoader, CombinedLoader
pub trait DatasetLoader: Send + Sync {
    /// 加载器对应的数据集
    fn kind(&self) -> DatasetKind;

    /// 从文件或目录加载规范长表
    ///
    /// # 返回
    /// - Ok(LoadOutcome): 长表 + 加载报告（含跳过明细）
    /// - Err: 数据源缺失/不可读/结构性错误, 或文件名无法解析
    fn load(&self, source: &Path) -> ImportResult<LoadOutcome>;
}

/// 一次加载的产物
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub table: LongTable,
    pub report: LoadReport,
}
