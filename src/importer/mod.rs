// ==========================================
// 绿色燃料展望 - 导入层
// ==========================================
// 职责: 读取原始表格数据源, 规范化为长表
// 支持: Excel (.xlsx), CSV
// ==========================================

// 模块声明
pub mod combined_loader;
pub mod data_cleaner;
pub mod directory;
pub mod error;
pub mod file_name;
pub mod file_parser;
pub mod importer_trait;
pub mod industry_loader;
pub mod load_report;
pub mod transport_loader;

// 重导出核心类型
pub use combined_loader::CombinedLoader;
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RawSheet, UniversalFileParser};
pub use industry_loader::IndustryLoader;
pub use load_report::{LoadReport, SkippedItem};
pub use transport_loader::TransportLoader;

// 重导出 Trait 接口
pub use importer_trait::{DatasetLoader, FileParser, LoadOutcome};

use crate::domain::DatasetKind;

/// 按数据集种类构造默认加载器
pub fn loader_for(kind: DatasetKind) -> Box<dyn DatasetLoader> {
    match kind {
        DatasetKind::Transport => Box::new(TransportLoader::new()),
        DatasetKind::Industry => Box::new(IndustryLoader::new()),
        DatasetKind::Combined => Box::new(CombinedLoader::new()),
    }
}
