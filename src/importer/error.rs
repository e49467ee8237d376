// ==========================================
// 绿色燃料展望 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 数据源错误 (DataSourceError) =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("目录不存在: {0}")]
    DirectoryNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("缺少必需列 (文件 {file}): {column}")]
    MissingColumn { file: String, column: String },

    // ===== 记录格式错误 (MalformedRecord) =====
    #[error("文件名无法解析: {file_name}（{message}）")]
    MalformedFileName { file_name: String, message: String },

    #[error("记录格式错误 ({location}): {message}")]
    MalformedRecord { location: String, message: String },
}

impl ImportError {
    /// 构造单行/单文件记录格式错误（调用方跳过并记入加载报告）
    pub fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        ImportError::MalformedRecord {
            location: location.into(),
            message: message.into(),
        }
    }

    /// 是否属于数据源错误（整个数据集不可用）
    pub fn is_data_source_error(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound(_)
                | ImportError::DirectoryNotFound(_)
                | ImportError::UnsupportedFormat(_)
                | ImportError::FileReadError(_)
                | ImportError::ExcelParseError(_)
                | ImportError::CsvParseError(_)
                | ImportError::MissingColumn { .. }
        )
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_classification() {
        assert!(ImportError::FileNotFound("a.csv".into()).is_data_source_error());
        assert!(ImportError::MissingColumn {
            file: "a.csv".into(),
            column: "Year".into()
        }
        .is_data_source_error());
        assert!(!ImportError::MalformedFileName {
            file_name: "x.xlsx".into(),
            message: "缺少国家代码".into()
        }
        .is_data_source_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ImportError = io.into();
        assert!(matches!(err, ImportError::FileReadError(_)));
    }
}
