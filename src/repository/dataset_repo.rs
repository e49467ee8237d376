// ==========================================
// 绿色燃料展望 - 数据集仓储（带缓存）
// ==========================================
// 红线: Repository 不含变换逻辑
// 缓存: (数据集, 源路径) -> (内容指纹, 长表, 加载报告)
// 失效: 指纹变化自动重载; invalidate/reload 显式失效
// ==========================================

use crate::domain::{DatasetKind, LongTable};
use crate::importer::combined_loader::COMBINED_EXTENSIONS;
use crate::importer::industry_loader::INDUSTRY_EXTENSIONS;
use crate::importer::{loader_for, DatasetLoader, LoadReport};
use crate::perf::PerfGuard;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::fingerprint::{fingerprint_source, SourceFingerprint};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// 三个数据集的源路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub transport: PathBuf,
    pub industry: PathBuf,
    pub combined: PathBuf,
}

impl DatasetSources {
    pub fn path_for(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::Transport => &self.transport,
            DatasetKind::Industry => &self.industry,
            DatasetKind::Combined => &self.combined,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: DatasetKind,
    path: PathBuf,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fingerprint: SourceFingerprint,
    table: Arc<LongTable>,
    report: LoadReport,
}

fn extensions_for(kind: DatasetKind) -> &'static [&'static str] {
    match kind {
        DatasetKind::Transport => &[],
        DatasetKind::Industry => INDUSTRY_EXTENSIONS,
        DatasetKind::Combined => COMBINED_EXTENSIONS,
    }
}

// ==========================================
// DatasetRepository - 数据集仓储
// ==========================================
/// 数据集仓储
/// 职责: 按需加载三个数据集, 以内容指纹缓存加载结果
pub struct DatasetRepository {
    sources: DatasetSources,
    loaders: HashMap<DatasetKind, Box<dyn DatasetLoader>>,
    cache: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl DatasetRepository {
    /// 使用默认加载器创建仓储
    pub fn new(sources: DatasetSources) -> Self {
        let loaders = DatasetKind::ALL
            .iter()
            .map(|kind| (*kind, loader_for(*kind)))
            .collect();
        Self {
            sources,
            loaders,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// 替换某个数据集的加载器
    pub fn with_loader(mut self, loader: Box<dyn DatasetLoader>) -> Self {
        self.loaders.insert(loader.kind(), loader);
        self
    }

    pub fn sources(&self) -> &DatasetSources {
        &self.sources
    }

    /// 获取缓存锁
    fn get_cache(&self) -> RepositoryResult<MutexGuard<'_, HashMap<CacheKey, CacheEntry>>> {
        self.cache
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 读取配置路径下的数据集
    pub fn get(&self, kind: DatasetKind) -> RepositoryResult<Arc<LongTable>> {
        let path = self.sources.path_for(kind).to_path_buf();
        self.get_from(kind, &path)
    }

    /// 读取指定路径下的数据集
    ///
    /// # 返回
    /// - 缓存命中且指纹一致: 返回同一份 Arc<LongTable>
    /// - 否则重新加载; 指纹可计算时写入缓存
    #[instrument(skip(self), fields(dataset = %kind))]
    pub fn get_from(&self, kind: DatasetKind, path: &Path) -> RepositoryResult<Arc<LongTable>> {
        let mut perf = PerfGuard::new("dataset_get");
        let key = CacheKey {
            kind,
            path: path.to_path_buf(),
        };
        let fingerprint = fingerprint_source(path, extensions_for(kind));

        if let Some(fp) = &fingerprint {
            let cache = self.get_cache()?;
            if let Some(entry) = cache.get(&key) {
                if &entry.fingerprint == fp {
                    debug!(path = %path.display(), "命中数据集缓存");
                    perf.mark_cache_hit();
                    perf.record_rows(entry.table.len());
                    return Ok(Arc::clone(&entry.table));
                }
                debug!(path = %path.display(), "数据源内容已变化, 重新加载");
            }
        }

        let loader = self
            .loaders
            .get(&kind)
            .ok_or(RepositoryError::LoaderMissing(kind))?;
        let outcome = loader
            .load(path)
            .map_err(|source| RepositoryError::Load { dataset: kind, source })?;

        info!(
            path = %path.display(),
            rows = outcome.report.rows_loaded,
            files = outcome.report.files_read,
            skipped = outcome.report.skipped.len(),
            "数据集加载完成"
        );

        let table = Arc::new(outcome.table);
        perf.record_rows(table.len());

        match fingerprint {
            Some(fp) => {
                let mut cache = self.get_cache()?;
                cache.insert(
                    key,
                    CacheEntry {
                        fingerprint: fp,
                        table: Arc::clone(&table),
                        report: outcome.report,
                    },
                );
            }
            None => debug!(path = %path.display(), "无法计算数据源指纹, 本次结果不缓存"),
        }

        Ok(table)
    }

    /// 最近一次缓存的加载报告（配置路径）
    pub fn report(&self, kind: DatasetKind) -> RepositoryResult<Option<LoadReport>> {
        let key = CacheKey {
            kind,
            path: self.sources.path_for(kind).to_path_buf(),
        };
        let cache = self.get_cache()?;
        Ok(cache.get(&key).map(|entry| entry.report.clone()))
    }

    /// 失效某数据集在所有路径下的缓存
    pub fn invalidate(&self, kind: DatasetKind) -> RepositoryResult<usize> {
        let mut cache = self.get_cache()?;
        let before = cache.len();
        cache.retain(|key, _| key.kind != kind);
        let removed = before - cache.len();
        debug!(dataset = %kind, removed, "缓存已失效");
        Ok(removed)
    }

    /// 失效某路径下的缓存（不区分数据集）
    pub fn invalidate_path(&self, path: &Path) -> RepositoryResult<usize> {
        let mut cache = self.get_cache()?;
        let before = cache.len();
        cache.retain(|key, _| key.path != path);
        Ok(before - cache.len())
    }

    /// 清空全部缓存
    pub fn clear(&self) -> RepositoryResult<()> {
        self.get_cache()?.clear();
        Ok(())
    }

    /// 显式重载（忽略现有缓存）
    pub fn reload(&self, kind: DatasetKind) -> RepositoryResult<Arc<LongTable>> {
        self.invalidate(kind)?;
        self.get(kind)
    }

    /// 当前缓存条目数
    pub fn cached_count(&self) -> RepositoryResult<usize> {
        Ok(self.get_cache()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DemandRecord;
    use crate::importer::{ImportResult, LoadOutcome};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// 统计调用次数的加载器
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
    }

    impl DatasetLoader for CountingLoader {
        fn kind(&self) -> DatasetKind {
            DatasetKind::Transport
        }

        fn load(&self, source: &Path) -> ImportResult<LoadOutcome> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let table = LongTable::new(
                DatasetKind::Transport,
                vec![DemandRecord::new("DE", 2030, "Road", n as f64)],
            );
            let mut report = LoadReport::new(DatasetKind::Transport, source);
            report.rows_loaded = 1;
            Ok(LoadOutcome { table, report })
        }
    }

    fn setup() -> (TempDir, DatasetRepository, Arc<AtomicUsize>) {
        let dir = TempDir::new().unwrap();
        let transport = dir.path().join("transport.csv");
        fs::write(&transport, "v1").unwrap();
        let sources = DatasetSources {
            transport,
            industry: dir.path().join("industry"),
            combined: dir.path().join("combined"),
        };
        let calls = Arc::new(AtomicUsize::new(0));
        let repo = DatasetRepository::new(sources).with_loader(Box::new(CountingLoader {
            calls: Arc::clone(&calls),
        }));
        (dir, repo, calls)
    }

    #[test]
    fn test_cache_hit_returns_same_table() {
        let (_dir, repo, calls) = setup();
        let first = repo.get(DatasetKind::Transport).unwrap();
        let second = repo.get(DatasetKind::Transport).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.cached_count().unwrap(), 1);
        assert!(repo.report(DatasetKind::Transport).unwrap().is_some());
    }

    #[test]
    fn test_content_change_triggers_reload() {
        let (_dir, repo, calls) = setup();
        repo.get(DatasetKind::Transport).unwrap();
        fs::write(&repo.sources().transport, "v2").unwrap();
        let table = repo.get(DatasetKind::Transport).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(table.total(), 2.0);
    }

    #[test]
    fn test_invalidate_and_reload() {
        let (_dir, repo, calls) = setup();
        repo.get(DatasetKind::Transport).unwrap();
        assert_eq!(repo.invalidate(DatasetKind::Transport).unwrap(), 1);
        assert_eq!(repo.cached_count().unwrap(), 0);

        repo.reload(DatasetKind::Transport).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        repo.clear().unwrap();
        assert_eq!(repo.cached_count().unwrap(), 0);
    }

    #[test]
    fn test_missing_source_is_unavailable() {
        let (_dir, repo, _calls) = setup();
        let err = repo.get(DatasetKind::Industry).unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(repo.cached_count().unwrap(), 0);
    }
}
