// ==========================================
// 绿色燃料展望 - 仪表盘 API
// ==========================================
// 职责: 将用户选择转换为展示层所需的全部视图表
// 架构: API 层 → Repository（带缓存加载）→ Engine（纯变换）
// 降级: 数据集加载失败 → 依赖它的组件全部"无数据"; 单个组件变换失败 → 只降级该组件
// ==========================================

use std::sync::Arc;

use chrono::Local;
use tracing::{info, instrument, warn};

use crate::api::dto::{
    DashboardView, DemandHeatmaps, FocusedFuelMix, IndustryTab, Selection, TopCountriesView,
    TransportTab, UnavailableDataset, Widget,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfig;
use crate::domain::{DatasetKind, GroupedTable, LongTable, PivotTable};
use crate::engine::{self, TransformError, TransformResult};
use crate::importer::LoadReport;
use crate::perf::PerfGuard;
use crate::repository::{DatasetRepository, RepositoryError};
use crate::taxonomy::country_display_name;

/// 一次渲染中已加载的数据集
struct LoadedDatasets {
    /// 仅含 11 个可加子类别
    transport: Option<LongTable>,
    /// 原始交通表（含燃料路径）
    transport_raw: Option<Arc<LongTable>>,
    industry: Option<Arc<LongTable>>,
    combined: Option<Arc<LongTable>>,
    unavailable: Vec<UnavailableDataset>,
}

impl LoadedDatasets {
    fn reason(&self, kind: DatasetKind) -> String {
        self.unavailable
            .iter()
            .find(|u| u.dataset == kind)
            .map(|u| format!("数据集 {} 不可用: {}", kind, u.reason))
            .unwrap_or_else(|| format!("数据集 {} 不可用", kind))
    }
}

/// 空结果降级为"无数据"
fn non_empty<T>(value: T, is_empty: bool, what: &str) -> TransformResult<T> {
    if is_empty {
        Err(TransformError::empty(what))
    } else {
        Ok(value)
    }
}

fn pivot_widget(pivot: PivotTable, what: &str) -> TransformResult<PivotTable> {
    let empty = pivot.is_empty();
    non_empty(pivot, empty, what)
}

fn grouped_widget(table: GroupedTable, what: &str) -> TransformResult<GroupedTable> {
    let empty = table.is_empty();
    non_empty(table, empty, what)
}

// ==========================================
// DashboardApi - 仪表盘 API
// ==========================================
pub struct DashboardApi {
    repo: Arc<DatasetRepository>,
    config: DashboardConfig,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    ///
    /// # 参数
    /// - repo: 数据集仓储（持有加载缓存）
    /// - config: 仪表盘配置
    pub fn new(repo: Arc<DatasetRepository>, config: DashboardConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ==========================================
    // 选择器
    // ==========================================

    /// 可选国家（交通数据中的国家, 交通不可用时回落到综合数据）
    pub fn available_countries(&self) -> ApiResult<Vec<String>> {
        for kind in [DatasetKind::Transport, DatasetKind::Combined] {
            match self.repo.get(kind) {
                Ok(table) => {
                    let countries = if kind == DatasetKind::Transport {
                        engine::category_rows(&table).countries()
                    } else {
                        table.countries()
                    };
                    if !countries.is_empty() {
                        return Ok(countries);
                    }
                }
                Err(RepositoryError::Load { dataset, source }) => {
                    warn!(dataset = %dataset, error = %source, "国家列表数据源不可用");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(Vec::new())
    }

    /// 默认选择: 配置的默认国家（存在时）否则首个国家; 默认年份; 全部能源载体
    pub fn default_selection(&self) -> ApiResult<Selection> {
        let countries = self.available_countries()?;
        let country = if countries.is_empty() || countries.contains(&self.config.default_country) {
            self.config.default_country.clone()
        } else {
            countries[0].clone()
        };

        Ok(Selection {
            country,
            year: self.config.default_year,
            focus: Default::default(),
        })
    }

    /// 以默认值补全并校验用户选择
    pub fn resolve_selection(
        &self,
        country: Option<&str>,
        year: Option<i32>,
        focus_label: Option<&str>,
    ) -> ApiResult<Selection> {
        let defaults = self.default_selection()?;
        let country = country.unwrap_or(defaults.country.as_str());
        let year = year.unwrap_or(defaults.year);
        let focus = focus_label.unwrap_or_else(|| defaults.focus.label());
        Selection::parse(country, year, focus, &self.config.selectable_years)
    }

    // ==========================================
    // 数据集维护
    // ==========================================

    /// 显式重载数据集（源文件变化后调用）
    pub fn reload(&self, kind: DatasetKind) -> ApiResult<usize> {
        let table = self.repo.reload(kind)?;
        Ok(table.len())
    }

    /// 已缓存数据集的加载报告
    pub fn load_reports(&self) -> ApiResult<Vec<LoadReport>> {
        let mut reports = Vec::new();
        for kind in DatasetKind::ALL {
            if let Some(report) = self.repo.report(kind)? {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    fn load_dataset(
        &self,
        kind: DatasetKind,
        unavailable: &mut Vec<UnavailableDataset>,
    ) -> ApiResult<Option<Arc<LongTable>>> {
        match self.repo.get(kind) {
            Ok(table) => Ok(Some(table)),
            Err(RepositoryError::Load { dataset, source }) => {
                warn!(dataset = %dataset, error = %source, "数据集不可用, 相关组件降级");
                unavailable.push(UnavailableDataset {
                    dataset,
                    reason: source.to_string(),
                });
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn load_all(&self) -> ApiResult<LoadedDatasets> {
        let mut unavailable = Vec::new();
        let transport_raw = self.load_dataset(DatasetKind::Transport, &mut unavailable)?;
        let industry = self.load_dataset(DatasetKind::Industry, &mut unavailable)?;
        let combined = self.load_dataset(DatasetKind::Combined, &mut unavailable)?;

        Ok(LoadedDatasets {
            transport: transport_raw.as_deref().map(engine::category_rows),
            transport_raw,
            industry,
            combined,
            unavailable,
        })
    }

    // ==========================================
    // 渲染
    // ==========================================

    /// 按用户选择渲染完整仪表盘
    ///
    /// # 返回
    /// - Ok(DashboardView): 各组件独立就绪或降级
    /// - Err: 选择无效, 或缓存锁等内部错误
    #[instrument(skip(self), fields(country = %selection.country, year = selection.year))]
    pub fn render(&self, selection: &Selection) -> ApiResult<DashboardView> {
        let mut perf = PerfGuard::new("dashboard_render");
        if !self.config.selectable_years.contains(&selection.year) {
            return Err(ApiError::InvalidInput(format!(
                "年份 {} 不可选",
                selection.year
            )));
        }

        let data = self.load_all()?;
        let view = DashboardView {
            selection: selection.clone(),
            country_label: country_display_name(&selection.country),
            generated_at: Local::now(),
            kpis: self.kpis(&data, selection),
            fuel_mix: self.focused_fuel_mix(&data, selection),
            sector_fuel_mix: self.sector_fuel_mix(&data, selection),
            eu_fuel_aggregate: self.eu_fuel_aggregate(&data),
            sector_demand: self.sector_demand(&data, selection),
            transport_headline: self.headline(&data, DatasetKind::Transport, selection),
            industry_headline: self.headline(&data, DatasetKind::Industry, selection),
            demand_heatmaps: self.demand_heatmaps(&data, selection),
            transport_tab: self.transport_tab(&data, selection),
            industry_tab: self.industry_tab(&data, selection),
            top_countries: self.top_countries(&data),
            unavailable: data.unavailable,
        };

        perf.record_rows(
            data.transport.as_ref().map_or(0, LongTable::len)
                + data.industry.as_ref().map_or(0, |t| t.len())
                + data.combined.as_ref().map_or(0, |t| t.len()),
        );
        info!(
            unavailable = view.unavailable.len(),
            focus = %selection.focus,
            "仪表盘渲染完成"
        );
        Ok(view)
    }

    /// 取数据集; 不可用时返回该数据集的降级原因
    fn sector_table<'a>(&self, data: &'a LoadedDatasets, kind: DatasetKind) -> Result<&'a LongTable, String> {
        let table = match kind {
            DatasetKind::Transport => data.transport.as_ref(),
            DatasetKind::Industry => data.industry.as_deref(),
            DatasetKind::Combined => data.combined.as_deref(),
        };
        table.ok_or_else(|| data.reason(kind))
    }

    fn widget<T, F>(&self, data: &LoadedDatasets, kind: DatasetKind, build: F) -> Widget<T>
    where
        F: FnOnce(&LongTable) -> TransformResult<T>,
    {
        match self.sector_table(data, kind) {
            Ok(table) => Widget::from_result(build(table)),
            Err(reason) => Widget::no_data(reason),
        }
    }

    // ===== 综合（PtX）概览 =====

    fn kpis(&self, data: &LoadedDatasets, selection: &Selection) -> Widget<engine::HeadlineKpis> {
        let aggregate = &self.config.aggregate_code;
        self.widget(data, DatasetKind::Combined, |combined| {
            let kpis = engine::headline_kpis(combined, &selection.country, selection.year, aggregate);
            let empty = engine::filter_by(combined, Some(selection.country.as_str()), Some(selection.year))
                .is_empty();
            non_empty(kpis, empty, &format!("{} 在 {} 年无综合数据", selection.country, selection.year))
        })
    }

    fn focused_fuel_mix(&self, data: &LoadedDatasets, selection: &Selection) -> Widget<FocusedFuelMix> {
        self.widget(data, DatasetKind::Combined, |combined| {
            let country_rows = engine::filter_by(combined, Some(selection.country.as_str()), None);
            let focused = engine::apply_focus(&country_rows, selection.focus);
            let table = grouped_widget(
                engine::fuel_mix(&focused, &selection.country),
                &format!("{} 无燃料结构数据", selection.country),
            )?;
            Ok(FocusedFuelMix {
                focus: selection.focus,
                comparison: selection.focus.is_comparison(),
                table,
            })
        })
    }

    fn sector_fuel_mix(&self, data: &LoadedDatasets, selection: &Selection) -> Widget<GroupedTable> {
        self.widget(data, DatasetKind::Combined, |combined| {
            let country_rows = engine::filter_by(combined, Some(selection.country.as_str()), None);
            let focused = engine::apply_focus(&country_rows, selection.focus);
            grouped_widget(
                engine::sector_fuel_mix(&focused, &selection.country, selection.year),
                &format!("{} 在 {} 年无部门燃料数据", selection.country, selection.year),
            )
        })
    }

    fn eu_fuel_aggregate(&self, data: &LoadedDatasets) -> Widget<GroupedTable> {
        let aggregate = &self.config.aggregate_code;
        self.widget(data, DatasetKind::Combined, |combined| {
            grouped_widget(engine::eu_fuel_aggregate(combined, aggregate), "无成员国燃料数据")
        })
    }

    // ===== 部门需求 =====

    fn sector_demand(&self, data: &LoadedDatasets, selection: &Selection) -> Widget<GroupedTable> {
        let mut series: Option<GroupedTable> = None;
        let mut reasons = Vec::new();
        for kind in [DatasetKind::Transport, DatasetKind::Industry] {
            match self.sector_table(data, kind) {
                Ok(table) => {
                    let (_, per_year) = engine::country_demand(table, &selection.country, kind.sector_name());
                    series = Some(match series {
                        Some(acc) => acc.append(per_year),
                        None => per_year,
                    });
                }
                Err(reason) => reasons.push(reason),
            }
        }

        match series {
            Some(table) if !table.is_empty() => Widget::Ready(table),
            Some(_) => Widget::no_data(format!("{} 无部门需求数据", selection.country)),
            None => Widget::no_data(reasons.join("; ")),
        }
    }

    fn headline(&self, data: &LoadedDatasets, kind: DatasetKind, selection: &Selection) -> Widget<engine::SectorHeadline> {
        let base_year = match kind {
            DatasetKind::Industry => self.config.industry_base_year,
            _ => self.config.transport_base_year,
        };
        let horizon = self.config.horizon_year;
        self.widget(data, kind, |table| {
            let (country_rows, _) = engine::country_demand(table, &selection.country, kind.sector_name());
            engine::sector_headline(&country_rows, kind.sector_name(), base_year, horizon)
        })
    }

    fn demand_heatmaps(&self, data: &LoadedDatasets, selection: &Selection) -> DemandHeatmaps {
        let aggregate = &self.config.aggregate_code;
        let map = |kind| {
            self.widget(data, kind, |table| {
                let heatmap = engine::choropleth(table, selection.year, None, aggregate);
                let empty = heatmap.cells.is_empty();
                non_empty(heatmap, empty, &format!("{} 年无国家级数据", selection.year))
            })
        };
        DemandHeatmaps {
            transport: map(DatasetKind::Transport),
            industry: map(DatasetKind::Industry),
        }
    }

    // ===== 部门分页 =====

    fn transport_tab(&self, data: &LoadedDatasets, selection: &Selection) -> TransportTab {
        let country = selection.country.as_str();
        let aggregate = &self.config.aggregate_code;

        let main_stack = self.widget(data, DatasetKind::Transport, |table| {
            let rows = engine::filter_by(table, Some(country), None);
            pivot_widget(engine::main_category_stack(&rows), &format!("{} 无交通数据", country))
        });

        let sub_splits = [self.config.transport_base_year, self.config.horizon_year]
            .iter()
            .map(|year| {
                self.widget(data, DatasetKind::Transport, |table| {
                    let rows = engine::filter_by(table, Some(country), None);
                    let split = engine::transport_sub_split(&rows, *year);
                    let empty = split.passenger.is_empty() && split.freight.is_empty();
                    non_empty(split, empty, &format!("{} 在 {} 年无交通子类别数据", country, year))
                })
            })
            .collect();

        let map_years = &self.config.transport_map_years;
        let horizon = self.config.horizon_year;
        let top_category_maps = self.widget(data, DatasetKind::Transport, |table| {
            let rows = engine::filter_by(table, Some(country), None);
            let top = engine::argmax_category(&rows, horizon)?;
            Ok(engine::category_choropleths(table, &top, map_years, aggregate))
        });

        let fuel_breakdown = match &data.transport_raw {
            Some(raw) => {
                let rows = engine::fuel_breakdown(&engine::filter_by(raw, Some(country), None));
                let empty = rows.is_empty();
                Widget::from_result(non_empty(rows, empty, &format!("{} 无交通燃料数据", country)))
            }
            None => Widget::no_data(data.reason(DatasetKind::Transport)),
        };

        TransportTab {
            main_stack,
            sub_splits,
            top_category_maps,
            fuel_breakdown,
        }
    }

    fn industry_tab(&self, data: &LoadedDatasets, selection: &Selection) -> IndustryTab {
        let country = selection.country.as_str();
        let aggregate = &self.config.aggregate_code;

        let category_stack = self.widget(data, DatasetKind::Industry, |table| {
            let rows = engine::filter_by(table, Some(country), None);
            pivot_widget(engine::category_stack(&rows), &format!("{} 无工业数据", country))
        });

        // 饼图覆盖全部成员国, 聚合代码的行不参与加总
        let splits = [self.config.industry_base_year, self.config.horizon_year]
            .iter()
            .map(|year| {
                self.widget(data, DatasetKind::Industry, |table| {
                    let members = table.select(|r| r.country != *aggregate);
                    let split = engine::industry_split(&members, *year);
                    let empty = split.by_category.is_empty();
                    non_empty(split, empty, &format!("{} 年无工业数据", year))
                })
            })
            .collect();

        let map_years = &self.config.industry_map_years;
        let horizon = self.config.horizon_year;
        let top_category_maps = self.widget(data, DatasetKind::Industry, |table| {
            let rows = engine::filter_by(table, Some(country), None);
            let top = engine::argmax_category(&rows, horizon)?;
            Ok(engine::category_choropleths(table, &top, map_years, aggregate))
        });

        IndustryTab {
            category_stack,
            splits,
            top_category_maps,
        }
    }

    fn top_countries(&self, data: &LoadedDatasets) -> TopCountriesView {
        let n = self.config.top_n;
        let aggregate = &self.config.aggregate_code;
        let series = |kind| {
            self.widget(data, kind, |table| {
                let top = engine::top_countries_series(table, n, aggregate);
                let empty = top.ranking.is_empty();
                non_empty(top, empty, "无成员国数据")
            })
        };
        TopCountriesView {
            transport: series(DatasetKind::Transport),
            industry: series(DatasetKind::Industry),
        }
    }
}
