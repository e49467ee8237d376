// ==========================================
// 绿色燃料展望 - 类别分类参考数据
// ==========================================
// 纯数据, 无行为
// ==========================================

/// 欧盟聚合代码
pub const EU27: &str = "EU27";

/// 聚合代码的展示名
pub const EU27_NAME: &str = "European Union";

/// 综合输出中需剔除的预聚合行
pub const OVERALL_DEMAND: &str = "Overall Demand";

/// ISO-2（Eurostat 约定, 希腊为 EL）→ 国家名
pub const ISO_TO_COUNTRY: &[(&str, &str)] = &[
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("CY", "Cyprus"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("EL", "Greece"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("HR", "Croatia"),
    ("HU", "Hungary"),
    ("IE", "Ireland"),
    ("IT", "Italy"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("MT", "Malta"),
    ("NL", "Netherlands"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SE", "Sweden"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
];

/// ISO-2 → ISO-3（地图用）
pub const ISO2_TO_ISO3: &[(&str, &str)] = &[
    ("AT", "AUT"),
    ("BE", "BEL"),
    ("BG", "BGR"),
    ("CY", "CYP"),
    ("CZ", "CZE"),
    ("DE", "DEU"),
    ("DK", "DNK"),
    ("EE", "EST"),
    ("EL", "GRC"),
    ("GR", "GRC"),
    ("ES", "ESP"),
    ("FI", "FIN"),
    ("FR", "FRA"),
    ("HR", "HRV"),
    ("HU", "HUN"),
    ("IE", "IRL"),
    ("IT", "ITA"),
    ("LT", "LTU"),
    ("LU", "LUX"),
    ("LV", "LVA"),
    ("MT", "MLT"),
    ("NL", "NLD"),
    ("PL", "POL"),
    ("PT", "PRT"),
    ("RO", "ROU"),
    ("SE", "SWE"),
    ("SI", "SVN"),
    ("SK", "SVK"),
];

// ==========================================
// 交通类别
// ==========================================

/// 可加的 11 个交通子类别
pub const TRANSPORT_CATEGORIES: &[&str] = &[
    "FE|Transport|Freight|Road|Heavy",
    "FE|Transport|Freight|Road|Light",
    "FE|Transport|Pass|Road|Bus",
    "FE|Transport|Pass|Road|LDV|Four Wheelers",
    "FE|Transport|Pass|Road|LDV|Two Wheelers",
    "FE|Transport|Pass|Domestic Aviation",
    "FE|Transport|Pass|Aviation",
    "FE|Transport|Pass|Rail",
    "FE|Transport|Freight|Rail",
    "FE|Transport|Bunkers|Freight|International Shipping",
    "FE|Transport|Freight|Domestic Shipping",
];

/// 主类别展示顺序
pub const TRANSPORT_MAIN_CATEGORIES: &[&str] = &["Road", "Aviation", "Rail", "Shipping"];

/// 子类别 → 主类别
pub const MAIN_CATEGORY_MAPPING: &[(&str, &str)] = &[
    ("FE|Transport|Freight|Road|Heavy", "Road"),
    ("FE|Transport|Freight|Road|Light", "Road"),
    ("FE|Transport|Pass|Road|Bus", "Road"),
    ("FE|Transport|Pass|Road|LDV|Four Wheelers", "Road"),
    ("FE|Transport|Pass|Road|LDV|Two Wheelers", "Road"),
    ("FE|Transport|Pass|Domestic Aviation", "Aviation"),
    ("FE|Transport|Pass|Aviation", "Aviation"),
    ("FE|Transport|Pass|Rail", "Rail"),
    ("FE|Transport|Freight|Rail", "Rail"),
    ("FE|Transport|Bunkers|Freight|International Shipping", "Shipping"),
    ("FE|Transport|Freight|Domestic Shipping", "Shipping"),
];

/// 子类别 → 饼图短标签（以 Passenger / Freight 开头）
pub const SUB_CATEGORY_LABELS: &[(&str, &str)] = &[
    ("FE|Transport|Freight|Road|Heavy", "Freight: Road (Heavy)"),
    ("FE|Transport|Freight|Road|Light", "Freight: Road (Light)"),
    ("FE|Transport|Freight|Rail", "Freight: Rail"),
    ("FE|Transport|Pass|Road|Bus", "Passenger: Road (Bus)"),
    ("FE|Transport|Pass|Road|LDV|Four Wheelers", "Passenger: Road (4W)"),
    ("FE|Transport|Pass|Road|LDV|Two Wheelers", "Passenger: Road (2W)"),
    ("FE|Transport|Pass|Rail", "Passenger: Rail"),
    ("FE|Transport|Pass|Aviation", "Passenger: Aviation (International)"),
    ("FE|Transport|Pass|Domestic Aviation", "Passenger: Aviation (Domestic)"),
    (
        "FE|Transport|Bunkers|Freight|International Shipping",
        "Freight: Shipping (International)",
    ),
    ("FE|Transport|Freight|Domestic Shipping", "Freight: Shipping (Domestic)"),
];

/// 子类别 → 长展示名
pub const CATEGORY_DISPLAY_LABELS: &[(&str, &str)] = &[
    ("FE|Transport|Freight|Road|Heavy", "Goods road transport (Heavy)"),
    ("FE|Transport|Freight|Road|Light", "Goods road transport (Light)"),
    ("FE|Transport|Pass|Road|Bus", "Passenger car (Bus)"),
    ("FE|Transport|Pass|Road|LDV|Four Wheelers", "Passenger car (Four wheelers)"),
    ("FE|Transport|Pass|Road|LDV|Two Wheelers", "Passenger car (Two wheelers)"),
    ("FE|Transport|Pass|Domestic Aviation", "Domestic Aviation"),
    ("FE|Transport|Pass|Aviation", "Aviation"),
    ("FE|Transport|Pass|Rail", "Passenger rail transport"),
    ("FE|Transport|Freight|Rail", "Goods rail transport"),
    (
        "FE|Transport|Bunkers|Freight|International Shipping",
        "International Shipping",
    ),
    ("FE|Transport|Freight|Domestic Shipping", "Domestic Shipping"),
];

/// 交通燃料路径（类别前缀 + 燃料后缀）
pub const TRANSPORT_FUEL_PATHS: &[&str] = &[
    // Freight Road Heavy
    "FE|Transport|Freight|Road|Heavy|Electricity",
    "FE|Transport|Freight|Road|Heavy|Hydrogen",
    "FE|Transport|Freight|Road|Heavy|Gases",
    "FE|Transport|Freight|Road|Heavy|Gases|Biomass",
    "FE|Transport|Freight|Road|Heavy|Gases|Fossil",
    "FE|Transport|Freight|Road|Heavy|Gases|Hydrogen",
    "FE|Transport|Freight|Road|Heavy|Liquids",
    "FE|Transport|Freight|Road|Heavy|Liquids|Biomass",
    "FE|Transport|Freight|Road|Heavy|Liquids|Fossil",
    "FE|Transport|Freight|Road|Heavy|Liquids|Hydrogen",
    // Freight Road Light
    "FE|Transport|Freight|Road|Light|Electricity",
    "FE|Transport|Freight|Road|Light|Hydrogen",
    "FE|Transport|Freight|Road|Light|Gases",
    "FE|Transport|Freight|Road|Light|Gases|Biomass",
    "FE|Transport|Freight|Road|Light|Gases|Fossil",
    "FE|Transport|Freight|Road|Light|Gases|Hydrogen",
    "FE|Transport|Freight|Road|Light|Liquids",
    "FE|Transport|Freight|Road|Light|Liquids|Biomass",
    "FE|Transport|Freight|Road|Light|Liquids|Fossil",
    "FE|Transport|Freight|Road|Light|Liquids|Hydrogen",
    // Passenger Road Bus
    "FE|Transport|Pass|Road|Bus|Electricity",
    "FE|Transport|Pass|Road|Bus|Hydrogen",
    "FE|Transport|Pass|Road|Bus|Gases",
    "FE|Transport|Pass|Road|Bus|Gases|Biomass",
    "FE|Transport|Pass|Road|Bus|Gases|Fossil",
    "FE|Transport|Pass|Road|Bus|Gases|Hydrogen",
    "FE|Transport|Pass|Road|Bus|Liquids",
    "FE|Transport|Pass|Road|Bus|Liquids|Biomass",
    "FE|Transport|Pass|Road|Bus|Liquids|Fossil",
    "FE|Transport|Pass|Road|Bus|Liquids|Hydrogen",
    // Passenger Road LDV Four Wheelers
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Electricity",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Hydrogen",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Gases",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Gases|Biomass",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Gases|Fossil",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Gases|Hydrogen",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Liquids",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Liquids|Biomass",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Liquids|Fossil",
    "FE|Transport|Pass|Road|LDV|Four Wheelers|Liquids|Hydrogen",
    // Passenger Road LDV Two Wheelers
    "FE|Transport|Pass|Road|LDV|Two Wheelers|Electricity",
    "FE|Transport|Pass|Road|LDV|Two Wheelers|Liquids",
    "FE|Transport|Pass|Road|LDV|Two Wheelers|Liquids|Biomass",
    "FE|Transport|Pass|Road|LDV|Two Wheelers|Liquids|Fossil",
    "FE|Transport|Pass|Road|LDV|Two Wheelers|Liquids|Hydrogen",
    // Bunkers Freight International Shipping
    "FE|Transport|Bunkers|Freight|International Shipping|Liquids",
    // Freight Domestic Shipping
    "FE|Transport|Freight|Domestic Shipping|Liquids",
    "FE|Transport|Freight|Domestic Shipping|Liquids|Biomass",
    "FE|Transport|Freight|Domestic Shipping|Liquids|Fossil",
    "FE|Transport|Freight|Domestic Shipping|Liquids|Hydrogen",
    // Bunkers Pass International Aviation
    "FE|Transport|Bunkers|Pass|International Aviation|Liquids",
    // Passenger Domestic Aviation
    "FE|Transport|Pass|Domestic Aviation|Hydrogen",
    "FE|Transport|Pass|Domestic Aviation|Liquids",
    "FE|Transport|Pass|Domestic Aviation|Liquids|Biomass",
    "FE|Transport|Pass|Domestic Aviation|Liquids|Fossil",
    "FE|Transport|Pass|Domestic Aviation|Liquids|Hydrogen",
    // Passenger Aviation
    "FE|Transport|Pass|Aviation|Hydrogen",
    "FE|Transport|Pass|Aviation|Liquids",
    "FE|Transport|Pass|Aviation|Liquids|Biomass",
    "FE|Transport|Pass|Aviation|Liquids|Fossil",
    "FE|Transport|Pass|Aviation|Liquids|Hydrogen",
    // Passenger Rail
    "FE|Transport|Pass|Rail|Hydrogen",
    "FE|Transport|Pass|Rail|Liquids",
    "FE|Transport|Pass|Rail|Liquids|Biomass",
    "FE|Transport|Pass|Rail|Liquids|Fossil",
    "FE|Transport|Pass|Rail|Liquids|Hydrogen",
    // Freight Rail
    "FE|Transport|Freight|Rail|Hydrogen",
    "FE|Transport|Freight|Rail|Liquids",
    "FE|Transport|Freight|Rail|Liquids|Biomass",
    "FE|Transport|Freight|Rail|Liquids|Fossil",
    "FE|Transport|Freight|Rail|Liquids|Hydrogen",
];

// ==========================================
// 燃料组
// ==========================================

/// 燃料组展示顺序
pub const FUEL_ORDER_FULL: &[&str] = &[
    "Fossil Liquids",
    "Fossil Gases",
    "Biomass [Solid]",
    "Biogenic Liquids",
    "Biogenic Gases",
    "Synthetic Liquids",
    "Synthetic Gases",
    "Methanol",
    "Ammonia",
    "Hydrogen",
    "Renewable Energy Carrier",
];

/// 绿色（合成/生物）载体
pub const PTX_CARRIERS: &[&str] = &[
    "Hydrogen",
    "Ammonia",
    "Methanol",
    "Synthetic Gases",
    "Synthetic Liquids",
    "Biogenic Gases",
    "Biogenic Liquids",
    "Biomass [Solid]",
];

/// 化石载体
pub const FOSSIL_CARRIERS: &[&str] = &["Fossil Gases", "Fossil Liquids"];

pub const HYDROGEN: &str = "Hydrogen";
pub const OTHER_GREEN_FUELS: &str = "Other Green fuels";
pub const GREEN_FUELS: &str = "Green fuels";
pub const FOSSIL_FUELS: &str = "Fossil fuels";

// ==========================================
// 颜色（供展示层查表）
// ==========================================

pub const TRANSPORT_MAIN_COLORS: &[(&str, &str)] = &[
    ("Road", "#e41a1c"),
    ("Aviation", "#377eb8"),
    ("Rail", "#4daf4a"),
    ("Shipping", "#984ea3"),
];

pub const INDUSTRY_CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Iron & Steel", "#e41a1c"),
    ("Chemicals", "#377eb8"),
    ("Non-metallic minerals", "#4daf4a"),
];

pub const TRANSPORT_SUB_COLORS: &[(&str, &str)] = &[
    ("Freight: Road (Heavy)", "#c95155"),
    ("Freight: Road (Light)", "#dd878b"),
    ("Freight: Rail", "#88a0a8"),
    ("Freight: Shipping (International)", "#a3937f"),
    ("Freight: Shipping (Domestic)", "#c2b280"),
    ("Passenger: Road (Bus)", "#729ece"),
    ("Passenger: Road (4W)", "#91bfdb"),
    ("Passenger: Road (2W)", "#a6d96a"),
    ("Passenger: Rail", "#4575b4"),
    ("Passenger: Aviation (International)", "#b8a9c9"),
    ("Passenger: Aviation (Domestic)", "#8073ac"),
];

pub const INDUSTRY_FUEL_COLORS: &[(&str, &str)] = &[
    ("Ammonia", "#e41a1c"),
    ("Biomass", "#fb9a99"),
    ("Methanol", "#a6cee3"),
    ("Hydrogen", "#fdbf6f"),
    ("Biogas", "#ff7f00"),
    ("Overall demand", "#b2df8a"),
    ("Other", "#1f78b4"),
];

pub const TRANSPORT_FUEL_COLORS: &[(&str, &str)] = &[
    ("Electricity", "#a6cee3"),
    ("Hydrogen", "#fdbf6f"),
    ("Gases", "#fb9a99"),
    ("Liquids", "#1f78b4"),
    ("Other", "#e31a1c"),
];

pub const PTX_FUEL_COLORS: &[(&str, &str)] = &[
    ("Fossil Liquids", "#1a237e"),
    ("Fossil Gases", "#6674be"),
    ("Biomass [Solid]", "#984e43"),
    ("Biogenic Liquids", "#7cb342"),
    ("Biogenic Gases", "#cddc39"),
    ("Synthetic Liquids", "#f9a825"),
    ("Synthetic Gases", "#ef6c00"),
    ("Methanol", "#009E73"),
    ("Ammonia", "#ab47bc"),
    ("Hydrogen", "#3fa5ff"),
    ("Renewable Energy Carrier", "#5A4A82"),
];

pub const COMPARISON_COLORS: &[(&str, &str)] = &[
    ("Hydrogen", "#1e88e5"),
    ("Other Green fuels", "#43a047"),
    ("Green fuels", "#43a047"),
    ("Fossil fuels", "#1a237e"),
];
