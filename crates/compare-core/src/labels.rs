//! Fixed UI strings: headings, table labels, fallback messages
//!
//! Unlike commentary these never interpolate values, so a plain exhaustive
//! match per locale is enough.

use compare_templates::Locale;

/// A fixed piece of page text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    CompanyOverviewHeading,
    CompanyOverviewUnavailable,
    DividendHeading,
    DividendUnavailable,
    SeeTableBelow,
    Symbol,
    CompanyName,
    Country,
    Sector,
    Industry,
    Ceo,
    Price,
    MarketCap,
    Beta,
    Exchange,
    IpoDate,
    Adr,
    Yes,
    No,
    NotAvailable,
    DividendYieldTtm,
    FvifaHeading,
    FvifaOutputLabel,
    RateRequired,
    RateNotNumeric,
    RateNegative,
    PeriodsRequired,
    PeriodsNotNumeric,
    PeriodsNegative,
    FactorOutOfRange,
}

impl Label {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english(),
            Locale::Chinese => self.chinese(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Label::CompanyOverviewHeading => "Company Overview",
            Label::CompanyOverviewUnavailable => "Company overview data is currently unavailable.",
            Label::DividendHeading => "Dividend Comparison",
            Label::DividendUnavailable => "Dividend data is currently unavailable.",
            Label::SeeTableBelow => "For a detailed comparison, please refer to the table below.",
            Label::Symbol => "Symbol",
            Label::CompanyName => "Company Name",
            Label::Country => "Country",
            Label::Sector => "Sector",
            Label::Industry => "Industry",
            Label::Ceo => "CEO",
            Label::Price => "Price",
            Label::MarketCap => "Market Cap",
            Label::Beta => "Beta",
            Label::Exchange => "Exchange",
            Label::IpoDate => "IPO Date",
            Label::Adr => "ADR",
            Label::Yes => "Yes",
            Label::No => "No",
            Label::NotAvailable => "N/A",
            Label::DividendYieldTtm => "Dividend Yield (TTM)",
            Label::FvifaHeading => "FVIFA Calculator",
            Label::FvifaOutputLabel => "Future Value Interest Factor of Annuity",
            Label::RateRequired => "Please enter an interest rate.",
            Label::RateNotNumeric => "Please enter a valid numeric interest rate.",
            Label::RateNegative => "Interest rate must not be less than 0.",
            Label::PeriodsRequired => "Please enter the number of periods.",
            Label::PeriodsNotNumeric => "Please enter a valid numeric number of periods.",
            Label::PeriodsNegative => "Number of periods must not be less than 0.",
            Label::FactorOutOfRange => {
                "The result is too large to compute. Please use a lower interest rate or fewer periods."
            }
        }
    }

    fn chinese(self) -> &'static str {
        match self {
            Label::CompanyOverviewHeading => "公司概况",
            Label::CompanyOverviewUnavailable => "暂时无法加载公司概况数据。",
            Label::DividendHeading => "股息比较",
            Label::DividendUnavailable => "暂时无法加载股息数据。",
            Label::SeeTableBelow => "详细对比请参阅下表。",
            Label::Symbol => "代码",
            Label::CompanyName => "公司名称",
            Label::Country => "国家",
            Label::Sector => "板块",
            Label::Industry => "行业",
            Label::Ceo => "首席执行官",
            Label::Price => "股价",
            Label::MarketCap => "市值",
            Label::Beta => "贝塔系数",
            Label::Exchange => "交易所",
            Label::IpoDate => "上市日期",
            Label::Adr => "ADR",
            Label::Yes => "是",
            Label::No => "否",
            Label::NotAvailable => "暂无",
            Label::DividendYieldTtm => "股息率 (TTM)",
            Label::FvifaHeading => "年金终值系数计算器",
            Label::FvifaOutputLabel => "年金终值系数",
            Label::RateRequired => "请输入利率。",
            Label::RateNotNumeric => "请输入有效的数字利率。",
            Label::RateNegative => "利率不能小于 0。",
            Label::PeriodsRequired => "请输入期数。",
            Label::PeriodsNotNumeric => "请输入有效的数字期数。",
            Label::PeriodsNegative => "期数不能小于 0。",
            Label::FactorOutOfRange => "计算结果过大，请降低利率或减少期数。",
        }
    }
}
