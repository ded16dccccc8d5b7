//! Built-in commentary sentences
//!
//! One row per template key: `(key, English, Chinese)`. Keys are
//! `<metric>.<category>`; the commentary engine derives them from the
//! classifier output, so adding a category without a row here fails the
//! completeness check.

use compare_templates::{LocalizedTemplate, Result};

const BUILTIN: &[(&str, &str, &str)] = &[
    // Market capitalization
    (
        "market_cap.a_dominant",
        "For market capitalization, {{ a }} is notably larger with a market cap of approximately {{ cap_a }}, roughly {{ ratio }} times that of {{ b }} ({{ cap_b }}).",
        "从市值来看，{{ a }} 规模明显更大，市值约为 {{ cap_a }}，约为 {{ b }}（{{ cap_b }}）的 {{ ratio }} 倍。",
    ),
    (
        "market_cap.b_dominant",
        "In terms of market cap, {{ b }} stands out with a value of approximately {{ cap_b }}, roughly {{ ratio }} times that of {{ a }} ({{ cap_a }}).",
        "就市值而言，{{ b }} 更为突出，市值约为 {{ cap_b }}，约为 {{ a }}（{{ cap_a }}）的 {{ ratio }} 倍。",
    ),
    (
        "market_cap.comparable",
        "Both {{ a }} and {{ b }} have comparable market capitalizations, at {{ cap_a }} and {{ cap_b }}, respectively.",
        "{{ a }} 与 {{ b }} 的市值相当，分别为 {{ cap_a }} 和 {{ cap_b }}。",
    ),
    (
        "market_cap.indeterminate",
        "{{ a }} reports a market cap of {{ cap_a }} and {{ b }} reports {{ cap_b }}; with a zero or negative figure involved, a size ratio between them is not meaningful.",
        "{{ a }} 的市值为 {{ cap_a }}，{{ b }} 为 {{ cap_b }}；由于存在零或负值，两者之间的规模倍数不具参考意义。",
    ),
    // Beta
    (
        "beta.a_dominant",
        "Regarding volatility, {{ a }} has a higher beta of {{ beta_a }} (suggesting potentially higher volatility relative to the market), compared to {{ b }}'s beta of {{ beta_b }}.",
        "在波动性方面，{{ a }} 的贝塔系数较高，为 {{ beta_a }}（意味着相对大盘的波动可能更大），而 {{ b }} 的贝塔系数为 {{ beta_b }}。",
    ),
    (
        "beta.b_dominant",
        "Looking at volatility, {{ b }} shows a higher beta of {{ beta_b }} (suggesting potentially higher volatility relative to the market), while {{ a }} has a beta of {{ beta_a }}.",
        "从波动性来看，{{ b }} 的贝塔系数较高，为 {{ beta_b }}（意味着相对大盘的波动可能更大），而 {{ a }} 的贝塔系数为 {{ beta_a }}。",
    ),
    (
        "beta.comparable",
        "Both stocks exhibit similar volatility characteristics based on their beta values, with {{ a }} at {{ beta_a }} and {{ b }} at {{ beta_b }}.",
        "根据贝塔系数，两只股票的波动特征相近，{{ a }} 为 {{ beta_a }}，{{ b }} 为 {{ beta_b }}。",
    ),
    (
        "beta.indeterminate",
        "{{ a }} has a beta of {{ beta_a }} and {{ b }} has a beta of {{ beta_b }}; with a zero or negative beta involved, their relative volatility cannot be ranked by ratio.",
        "{{ a }} 的贝塔系数为 {{ beta_a }}，{{ b }} 为 {{ beta_b }}；由于存在零或负的贝塔值，无法按比值比较两者的相对波动性。",
    ),
    // Dividend yield
    (
        "dividend_yield.neither_has",
        "Between {{ a }} and {{ b }}, neither pays dividends, suggesting profits are mainly reinvested to prioritize business expansion or long-term growth over short-term shareholder returns.",
        "{{ a }} 和 {{ b }} 均不支付股息，利润主要用于再投资，可能优先考虑业务扩展或长期增长而非短期股东回报。",
    ),
    (
        "dividend_yield.only_a_has",
        "{{ a }} offers a dividend yield of {{ yield_a }}, returning cash to shareholders while still pursuing growth, whereas {{ b }} pays no dividends and directs profits toward future development such as expansion or research, reflecting a different operating strategy.",
        "{{ a }} 的股息率为 {{ yield_a }}，在回报股东的同时兼顾增长；而 {{ b }} 不支付股息，利润主要投入未来发展，如业务扩展或研发，体现出不同的经营策略。",
    ),
    (
        "dividend_yield.only_b_has",
        "{{ a }} does not pay dividends, channeling profits into company development, which may suit investors seeking capital appreciation. By contrast, {{ b }} offers a dividend yield of {{ yield_b }}, rewarding shareholders directly and reflecting steadier profitability, so the two strategies stand in contrast.",
        "{{ a }} 不支付股息，利润更多用于支持公司发展，适合追求资本增值的投资者。而 {{ b }} 的股息率为 {{ yield_b }}，通过分红直接回报股东，反映出较稳定的盈利能力，两者策略形成对比。",
    ),
    (
        "dividend_yield.both_have",
        "{{ a }} has a dividend yield of {{ yield_a }} and {{ b }} has {{ yield_b }}; both balance shareholder returns with company development.",
        "{{ a }} 的股息率为 {{ yield_a }}，{{ b }} 为 {{ yield_b }}，两者均在股东回报与公司发展之间取得平衡。",
    ),
    (
        "dividend_yield.gap_significant",
        "In particular, {{ higher }}'s dividend yield of {{ higher_yield }} is significantly higher, exceeding {{ lower }}'s by about {{ gap }}, which points to a stronger focus on shareholder returns, while {{ lower }} retains more earnings for growth.",
        "其中，{{ higher }} 的股息率达 {{ higher_yield }}，高出 {{ lower }} 约 {{ gap }}，显示其更倾向于回报股东，而 {{ lower }} 则更多保留利润用于发展。",
    ),
    (
        "dividend_yield.gap_similar",
        "Their dividend yields are similar, pointing to comparable payout and growth strategies.",
        "两者的股息率差距较小，显示出相似的分红与增长策略。",
    ),
    // ADR status
    (
        "adr.only_a_has",
        "Also, please note: {{ a }} operates as an ADR, meaning it's a foreign company's stock listed on U.S. exchanges, while {{ b }} is a standard U.S.-listed stock, not tied to the ADR structure.",
        "另请注意：{{ a }} 以 ADR 形式上市，即在美国交易所挂牌的外国公司股票，而 {{ b }} 是普通的美国上市股票，不涉及 ADR 结构。",
    ),
    (
        "adr.only_b_has",
        "Also, please note: {{ b }} is structured as an ADR, indicating it's a foreign entity traded on U.S. markets, whereas {{ a }} is a regular U.S.-based stock without ADR designation.",
        "另请注意：{{ b }} 以 ADR 形式上市，属于在美国市场交易的外国公司，而 {{ a }} 是普通的美国本土股票，没有 ADR 身份。",
    ),
    (
        "adr.both_have",
        "Also, please note: both {{ a }} and {{ b }} are ADRs. This means they represent ownership in shares of foreign companies, made available for trading on U.S. stock exchanges, offering investors exposure to international markets.",
        "另请注意：{{ a }} 和 {{ b }} 均为美国存托凭证（ADR），代表在美国交易所上市交易的外国公司股份，为投资者提供了接触国际市场的途径。",
    ),
    // Page chrome
    (
        "page.title",
        "{{ a }} vs. {{ b }}: A Head-to-Head Stock Comparison",
        "{{ a }} 与 {{ b }}：股票正面对比",
    ),
    (
        "page.intro",
        "Here's a clear look at {{ a }} and {{ b }}, comparing key factors like company profile, market size, volatility, and dividends. It's built for investors or anyone curious to see how these two stocks match up.",
        "本文从公司概况、市值规模、波动性和股息等关键维度，清晰对比 {{ a }} 与 {{ b }}，适合投资者或任何想了解这两只股票差异的读者。",
    ),
    // Calculators
    (
        "calculator.fvifa.summary",
        "With an interest rate of {{ rate }}% over {{ periods }} years, the FVIFA is {{ factor }}.",
        "在利率为 {{ rate }}%、期数为 {{ periods }} 年的情况下，年金终值系数（FVIFA）为 {{ factor }}。",
    ),
];

/// Keys outside the metric/category grid that callers render directly
pub const PAGE_TITLE: &str = "page.title";
pub const PAGE_INTRO: &str = "page.intro";
pub const FVIFA_SUMMARY: &str = "calculator.fvifa.summary";

/// Parse every built-in row into a template
pub fn builtin_templates() -> Result<Vec<LocalizedTemplate>> {
    BUILTIN
        .iter()
        .map(|&(key, english, chinese)| LocalizedTemplate::bilingual(key, english, chinese))
        .collect()
}
