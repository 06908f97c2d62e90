use targetboard_types::PriceTargetRecord;

use super::builders::record;

pub fn by_symbol(s: &str) -> Option<Vec<PriceTargetRecord>> {
    match s {
        "AAPL" => Some(aapl()),
        "NVDA" => Some(vec![
            record("nv-1", "Morgan Stanley", Some(1100.0), "2024-05-23"),
            record("nv-2", "Bernstein", Some(1300.0), "2024-05-23T13:05:00Z"),
            record("nv-3", "HSBC", Some(1350.0), "2024-05-24"),
            record("nv-4", "Citi", Some(1030.0), "2024-05-22"),
            record("nv-5", "Rosenblatt", Some(1400.0), "2024-05-23"),
        ]),
        "MSFT" => Some(vec![
            record("ms-1", "Wedbush", Some(550.0), "2024-04-26"),
            record("ms-2", "Jefferies", Some(550.0), "2024-04-26"),
            record("ms-3", "Stifel", Some(475.0), "2024-04-25"),
        ]),
        "EMPTY" => Some(vec![]),
        "JUNK" => Some(vec![
            record("j-1", "Nowhere Capital", None, "2024-01-01"),
            record("j-2", "Div By Zero LLC", Some(f64::NAN), "2024-01-02"),
            record("j-3", "Overflow Partners", Some(f64::INFINITY), "2024-01-03"),
        ]),
        _ => None,
    }
}

fn aapl() -> Vec<PriceTargetRecord> {
    vec![
        record("aa-01", "Goldman Sachs", Some(226.0), "2024-01-05"),
        record("aa-02", "Morgan Stanley", Some(220.0), "2024-01-08"),
        record("aa-03", "Barclays", Some(158.0), "2024-01-02"),
        record("aa-04", "Wedbush", Some(250.0), "2024-02-01T09:30:00-05:00"),
        record("aa-05", "Evercore ISI", Some(230.0), "2024-02-02"),
        record("aa-06", "Jefferies", None, "2024-02-03"),
        record("aa-07", "Bank of America", Some(225.0), "2024-02-05"),
        record("aa-08", "Citi", Some(230.0), "not a date"),
        record("aa-09", "Needham", Some(f64::NAN), "2024-02-07"),
        record("aa-10", "Loop Capital", Some(240.0), "2024-02-08"),
        PriceTargetRecord::new("aa-11", Some(199.5), "2024-02-09"),
        record("aa-12", "Rosenblatt", Some(189.0), "2024-02-12"),
        record("aa-13", "DA Davidson", Some(215.0), "2024/02/13"),
        record("aa-14", "Redburn", Some(164.0), "2024-02-14"),
    ]
}

pub fn json_by_symbol(s: &str) -> Option<&'static str> {
    match s {
        "TSLA" => Some(TSLA_JSON),
        _ => None,
    }
}

const TSLA_JSON: &str = r#"[
    {"id": "ts-1", "analystFirm": "Wedbush", "priceTarget": 275, "publishedDate": "2024-04-24"},
    {"id": "ts-2", "analystFirm": "GLJ Research", "priceTarget": 22.86, "publishedDate": "2024-04-24"},
    {"id": "ts-3", "analystFirm": "Piper Sandler", "priceTarget": "205", "publishedDate": "2024-04-24"},
    {"id": "ts-4", "analystFirm": "", "priceTarget": 190, "publishedDate": "2024-04-25T08:00:00.000Z"},
    {"id": "ts-5", "analystFirm": "UBS", "priceTarget": null, "publishedDate": "2024-04-25"},
    {"id": "ts-6", "priceTarget": 85, "publishedDate": "April 24, 2024"}
]"#;
