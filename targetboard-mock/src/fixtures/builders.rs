use targetboard_types::PriceTargetRecord;

/// Build a record with a firm in one call.
#[must_use]
pub fn record(id: &str, firm: &str, price_target: Option<f64>, date: &str) -> PriceTargetRecord {
    PriceTargetRecord::new(id, price_target, date).with_analyst_firm(firm)
}

/// One record per value, ids `r0..`, firms `Firm 0..`, all dated 2024-01-05.
#[must_use]
pub fn values(values: &[f64]) -> Vec<PriceTargetRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| record(&format!("r{i}"), &format!("Firm {i}"), Some(*v), "2024-01-05"))
        .collect()
}

/// `n` records with distinct targets `start, start + step, ...`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ladder(n: usize, start: f64, step: f64) -> Vec<PriceTargetRecord> {
    (0..n)
        .map(|i| {
            record(
                &format!("l{i}"),
                &format!("Desk {i}"),
                Some((i as f64).mul_add(step, start)),
                "2024-03-15",
            )
        })
        .collect()
}
