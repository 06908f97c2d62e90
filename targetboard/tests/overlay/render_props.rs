use proptest::prelude::*;
use targetboard::{DisplayMode, MAX_ENTRIES, OverlayProps, PriceTargetRecord};

fn arb_records() -> impl Strategy<Value = Vec<PriceTargetRecord>> {
    let price = prop_oneof![
        4 => (0u32..2_000u32).prop_map(|v| Some(f64::from(v) / 4.0)),
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
    ];
    let date = prop_oneof![
        Just("2024-01-05".to_string()),
        Just("2023-11-30T16:00:00Z".to_string()),
        Just("garbage".to_string()),
    ];
    proptest::collection::vec((price, date), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (p, d))| PriceTargetRecord::new(format!("k{i}"), p, d))
            .collect()
    })
}

proptest! {
    #[test]
    fn list_body_is_bounded_and_ranked(records in arb_records(), low in any::<bool>()) {
        let mode = if low { DisplayMode::Low } else { DisplayMode::High };
        let close = || {};
        let props = OverlayProps::builder()
            .open(true)
            .records(&records)
            .mode(mode)
            .on_dismiss(&close)
            .build()
            .unwrap();
        let view = props.render().unwrap();
        let rows = view.body.rows();
        prop_assert!(rows.len() <= MAX_ENTRIES);
        prop_assert_eq!(view.body.is_empty(), rows.is_empty());
        for (i, r) in rows.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
            prop_assert!(r.price_target.is_finite());
            prop_assert!(r.value.starts_with('$'));
        }
        // Rendering is a pure function of the props.
        prop_assert_eq!(props.render(), Some(view));
    }
}
