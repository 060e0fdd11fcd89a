// File: crates/whisker-core/tests/pivot.rs
// Purpose: Pivot completeness, axis ordering, and the rows -> pivot -> summary scenario.

use serde_json::json;
use whisker_core::format::no_tooltip;
use whisker_core::{
    assemble_box_plot_option, build_box_summary, pivot_by_category, BoundPolicy, BoxSummary, CategoryKey,
    CategoryOrder, Row, RowSchema,
};

fn key(s: &str) -> CategoryKey { CategoryKey::from(s) }

#[test]
fn only_present_pairs_get_buckets() {
    let rows = vec![
        Row::new("A", "2019", 1.0),
        Row::new("A", "2020", 2.0),
        Row::new("B", "2020", 3.0),
        Row::new("B", "2021", 4.0),
        Row::new("A", "2019", 5.0),
    ];
    let p = pivot_by_category(&rows);

    let mut pairs: Vec<(String, String)> = p
        .iter()
        .flat_map(|(s, b)| b.keys().map(move |c| (s.to_string(), c.to_string())))
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("A".to_string(), "2019".to_string()),
            ("A".to_string(), "2020".to_string()),
            ("B".to_string(), "2020".to_string()),
            ("B".to_string(), "2021".to_string()),
        ]
    );
    assert!(!p.contains("A", &key("2021")));
    assert!(!p.contains("B", &key("2019")));
    assert_eq!(p.sample("A", &key("2019")), &[1.0, 5.0]);
    assert_eq!(p.categories(CategoryOrder::Natural), vec![key("2019"), key("2020"), key("2021")]);
}

#[test]
fn natural_axis_order_is_numeric_for_numbers() {
    let rows = vec![Row::new("s", "10", 1.0), Row::new("s", "9", 1.0), Row::new("s", "100", 1.0)];
    let p = pivot_by_category(&rows);
    assert_eq!(p.categories(CategoryOrder::Natural), vec![key("9"), key("10"), key("100")]);
    assert_eq!(p.categories(CategoryOrder::Lexical), vec![key("10"), key("100"), key("9")]);
    assert_eq!(p.categories(CategoryOrder::FirstSeen), vec![key("10"), key("9"), key("100")]);
}

#[test]
fn year_duid_generation_scenario() {
    let records = [
        json!({"year": 2020, "duid": "X", "gen": 10}),
        json!({"year": 2020, "duid": "X", "gen": 20}),
        json!({"year": 2021, "duid": "X", "gen": 5}),
    ];
    let rows = RowSchema::new("year", "gen").with_series("duid").decode(&records).expect("decode");
    let p = pivot_by_category(&rows);

    assert_eq!(p.series_count(), 1);
    assert_eq!(p.sample("X", &key("2020")), &[10.0, 20.0]);
    assert_eq!(p.sample("X", &key("2021")), &[5.0]);
    assert_eq!(p.bucket_count(), 2);

    let stats = build_box_summary(p.sample("X", &key("2020")), BoundPolicy::Extreme);
    assert_eq!(stats.summary, BoxSummary { low: 10.0, q1: 12.5, median: 15.0, q3: 17.5, high: 20.0 });

    let cats = p.categories(CategoryOrder::Natural);
    let option = assemble_box_plot_option(&p, &cats, BoundPolicy::Extreme, &no_tooltip);
    assert_eq!(option.x_axis_categories, vec!["2020", "2021"]);
    assert_eq!(option.series[0].name, "X");
    assert_eq!(option.series[0].box_values, vec![[10.0, 12.5, 15.0, 17.5, 20.0], [5.0; 5]]);
    assert_eq!(option.y_axis_max, Some(20.0));
}
