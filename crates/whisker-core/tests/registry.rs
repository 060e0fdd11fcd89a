// File: crates/whisker-core/tests/registry.rs
// Purpose: Registry lookup, duplicate/unknown ids, and decode-then-build through a plugin schema.

use serde_json::json;
use whisker_core::format::no_tooltip;
use whisker_core::{
    assemble_box_plot_option, pivot_by_category, BuildParams, ChartError, ChartOption, ChartPlugin, ChartRegistry,
    Row, RowSchema,
};

struct Simple;

impl ChartPlugin for Simple {
    fn id(&self) -> &'static str { "simple" }
    fn name(&self) -> &'static str { "Simple box plot" }
    fn schema(&self) -> RowSchema { RowSchema::new("Period", "Value").with_series("Group") }
    fn build(&self, rows: &[Row], params: &BuildParams) -> Result<ChartOption, ChartError> {
        let p = pivot_by_category(rows);
        let cats = p.categories(params.order);
        Ok(ChartOption::BoxPlot(assemble_box_plot_option(&p, &cats, params.bound, &no_tooltip)))
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut reg = ChartRegistry::new();
    reg.register(Box::new(Simple)).expect("first registration");
    assert_eq!(reg.register(Box::new(Simple)), Err(ChartError::DuplicateChart("simple".into())));
    assert_eq!(reg.ids(), vec!["simple"]);
    assert_eq!(reg.len(), 1);
}

#[test]
fn unknown_chart_is_an_error() {
    let reg = ChartRegistry::new();
    assert!(reg.is_empty());
    assert_eq!(
        reg.build("nope", &[], &BuildParams::default()),
        Err(ChartError::UnknownChart("nope".into()))
    );
}

#[test]
fn build_from_json_uses_plugin_schema() {
    let reg = ChartRegistry::new().with(Simple).expect("register");
    let records = [
        json!({"Period": "2020", "Group": "g", "Value": 1}),
        json!({"Period": "2020", "Group": "g", "Value": 3}),
    ];
    let option = reg.build_from_json("simple", &records, &BuildParams::default()).expect("build");
    match option {
        ChartOption::BoxPlot(o) => {
            assert_eq!(o.series.len(), 1);
            assert_eq!(o.series[0].box_values[0][2], 2.0);
        }
        other => panic!("unexpected option {other:?}"),
    }

    let bad = [json!({"Period": "2020", "Value": 1})];
    assert_eq!(
        reg.build_from_json("simple", &bad, &BuildParams::default()),
        Err(ChartError::MissingField { row: 0, field: "Group".into() })
    );
}
