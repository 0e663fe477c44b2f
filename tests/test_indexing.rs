// Indexing tests
// Author: Gabriel Demetrios Lafis

use rust_ndframe_engine::{
    Axis, DataFrame, Dtype, FrameData, FrameError, FrameOptions, IndexingMode, Label, Selector,
    SelectorResolver, Value,
};

fn ints(rows: &[&[i64]]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| Value::Integer(v)).collect())
        .collect()
}

fn sample_frame() -> DataFrame {
    DataFrame::from_rows(
        ints(&[&[1, 2, 3], &[4, 5, 6], &[20, 30, 40], &[39, 89, 78]]),
        vec!["A", "B", "C"],
    )
    .unwrap()
}

fn labelled_frame() -> DataFrame {
    DataFrame::new(
        FrameData::Rows(ints(&[&[1, 2], &[3, 4], &[5, 6], &[7, 8]])),
        FrameOptions::new()
            .columns(["x", "y"])
            .index(["a", "b", "c", "d"]),
    )
    .unwrap()
}

#[test]
fn test_iloc_slice_rows_and_column_positions() {
    let df = sample_frame();

    let result = df
        .iloc(Selector::slice("0:2"), Selector::positions([1, 2]))
        .unwrap();

    assert_eq!(result.values(), ints(&[&[2, 3], &[5, 6]]));
    assert_eq!(result.column_names(), ["B", "C"]);
    assert_eq!(result.index(), [Label::Int(0), Label::Int(1)]);
}

#[test]
fn test_single_item_slice_string_is_a_slice() {
    let df = sample_frame();

    let result = df
        .iloc(Selector::labels(["0:2"]), Selector::positions([1, 2]))
        .unwrap();

    assert_eq!(result.values(), ints(&[&[2, 3], &[5, 6]]));
}

#[test]
fn test_iloc_column_slice_maps_back_to_names() {
    let df = sample_frame();

    let result = df.iloc(Selector::positions([3]), Selector::slice("1:")).unwrap();

    assert_eq!(result.column_names(), ["B", "C"]);
    assert_eq!(result.values(), ints(&[&[89, 78]]));
    assert_eq!(result.index(), [Label::Int(3)]);
}

#[test]
fn test_iloc_preserves_selection_order() {
    let df = sample_frame();

    let result = df
        .iloc(Selector::positions([2, 0]), Selector::positions([2, 0]))
        .unwrap();

    assert_eq!(result.values(), ints(&[&[40, 20], &[3, 1]]));
    assert_eq!(result.column_names(), ["C", "A"]);
    assert_eq!(result.index(), [Label::Int(2), Label::Int(0)]);
}

#[test]
fn test_iloc_out_of_range_names_position_and_bound() {
    let df = sample_frame();

    let err = df.iloc(Selector::positions([4]), Selector::All).unwrap_err();

    assert_eq!(
        err,
        FrameError::IndexOutOfRange {
            position: 4,
            length: 4,
            axis: Axis::Rows,
        }
    );
    let message = err.to_string();
    assert!(message.contains("position 4"), "{}", message);
    assert!(message.contains("maximum position 3"), "{}", message);
}

#[test]
fn test_iloc_negative_position_is_out_of_range() {
    let df = sample_frame();

    let err = df
        .iloc(Selector::labels([-1i64]), Selector::All)
        .unwrap_err();

    assert!(matches!(err, FrameError::IndexOutOfRange { position: -1, .. }));
}

#[test]
fn test_iloc_column_out_of_range() {
    let df = sample_frame();

    let err = df.iloc(Selector::All, Selector::positions([3])).unwrap_err();

    assert_eq!(
        err,
        FrameError::IndexOutOfRange {
            position: 3,
            length: 3,
            axis: Axis::Columns,
        }
    );
}

#[test]
fn test_iloc_rejects_non_integer_items() {
    let df = sample_frame();

    let err = df.iloc(Selector::labels(["one"]), Selector::All).unwrap_err();

    assert_eq!(
        err,
        FrameError::InvalidPosition {
            item: "one".to_string(),
            axis: Axis::Rows,
        }
    );
}

#[test]
fn test_iloc_rejects_numeric_strings() {
    let df = sample_frame();

    let err = df.iloc(Selector::labels(["2"]), Selector::All).unwrap_err();

    assert_eq!(
        err,
        FrameError::InvalidPosition {
            item: "2".to_string(),
            axis: Axis::Rows,
        }
    );
}

#[test]
fn test_iloc_slice_bounds_must_be_numeric() {
    let df = sample_frame();

    let err = df.iloc(Selector::slice("a:2"), Selector::All).unwrap_err();

    assert!(matches!(err, FrameError::MalformedSlice { ref slice, .. } if slice == "a:2"));
}

#[test]
fn test_slice_with_two_colons_is_malformed() {
    let df = sample_frame();

    let err = df.iloc(Selector::slice("0:1:2"), Selector::All).unwrap_err();
    assert!(matches!(err, FrameError::MalformedSlice { .. }));

    let err = df.loc(Selector::slice("0:1:2"), Selector::All).unwrap_err();
    assert!(matches!(err, FrameError::MalformedSlice { .. }));
}

#[test]
fn test_iloc_slice_clamps_and_counts_from_end() {
    let df = sample_frame();

    let clamped = df.iloc(Selector::slice("2:100"), Selector::All).unwrap();
    assert_eq!(clamped.index(), [Label::Int(2), Label::Int(3)]);

    let last_two = df.iloc(Selector::slice("-2:"), Selector::All).unwrap();
    assert_eq!(last_two.index(), [Label::Int(2), Label::Int(3)]);

    let reversed = df.iloc(Selector::slice("3:1"), Selector::All).unwrap();
    assert_eq!(reversed.shape(), (0, 3));
}

#[test]
fn test_loc_slice_is_inclusive() {
    let df = labelled_frame();

    let result = df.loc(Selector::slice("b:c"), Selector::All).unwrap();
    assert_eq!(
        result.index(),
        [Label::Str("b".to_string()), Label::Str("c".to_string())]
    );
    assert_eq!(result.values(), ints(&[&[3, 4], &[5, 6]]));

    let open_end = df.loc(Selector::slice("c:"), Selector::All).unwrap();
    assert_eq!(open_end.shape(), (2, 2));

    let open_start = df.loc(Selector::slice(":b"), Selector::All).unwrap();
    assert_eq!(open_start.shape(), (2, 2));
}

#[test]
fn test_loc_slice_on_default_index_includes_end() {
    let df = sample_frame();

    let result = df.loc(Selector::slice("1:2"), Selector::slice("A:B")).unwrap();

    assert_eq!(result.values(), ints(&[&[4, 5], &[20, 30]]));
    assert_eq!(result.column_names(), ["A", "B"]);
}

#[test]
fn test_loc_slice_unknown_bound() {
    let df = labelled_frame();

    let err = df.loc(Selector::slice("b:z"), Selector::All).unwrap_err();

    assert_eq!(
        err,
        FrameError::UnknownLabel {
            labels: vec!["z".to_string()],
            axis: Axis::Rows,
        }
    );
}

#[test]
fn test_loc_missing_label_names_label() {
    let df = sample_frame();

    let err = df.loc(Selector::labels(["missing"]), Selector::All).unwrap_err();

    assert_eq!(
        err,
        FrameError::UnknownLabel {
            labels: vec!["missing".to_string()],
            axis: Axis::Rows,
        }
    );
    assert!(err.to_string().contains("'missing'"));
}

#[test]
fn test_loc_reports_every_missing_column() {
    let df = sample_frame();

    let err = df
        .loc(Selector::All, Selector::labels(["A", "Q", "Z"]))
        .unwrap_err();

    assert_eq!(
        err,
        FrameError::UnknownLabel {
            labels: vec!["Q".to_string(), "Z".to_string()],
            axis: Axis::Columns,
        }
    );
}

#[test]
fn test_loc_and_iloc_agree_on_default_index() {
    let df = sample_frame();

    for i in 0..4usize {
        let by_position = df.iloc(Selector::positions([i]), Selector::All).unwrap();
        let by_label = df.loc(Selector::labels([i]), Selector::All).unwrap();
        assert_eq!(by_position.values(), by_label.values());
        assert_eq!(by_position.index(), by_label.index());
    }
}

#[test]
fn test_loc_string_labels() {
    let df = labelled_frame();

    let result = df
        .loc(Selector::labels(["d", "a"]), Selector::labels(["y"]))
        .unwrap();

    assert_eq!(result.values(), ints(&[&[8], &[2]]));
    assert_eq!(
        result.index(),
        [Label::Str("d".to_string()), Label::Str("a".to_string())]
    );
}

#[test]
fn test_integer_and_string_labels_differ() {
    let df = labelled_frame();

    let err = df.loc(Selector::labels([0i64]), Selector::All).unwrap_err();

    assert!(matches!(err, FrameError::UnknownLabel { .. }));
}

#[test]
fn test_boolean_mask_selects_in_order() {
    let df = sample_frame();

    let result = df
        .loc(
            Selector::mask(vec![true, false, false, true]),
            Selector::mask(vec![false, true, true]),
        )
        .unwrap();

    assert_eq!(result.values(), ints(&[&[2, 3], &[89, 78]]));
    assert_eq!(result.index(), [Label::Int(0), Label::Int(3)]);
}

#[test]
fn test_boolean_mask_length_mismatch() {
    let df = sample_frame();

    let err = df
        .iloc(Selector::mask(vec![true, false]), Selector::All)
        .unwrap_err();

    assert!(matches!(
        err,
        FrameError::LengthMismatch {
            expected: 4,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_empty_selection_keeps_column_names() {
    let df = sample_frame();

    let result = df
        .iloc(Selector::mask(vec![false; 4]), Selector::labels([0i64, 2]))
        .unwrap();

    assert_eq!(result.shape(), (0, 2));
    assert_eq!(result.column_names(), ["A", "C"]);
    assert_eq!(result.dtypes(), [Dtype::Undefined, Dtype::Undefined]);
    assert!(result.values().is_empty());
}

#[test]
fn test_repeated_items_are_selected_once() {
    let df = sample_frame();

    let result = df
        .iloc(Selector::positions([1, 1, 0]), Selector::All)
        .unwrap();

    assert_eq!(result.index(), [Label::Int(1), Label::Int(0)]);
}

#[test]
fn test_selection_reinfers_dtypes() {
    let df = DataFrame::from_rows(
        vec![
            vec![Value::from(1), Value::from("x")],
            vec![Value::from(2), Value::from(2)],
        ],
        vec!["A", "B"],
    )
    .unwrap();
    assert_eq!(df.dtypes(), [Dtype::Int, Dtype::String]);

    let narrowed = df.iloc(Selector::positions([1]), Selector::All).unwrap();

    assert_eq!(narrowed.column("B").unwrap().dtype(), Dtype::Int);
    // The parent keeps its own dtypes.
    assert_eq!(df.dtypes(), [Dtype::Int, Dtype::String]);
}

#[test]
fn test_resolver_defaults_to_all_positions() {
    let index = Label::range(3);
    let resolver = SelectorResolver::rows(&index, IndexingMode::Position);

    assert_eq!(resolver.resolve(&Selector::All).unwrap(), vec![0, 1, 2]);
    assert_eq!(resolver.resolve(&Selector::slice(":")).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_resolver_on_column_names() {
    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let resolver = SelectorResolver::columns(&names, IndexingMode::Label);

    assert_eq!(resolver.resolve(&Selector::slice("b:c")).unwrap(), vec![1, 2]);
    assert_eq!(resolver.resolve(&Selector::labels(["c", "a"])).unwrap(), vec![2, 0]);
    assert_eq!(resolver.axis(), Axis::Columns);
}

#[test]
fn test_selector_parse() {
    assert_eq!(Selector::parse("0:2"), Selector::Slice("0:2".to_string()));
    assert_eq!(
        Selector::parse("a, 3"),
        Selector::Items(vec![Label::Str("a".to_string()), Label::Int(3)])
    );
    assert_eq!(Selector::parse(""), Selector::All);
}

#[test]
fn test_series_selection() {
    let df = labelled_frame();
    let series = df.column("x").unwrap();

    let picked = series.loc(Selector::slice("b:c")).unwrap();
    assert_eq!(picked.values(), [Value::Integer(3), Value::Integer(5)]);
    assert_eq!(picked.name(), "x");

    let last = series.iloc(Selector::slice("-1:")).unwrap();
    assert_eq!(last.values(), [Value::Integer(7)]);
}
