//! Integration tests for the LessThan cross-field constraint
//!
//! Covers single and list declarations, null handling, equality, message
//! templates, and the configuration / invocation error paths.

use jfw_core::{MessageCatalog, ReportOn};
use jfw_validation::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::error::Error;
use std::sync::Arc;

#[derive(Default)]
struct Range {
    from_number: Option<i64>,
    to_number: Option<i64>,
}

fn range(from: Option<i64>, to: Option<i64>) -> Range {
    Range {
        from_number: from,
        to_number: to,
    }
}

fn range_properties() -> PropertyMap<Range> {
    PropertyMap::named("Range")
        .property("fromNumber", |r: &Range| r.from_number)
        .property("toNumber", |r: &Range| r.to_number)
}

fn range_validator(allow_same: bool) -> Validator<Range> {
    Validator::builder(range_properties())
        .constrain(LessThan::new("fromNumber", "toNumber").allow_same(allow_same))
        .unwrap()
        .build()
}

#[derive(Default)]
struct Ranges {
    from_number1: Option<i64>,
    to_number1: Option<i64>,
    from_number2: Option<i64>,
    to_number2: Option<i64>,
}

fn ranges_properties() -> PropertyMap<Ranges> {
    PropertyMap::named("Ranges")
        .property("fromNumber1", |r: &Ranges| r.from_number1)
        .property("toNumber1", |r: &Ranges| r.to_number1)
        .property("fromNumber2", |r: &Ranges| r.from_number2)
        .property("toNumber2", |r: &Ranges| r.to_number2)
}

fn ranges_validator() -> Validator<Ranges> {
    Validator::builder(ranges_properties())
        .constrain_all([
            LessThan::new("fromNumber1", "toNumber1"),
            LessThan::new("fromNumber2", "toNumber2"),
        ])
        .unwrap()
        .build()
}

#[rstest]
#[case(10000, 10001)]
#[case(-5, 0)]
#[case(0, 1)]
#[case(i64::MIN, i64::MAX)]
fn test_smaller_from_is_valid_and_reversed_is_invalid(#[case] a: i64, #[case] b: i64) {
    let validator = range_validator(false);

    assert!(validator.validate(&range(Some(a), Some(b))).unwrap().is_empty());
    assert_eq!(validator.validate(&range(Some(b), Some(a))).unwrap().len(), 1);
}

#[rstest]
#[case(false, 1)]
#[case(true, 0)]
fn test_equal_values_depend_on_allow_same(#[case] allow_same: bool, #[case] expected: usize) {
    let violations = range_validator(allow_same)
        .validate(&range(Some(10000), Some(10000)))
        .unwrap();
    assert_eq!(violations.len(), expected);
}

#[rstest]
#[case(None, None)]
#[case(Some(10001), None)]
#[case(None, Some(10000))]
fn test_null_values_are_valid(#[case] from: Option<i64>, #[case] to: Option<i64>) {
    assert!(range_validator(false).validate(&range(from, to)).unwrap().is_empty());
}

#[test]
fn test_default_message() {
    let violations = range_validator(false)
        .validate(&range(Some(10001), Some(10000)))
        .unwrap();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "enter a value smaller than the compared field");
    assert_eq!(violations[0].property_path, "toNumber");
    assert_eq!(violations[0].constraint_kind, "LessThan");
}

#[test]
fn test_report_on_from() {
    let validator = Validator::builder(range_properties())
        .constrain(LessThan::new("fromNumber", "toNumber").report_on(ReportOn::From))
        .unwrap()
        .build();

    let violations = validator.validate(&range(Some(2), Some(1))).unwrap();
    assert_eq!(violations[0].property_path, "fromNumber");
}

#[test]
fn test_list_all_valid() {
    let target = Ranges {
        from_number1: Some(10000),
        to_number1: Some(10001),
        from_number2: Some(10001),
        to_number2: Some(100002),
    };
    assert!(ranges_validator().validate(&target).unwrap().is_empty());
}

#[test]
fn test_list_some_errors() {
    let target = Ranges {
        from_number1: Some(10001),
        to_number1: Some(10000),
        from_number2: Some(100000),
        to_number2: Some(100001),
    };
    let violations = ranges_validator().validate(&target).unwrap();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].property_path, "toNumber1");
}

#[test]
fn test_list_all_errors() {
    let target = Ranges {
        from_number1: Some(10001),
        to_number1: Some(10000),
        from_number2: Some(100001),
        to_number2: Some(100000),
    };
    let violations = ranges_validator().validate(&target).unwrap();

    let paths: Vec<_> = violations.iter().map(|v| v.property_path.as_str()).collect();
    assert_eq!(paths, vec!["toNumber1", "toNumber2"]);
}

#[test]
fn test_override_messages() {
    let catalog = MessageCatalog::new().with(
        "jfw.validation.constraints.LessThan.message",
        "小さな値を入力してください。",
    );
    let validator = Validator::builder(ranges_properties())
        .with_messages(Arc::new(catalog))
        .constrain_all([
            LessThan::new("fromNumber1", "toNumber1")
                .message("{from}は{to}よりも{jfw.validation.constraints.LessThan.message}")
                .report_on(ReportOn::From),
            LessThan::new("fromNumber2", "toNumber2")
                .message("fromNumber2はtoNumber2よりも小さな値を入力してください。")
                .report_on(ReportOn::From),
        ])
        .unwrap()
        .build();

    let target = Ranges {
        from_number1: Some(10001),
        to_number1: Some(10000),
        from_number2: Some(100001),
        to_number2: Some(100000),
    };
    let violations = validator.validate(&target).unwrap();

    let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "fromNumber1はtoNumber1よりも小さな値を入力してください。",
            "fromNumber2はtoNumber2よりも小さな値を入力してください。",
        ]
    );
    let paths: Vec<_> = violations.iter().map(|v| v.property_path.as_str()).collect();
    assert_eq!(paths, vec!["fromNumber1", "fromNumber2"]);
}

#[test]
fn test_unknown_property_fails_at_registration() {
    let err = Validator::builder(range_properties())
        .constrain(LessThan::new("fromNumber", "toNumbr"))
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigurationError::UnknownProperty { ref property, ref type_name }
            if property == "toNumbr" && type_name == "Range"
    ));
}

#[test]
fn test_empty_property_names_fail_at_registration() {
    let err = Validator::builder(PropertyMap::<Range>::named("Empty"))
        .constrain(LessThan::new("", ""))
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptyPropertyName { .. }));
}

#[test]
fn test_evaluate_reports_unknown_property() {
    let err = evaluate(&Range::default(), &range_properties(), "missing", "toNumber", false)
        .unwrap_err();
    assert!(err.is_configuration());
}

#[derive(Debug)]
struct Boom;

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("accessor exploded")
    }
}

impl Error for Boom {}

#[test]
fn test_failing_accessor_is_an_invocation_error() {
    let properties = PropertyMap::<Range>::named("Exploding")
        .try_property("fromNumber", |_: &Range| -> Result<Option<i64>, Boom> { Err(Boom) })
        .try_property("toNumber", |_: &Range| -> Result<Option<i64>, Boom> { Err(Boom) });
    let validator = Validator::builder(properties)
        .constrain(LessThan::new("fromNumber", "toNumber"))
        .unwrap()
        .build();

    let err = validator.validate(&Range::default()).unwrap_err();

    assert!(err.is_invocation());
    let ValidationError::Invocation(invocation) = &err else {
        panic!("expected invocation error, got {:?}", err);
    };
    assert_eq!(invocation.property, "fromNumber");
    assert!(invocation.source.is::<Boom>());
    assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("accessor exploded"));
}

#[test]
fn test_failing_accessor_is_reported_even_when_other_side_is_null() {
    let properties = PropertyMap::<Range>::named("HalfBroken")
        .property("fromNumber", |_: &Range| None::<i64>)
        .try_property("toNumber", |_: &Range| -> Result<Option<i64>, Boom> { Err(Boom) });

    let err = evaluate(&Range::default(), &properties, "fromNumber", "toNumber", false).unwrap_err();
    assert!(err.is_invocation());
}

struct Mixed {
    integer: i64,
    float: f64,
}

fn mixed_properties() -> PropertyMap<Mixed> {
    PropertyMap::named("Mixed")
        .property("integer", |m: &Mixed| Some(m.integer))
        .property("float", |m: &Mixed| Some(m.float))
}

// 2^53 + 1 has no exact f64 counterpart
#[rstest]
#[case("integer", "float", true, Comparison::Invalid)]
#[case("float", "integer", false, Comparison::Valid)]
fn test_integer_float_comparison_beyond_f64_precision(
    #[case] from: &str,
    #[case] to: &str,
    #[case] allow_same: bool,
    #[case] expected: Comparison,
) {
    let target = Mixed {
        integer: 9_007_199_254_740_993,
        float: 9_007_199_254_740_992.0,
    };

    let outcome = evaluate(&target, &mixed_properties(), from, to, allow_same).unwrap();
    assert_eq!(outcome, expected);
}

#[test]
fn test_builder_error_is_reported_for_misspelled_list_entry() {
    let err = Validator::builder(range_properties())
        .constrain_all([
            LessThan::new("fromNumber", "toNumber"),
            LessThan::new("fromNumbr", "toNumber"),
        ])
        .unwrap_err();
    assert!(err.to_string().contains("fromNumbr"));
}

#[test]
fn test_incomparable_kinds_are_a_configuration_error() {
    let properties = PropertyMap::<Range>::named("Mixed")
        .property("number", |_: &Range| Some(1))
        .property("text", |_: &Range| Some("2"));

    let err = evaluate(&Range::default(), &properties, "number", "text", false).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Configuration(ConfigurationError::Incomparable { .. })
    ));
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = Arc::new(range_validator(false));

    let handles: Vec<_> = (0..4_i64)
        .map(|i| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || {
                validator
                    .validate(&range(Some(i + 1), Some(i)))
                    .map(|violations| violations.len())
                    .unwrap_or(0)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
