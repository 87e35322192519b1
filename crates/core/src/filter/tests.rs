//! Tests for the filter model: builder invariants, wire shape and validation.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

#[fixture]
fn descriptor() -> FilterDescriptor {
    FilterDescriptor::builder("Leave Report")
        .field(FilterField::link("employee", "Employee", "Employee").required())
        .field(
            FilterField::select(
                "quarter",
                "Quarter",
                vec![
                    SelectOption::new("Q1", "First"),
                    SelectOption::new("Q2", "Second"),
                ],
            )
            .required(),
        )
        .field(
            FilterField::int("year", "Year")
                .required()
                .with_default(FilterDefault::Int(2025)),
        )
        .field(FilterField::new("from_date", "From Date", FieldType::Date))
        .field(FilterField::new("approved", "Approved", FieldType::Check))
        .build()
        .expect("valid descriptor")
}

#[rstest]
fn test_builder_keeps_order(descriptor: FilterDescriptor) {
    assert_eq!(descriptor.report_name(), "Leave Report");
    assert_eq!(
        descriptor.fieldnames(),
        vec!["employee", "quarter", "year", "from_date", "approved"]
    );
    assert_eq!(descriptor.len(), 5);
    assert!(!descriptor.is_empty());
}

#[rstest]
fn test_field_lookup(descriptor: FilterDescriptor) {
    let employee = descriptor.field("employee").expect("employee field");
    assert_eq!(employee.link_target(), Some("Employee"));
    assert!(employee.select_options().is_none());
    assert!(descriptor.field("missing").is_none());
}

#[test]
fn test_empty_descriptor() {
    let descriptor = FilterDescriptor::builder("Empty").build().unwrap();
    assert!(descriptor.is_empty());
    assert!(descriptor.validate(&FilterValues::new()).is_ok());
}

#[test]
fn test_builder_rejects_duplicate_field() {
    let err = FilterDescriptor::builder("Report")
        .field(FilterField::int("year", "Year"))
        .field(FilterField::int("year", "Fiscal Year"))
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::DuplicateField(ref name) if name == "year"));
}

#[test]
fn test_builder_rejects_duplicate_option() {
    let err = FilterDescriptor::builder("Report")
        .field(FilterField::select(
            "month",
            "Month",
            vec![SelectOption::new("1", "January"), SelectOption::new("1", "Jan")],
        ))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        DescriptorError::DuplicateOption { ref fieldname, ref value }
            if fieldname == "month" && value == "1"
    ));
}

#[test]
fn test_builder_rejects_empty_fieldname() {
    let err = FilterDescriptor::builder("Report")
        .field(FilterField::int("", "Year"))
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::EmptyFieldName));
}

#[test]
fn test_builder_rejects_select_without_options() {
    let err = FilterDescriptor::builder("Report")
        .field(FilterField::new("month", "Month", FieldType::Select))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        DescriptorError::OptionsMismatch { ref fieldname, fieldtype: FieldType::Select }
            if fieldname == "month"
    ));
}

#[rstest]
#[case(FilterField::select("month", "Month", vec![]))]
#[case(FilterField::link("employee", "Employee", "  "))]
#[case(FilterField::new("employee", "Employee", FieldType::Link))]
#[case(FilterField {
    options: Some(FieldOptions::Select(vec![SelectOption::new("1", "One")])),
    ..FilterField::new("employee", "Employee", FieldType::Link)
})]
#[case(FilterField {
    options: Some(FieldOptions::Link("Employee".into())),
    ..FilterField::int("year", "Year")
})]
fn test_builder_rejects_options_not_fitting_type(#[case] field: FilterField) {
    let err = FilterDescriptor::builder("Report")
        .field(field)
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::OptionsMismatch { .. }));
}

#[rstest]
#[case(FilterField::link("employee", "Employee", "Employee").with_default(FilterDefault::Int(5)))]
#[case(FilterField::int("year", "Year").with_default(FilterDefault::Text("2025".into())))]
#[case(FilterField::int("year", "Year").with_default(FilterDefault::Text("soon".into())))]
#[case(
    FilterField::select("quarter", "Quarter", vec![SelectOption::new("Q1", "First")])
        .with_default(FilterDefault::Text("Q4".into()))
)]
#[case(FilterField::new("approved", "Approved", FieldType::Check).with_default(FilterDefault::Int(5)))]
#[case(FilterField::new("from_date", "From Date", FieldType::Date).with_default(FilterDefault::Text("2025-13-01".into())))]
#[case(FilterField::new("rate", "Rate", FieldType::Float).with_default(FilterDefault::Text("NaN".into())))]
fn test_builder_rejects_invalid_default(#[case] field: FilterField) {
    let fieldname = field.fieldname.clone();
    let err = FilterDescriptor::builder("Report")
        .field(field)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        DescriptorError::InvalidDefault { fieldname: ref f, .. } if *f == fieldname
    ));
}

#[test]
fn test_builder_accepts_defaults_fitting_type() {
    let descriptor = FilterDescriptor::builder("Report")
        .field(
            FilterField::select("quarter", "Quarter", vec![SelectOption::new("Q1", "First")])
                .with_default(FilterDefault::Text("Q1".into())),
        )
        .field(FilterField::new("approved", "Approved", FieldType::Check).with_default(FilterDefault::Int(1)))
        .field(
            FilterField::new("from_date", "From Date", FieldType::Date)
                .with_default(FilterDefault::Text("2025-01-01".into())),
        )
        .field(FilterField::new("rate", "Rate", FieldType::Float).with_default(FilterDefault::Int(3)))
        .field(
            FilterField::new("note", "Note", FieldType::Data)
                .with_default(FilterDefault::Text("n/a".into())),
        )
        .build()
        .expect("defaults fit their fields");
    assert_eq!(descriptor.len(), 5);
}

#[test]
fn test_field_serialization_shape() {
    let link = FilterField::link("employee", "Employee", "Employee").required();
    assert_eq!(
        serde_json::to_value(&link).unwrap(),
        json!({
            "fieldname": "employee",
            "label": "Employee",
            "fieldtype": "Link",
            "options": "Employee",
            "reqd": 1
        })
    );

    let select = FilterField::select("month", "Month", vec![SelectOption::new("1", "January")])
        .with_default(FilterDefault::Text("1".into()));
    assert_eq!(
        serde_json::to_value(&select).unwrap(),
        json!({
            "fieldname": "month",
            "label": "Month",
            "fieldtype": "Select",
            "options": [{ "value": "1", "label": "January" }],
            "reqd": 0,
            "default": "1"
        })
    );
}

#[test]
fn test_field_deserializes_host_shape() {
    let field: FilterField = serde_json::from_value(json!({
        "fieldname": "year",
        "label": "Year",
        "fieldtype": "Int",
        "reqd": 1,
        "default": 2025
    }))
    .unwrap();
    assert!(field.required);
    assert_eq!(field.default, Some(FilterDefault::Int(2025)));
    assert!(field.options.is_none());

    let field: FilterField = serde_json::from_value(json!({
        "fieldname": "active",
        "label": "Active",
        "fieldtype": "Check",
        "reqd": false
    }))
    .unwrap();
    assert!(!field.required);
}

#[test]
fn test_default_accessors() {
    assert_eq!(FilterDefault::Int(7).as_int(), Some(7));
    assert_eq!(FilterDefault::Int(7).as_text(), None);
    assert_eq!(FilterDefault::Text("7".into()).as_text(), Some("7"));
    assert_eq!(FilterDefault::Text("7".into()).as_int(), None);
}

#[rstest]
#[case(FieldType::Link, "Link")]
#[case(FieldType::Select, "Select")]
#[case(FieldType::Int, "Int")]
#[case(FieldType::Date, "Date")]
fn test_field_type_names(#[case] fieldtype: FieldType, #[case] name: &str) {
    assert_eq!(fieldtype.to_string(), name);
    assert_eq!(serde_json::to_value(fieldtype).unwrap(), json!(name));
}

// ============================================================================
// Validation
// ============================================================================

#[rstest]
fn test_validate_accepts_complete_submission(descriptor: FilterDescriptor) {
    let values = FilterValues::new()
        .with("employee", "HR-EMP-00001")
        .with("quarter", "Q2")
        .with("year", 2025)
        .with("from_date", "2025-04-01")
        .with("approved", true);
    assert!(descriptor.validate(&values).is_ok());
}

#[rstest]
fn test_validate_accepts_year_as_text(descriptor: FilterDescriptor) {
    let values: FilterValues = [("employee", "E1"), ("quarter", "Q1"), ("year", "2024")]
        .into_iter()
        .collect();
    assert!(descriptor.validate(&values).is_ok());
}

#[rstest]
fn test_validate_reports_missing_required_in_order(descriptor: FilterDescriptor) {
    let values = FilterValues::new().with("employee", "   ");
    let violations = descriptor.validate(&values).unwrap_err();
    let missing: Vec<&str> = violations
        .iter()
        .map(|v| match v {
            FilterViolation::MissingRequired { fieldname, .. } => fieldname.as_str(),
            other => panic!("unexpected violation: {other}"),
        })
        .collect();
    assert_eq!(missing, vec!["employee", "quarter", "year"]);
    assert_eq!(violations[0].to_string(), "Please select Employee");
}

#[rstest]
fn test_validate_rejects_unknown_option(descriptor: FilterDescriptor) {
    let values = FilterValues::new()
        .with("employee", "E1")
        .with("quarter", "Q5")
        .with("year", 2025);
    let violations = descriptor.validate(&values).unwrap_err();
    assert_eq!(
        violations,
        vec![FilterViolation::UnknownOption {
            fieldname: "quarter".into(),
            value: "Q5".into(),
        }]
    );
}

#[rstest]
#[case("year", json!("twenty"), FieldType::Int)]
#[case("year", json!(2025.5), FieldType::Int)]
#[case("from_date", json!("2025-02-30"), FieldType::Date)]
#[case("approved", json!("yes"), FieldType::Check)]
fn test_validate_rejects_malformed_values(
    descriptor: FilterDescriptor,
    #[case] fieldname: &str,
    #[case] value: serde_json::Value,
    #[case] expected: FieldType,
) {
    let values = FilterValues::new()
        .with("employee", "E1")
        .with("quarter", "Q1")
        .with("year", 2025)
        .with(fieldname, value);
    let violations = descriptor.validate(&values).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(matches!(
        &violations[0],
        FilterViolation::InvalidValue { fieldname: f, expected: e, .. }
            if f == fieldname && *e == expected
    ));
}

#[rstest]
fn test_validate_rejects_unknown_fields(descriptor: FilterDescriptor) {
    let values = FilterValues::new()
        .with("employee", "E1")
        .with("quarter", "Q1")
        .with("year", 2025)
        .with("zone", "north")
        .with("company", "Acme");
    let violations = descriptor.validate(&values).unwrap_err();
    assert_eq!(
        violations,
        vec![
            FilterViolation::UnknownField {
                fieldname: "company".into()
            },
            FilterViolation::UnknownField {
                fieldname: "zone".into()
            },
        ]
    );
}

#[test]
fn test_validate_treats_empty_array_and_object_as_blank() {
    let descriptor = FilterDescriptor::builder("Notes")
        .field(FilterField::link("employee", "Employee", "Employee").required())
        .field(FilterField::new("note", "Note", FieldType::Data).required())
        .build()
        .unwrap();
    let values = FilterValues::new()
        .with("employee", json!([]))
        .with("note", json!({}));
    let violations = descriptor.validate(&values).unwrap_err();
    assert_eq!(
        violations,
        vec![
            FilterViolation::MissingRequired {
                fieldname: "employee".into(),
                label: "Employee".into(),
            },
            FilterViolation::MissingRequired {
                fieldname: "note".into(),
                label: "Note".into(),
            },
        ]
    );
}

#[rstest]
fn test_validate_rejects_arrays_and_objects(descriptor: FilterDescriptor) {
    let values = FilterValues::new()
        .with("employee", json!(["E1", "E2"]))
        .with("quarter", json!({ "value": "Q1" }))
        .with("year", 2025);
    let violations = descriptor.validate(&values).unwrap_err();
    assert_eq!(
        violations,
        vec![
            FilterViolation::InvalidValue {
                fieldname: "employee".into(),
                value: r#"["E1","E2"]"#.into(),
                expected: FieldType::Link,
            },
            FilterViolation::InvalidValue {
                fieldname: "quarter".into(),
                value: r#"{"value":"Q1"}"#.into(),
                expected: FieldType::Select,
            },
        ]
    );
}

#[test]
fn test_validate_empty_composite_on_optional_field_is_accepted() {
    let descriptor = FilterDescriptor::builder("Notes")
        .field(FilterField::new("note", "Note", FieldType::Data))
        .build()
        .unwrap();
    assert!(descriptor.validate(&FilterValues::new().with("note", json!([]))).is_ok());
}

#[rstest]
#[case(json!("NaN"), false)]
#[case(json!("inf"), false)]
#[case(json!("-infinity"), false)]
#[case(json!("12.5"), true)]
#[case(json!(7), true)]
fn test_validate_float_must_be_finite(#[case] value: serde_json::Value, #[case] accepted: bool) {
    let descriptor = FilterDescriptor::builder("Rates")
        .field(FilterField::new("rate", "Rate", FieldType::Float))
        .build()
        .unwrap();
    let result = descriptor.validate(&FilterValues::new().with("rate", value));
    assert_eq!(result.is_ok(), accepted);
}

#[test]
fn test_violation_serialization() {
    let violation = FilterViolation::InvalidValue {
        fieldname: "year".into(),
        value: "abc".into(),
        expected: FieldType::Int,
    };
    assert_eq!(
        serde_json::to_value(&violation).unwrap(),
        json!({
            "kind": "invalid_value",
            "fieldname": "year",
            "value": "abc",
            "expected": "Int"
        })
    );
}
