use docsource::bail;
use docsource::doc::{Document, Value};
use docsource::expression::reference::FromSourceResolver;
use docsource::expression::{Expr, InputFactory};
use docsource::metadata::{ColumnIdent, Functions, GeneratedColumn, Scalar};
use docsource::source::{GeneratedColumns, Validation};
use docsource::Result;

use std::sync::Arc;

const MILLIS_PER_DAY: i64 = 86_400_000;

struct DateTrunc;

impl Scalar for DateTrunc {
    fn name(&self) -> &str {
        "date_trunc"
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value> {
        match (&args[0], &args[1]) {
            (Value::String(unit), Value::I64(ts)) if unit == "day" => {
                Ok(Value::I64(ts - ts.rem_euclid(MILLIS_PER_DAY)))
            }
            (_, Value::Null) => Ok(Value::Null),
            _ => bail!("date_trunc: unsupported arguments"),
        }
    }
}

fn functions() -> Arc<Functions> {
    let mut functions = Functions::new();
    functions.register(DateTrunc);
    Arc::new(functions)
}

fn doc(json: &str) -> Document {
    Document::from_json(json.as_bytes()).unwrap()
}

/// `day GENERATED ALWAYS AS date_trunc('day', ts)`
fn day_from_ts() -> GeneratedColumn {
    GeneratedColumn::new(
        ColumnIdent::new("day"),
        Expr::func(
            "date_trunc",
            [Expr::value("day"), Expr::column(ColumnIdent::new("ts"))],
        ),
    )
}

// 2014-03-26T23:00:00Z and its UTC day boundaries
const TS: i64 = 1_395_874_800_000;
const SAME_DAY: i64 = 1_395_792_000_000;
const PREVIOUS_DAY: i64 = 1_395_705_600_000;

// ---------------------------------------------------------------------------
// Empty pipeline: a no-op without caller special-casing
// ---------------------------------------------------------------------------

#[test]
fn empty_pipeline_injects_nothing() {
    let generated = GeneratedColumns::empty();
    generated.set_next_row(&doc(r#"{"a": 1}"#));
    assert_eq!(generated.to_inject().count(), 0);
}

#[test]
fn empty_pipeline_never_fails_validation() {
    let generated = GeneratedColumns::empty();
    generated.set_next_row(&doc(r#"{"a": 1}"#));
    assert!(generated
        .validate_value(&ColumnIdent::new("a"), &Value::I64(999))
        .is_ok());
}

// ---------------------------------------------------------------------------
// Routing: supplied targets are validated, the rest injected
// ---------------------------------------------------------------------------

#[test]
fn unsupplied_target_is_injected() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::GeneratedValueMatch,
        &FromSourceResolver,
        &[ColumnIdent::new("ts")],
        &[day_from_ts()],
    )
    .unwrap();

    generated.set_next_row(&doc(&format!(r#"{{"ts": {TS}}}"#)));
    let injected: Vec<_> = generated
        .to_inject()
        .map(|(column, input)| (column.fqn(), input.value().unwrap()))
        .collect();
    assert_eq!(injected, [("day".to_string(), Value::I64(SAME_DAY))]);
}

#[test]
fn supplied_target_is_not_injected() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::GeneratedValueMatch,
        &FromSourceResolver,
        &[ColumnIdent::new("ts"), ColumnIdent::new("day")],
        &[day_from_ts()],
    )
    .unwrap();

    assert_eq!(generated.to_inject().count(), 0);
}

// ---------------------------------------------------------------------------
// Validation: supplied values must match the computed ones exactly
// ---------------------------------------------------------------------------

#[test]
fn mismatched_value_fails_naming_the_column() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::GeneratedValueMatch,
        &FromSourceResolver,
        &[ColumnIdent::new("ts"), ColumnIdent::new("day")],
        &[day_from_ts()],
    )
    .unwrap();

    generated.set_next_row(&doc(&format!(r#"{{"ts": {TS}}}"#)));
    let err = generated
        .validate_value(&ColumnIdent::new("day"), &Value::I64(PREVIOUS_DAY))
        .unwrap_err();
    assert!(err.is_generated_value_mismatch());
    assert!(err.to_string().contains("day"));
    assert!(err.to_string().contains(&PREVIOUS_DAY.to_string()));
    assert!(err.to_string().contains(&SAME_DAY.to_string()));
}

#[test]
fn matching_value_passes() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::GeneratedValueMatch,
        &FromSourceResolver,
        &[ColumnIdent::new("ts"), ColumnIdent::new("day")],
        &[day_from_ts()],
    )
    .unwrap();

    generated.set_next_row(&doc(&format!(r#"{{"ts": {TS}}}"#)));
    assert!(generated
        .validate_value(&ColumnIdent::new("day"), &Value::I64(SAME_DAY))
        .is_ok());
}

#[test]
fn validation_none_skips_the_check() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::None,
        &FromSourceResolver,
        &[ColumnIdent::new("ts"), ColumnIdent::new("day")],
        &[day_from_ts()],
    )
    .unwrap();

    generated.set_next_row(&doc(&format!(r#"{{"ts": {TS}}}"#)));
    assert!(generated
        .validate_value(&ColumnIdent::new("day"), &Value::I64(PREVIOUS_DAY))
        .is_ok());
}

#[test]
fn non_generated_column_is_never_validated() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::GeneratedValueMatch,
        &FromSourceResolver,
        &[ColumnIdent::new("ts")],
        &[day_from_ts()],
    )
    .unwrap();

    generated.set_next_row(&doc(&format!(r#"{{"ts": {TS}}}"#)));
    assert!(generated
        .validate_value(&ColumnIdent::new("ts"), &Value::I64(0))
        .is_ok());
}

// ---------------------------------------------------------------------------
// Snapshot consistency: rebinding moves every expression at once
// ---------------------------------------------------------------------------

#[test]
fn rebinding_updates_computed_values() {
    let factory = InputFactory::new(functions());
    let generated = GeneratedColumns::new(
        &factory,
        Validation::GeneratedValueMatch,
        &FromSourceResolver,
        &[ColumnIdent::new("ts")],
        &[day_from_ts()],
    )
    .unwrap();

    generated.set_next_row(&doc(&format!(r#"{{"ts": {TS}}}"#)));
    let first: Vec<_> = generated
        .to_inject()
        .map(|(_, input)| input.value().unwrap())
        .collect();
    assert_eq!(first, [Value::I64(SAME_DAY)]);

    let next_ts = TS + 2 * MILLIS_PER_DAY;
    generated.set_next_row(&doc(&format!(r#"{{"ts": {next_ts}}}"#)));
    let second: Vec<_> = generated
        .to_inject()
        .map(|(_, input)| input.value().unwrap())
        .collect();
    assert_eq!(second, [Value::I64(SAME_DAY + 2 * MILLIS_PER_DAY)]);
}
