use docsource::bail;
use docsource::doc::{Document, Value};
use docsource::expression::reference::{
    FromSourceResolver, LiteralCollectExpression, LiteralResolver, MapBackedResolver,
};
use docsource::expression::{CollectRef, Expr, InputFactory};
use docsource::metadata::{ColumnIdent, Functions, Scalar};
use docsource::Result;

use std::sync::Arc;

struct Add;

impl Scalar for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value> {
        match (&args[0], &args[1]) {
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a + b)),
            (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
            _ => bail!("add: expected integer arguments"),
        }
    }
}

struct Boom;

impl Scalar for Boom {
    fn name(&self) -> &str {
        "boom"
    }

    fn evaluate(&self, _args: &[Value]) -> Result<Value> {
        bail!("boom: scalar exploded")
    }
}

fn functions() -> Arc<Functions> {
    let mut functions = Functions::new();
    functions.register(Add);
    functions.register(Boom);
    Arc::new(functions)
}

fn doc(json: &str) -> Document {
    Document::from_json(json.as_bytes()).unwrap()
}

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

#[test]
fn literal_evaluates_to_itself() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let input = ctx.add(&Expr::value(42i64)).unwrap();
    assert_eq!(input.value().unwrap(), Value::I64(42));
    assert!(ctx.expressions().is_empty());
}

#[test]
fn null_literal() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let input = ctx.add(&Expr::null()).unwrap();
    assert_eq!(input.value().unwrap(), Value::Null);
}

// ---------------------------------------------------------------------------
// Column references bound through FromSourceResolver
// ---------------------------------------------------------------------------

#[test]
fn column_reads_bound_row() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let input = ctx.add(&Expr::column(ColumnIdent::new("x"))).unwrap();

    ctx.set_next_row(&doc(r#"{"x": 5}"#));
    assert_eq!(input.value().unwrap(), Value::I64(5));
}

#[test]
fn column_rebinds_across_rows() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let input = ctx.add(&Expr::column(ColumnIdent::new("x"))).unwrap();

    ctx.set_next_row(&doc(r#"{"x": 1}"#));
    assert_eq!(input.value().unwrap(), Value::I64(1));

    ctx.set_next_row(&doc(r#"{"x": 2}"#));
    assert_eq!(input.value().unwrap(), Value::I64(2));

    // no state leaks from the previous row
    ctx.set_next_row(&doc(r#"{"y": 3}"#));
    assert_eq!(input.value().unwrap(), Value::Null);
}

#[test]
fn nested_column_extraction() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let column = ColumnIdent::with_path("obj", vec!["a".to_string(), "b".to_string()]);
    let input = ctx.add(&Expr::column(column)).unwrap();

    ctx.set_next_row(&doc(r#"{"obj": {"a": {"b": "deep"}}}"#));
    assert_eq!(input.value().unwrap(), Value::from("deep"));
}

// ---------------------------------------------------------------------------
// Function application
// ---------------------------------------------------------------------------

#[test]
fn function_over_column_and_literal() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let expr = Expr::func(
        "add",
        [Expr::column(ColumnIdent::new("x")), Expr::value(10i64)],
    );
    let input = ctx.add(&expr).unwrap();

    ctx.set_next_row(&doc(r#"{"x": 32}"#));
    assert_eq!(input.value().unwrap(), Value::I64(42));
}

#[test]
fn nested_function_calls() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let expr = Expr::func(
        "add",
        [
            Expr::func("add", [Expr::value(1i64), Expr::value(2i64)]),
            Expr::value(3i64),
        ],
    );
    let input = ctx.add(&expr).unwrap();
    assert_eq!(input.value().unwrap(), Value::I64(6));
}

#[test]
fn scalar_failure_propagates_unchanged() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let input = ctx.add(&Expr::func("boom", [])).unwrap();
    let err = input.value().unwrap_err();
    assert_eq!(err.to_string(), "boom: scalar exploded");
}

#[test]
fn unknown_function_is_a_construction_error() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let err = ctx.add(&Expr::func("no_such_fn", [])).unwrap_err();
    assert!(err.is_unknown_function());
}

// ---------------------------------------------------------------------------
// Literal resolver: same constant regardless of the row
// ---------------------------------------------------------------------------

#[test]
fn literal_resolver_ignores_rows() {
    let factory = InputFactory::new(functions());
    let resolver = LiteralResolver::new("fixed");
    let mut ctx = factory.ctx_for_refs(&resolver);
    let input = ctx.add(&Expr::column(ColumnIdent::new("anything"))).unwrap();

    ctx.set_next_row(&doc(r#"{"anything": "row value"}"#));
    assert_eq!(input.value().unwrap(), Value::from("fixed"));
}

// ---------------------------------------------------------------------------
// Map-backed resolver: exhaustive static table
// ---------------------------------------------------------------------------

#[test]
fn map_backed_resolves_known_columns() {
    let resolver: MapBackedResolver = [
        (
            ColumnIdent::new("schema_name"),
            CollectRef::new(LiteralCollectExpression::new("doc")),
        ),
        (
            ColumnIdent::new("id"),
            CollectRef::new(LiteralCollectExpression::new(3i64)),
        ),
    ]
    .into_iter()
    .collect();

    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&resolver);
    let input = ctx.add(&Expr::column(ColumnIdent::new("schema_name"))).unwrap();
    assert_eq!(input.value().unwrap(), Value::from("doc"));
}

#[test]
fn map_backed_miss_is_unknown_column() {
    let resolver: MapBackedResolver = [(
        ColumnIdent::new("id"),
        CollectRef::new(LiteralCollectExpression::new(3i64)),
    )]
    .into_iter()
    .collect();

    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&resolver);
    let err = ctx.add(&Expr::column(ColumnIdent::new("nope"))).unwrap_err();
    assert!(err.is_unknown_column());
    assert!(err.to_string().contains("nope"));
}

// ---------------------------------------------------------------------------
// Excluded references
// ---------------------------------------------------------------------------

#[test]
fn excluded_outside_upsert_context_is_an_error() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let err = ctx.add(&Expr::excluded(0)).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn excluded_resolves_from_insert_row() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let row = [Value::I64(10), Value::from("b")];
    let input = ctx.add_with_excluded(&Expr::excluded(1), &row).unwrap();
    assert_eq!(input.value().unwrap(), Value::from("b"));
}

#[test]
fn excluded_index_out_of_range() {
    let factory = InputFactory::new(functions());
    let mut ctx = factory.ctx_for_refs(&FromSourceResolver);
    let err = ctx
        .add_with_excluded(&Expr::excluded(5), &[Value::I64(1)])
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}
