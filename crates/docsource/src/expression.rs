mod collect;
pub use collect::{CollectExpression, CollectRef};

mod expr;
pub use expr::Expr;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_excluded;
pub use expr_excluded::ExprExcluded;

mod expr_func;
pub use expr_func::ExprFunc;

mod function_expression;
pub use function_expression::FunctionExpression;

mod input;
pub use input::Input;

mod input_factory;
pub use input_factory::{InputFactory, RefContext};

pub mod reference;
pub use reference::ReferenceResolver;
