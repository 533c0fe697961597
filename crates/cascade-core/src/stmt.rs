mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_or;
pub use expr_or::ExprOr;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::{OrderBy, OrderByExpr};

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod source;
pub use source::{Join, Source};

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

mod value_serde;
