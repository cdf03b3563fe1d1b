mod eval;

mod expr;
pub use expr::Expr;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_field;
pub use expr_field::ExprField;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_var;
pub use expr_var::ExprVar;

mod method;
pub use method::Method;

mod op_binary;
pub use op_binary::BinaryOp;

mod ty;
pub use ty::Type;

mod ty_enum;
pub use ty_enum::{EnumVariant, TypeEnum};

mod value;
pub use value::Value;

mod value_cast;

mod value_cmp;

mod value_enum;
pub use value_enum::ValueEnum;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
