use sparql_bridge_model::TypedValue;

/// A relational scalar expression handed to the compiler by the host planner.
///
/// This is a closed sum type: every expression kind the deparser knows about has a variant, and
/// anything the host cannot express in these terms is simply not offered for pushdown.
#[derive(Clone, Debug)]
pub enum ScalarExpr {
    /// A reference to a column of the foreign table.
    Column(String),
    /// A constant, already parsed into the term model.
    Literal(TypedValue),
    Binary {
        op: BinaryOperator,
        lhs: Box<ScalarExpr>,
        rhs: Box<ScalarExpr>,
    },
    /// A function call, identified by its host-side name.
    Function {
        name: String,
        args: Vec<ScalarExpr>,
    },
    /// `expr [NOT] IN (list...)`.
    InList {
        expr: Box<ScalarExpr>,
        list: Vec<ScalarExpr>,
        negated: bool,
    },
    /// An implicit cast. The deparser looks through it.
    Cast(Box<ScalarExpr>),
    /// `expr IS [NOT] NULL`.
    IsNull {
        expr: Box<ScalarExpr>,
        negated: bool,
    },
}

impl ScalarExpr {
    pub fn column(name: impl Into<String>) -> Self {
        ScalarExpr::Column(name.into())
    }

    pub fn literal(value: TypedValue) -> Self {
        ScalarExpr::Literal(value)
    }

    pub fn binary(op: BinaryOperator, lhs: ScalarExpr, rhs: ScalarExpr) -> Self {
        ScalarExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn function(name: impl Into<String>, args: Vec<ScalarExpr>) -> Self {
        ScalarExpr::Function {
            name: name.into(),
            args,
        }
    }
}

/// The operators the deparser is willing to translate. Everything else is evaluated locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Add,
    Mul,
    Like,
    ILike,
    NotLike,
    NotILike,
}

impl BinaryOperator {
    pub(crate) fn is_relative(self) -> bool {
        matches!(
            self,
            BinaryOperator::Lt | BinaryOperator::Gt | BinaryOperator::LtEq | BinaryOperator::GtEq
        )
    }

    pub(crate) fn is_like(self) -> bool {
        matches!(
            self,
            BinaryOperator::Like
                | BinaryOperator::ILike
                | BinaryOperator::NotLike
                | BinaryOperator::NotILike
        )
    }

    /// The SPARQL spelling, for the operators that render as infix operators.
    pub(crate) fn sparql_spelling(self) -> Option<&'static str> {
        Some(match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Mul => "*",
            BinaryOperator::Like
            | BinaryOperator::ILike
            | BinaryOperator::NotLike
            | BinaryOperator::NotILike => return None,
        })
    }
}

/// One key of the host's requested sort order.
#[derive(Clone, Debug)]
pub struct SortKey {
    pub expr: ScalarExpr,
    pub descending: bool,
}

impl SortKey {
    pub fn ascending(expr: ScalarExpr) -> Self {
        Self {
            expr,
            descending: false,
        }
    }

    pub fn descending(expr: ScalarExpr) -> Self {
        Self {
            expr,
            descending: true,
        }
    }
}
