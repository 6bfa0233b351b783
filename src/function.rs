// src/function.rs

use std::fmt;
use std::rc::Rc;

use ndarray::Array1;

/// Pointwise arithmetic used when combining two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    /// Combines two already evaluated values. Division follows IEEE-754,
    /// so a zero divisor yields `inf` or `NaN` rather than an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            ArithOp::Add => lhs + rhs,
            ArithOp::Subtract => lhs - rhs,
            ArithOp::Multiply => lhs * rhs,
            ArithOp::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithOp::Add => write!(f, "+"),
            ArithOp::Subtract => write!(f, "-"),
            ArithOp::Multiply => write!(f, "*"),
            ArithOp::Divide => write!(f, "/"),
        }
    }
}

/// Right-hand side of a composition: either another function or a plain scalar.
#[derive(Debug, Clone)]
pub enum Operand {
    Function(Function),
    Scalar(f64),
}

impl Operand {
    fn value_at(&self, x: f64) -> f64 {
        match self {
            Operand::Function(function) => function.call(x),
            Operand::Scalar(value) => *value,
        }
    }
}

impl From<Function> for Operand {
    fn from(function: Function) -> Self {
        Operand::Function(function)
    }
}

impl From<&Function> for Operand {
    fn from(function: &Function) -> Self {
        Operand::Function(function.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

/// An immutable unary numeric transformation.
///
/// Functions compose lazily: `&f + &g` builds a new `Function` that captures
/// both operands and only evaluates them when it is itself called. Cloning
/// shares the underlying transformation, so the same function can be
/// registered with a [`crate::Plotter`] and reused elsewhere.
///
/// ```
/// use function_plotter::Function;
///
/// let square = Function::new(|x| x * x);
/// let shifted = Function::new(|x| x + 3.0);
/// let combined = (&square + &shifted) / 2.0;
/// assert_eq!(combined.call(1.0), 2.5);
/// ```
#[derive(Clone)]
pub struct Function {
    transform: Rc<dyn Fn(f64) -> f64>,
}

impl Function {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Self {
            transform: Rc::new(transform),
        }
    }

    /// x -> x
    pub fn identity() -> Self {
        Self::new(|x| x)
    }

    /// x -> value
    pub fn constant(value: f64) -> Self {
        Self::new(move |_| value)
    }

    pub fn call(&self, x: f64) -> f64 {
        (self.transform)(x)
    }

    /// Applies the transformation to every element of `xs`.
    pub fn eval(&self, xs: &Array1<f64>) -> Array1<f64> {
        xs.mapv(|x| self.call(x))
    }

    /// Builds `x -> self(x) op rhs(x)`. Nothing is evaluated until the
    /// returned function is called; the left operand is evaluated first.
    pub fn compose(&self, op: ArithOp, rhs: impl Into<Operand>) -> Function {
        let lhs = self.clone();
        let rhs = rhs.into();
        Function::new(move |x| op.apply(lhs.call(x), rhs.value_at(x)))
    }

    pub fn add(&self, rhs: impl Into<Operand>) -> Function {
        self.compose(ArithOp::Add, rhs)
    }

    pub fn subtract(&self, rhs: impl Into<Operand>) -> Function {
        self.compose(ArithOp::Subtract, rhs)
    }

    pub fn multiply(&self, rhs: impl Into<Operand>) -> Function {
        self.compose(ArithOp::Multiply, rhs)
    }

    pub fn divide(&self, rhs: impl Into<Operand>) -> Function {
        self.compose(ArithOp::Divide, rhs)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").finish_non_exhaustive()
    }
}

impl From<f64> for Function {
    fn from(value: f64) -> Self {
        Function::constant(value)
    }
}

macro_rules! impl_arith_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Operand>> std::ops::$trait<R> for Function {
            type Output = Function;

            fn $method(self, rhs: R) -> Function {
                self.compose($op, rhs)
            }
        }

        impl<R: Into<Operand>> std::ops::$trait<R> for &Function {
            type Output = Function;

            fn $method(self, rhs: R) -> Function {
                self.compose($op, rhs)
            }
        }
    };
}

impl_arith_operator!(Add, add, ArithOp::Add);
impl_arith_operator!(Sub, sub, ArithOp::Subtract);
impl_arith_operator!(Mul, mul, ArithOp::Multiply);
impl_arith_operator!(Div, div, ArithOp::Divide);

impl std::ops::Neg for Function {
    type Output = Function;

    fn neg(self) -> Function {
        Function::new(move |x| -self.call(x))
    }
}

impl std::ops::Neg for &Function {
    type Output = Function;

    fn neg(self) -> Function {
        -self.clone()
    }
}
