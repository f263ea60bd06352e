use std::fmt;

use crate::{
    ast::{Expr, FACTORIAL},
    error::EvalError,
    interpreter::evaluator::{
        binary::power::checked_pow,
        core::{EvalResult, Evaluator},
        function::{builtin, factorial, log, min_max, sqrt, statistics},
        utils::{arity_error, binary_args},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// result or the reason it has none.
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"     => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"     => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"    => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"    => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"    => { arity: Arity::Exact(1), func: builtin::atan },
    "atan2"   => { arity: Arity::Exact(2), func: builtin::atan2 },
    "sqrt"    => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "ln"      => { arity: Arity::Exact(1), func: log::ln },
    "log"     => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log10"   => { arity: Arity::Exact(1), func: log::log10 },
    "log2"    => { arity: Arity::Exact(1), func: log::log2 },
    "exp"     => { arity: Arity::Exact(1), func: builtin::exp },
    "pow"     => { arity: Arity::Exact(2), func: pow },
    "abs"     => { arity: Arity::Exact(1), func: builtin::abs },
    "ceil"    => { arity: Arity::Exact(1), func: builtin::ceil },
    "floor"   => { arity: Arity::Exact(1), func: builtin::floor },
    "round"   => { arity: Arity::Exact(1), func: builtin::round },
    "trunc"   => { arity: Arity::Exact(1), func: builtin::trunc },
    "sign"    => { arity: Arity::Exact(1), func: builtin::sign },
    "mod"     => { arity: Arity::Exact(2), func: builtin::modulo },
    "min"     => { arity: Arity::Exact(2), func: |args| min_max::min_max("min", args) },
    "max"     => { arity: Arity::Exact(2), func: |args| min_max::min_max("max", args) },
    "deg2rad" => { arity: Arity::Exact(1), func: builtin::deg2rad },
    "rad2deg" => { arity: Arity::Exact(1), func: builtin::rad2deg },
    "sum"     => { arity: Arity::AtLeast(1), func: statistics::sum },
    "product" => { arity: Arity::AtLeast(1), func: statistics::product },
    "mean"    => { arity: Arity::AtLeast(1), func: statistics::mean },
    "median"  => { arity: Arity::AtLeast(1), func: statistics::median },
    "mode"    => { arity: Arity::AtLeast(1), func: statistics::mode },
    "!"       => { arity: Arity::Exact(1), func: factorial::factorial },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

/// Renders the accepted counts as used in error messages: `2`, `1 or 2`,
/// `at least 1`.
impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::OneOf(counts) => match counts.split_last() {
                None => f.write_str("no"),
                Some((last, [])) => write!(f, "{last}"),
                Some((last, rest)) => {
                    for (i, n) in rest.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{n}")?;
                    }
                    write!(f, " or {last}")
                },
            },
        }
    }
}

/// Returns `true` if `word` is a reserved builtin function name.
///
/// Names are case-sensitive. The factorial entry can never match because
/// `!` is not a word.
#[must_use]
pub fn is_function_name(word: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&word)
}

/// Returns the accepted argument counts of the builtin `name`.
#[must_use]
pub fn arity_of(name: &str) -> Option<Arity> {
    lookup(name).map(|builtin| builtin.arity)
}

fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// `pow(base, exponent)`, with the same rules as the `^` operator.
fn pow(args: &[f64]) -> EvalResult<f64> {
    let (base, exponent) = binary_args("pow", args)?;
    checked_pow(base, exponent, "pow")
}

impl Evaluator<'_> {
    /// Evaluates a function call, including postfix factorial.
    ///
    /// The name is looked up in the builtin table and the number of argument
    /// expressions is checked against the builtin's arity before any
    /// argument is evaluated. Arguments are then evaluated left to right and
    /// passed to the implementation.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// - [`EvalError::UnknownFunction`] if `name` is not a builtin.
    /// - [`EvalError::ArityError`] if the argument count is not accepted.
    /// - Any error from evaluating an argument or from the builtin itself.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr])
                                     -> EvalResult<f64> {
        let builtin =
            lookup(name).ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })?;

        if !builtin.arity.check(arguments.len()) {
            return Err(arity_error(display_name(name), builtin.arity, arguments.len()));
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<f64>>>()?;

        (builtin.func)(&values)
    }
}

/// The name shown to users for a builtin.
fn display_name(name: &str) -> &str {
    if name == FACTORIAL { "factorial" } else { name }
}
