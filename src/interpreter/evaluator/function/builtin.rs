use crate::{
    error::EvalError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{binary_args, domain_error, unary_arg},
    },
    util::num::finite_or_overflow,
};

/// Which of the four axis directions an angle in degrees points along, if
/// any.
///
/// Returns `Some(0..=3)` for angles that are exact multiples of 90 degrees
/// (0, 90, 180 and 270 after reduction modulo 360), `None` otherwise. Used to
/// give exact results where the radian conversion would leave rounding noise,
/// e.g. `cos(90)` is `0` rather than `6.1e-17`.
///
/// The multiple-of-90 test runs on the angle as given, since `%` is exact.
/// Reducing first would round tiny negative angles up to `360`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quadrant(degrees: f64) -> Option<u8> {
    if !degrees.is_finite() || degrees % 90.0 != 0.0 {
        return None;
    }
    Some((degrees / 90.0).rem_euclid(4.0) as u8)
}

/// Sine of an angle in degrees.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::sin;
///
/// assert_eq!(sin(&[90.0]).unwrap(), 1.0);
/// assert_eq!(sin(&[180.0]).unwrap(), 0.0);
/// ```
pub fn sin(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("sin", args)?;
    Ok(match quadrant(x) {
        Some(0 | 2) => 0.0,
        Some(1) => 1.0,
        Some(_) => -1.0,
        None => x.to_radians().sin(),
    })
}

/// Cosine of an angle in degrees.
pub fn cos(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("cos", args)?;
    Ok(match quadrant(x) {
        Some(0) => 1.0,
        Some(1 | 3) => 0.0,
        Some(_) => -1.0,
        None => x.to_radians().cos(),
    })
}

/// Tangent of an angle in degrees.
///
/// # Errors
/// [`EvalError::UndefinedResult`] at odd multiples of 90 degrees, where the
/// tangent has a pole.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::tan;
///
/// assert_eq!(tan(&[180.0]).unwrap(), 0.0);
/// assert!(tan(&[270.0]).is_err());
/// ```
pub fn tan(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("tan", args)?;
    match quadrant(x) {
        Some(0 | 2) => Ok(0.0),
        Some(_) => {
            Err(EvalError::UndefinedResult { function: "tan".to_string(),
                                             details:  format!("tangent is undefined at {x} degrees"), })
        },
        None => Ok(x.to_radians().tan()),
    }
}

/// Inverse sine, in degrees.
///
/// # Errors
/// [`EvalError::DomainError`] for inputs outside `[-1, 1]`.
pub fn asin(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("asin", args)?;
    check_unit_interval("asin", x)?;
    Ok(x.asin().to_degrees())
}

/// Inverse cosine, in degrees.
///
/// # Errors
/// [`EvalError::DomainError`] for inputs outside `[-1, 1]`.
pub fn acos(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("acos", args)?;
    check_unit_interval("acos", x)?;
    Ok(x.acos().to_degrees())
}

fn check_unit_interval(function: &str, x: f64) -> EvalResult<()> {
    if (-1.0..=1.0).contains(&x) {
        Ok(())
    } else {
        Err(domain_error(function, format!("input {x} is outside [-1, 1]")))
    }
}

/// Inverse tangent, in degrees.
pub fn atan(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("atan", args)?;
    Ok(x.atan().to_degrees())
}

/// Angle of the point `(x, y)` from the positive x axis, in degrees, for
/// `atan2(y, x)`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::atan2;
///
/// assert_eq!(atan2(&[1.0, 0.0]).unwrap(), 90.0);
/// assert_eq!(atan2(&[0.0, -1.0]).unwrap(), 180.0);
/// ```
pub fn atan2(args: &[f64]) -> EvalResult<f64> {
    let (y, x) = binary_args("atan2", args)?;
    Ok(y.atan2(x).to_degrees())
}

/// Converts degrees to radians.
pub fn deg2rad(args: &[f64]) -> EvalResult<f64> {
    Ok(unary_arg("deg2rad", args)?.to_radians())
}

/// Converts radians to degrees.
pub fn rad2deg(args: &[f64]) -> EvalResult<f64> {
    Ok(unary_arg("rad2deg", args)?.to_degrees())
}

/// `e` raised to the argument.
///
/// # Errors
/// [`EvalError::Overflow`] when a finite input produces an infinite result,
/// e.g. `exp(710)`.
pub fn exp(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("exp", args)?;
    finite_or_overflow(x.exp(), &[x], "exp")
}

/// Generates a one-argument builtin that applies an `f64` method.
macro_rules! real_builtin {
    ($(#[$doc:meta])* $fname:ident, $real_fn:ident) => {
        $(#[$doc])*
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            Ok(unary_arg(stringify!($fname), args)?.$real_fn())
        }
    };
}

real_builtin!(
    /// Absolute value.
    abs, abs
);
real_builtin!(
    /// Smallest integer greater than or equal to the argument.
    ceil, ceil
);
real_builtin!(
    /// Largest integer less than or equal to the argument.
    floor, floor
);
real_builtin!(
    /// Nearest integer, rounding half-way cases away from zero.
    round, round
);
real_builtin!(
    /// Integer part, rounding toward zero.
    trunc, trunc
);

/// Sign of the argument: `-1`, `0` or `1`. `NaN` stays `NaN`.
pub fn sign(args: &[f64]) -> EvalResult<f64> {
    let x = unary_arg("sign", args)?;
    Ok(if x.is_nan() {
        f64::NAN
    } else if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    })
}

/// Remainder of `mod(x, y)`, with the sign of the dividend `x`.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when `y` is zero.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::modulo;
///
/// assert_eq!(modulo(&[10.0, 3.0]).unwrap(), 1.0);
/// assert_eq!(modulo(&[-10.0, 3.0]).unwrap(), -1.0);
/// assert!(modulo(&[5.0, 0.0]).is_err());
/// ```
pub fn modulo(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = binary_args("mod", args)?;
    if y == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(x % y)
}

#[cfg(test)]
mod tests {
    use super::{acos, asin, atan, cos, exp, modulo, round, sign, sin, tan};
    use crate::error::EvalError;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_exact_quadrants() {
        assert_eq!(sin(&[0.0]), Ok(0.0));
        assert_eq!(sin(&[90.0]), Ok(1.0));
        assert_eq!(sin(&[270.0]), Ok(-1.0));
        assert_eq!(sin(&[-90.0]), Ok(-1.0));
        assert_eq!(sin(&[450.0]), Ok(1.0));
        assert_eq!(cos(&[90.0]), Ok(0.0));
        assert_eq!(cos(&[180.0]), Ok(-1.0));
        assert_eq!(cos(&[360.0]), Ok(1.0));
        assert_eq!(tan(&[180.0]), Ok(0.0));
        assert_eq!(cos(&[-720.0]), Ok(1.0));
        assert_eq!(sin(&[-450.0]), Ok(-1.0));
        assert!(tan(&[-90.0]).is_err());
    }

    #[test]
    fn test_tiny_negative_angles() {
        for x in [-1e-15, -1e-300, -f64::MIN_POSITIVE] {
            assert!(sin(&[x]).unwrap().abs() < 1e-15, "sin({x})");
            assert_eq!(cos(&[x]), Ok(1.0), "cos({x})");
            assert!(tan(&[x]).unwrap().abs() < 1e-15, "tan({x})");
        }
    }

    #[test]
    fn test_general_angles() {
        assert!(close(sin(&[30.0]).unwrap(), 0.5));
        assert!(close(cos(&[60.0]).unwrap(), 0.5));
        assert!(close(tan(&[45.0]).unwrap(), 1.0));
    }

    #[test]
    fn test_tan_poles() {
        assert!(matches!(tan(&[90.0]), Err(EvalError::UndefinedResult { .. })));
        assert!(matches!(tan(&[270.0]), Err(EvalError::UndefinedResult { .. })));
        assert!(matches!(tan(&[-90.0]), Err(EvalError::UndefinedResult { .. })));
    }

    #[test]
    fn test_inverse_trig() {
        assert!(close(asin(&[1.0]).unwrap(), 90.0));
        assert!(close(acos(&[0.0]).unwrap(), 90.0));
        assert!(close(atan(&[1.0]).unwrap(), 45.0));
        assert!(matches!(asin(&[1.5]), Err(EvalError::DomainError { .. })));
        assert!(matches!(acos(&[-2.0]), Err(EvalError::DomainError { .. })));
    }

    #[test]
    fn test_exp() {
        assert!(close(exp(&[1.0]).unwrap(), std::f64::consts::E));
        assert!(matches!(exp(&[710.0]), Err(EvalError::Overflow { .. })));
        assert_eq!(exp(&[-1000.0]), Ok(0.0));
    }

    #[test]
    fn test_round_and_sign() {
        assert_eq!(round(&[-4.5]), Ok(-5.0));
        assert_eq!(round(&[2.5]), Ok(3.0));
        assert_eq!(sign(&[-3.0]), Ok(-1.0));
        assert_eq!(sign(&[0.0]), Ok(0.0));
        assert_eq!(sign(&[7.0]), Ok(1.0));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(&[5.5, 2.0]), Ok(1.5));
        assert_eq!(modulo(&[5.0, 0.0]), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(matches!(sin(&[]), Err(EvalError::ArityError { .. })));
        assert!(matches!(modulo(&[1.0]), Err(EvalError::ArityError { .. })));
    }
}
