use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

use super::{Abs, AbsAsNoNeg as _, Angle, Atan2, Cos, IsNeg, NoNeg, Powi, Sin, Sqr, Sqrt, Zero};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct Complex<T> {
    real: T,
    imag: T,
}

impl<T> From<(T, T)> for Complex<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            real: value.0,
            imag: value.1,
        }
    }
}

impl<T> Complex<T> {
    pub fn from_cartesian(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> &T {
        &self.real
    }

    pub fn imag(&self) -> &T {
        &self.imag
    }
}

impl<T> Complex<T>
where
    T: Cos<Output = T> + Sin<Output = T> + Mul<Output = T> + Clone,
{
    pub fn from_polar(modulus: T, angle: Angle<T>) -> Self {
        Self {
            real: modulus.clone() * angle.clone().cos(),
            imag: modulus * angle.sin(),
        }
    }
}

impl<T> Complex<T>
where
    T: Sqr,
    <T as Sqr>::Output: Add,
    <<T as Sqr>::Output as Add>::Output: Sqrt,
    <<<T as Sqr>::Output as Add>::Output as Sqrt>::Output: Abs,
{
    pub fn modulus(
        self,
    ) -> NoNeg<<<<<T as Sqr>::Output as Add>::Output as Sqrt>::Output as Abs>::Output> {
        (self.real.sqr() + self.imag.sqr()).sqrt().abs_as_noneg()
    }
}

impl<T> Complex<T>
where
    T: Atan2,
{
    pub fn argument(self) -> Angle<<T as Atan2>::Output> {
        Angle::from_radians(self.imag.atan2(self.real))
    }
}

impl<T> Complex<T>
where
    T: Neg<Output = T>,
{
    pub fn conjugate(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }
}

impl<T> Complex<T>
where
    T: Sqr<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Zero
        + PartialEq
        + Clone,
{
    /// Fails when the divisor modulus is exactly zero
    pub fn checked_div(self, rhs: Self) -> Result<Self, DivisionByZeroError<T>> {
        let denom = rhs.real.clone().sqr() + rhs.imag.clone().sqr();
        if denom == T::zero() {
            return Err(DivisionByZeroError { dividend: self });
        }
        Ok(Self {
            real: (self.real.clone() * rhs.real.clone() + self.imag.clone() * rhs.imag.clone())
                / denom.clone(),
            imag: (self.imag * rhs.real - self.real * rhs.imag) / denom,
        })
    }
}

impl<T> Complex<T>
where
    T: Sqr<Output = T>
        + Add<Output = T>
        + Sqrt<Output = T>
        + Abs<Output = T>
        + Atan2<Output = T>
        + Powi<Output = T>
        + Cos<Output = T>
        + Sin<Output = T>
        + Mul<Output = T>
        + Mul<f64, Output = T>
        + Clone,
{
    pub fn powi(self, n: i32) -> Self {
        let modulus = self.clone().modulus().unwrap().powi(n);
        let angle = Angle::from_radians(self.argument().radians() * n as f64);
        Self::from_polar(modulus, angle)
    }
}

impl<T> Complex<T>
where
    T: Sqr<Output = T>
        + Add<Output = T>
        + Sqrt<Output = T>
        + Abs<Output = T>
        + Atan2<Output = T>
        + Clone,
{
    pub fn to_polar(self) -> (NoNeg<T>, Angle<T>) {
        (self.clone().modulus(), self.argument())
    }
}

impl<T> Complex<T>
where
    T: Sqr<Output = T>
        + Add<Output = T>
        + Sqrt<Output = T>
        + Abs<Output = T>
        + Atan2<Output = T>
        + Clone
        + Display,
{
    pub fn polar_string(self) -> String {
        let (modulus, angle) = self.to_polar();
        let radians = angle.radians();
        format!("{:.2}(cos({:.2}) + i sin({:.2}))", modulus, radians, radians)
    }
}

impl<T> Complex<T>
where
    T: Sqr<Output = T> + Add<Output = T> + Sqrt<Output = T> + Abs<Output = T> + PartialOrd,
{
    /// Ordering by modulus alone. Two values with equal modulus but
    /// different arguments are neither less nor greater than each other.
    pub fn less_than(self, other: Self) -> bool {
        self.modulus() < other.modulus()
    }

    pub fn greater_than(self, other: Self) -> bool {
        self.modulus() > other.modulus()
    }
}

impl<T> Sqrt for Complex<T>
where
    T: Sqr<Output = T>
        + Add<Output = T>
        + Sqrt<Output = T>
        + Abs<Output = T>
        + Atan2<Output = T>
        + Cos<Output = T>
        + Sin<Output = T>
        + Mul<Output = T>
        + Mul<f64, Output = T>
        + Clone,
{
    type Output = Complex<T>;

    /// Principal branch: the halved argument lands in -PI/2..=PI/2, so
    /// the real part of the root is never negative
    fn sqrt(self) -> Self::Output {
        let modulus = self.clone().modulus().sqrt().unwrap();
        let angle = Angle::from_radians(self.argument().radians() * 0.5);
        Complex::from_polar(modulus, angle)
    }
}

impl<T, U> Add<Complex<U>> for Complex<T>
where
    T: Add<U>,
{
    type Output = Complex<<T as Add<U>>::Output>;

    fn add(self, rhs: Complex<U>) -> Self::Output {
        Self::Output {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}

impl<T, U> Sub<Complex<U>> for Complex<T>
where
    T: Sub<U>,
{
    type Output = Complex<<T as Sub<U>>::Output>;

    fn sub(self, rhs: Complex<U>) -> Self::Output {
        Self::Output {
            real: self.real - rhs.real,
            imag: self.imag - rhs.imag,
        }
    }
}

impl<T> Mul for Complex<T>
where
    T: Mul<Output = T> + Add<Output = T> + Sub<Output = T> + Clone,
{
    type Output = Complex<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Output {
            real: self.real.clone() * rhs.real.clone() - self.imag.clone() * rhs.imag.clone(),
            imag: self.real * rhs.imag + self.imag * rhs.real,
        }
    }
}

impl<T, U> PartialEq<Complex<U>> for Complex<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Complex<U>) -> bool {
        self.real.eq(&other.real) && self.imag.eq(&other.imag)
    }
}

impl<T> Display for Complex<T>
where
    T: Display + IsNeg + Abs<Output = T> + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.imag.is_neg() {
            write!(f, "{:.2} - {:.2}i", self.real, self.imag.clone().abs())
        } else {
            write!(f, "{:.2} + {:.2}i", self.real, self.imag)
        }
    }
}

#[derive(Debug)]
pub struct DivisionByZeroError<T> {
    dividend: Complex<T>,
}

impl<T> DivisionByZeroError<T> {
    pub fn dividend(self) -> Complex<T> {
        self.dividend
    }
}

impl<T> Display for DivisionByZeroError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "division by a complex number with zero modulus")
    }
}

impl<T> Error for DivisionByZeroError<T> where T: Debug {}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use crate::{
        math::{noneg_float, Angle, Complex, Sqrt as _},
        Float,
    };

    fn samples() -> (Complex<Float>, Complex<Float>) {
        (
            Complex::from_cartesian(3., 4.),
            Complex::from_cartesian(1., -2.),
        )
    }

    #[test]
    fn add() {
        let (a, b) = samples();
        assert_eq!(a + b, Complex::from_cartesian(4., 2.));
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn sub() {
        let (a, b) = samples();
        assert_eq!(a - b, Complex::from_cartesian(2., 6.));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn mul() {
        let (a, b) = samples();
        assert_eq!(a * b, Complex::from_cartesian(11., -2.));
        assert_eq!(
            a * a.conjugate(),
            Complex::from_cartesian(a.modulus().unwrap() * a.modulus().unwrap(), 0.)
        );
    }

    #[test]
    fn div() {
        let (a, b) = samples();
        let q = a.checked_div(b).unwrap();
        assert_eq!(q, Complex::from_cartesian(-1., 2.));

        let restored = q * b;
        assert_relative_eq!(*restored.real(), *a.real(), epsilon = 1e-9);
        assert_relative_eq!(*restored.imag(), *a.imag(), epsilon = 1e-9);
    }

    #[test]
    fn div_by_zero() {
        let (a, _) = samples();
        let err = a.checked_div(Complex::from_cartesian(0., 0.)).unwrap_err();
        assert_eq!(err.dividend(), a);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Complex::<Float>::default(), Complex::from_cartesian(0., 0.));
    }

    #[test]
    fn modulus() {
        let (a, _) = samples();
        assert_eq!(a.modulus(), noneg_float(5.));
        assert_eq!(Complex::from_cartesian(0., 0.).modulus(), noneg_float(0.));
    }

    #[test]
    fn argument() {
        let (a, _) = samples();
        assert_relative_eq!(a.argument().radians(), 0.9273, epsilon = 1e-4);
        assert_eq!(Complex::from_cartesian(0., 0.).argument().radians(), 0.);
    }

    #[test]
    fn conjugate() {
        let (a, _) = samples();
        assert_eq!(a.conjugate(), Complex::from_cartesian(3., -4.));
        assert_eq!(a.conjugate().conjugate(), a);
    }

    #[test]
    fn powi() {
        let (a, _) = samples();
        let sq = a.powi(2);
        assert_relative_eq!(*sq.real(), -7., epsilon = 1e-9);
        assert_relative_eq!(*sq.imag(), 24., epsilon = 1e-9);
    }

    #[test]
    fn powi_zero_exponent() {
        let (a, _) = samples();
        assert_eq!(a.powi(0), Complex::from_cartesian(1., 0.));
        assert_eq!(
            Complex::from_cartesian(0., 0.).powi(0),
            Complex::from_cartesian(1., 0.)
        );
    }

    #[test]
    fn powi_zero_modulus_negative_exponent() {
        let r = Complex::from_cartesian(0., 0.).powi(-1);
        assert!(r.real().is_infinite());
        assert!(r.imag().is_nan());
    }

    #[test]
    fn sqrt() {
        let (a, _) = samples();
        let root = a.sqrt();
        assert_relative_eq!(*root.real(), 2., epsilon = 1e-9);
        assert_relative_eq!(*root.imag(), 1., epsilon = 1e-9);
    }

    #[test]
    fn sqrt_of_negative_real() {
        let root = Complex::from_cartesian(-4., 0.).sqrt();
        assert_relative_eq!(*root.real(), 0., epsilon = 1e-9);
        assert_relative_eq!(*root.imag(), 2., epsilon = 1e-9);
    }

    #[test]
    fn sqrt_of_square_restores_value() {
        let (_, b) = samples();
        let root = (b * b).sqrt();
        assert_relative_eq!(*root.real(), *b.real(), epsilon = 1e-9);
        assert_relative_eq!(*root.imag(), *b.imag(), epsilon = 1e-9);
    }

    #[test]
    fn comparison() {
        let (a, b) = samples();
        assert!(a != b);
        assert!(a.greater_than(b));
        assert!(b.less_than(a));

        let same_modulus = Complex::from_cartesian(5., 0.);
        assert!(a != same_modulus);
        assert!(!a.less_than(same_modulus));
        assert!(!a.greater_than(same_modulus));
    }

    #[test]
    fn display() {
        let (a, b) = samples();
        assert_eq!((a + b).to_string(), "4.00 + 2.00i");
        assert_eq!((a - b).to_string(), "2.00 + 6.00i");
        assert_eq!((a * b).to_string(), "11.00 - 2.00i");
        assert_eq!(a.checked_div(b).unwrap().to_string(), "-1.00 + 2.00i");
        assert_eq!(a.conjugate().to_string(), "3.00 - 4.00i");
    }

    #[test]
    fn polar() {
        let (a, _) = samples();
        let (modulus, angle) = a.to_polar();
        assert_eq!(modulus, noneg_float(5.));
        assert_relative_eq!(angle.radians(), 0.9273, epsilon = 1e-4);

        let restored = Complex::from_polar(modulus.unwrap(), angle);
        assert_relative_eq!(*restored.real(), *a.real(), epsilon = 1e-9);
        assert_relative_eq!(*restored.imag(), *a.imag(), epsilon = 1e-9);

        let up = Complex::from_polar(2., Angle::from_radians(FRAC_PI_2));
        assert_relative_eq!(*up.real(), 0., epsilon = 1e-9);
        assert_relative_eq!(*up.imag(), 2., epsilon = 1e-9);
    }

    #[test]
    fn polar_string() {
        let (a, _) = samples();
        assert_eq!(a.polar_string(), "5.00(cos(0.93) + i sin(0.93))");
    }

    #[test]
    fn serialization() {
        let (a, _) = samples();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"real":3.0,"imag":4.0}"#);
        assert_eq!(serde_json::from_str::<Complex<Float>>(&json).unwrap(), a);
    }
}
