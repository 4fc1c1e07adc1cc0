use std::error::Error;
use std::f64::consts::FRAC_PI_4;
use std::io::{stdin, stdout, Write};

use complex_lib::math::{Angle, Complex, Sqrt as _};
use complex_lib::Float;

fn read_float(prompt: &str) -> Result<Float, Box<dyn Error>> {
    print!("{}: ", prompt);
    stdout().flush()?;
    let mut line = String::new();
    stdin().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let a = Complex::from_cartesian(3., 4.);
    let b = Complex::from_cartesian(1., -2.);

    println!("a: {}", a);
    println!("b: {}", b);

    println!("a + b: {}", a + b);
    println!("a - b: {}", a - b);
    println!("a * b: {}", a * b);
    match a.checked_div(b) {
        Ok(quotient) => println!("a / b: {}", quotient),
        Err(err) => println!("a / b: {}", err),
    }
    match a.checked_div(Complex::from_cartesian(0., 0.)) {
        Ok(quotient) => println!("a / 0: {}", quotient),
        Err(err) => println!("a / 0: {}", err),
    }

    println!("|a|: {:.2}", a.modulus());
    println!("arg(a): {:.4} rad", a.argument().radians());
    println!("conjugate of a: {}", a.conjugate());
    println!("polar form of a: {}", a.polar_string());

    println!("a == b: {}", a == b);
    println!("a != b: {}", a != b);
    println!("a > b: {}", a.greater_than(b));
    println!("a < b: {}", a.less_than(b));

    let n = 2;
    println!("a^{}: {}", n, a.powi(n));
    println!("sqrt(a): {}", a.sqrt());

    let unit = Complex::from_polar(1., Angle::from_radians(FRAC_PI_4));
    println!("unit at 45 degrees: {}", unit);

    let real = read_float("Enter real part")?;
    let imag = read_float("Enter imaginary part")?;
    let c = Complex::from_cartesian(real, imag);
    println!("c: {}", c);

    Ok(())
}
