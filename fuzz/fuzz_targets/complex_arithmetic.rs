#![no_main]

use complex_lib::{
    math::{Complex, IsNeg as _, Sqrt as _},
    Float,
};
use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn random_value(rng: &mut Pcg64) -> Complex<Float> {
    Complex::from_cartesian(
        rng.random_range(-1_000_000..1_000_000) as Float,
        rng.random_range(-1_000_000..1_000_000) as Float,
    )
}

// Checks arithmetic identities over randomly generated integer-valued
// numbers (addition and subtraction stay exact for them). Uses input data
// as seed for random generator.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).into_rng();

    for _ in 0..256 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) - b, a);
        assert_eq!(a.conjugate().conjugate(), a);
        assert!(a.modulus().unwrap() >= 0.);
        assert_eq!(a.powi(0), Complex::from_cartesian(1., 0.));

        match a.checked_div(b) {
            Ok(quotient) => {
                let restored = quotient * b;
                assert!(restored.real().is_finite());
                assert!(restored.imag().is_finite());
            }
            Err(_) => assert_eq!(b, Complex::from_cartesian(0., 0.)),
        }

        let root = a.sqrt();
        assert!(!root.real().is_neg());
    }
});
