#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use binet_core::{fibonacci_approximation, fibonacci_binet, fibonacci_exact, ACCURACY_BOUNDARY};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let binet = fibonacci_binet(n);
    let approx = fibonacci_approximation(n);

    if n.unsigned_abs() > ACCURACY_BOUNDARY {
        assert!(binet.is_err(), "Binet accepted n={n}");
        assert!(approx.is_err(), "Approximation accepted n={n}");
        return;
    }

    let binet = binet.expect("in-range index");
    let approx = approx.expect("in-range index");
    let exact = fibonacci_exact(n);
    assert_eq!(binet, approx, "Binet != Approximation at n={n}");
    assert_eq!(BigInt::from(binet as i64), exact, "closed form != exact at n={n}");
});
