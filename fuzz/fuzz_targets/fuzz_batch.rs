#![no_main]

use libfuzzer_sys::fuzz_target;

use binet_batch::{fibonacci_binet_batch, fibonacci_binet_batch_parallel};
use binet_core::fibonacci_binet;

fuzz_target!(|data: &[u8]| {
    let indices: Vec<i64> = data.iter().map(|&b| i64::from(b as i8)).collect();

    let sequential = fibonacci_binet_batch(&indices);
    let parallel = fibonacci_binet_batch_parallel(&indices);
    assert_eq!(sequential, parallel);

    match sequential {
        Ok(values) => {
            for (&n, value) in indices.iter().zip(values) {
                assert_eq!(fibonacci_binet(n), Ok(value));
            }
        }
        Err(err) => {
            let first_bad = indices.iter().copied().find(|n| n.unsigned_abs() > 70);
            assert_eq!(Some(err.index), first_bad);
        }
    }
});
