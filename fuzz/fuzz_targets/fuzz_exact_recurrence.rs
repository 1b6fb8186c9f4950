#![no_main]

use libfuzzer_sys::fuzz_target;

use binet_core::fibonacci_exact;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Signed index capped at +-5000 for speed
    let n = i64::from(i16::from_le_bytes([data[0], data[1]])) % 5000;

    let f = fibonacci_exact(n);
    assert_eq!(
        f,
        fibonacci_exact(n - 1) + fibonacci_exact(n - 2),
        "recurrence broken at n={n}"
    );

    let mirrored = fibonacci_exact(-n);
    let expected = if n % 2 == 0 { -f } else { f };
    assert_eq!(mirrored, expected, "negafibonacci law broken at n={n}");
});
