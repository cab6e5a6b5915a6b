#![no_main]

use libfuzzer_sys::fuzz_target;
use matex::Bound;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, ' ');
        let a = parts.next().unwrap_or("");
        let b = parts.next().unwrap_or("");
        let c = parts.next().unwrap_or("");

        let _ = matex::pow(a, b);
        let _ = matex::equal(&[a, b, c]);
        let _ = matex::frac(a, b);
        let _ = matex::area_integral(&[a, b], c, s);

        let bound = Bound::range(a, b);
        let _ = matex::sigma(a, &bound, c);
        let _ = matex::integral(a, &bound, c);
        let _ = matex::sigma(a, &Bound::region(b), c);
    }
});
