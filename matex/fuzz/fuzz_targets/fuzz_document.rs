#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let blocks: Vec<&str> = s.lines().collect();
        let wrapped: Vec<String> = blocks.iter().map(|b| matex::display(&[b])).collect();
        let refs: Vec<&str> = wrapped.iter().map(String::as_str).collect();
        let _ = matex::document(&refs);
    }
});
