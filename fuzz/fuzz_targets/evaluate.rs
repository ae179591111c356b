#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let mut ctx = gauge::Ctx::empty();
        let _ = gauge::evaluate(line, &mut ctx);
    }
});
