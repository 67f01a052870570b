#![no_main]
use libfuzzer_sys::fuzz_target;
use metalink_verify::MetalinkDocument;

fuzz_target!(|data: &[u8]| {
    // parse() should never panic on arbitrary input
    let _ = MetalinkDocument::parse(data, "payload.bin");
});
