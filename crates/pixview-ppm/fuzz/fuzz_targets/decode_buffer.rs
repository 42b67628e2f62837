#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = pixview_ppm::PPMDecoder::new(data);
    let _ = decoder.decode();
});
