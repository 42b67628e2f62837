#![no_main]

use libfuzzer_sys::fuzz_target;
use pixview_ppm::{PPMDecoder, PPMEncoder, PPMVersion};

fuzz_target!(|data: &[u8]| {
    let Ok(raster) = PPMDecoder::new(data).decode() else {
        return;
    };
    for version in [PPMVersion::P3, PPMVersion::P6] {
        let encoded = PPMEncoder::from_raster(&raster)
            .set_version(version)
            .encode_to_vec()
            .unwrap();
        let decoded = PPMDecoder::new(&encoded).decode().unwrap();

        assert_eq!(raster, decoded);
    }
});
