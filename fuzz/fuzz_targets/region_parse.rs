//! Fuzz target for region item decoding.
//!
//! This fuzzer feeds arbitrary byte sequences to the region item decoder,
//! checking for panics, buffer overflows, or other undefined behavior.
//!
//! Run with:
//!   cargo +nightly fuzz run region_parse
//!
//! Or with a corpus:
//!   cargo +nightly fuzz run region_parse fuzz/corpus/region_parse/

#![no_main]

use heif_regions::region::RegionItem;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 1MB is generous for a region item payload.
    if data.len() > 1024 * 1024 {
        return;
    }

    // Try to decode the data. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let _ = RegionItem::decode(data);
});
