#![no_main]

use libfuzzer_sys::fuzz_target;

// Any tree the parser accepts must serialize back to bytes that reparse to
// an equal tree.
fuzz_target!(|data: &[u8]| {
    if let Ok(tree) = nbtx::parse(data) {
        if let Ok(bytes) = nbtx::serialize(&tree) {
            let reparsed = nbtx::parse(&bytes).expect("serialized output must reparse");
            assert_eq!(tree, reparsed);
        }
    }
});
