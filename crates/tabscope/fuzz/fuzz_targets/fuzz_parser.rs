//! Fuzz target for the upload parser and the pipeline behind it.
//!
//! Arbitrary bytes must either parse or fail with an input error. Anything
//! that parses must make it through the whole pipeline without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabscope::{ChartConfig, Parser, Tabscope, TabscopeConfig};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Err(e) = Parser::new().parse_upload("fuzz.csv", data) {
        assert!(e.is_input_error(), "unexpected error kind: {e}");
        return;
    }

    // Small charts keep the iteration rate up.
    let tabscope = Tabscope::with_config(TabscopeConfig {
        chart: ChartConfig { width: 400, height: 200 },
        ..TabscopeConfig::default()
    });
    let _ = tabscope.analyze_bytes("fuzz.csv", data);
});
