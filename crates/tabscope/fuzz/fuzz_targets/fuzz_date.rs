//! Fuzz target for date detection and index resolution.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabscope::transform::parse_timestamp;
use tabscope::{ChartConfig, Tabscope, TabscopeConfig};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_timestamp(content);

        // The fuzzed text lands in a date column so ordering runs over it.
        let csv = format!("Date,value\n{content},1\n2020-01-01,2\n");
        let tabscope = Tabscope::with_config(TabscopeConfig {
            chart: ChartConfig { width: 400, height: 200 },
            ..TabscopeConfig::default()
        });
        let _ = tabscope.analyze_bytes("fuzz.csv", csv.as_bytes());
    }
});
