#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use burst_stats::bins::BinSpec;
use burst_stats::loader::{IntervalLoader, LoaderConfig};
use burst_stats::report::{Group, GroupComparisonReport};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either load or fail with an error, never panic
    let Ok(trials) = IntervalLoader::from_reader(Cursor::new(data), &LoaderConfig::default()) else {
        return;
    };

    // Anything that loads must survive the whole pipeline
    let group = Group::new("fuzz", trials);
    let _ = GroupComparisonReport::new(BinSpec::standard()).distributions(&group);
});
