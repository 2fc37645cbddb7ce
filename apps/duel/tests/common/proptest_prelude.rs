// Proptest prelude shared by integration tests.
//
// Pulled in with `include!` so every test binary gets its own copy without a
// `mod common` dance.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 8). Dealing is
//   cheap, so CI can raise this freely, e.g. PROPTEST_CASES=256.
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//
// Strategies in these tests generate seeds and game counts directly instead
// of filtering, so every case exercises a real deal even at a low case count.

/// Config for `proptest!` blocks in this crate's integration tests.
pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base: proptest::prelude::ProptestConfig = proptest::prelude::ProptestConfig::default();

    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(8)
        .max(1);

    let max_shrink_time: u32 = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    proptest::prelude::ProptestConfig {
        // Failing seeds are printed on failure; persisting them would write
        // regression files next to sources that `include!` this prelude.
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
