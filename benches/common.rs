use criterion::Criterion;
use std::time::Duration;

pub fn bench_config() -> Criterion {
    // Quick runs by default; set BENCH_FULL for criterion's defaults
    if std::env::var("BENCH_FULL").is_ok() {
        Criterion::default()
    } else {
        Criterion::default()
            .sample_size(10)
            .measurement_time(Duration::from_secs(1))
            .warm_up_time(Duration::from_millis(250))
    }
}
