use crate::schema::Measurement;

const NAME_WIDTH: usize = 18;

pub fn report_header() -> String {
    format!("{:<width$}\tavg time (ms)\tavg thrpt (MB/s)", "algorithm", width = NAME_WIDTH)
}

/// One tab-separated report line: mean latency in milliseconds and
/// throughput in MB/s.
pub fn format_measurement(m: &Measurement) -> String {
    format!("{:<width$}\t{:.6}\t{:.6}",
        m.algorithm.name(),
        m.mean_latency / 10f64.powi(6),
        format_mb(m.throughput),
        width = NAME_WIDTH)
}

/// Bytes to (decimal) megabytes.
pub fn format_mb(bytes: f64) -> f64 {
    bytes / 10f64.powi(6)
}

pub fn format_time(nanos: u64) -> String {
    if nanos < 10u64.pow(3) {
        format!("{}ns", nanos)
    }
    else if nanos < 10u64.pow(6) {
        format!("{}µs", nanos as f64 / 10usize.pow(3) as f64)
    }
    else if nanos < 10u64.pow(9) {
        format!("{}ms", nanos as f64 / 10usize.pow(6) as f64)
    }
    else {
        format!("{}s", nanos as f64 / 10usize.pow(9) as f64)
    }
}
