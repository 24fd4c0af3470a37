//! Byte sizes and their human-readable form.

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const STEP: f64 = 1024.0;

/// Byte length of an encoded buffer.
#[inline]
pub fn size_of(bytes: &[u8]) -> u64 {
    bytes.len() as u64
}

/// Format a byte count with base-1024 units, e.g. `"12.34 KB"`.
///
/// The value is rounded to `decimals` places (negative means 0) and trailing
/// zeros are dropped, so 1024 bytes reads `"1 KB"`. Sizes past the TB range
/// stay in TB.
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let places = decimals.max(0) as usize;
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    format!("{} {}", trim_fraction(format!("{value:.places$}")), UNITS[unit])
}

fn trim_fraction(mut number: String) -> String {
    if number.contains('.') {
        let trimmed = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed);
    }
    number
}
