/// Render a weight rounded to two decimals, without trailing zeros.
pub fn display_weight(kg: f64) -> String {
    let rounded = format!("{:.2}", kg);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}
