//! Conversions from Polars `AnyValue` into typed cells.

use polars::prelude::AnyValue;

use beer_model::CellValue;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null and trims surrounding whitespace.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.trim().to_string(),
        AnyValue::StringOwned(s) => s.trim().to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric, NaN, or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    number.filter(|v| !v.is_nan())
}

/// Parses a string as f64, returning None for invalid or empty strings.
/// A trailing `%` is accepted.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_end_matches('%').trim_end();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Converts a passthrough value, keeping numbers numeric so they sort
/// numerically.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::String(s) => CellValue::text(s),
        AnyValue::StringOwned(s) => CellValue::text(&s),
        AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
        other => match any_to_f64(other.clone()) {
            Some(v) => CellValue::Number(v),
            None => CellValue::text(&any_to_string(other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int64(12)), "12");
        assert_eq!(any_to_string(AnyValue::Float64(5.50)), "5.5");
        assert_eq!(any_to_string(AnyValue::Float64(100.0)), "100");
        assert_eq!(any_to_string(AnyValue::String("  Belgium ")), "Belgium");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Float64(4.7)), Some(4.7));
        assert_eq!(any_to_f64(AnyValue::Int32(5)), Some(5.0));
        assert_eq!(any_to_f64(AnyValue::String("6.2%")), Some(6.2));
        assert_eq!(any_to_f64(AnyValue::String("n/a")), None);
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }

    #[test]
    fn test_any_to_cell() {
        assert_eq!(any_to_cell(AnyValue::Int64(3)), CellValue::Number(3.0));
        assert_eq!(
            any_to_cell(AnyValue::String("Hop Drop")),
            CellValue::Text("Hop Drop".to_string())
        );
        assert_eq!(any_to_cell(AnyValue::String(" ")), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
    }
}
