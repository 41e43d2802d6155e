/// Strips invisible marker characters, trims, and swaps spaces for underscores.
/// Applying it to an already normalized name returns the name unchanged.
pub fn normalize_column_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.trim().replace(' ', "_")
}

pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().map(normalize_column_name).collect()
}

/// Years arrive either as integers or as whole-valued floats ("2015.0").
pub fn coerce_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }

    let float = trimmed.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() <= i32::MAX as f64 {
        Some(float as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_replaces_spaces() {
        assert_eq!(
            normalize_column_name("  Retention Rate (%) "),
            "Retention_Rate_(%)"
        );
        assert_eq!(normalize_column_name("\u{feff}Year"), "Year");
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = [
            " Student Satisfaction (%)",
            "Engineering  Enrolled",
            "Term\t",
            "Arts_Enrolled",
        ];
        for header in raw {
            let once = normalize_column_name(header);
            assert_eq!(normalize_column_name(&once), once, "header {header:?}");
        }
    }

    #[test]
    fn normalize_headers_preserves_order() {
        let normalized = normalize_headers(["Year", " Term", "Business Enrolled"]);
        assert_eq!(normalized, vec!["Year", "Term", "Business_Enrolled"]);
    }

    #[test]
    fn coerce_year_accepts_integer_and_whole_float_text() {
        assert_eq!(coerce_year("2015"), Some(2015));
        assert_eq!(coerce_year(" 2016.0 "), Some(2016));
        assert_eq!(coerce_year("2016.5"), None);
        assert_eq!(coerce_year("twenty"), None);
        assert_eq!(coerce_year(""), None);
    }
}
