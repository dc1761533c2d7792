//! Domain records for the property store.
//!
//! # Responsibility
//! - Define the canonical record shapes decoded from store rows.
//! - Define the closed registry of element attributes exposed to callers.
//!
//! # Invariants
//! - Every element-scoped record carries the element's atomic number.
//! - Nullable stored values stay `Option`; absence is data, not an error.

pub mod element;
pub mod isotope;
pub mod meta;
pub mod records;
pub mod value;

/// Formats a value together with its uncertainty, e.g. `1.00783(1)`.
///
/// With no uncertainty the value is printed with `digits` decimals.
pub fn with_uncertainty(value: Option<f64>, uncertainty: Option<f64>, digits: usize) -> String {
    let Some(value) = value else {
        return "None".to_string();
    };

    match uncertainty {
        None => format!("{value:.digits$}"),
        Some(unc) if unc == 0.0 => format!("{value:.digits$}"),
        Some(unc) => {
            let dec = (-unc.abs().log10().floor()) as i32;
            let dec = dec.clamp(0, 5) as usize;
            format!("{value:.dec$}({:.0})", unc * 10f64.powi(dec as i32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::with_uncertainty;

    #[test]
    fn value_with_uncertainty_uses_parenthesis_notation() {
        assert_eq!(with_uncertainty(Some(1.00782503), Some(0.00001), 5), "1.00783(1)");
    }

    #[test]
    fn value_without_uncertainty_uses_fixed_digits() {
        assert_eq!(with_uncertainty(Some(12.011), None, 3), "12.011");
    }

    #[test]
    fn missing_value_renders_none() {
        assert_eq!(with_uncertainty(None, None, 3), "None");
    }
}
