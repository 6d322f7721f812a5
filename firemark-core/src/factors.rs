//! Material factor lookup tables
//!
//! Global invariants enforced:
//! - Case-insensitive substring matching, fixed priority order, first match wins
//! - Every label maps to a factor; unmatched labels fall back to a mid-range
//!   default rather than failing

/// Generic material factor used for roof and wall breakdowns (0 = best, 2 = worst)
///
/// Priority order matters: "light non-combustible" contains "combustible" and
/// "unapproved" contains "approved", so the benign forms are checked first.
pub fn generic_factor(material: &str) -> f64 {
    let label = material.to_lowercase();
    if label.contains("non-combustible") {
        // Light or heavy non-combustible
        0.0
    } else if label.contains("combustible") || label.contains("unapproved") {
        2.0
    } else {
        // Approved products, "unknown", and unmatched labels all sit mid-range
        1.0
    }
}

/// Mezzanine floor construction factor (0.1 = best, 0.9 = worst)
pub fn mezzanine_factor(material: &str) -> f64 {
    let label = material.to_lowercase();
    if label.contains("reinforced concrete") {
        0.1
    } else if label.contains("composite") {
        0.2
    } else if label.contains("unprotected steel") {
        0.8
    } else if label.contains("protected steel") {
        0.5
    } else if label.contains("timber") {
        0.9
    } else {
        // Unmatched or unknown construction
        0.6
    }
}

/// Fraction of a material considered combustible, 0-1
///
/// Used only for the area-weighted combustible-percent estimate, not for the
/// construction score.
pub fn combustible_fraction_factor(material: &str) -> f64 {
    let label = material.to_lowercase();
    if label.contains("non-combustible") {
        0.0
    } else if label.contains("foam") {
        // Approved foam plastic counts half; unapproved counts in full
        if label.contains("unapproved") {
            1.0
        } else {
            0.5
        }
    } else if label.contains("combustible") {
        1.0
    } else {
        // "unknown" and unmatched labels take the conservative midpoint
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_factor_table() {
        assert_eq!(generic_factor("Combustible (Other)"), 2.0);
        assert_eq!(generic_factor("Unapproved Composite Panel"), 2.0);
        assert_eq!(generic_factor("Approved Composite Panel"), 1.0);
        assert_eq!(generic_factor("Light Non-Combustible"), 0.0);
        assert_eq!(generic_factor("Heavy Non-Combustible"), 0.0);
        assert_eq!(generic_factor("Unknown"), 1.0);
        assert_eq!(generic_factor("Corrugated Iron"), 1.0);
    }

    #[test]
    fn test_generic_factor_priority_on_colliding_labels() {
        // "non-combustible" must win over the embedded "combustible"
        assert_eq!(generic_factor("light non-combustible sheeting"), 0.0);
        // "unapproved" must win over the embedded "approved"
        assert_eq!(generic_factor("unapproved foam plastic"), 2.0);
    }

    #[test]
    fn test_generic_factor_case_insensitive() {
        assert_eq!(generic_factor("HEAVY NON-COMBUSTIBLE"), 0.0);
        assert_eq!(generic_factor("combustible cladding"), 2.0);
    }

    #[test]
    fn test_mezzanine_factor_table() {
        assert_eq!(mezzanine_factor("Reinforced Concrete"), 0.1);
        assert_eq!(mezzanine_factor("Composite (Steel Deck + Concrete)"), 0.2);
        assert_eq!(mezzanine_factor("Protected Steel"), 0.5);
        assert_eq!(mezzanine_factor("Unprotected Steel"), 0.8);
        assert_eq!(mezzanine_factor("Timber"), 0.9);
        assert_eq!(mezzanine_factor("Unknown"), 0.6);
        assert_eq!(mezzanine_factor("Aluminium Grating"), 0.6);
    }

    #[test]
    fn test_mezzanine_factor_unprotected_wins_over_protected() {
        // "unprotected steel" contains "protected steel"
        assert_eq!(mezzanine_factor("unprotected steel beams"), 0.8);
    }

    #[test]
    fn test_combustible_fraction_table() {
        assert_eq!(combustible_fraction_factor("Heavy Non-Combustible"), 0.0);
        assert_eq!(combustible_fraction_factor("Light Non-Combustible"), 0.0);
        assert_eq!(combustible_fraction_factor("Foam Plastic (Approved)"), 0.5);
        assert_eq!(combustible_fraction_factor("Foam Plastic (Unapproved)"), 1.0);
        assert_eq!(combustible_fraction_factor("Combustible (Other)"), 1.0);
        assert_eq!(combustible_fraction_factor("Unknown"), 0.5);
        assert_eq!(combustible_fraction_factor("Brick Veneer"), 0.5);
    }

    #[test]
    fn test_all_factors_within_documented_ranges() {
        let labels = [
            "Combustible (Other)",
            "Unapproved Composite Panel",
            "Approved Composite Panel",
            "Light Non-Combustible",
            "Heavy Non-Combustible",
            "Foam Plastic (Approved)",
            "Foam Plastic (Unapproved)",
            "Reinforced Concrete",
            "Composite (Steel Deck + Concrete)",
            "Protected Steel",
            "Unprotected Steel",
            "Timber",
            "Unknown",
            "",
            "totally novel material",
        ];
        for label in labels {
            let g = generic_factor(label);
            assert!((0.0..=2.0).contains(&g), "generic factor out of range: {label}");
            let m = mezzanine_factor(label);
            assert!((0.1..=0.9).contains(&m), "mezzanine factor out of range: {label}");
            let c = combustible_fraction_factor(label);
            assert!((0.0..=1.0).contains(&c), "combustible fraction out of range: {label}");
        }
    }
}
