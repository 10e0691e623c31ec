//! Presentation mapping from a server-assigned risk level to display details.

/// Fixed presentation tuple for a risk level. The color is an RGB triple so
/// this module stays renderer-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskDetails {
    pub color: (u8, u8, u8),
    pub glyph: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Map a risk level string to its presentation details.
///
/// "High Risk", "Very High Risk" and any unrecognized value all fall into
/// the catch-all branch, which forces the label to "Very High Risk". This
/// conflation matches the upstream product behavior and is intentional.
pub fn risk_details(level: &str) -> RiskDetails {
    match level {
        "Low Risk" => RiskDetails {
            color: (0x22, 0xc5, 0x5e),
            glyph: "☺",
            label: "Low Risk",
            description: "Your mental health indicators appear stable.",
        },
        "Moderate Risk" => RiskDetails {
            color: (0xea, 0xb3, 0x08),
            glyph: "~",
            label: "Moderate Risk",
            description: "Some indicators suggest stress, Consider proactive care.",
        },
        _ => RiskDetails {
            color: (0xef, 0x44, 0x44),
            glyph: "⚠",
            label: "Very High Risk",
            description: "Urgent attention recommended, Please seek help immediately.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_risk() {
        let details = risk_details("Low Risk");
        assert_eq!(details.color, (0x22, 0xc5, 0x5e));
        assert_eq!(details.label, "Low Risk");
        assert_eq!(
            details.description,
            "Your mental health indicators appear stable."
        );
    }

    #[test]
    fn test_moderate_risk() {
        let details = risk_details("Moderate Risk");
        assert_eq!(details.color, (0xea, 0xb3, 0x08));
        assert_eq!(details.label, "Moderate Risk");
    }

    #[test]
    fn test_high_risk_is_labeled_very_high() {
        // The catch-all branch relabels "High Risk" as "Very High Risk".
        let details = risk_details("High Risk");
        assert_eq!(details.label, "Very High Risk");
        assert_eq!(details.color, (0xef, 0x44, 0x44));
    }

    #[test]
    fn test_unknown_level_falls_through() {
        let details = risk_details("Banana");
        assert_eq!(details.label, "Very High Risk");
        assert_eq!(details.color, (0xef, 0x44, 0x44));
    }
}
