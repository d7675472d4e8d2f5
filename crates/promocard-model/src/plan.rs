//! Plan details and number-tier presentation.
//!
//! [`PlanDetails`] holds every editable text field on the card.
//! Fields left empty suppress their card section, so a stripped-down
//! card (no promotion, no roaming) renders without holes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phone-number tier, shown as the rotated badge on the card's edge.
///
/// Each tier carries its own badge gradient and icon tint so the card
/// reads differently for a premium number without any layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberType {
    /// Top tier, violet/fuchsia badge.
    Platinum,
    /// Gold tier, amber badge. The default for demo cards.
    Gold,
    /// Mid tier, slate/blue badge.
    SilverPlus,
    /// Base tier, gray badge.
    Silver,
}

impl NumberType {
    /// All tiers in descending order, for select controls.
    pub const ALL: [Self; 4] = [Self::Platinum, Self::Gold, Self::SilverPlus, Self::Silver];

    /// Display label for the tier badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Platinum => "Platinum Number",
            Self::Gold => "Gold Number",
            Self::SilverPlus => "Silver Plus Number",
            Self::Silver => "Silver Number",
        }
    }

    /// Tailwind gradient classes for the badge background.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Platinum => {
                "from-violet-200 to-fuchsia-200 text-fuchsia-800 hover:from-violet-300 hover:to-fuchsia-300"
            }
            Self::Gold => {
                "from-amber-100 to-amber-200 text-amber-700 hover:from-amber-200 hover:to-amber-300"
            }
            Self::SilverPlus => {
                "from-slate-200 to-blue-200 text-blue-700 hover:from-slate-300 hover:to-blue-300"
            }
            Self::Silver => {
                "from-gray-100 to-gray-200 text-gray-700 hover:from-gray-200 hover:to-gray-300"
            }
        }
    }

    /// Tailwind tint class for icons rendered next to the badge.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Platinum => "text-fuchsia-700",
            Self::Gold => "text-amber-600",
            Self::SilverPlus => "text-blue-600",
            Self::Silver => "text-gray-600",
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every editable text field on the promotional card.
///
/// All fields are plain strings — the card is a marketing poster, not
/// a billing record, so "Unlimited" and "1500" are equally valid data
/// values. Empty strings collapse the corresponding card section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanDetails {
    /// Subscriber number shown in the header badge.
    pub phone_number: String,
    /// Plan name headline.
    pub plan_name: String,
    /// Local data allowance value.
    pub local_data: String,
    /// Current speed value.
    pub speed: String,
    /// Pre-promotion speed, rendered struck through above `speed`.
    pub speed_original: String,
    /// How long the promotional speed lasts.
    pub speed_duration: String,
    /// Flexi minutes value.
    pub flexi_minutes: String,
    /// Pre-promotion flexi minutes, struck through when present.
    pub flexi_minutes_original: String,
    /// Roaming data allowance value.
    pub roaming_data: String,
    /// Promotion panel heading.
    pub promotion_title: String,
    /// First promotion bullet.
    pub promotion_offer1: String,
    /// Second promotion bullet.
    pub promotion_offer2: String,
    /// Monthly price (numeric part only; currency is fixed copy).
    pub price: String,
    /// VAT fine print under the price.
    pub vat_text: String,
    /// Commitment period line above the price.
    pub commitment_text: String,
    /// Label for the local data feature tile.
    pub local_data_label: String,
    /// Label for the speed feature tile.
    pub speed_label: String,
    /// Label for the flexi minutes feature tile.
    pub flexi_minutes_label: String,
    /// Label for the roaming data feature tile.
    pub roaming_data_label: String,
    /// Phone-number tier.
    pub number_type: NumberType,
}

impl Default for PlanDetails {
    /// The demo card shipped with the app.
    fn default() -> Self {
        Self {
            phone_number: "050786787".into(),
            plan_name: "Freedom Data Plan 500 Flexi".into(),
            local_data: "Unlimited".into(),
            speed: "Full Speed".into(),
            speed_original: "Up to 20Mbps".into(),
            speed_duration: "12 months".into(),
            flexi_minutes: "1500".into(),
            flexi_minutes_original: String::new(),
            roaming_data: "10GB".into(),
            promotion_title: "Exclusive Promotion".into(),
            promotion_offer1: "25% off for 6 months**".into(),
            promotion_offer2: "Choose your own gift*".into(),
            price: "500".into(),
            vat_text: "5% VAT excluded".into(),
            commitment_text: "12-month commitment".into(),
            local_data_label: "Local Data".into(),
            speed_label: "Speed".into(),
            flexi_minutes_label: "Flexi minutes".into(),
            roaming_data_label: "Roaming Data".into(),
            number_type: NumberType::Gold,
        }
    }
}

impl PlanDetails {
    /// Whether the promotion panel has anything to show.
    #[must_use]
    pub fn has_promotion(&self) -> bool {
        !self.promotion_title.is_empty()
            || !self.promotion_offer1.is_empty()
            || !self.promotion_offer2.is_empty()
    }

    /// Whether the price footer has anything to show.
    #[must_use]
    pub fn has_price_section(&self) -> bool {
        !self.price.is_empty() || !self.commitment_text.is_empty() || !self.vat_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_tier() {
        // If you add a variant to NumberType, update ALL and this count.
        assert_eq!(NumberType::ALL.len(), 4);
        let mut seen = std::collections::HashSet::new();
        for tier in NumberType::ALL {
            assert!(seen.insert(tier), "Duplicate tier in ALL: {tier}");
        }
    }

    #[test]
    fn tier_serde_names_are_kebab_case() {
        let json = serde_json::to_string(&NumberType::SilverPlus);
        assert_eq!(json.ok().as_deref(), Some("\"silver-plus\""));
        let back: Result<NumberType, _> = serde_json::from_str("\"gold\"");
        assert_eq!(back.ok(), Some(NumberType::Gold));
    }

    #[test]
    fn default_card_is_fully_populated() {
        let details = PlanDetails::default();
        assert_eq!(details.phone_number, "050786787");
        assert_eq!(details.number_type, NumberType::Gold);
        assert!(details.has_promotion());
        assert!(details.has_price_section());
        // flexi_minutes_original is the one intentionally blank field.
        assert!(details.flexi_minutes_original.is_empty());
    }

    #[test]
    fn empty_sections_are_detected() {
        let details = PlanDetails {
            promotion_title: String::new(),
            promotion_offer1: String::new(),
            promotion_offer2: String::new(),
            price: String::new(),
            commitment_text: String::new(),
            vat_text: String::new(),
            ..PlanDetails::default()
        };
        assert!(!details.has_promotion());
        assert!(!details.has_price_section());
    }

    #[test]
    fn details_round_trip_through_camel_case_json() {
        let details = PlanDetails::default();
        let Ok(json) = serde_json::to_string(&details) else {
            unreachable!("PlanDetails serializes infallibly");
        };
        assert!(json.contains("\"phoneNumber\""), "expected camelCase keys in {json}");
        let back: Result<PlanDetails, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(details));
    }
}
