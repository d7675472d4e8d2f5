//! The promotional plan card.
//!
//! Renders the 380px poster: rotated tier badge, phone number and
//! operator logo, plan name, a 2×2 feature grid, the promotion panel,
//! and the price footer. Every piece of copy is an [`EditableText`];
//! edits flow back up through `on_update` as a fresh [`PlanDetails`].
//! Section scale/hue adjustments arrive as inline styles computed by
//! `promocard-model`, so the card itself stays stateless.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdEarth, LdGift, LdGlobe, LdPhoneCall, LdSparkles, LdWifi,
};

use promocard_model::{PlanDetails, SectionHues, SectionScales, hue_style, scale_style};

use crate::components::EditableText;

/// Operator mark shown next to the phone number.
const OPERATOR_LOGO_URL: &str =
    "https://backup.xadtechnologies.com/wp-content/uploads/2022/10/Eti-New-logo.png";

/// Props for the [`PlanCard`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PlanCardProps {
    /// Card copy. Empty fields collapse their sections.
    details: PlanDetails,
    /// Fired with the full updated details after any inline edit.
    on_update: EventHandler<PlanDetails>,
    /// Per-section size multipliers.
    scales: SectionScales,
    /// Per-section hue rotations.
    hues: SectionHues,
}

/// Build a commit handler that rewrites one field of the details.
///
/// Each editable span gets its own clone of the current details; the
/// handler applies the edit to a fresh copy so `on_update` always
/// carries a complete document.
fn field_updater(
    details: &PlanDetails,
    on_update: EventHandler<PlanDetails>,
    apply: fn(&mut PlanDetails, String),
) -> impl FnMut(String) + 'static {
    let details = details.clone();
    move |value: String| {
        let mut updated = details.clone();
        apply(&mut updated, value);
        on_update.call(updated);
    }
}

/// One tile in the feature grid: icon, editable label, optional
/// struck-through original value, editable current value.
#[derive(Props, Clone, PartialEq)]
struct PlanFeatureProps {
    label: String,
    value: String,
    #[props(default)]
    original_value: String,
    icon: Element,
    on_label_change: EventHandler<String>,
    on_value_change: EventHandler<String>,
    on_original_change: EventHandler<String>,
}

#[component]
fn PlanFeature(props: PlanFeatureProps) -> Element {
    let PlanFeatureProps {
        label,
        value,
        original_value,
        icon,
        on_label_change,
        on_value_change,
        on_original_change,
    } = props;

    // A tile without a label or value renders nothing at all, so the
    // grid collapses cleanly for stripped-down cards.
    if label.is_empty() || value.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "relative overflow-hidden rounded-lg bg-gradient-to-br from-emerald-50 to-blue-50 \
                    p-2 transition-all hover:shadow-md h-[72px] backdrop-blur-sm",
            div { class: "space-y-0.5",
                div { class: "flex items-center gap-1.5 text-gray-500",
                    {icon}
                    EditableText {
                        value: label,
                        class: "text-xs font-medium",
                        on_change: on_label_change,
                    }
                }
                div { class: "space-y-0",
                    if !original_value.is_empty() {
                        EditableText {
                            value: original_value,
                            class: "text-[10px] line-through text-gray-400 -mb-0.5",
                            on_change: on_original_change,
                        }
                    }
                    EditableText {
                        value,
                        class: "text-base font-bold bg-gradient-to-r from-emerald-600 to-emerald-800 \
                                bg-clip-text text-transparent",
                        on_change: on_value_change,
                    }
                }
            }
        }
    }
}

/// The full promotional card.
#[component]
#[allow(clippy::too_many_lines)]
pub fn PlanCard(props: PlanCardProps) -> Element {
    let PlanCardProps {
        details,
        on_update,
        scales,
        hues,
    } = props;
    let tier = details.number_type;
    let badge_class = tier.badge_class();
    let tier_label = tier.label();

    // Inline styles are computed once per render; the card itself
    // carries no adjustment state.
    let header_style = format!("{} {}", scale_style(scales.header), hue_style(hues.header));
    let plan_name_style = format!(
        "{} {}",
        scale_style(scales.plan_name),
        hue_style(hues.plan_name)
    );
    let features_style = format!(
        "{} {}",
        scale_style(scales.features),
        hue_style(hues.features)
    );
    let promo_style = format!("{} {}", scale_style(scales.promo), hue_style(hues.promo));
    let footer_style = format!("{} {}", scale_style(scales.footer), hue_style(hues.footer));

    rsx! {
        div { class: "relative w-full max-w-[380px]",
            // Rotated tier badge hugging the card's left edge.
            div {
                class: "absolute -left-0 top-0 -translate-y-1/2 -rotate-90 origin-bottom-left z-10",
                style: scale_style(scales.header),
                span {
                    class: "inline-flex items-center rounded-full px-3 py-1 text-xs font-semibold \
                            shadow-sm transition-all duration-300 bg-gradient-to-r {badge_class}",
                    "{tier_label}"
                }
            }

            // Glow layers behind the card.
            div {
                class: "absolute -inset-1.5 bg-gradient-to-r from-red-500/40 to-amber-500/40 \
                        opacity-75 blur-2xl -z-10 animate-pulse",
                style: hue_style(hues.header),
            }
            div {
                class: "absolute -inset-1.5 bg-gradient-to-b from-blue-500/40 to-purple-500/40 \
                        opacity-75 blur-2xl -z-10",
                style: hue_style(hues.header),
            }

            // Gradient border wrapper.
            div {
                class: "relative rounded-xl p-[2px] bg-gradient-to-br from-red-500/80 \
                        via-amber-500/80 to-red-500/80",
                style: hue_style(hues.header),
                div { class: "absolute inset-0 rounded-xl bg-gradient-to-b from-white/95 to-white/80 backdrop-blur-xl" }

                div { class: "relative rounded-xl shadow-xl transition-all duration-500 backdrop-blur-sm bg-white/95",
                    // Header: phone number badge, logo, plan name.
                    div { class: "space-y-2 p-6 pb-2",
                        if !details.phone_number.is_empty() {
                            div {
                                class: "flex flex-row items-center justify-between gap-2 animate-fade-in",
                                style: "{header_style}",
                                div { class: "flex flex-col gap-1 flex-grow min-w-0",
                                    span {
                                        class: "inline-flex items-center rounded-full px-3 py-1 shadow-sm \
                                                transition-all duration-300 bg-gradient-to-r {badge_class} mx-auto",
                                        EditableText {
                                            value: details.phone_number.clone(),
                                            class: "text-2xl font-bold font-display",
                                            on_change: field_updater(&details, on_update, |d, v| d.phone_number = v),
                                        }
                                    }
                                }
                                div {
                                    class: "w-[80px] sm:w-[100px] h-16 sm:h-20 flex-shrink-0 flex items-center justify-center",
                                    style: scale_style(scales.logo),
                                    img {
                                        class: "w-full h-full object-contain",
                                        style: "image-rendering: high-quality;",
                                        src: OPERATOR_LOGO_URL,
                                        alt: "Operator logo",
                                    }
                                }
                            }
                        }
                        if !details.plan_name.is_empty() {
                            div { style: "{plan_name_style}",
                                EditableText {
                                    value: details.plan_name.clone(),
                                    class: "text-lg font-bold tracking-tight bg-gradient-to-br \
                                            from-gray-900 via-gray-700 to-gray-800 bg-clip-text text-transparent",
                                    on_change: field_updater(&details, on_update, |d, v| d.plan_name = v),
                                }
                            }
                        }
                    }

                    // Body: feature grid, promotion, price.
                    div { class: "space-y-3 p-6 pt-0",
                        div {
                            class: "grid gap-2",
                            style: "{features_style}",
                            div { class: "grid grid-cols-2 gap-2",
                                PlanFeature {
                                    label: details.local_data_label.clone(),
                                    value: details.local_data.clone(),
                                    icon: rsx! {
                                        Icon { width: 14, height: 14, class: "text-emerald-600", icon: LdWifi }
                                    },
                                    on_label_change: field_updater(&details, on_update, |d, v| d.local_data_label = v),
                                    on_value_change: field_updater(&details, on_update, |d, v| d.local_data = v),
                                    on_original_change: |_| {},
                                }
                                PlanFeature {
                                    label: details.speed_label.clone(),
                                    value: details.speed.clone(),
                                    original_value: details.speed_original.clone(),
                                    icon: rsx! {
                                        Icon { width: 14, height: 14, class: "text-emerald-600", icon: LdEarth }
                                    },
                                    on_label_change: field_updater(&details, on_update, |d, v| d.speed_label = v),
                                    on_value_change: field_updater(&details, on_update, |d, v| d.speed = v),
                                    on_original_change: field_updater(&details, on_update, |d, v| d.speed_original = v),
                                }
                            }
                            div { class: "grid grid-cols-2 gap-2",
                                PlanFeature {
                                    label: details.flexi_minutes_label.clone(),
                                    value: details.flexi_minutes.clone(),
                                    original_value: details.flexi_minutes_original.clone(),
                                    icon: rsx! {
                                        Icon { width: 14, height: 14, class: "text-emerald-600", icon: LdPhoneCall }
                                    },
                                    on_label_change: field_updater(&details, on_update, |d, v| d.flexi_minutes_label = v),
                                    on_value_change: field_updater(&details, on_update, |d, v| d.flexi_minutes = v),
                                    on_original_change: field_updater(&details, on_update, |d, v| d.flexi_minutes_original = v),
                                }
                                PlanFeature {
                                    label: details.roaming_data_label.clone(),
                                    value: details.roaming_data.clone(),
                                    icon: rsx! {
                                        Icon { width: 14, height: 14, class: "text-emerald-600", icon: LdGlobe }
                                    },
                                    on_label_change: field_updater(&details, on_update, |d, v| d.roaming_data_label = v),
                                    on_value_change: field_updater(&details, on_update, |d, v| d.roaming_data = v),
                                    on_original_change: |_| {},
                                }
                            }
                        }

                        if details.has_promotion() {
                            div {
                                class: "rounded-lg bg-gradient-to-br from-red-500 via-red-600 to-red-700 \
                                        p-3 text-white space-y-2 shadow-lg hover:shadow-xl \
                                        transition-all duration-300 hover:-translate-y-0.5",
                                style: "{promo_style}",
                                if !details.promotion_title.is_empty() {
                                    p { class: "text-sm font-bold flex items-center gap-1.5",
                                        Icon { width: 16, height: 16, icon: LdSparkles }
                                        EditableText {
                                            value: details.promotion_title.clone(),
                                            on_change: field_updater(&details, on_update, |d, v| d.promotion_title = v),
                                        }
                                    }
                                }
                                div { class: "space-y-1.5",
                                    if !details.promotion_offer1.is_empty() {
                                        p { class: "text-xs flex items-center gap-1.5 bg-white/10 p-1.5 rounded-md backdrop-blur-sm",
                                            Icon { width: 14, height: 14, icon: LdGift }
                                            EditableText {
                                                value: details.promotion_offer1.clone(),
                                                on_change: field_updater(&details, on_update, |d, v| d.promotion_offer1 = v),
                                            }
                                        }
                                    }
                                    if !details.promotion_offer2.is_empty() {
                                        p { class: "text-xs flex items-center gap-1.5 bg-white/10 p-1.5 rounded-md backdrop-blur-sm",
                                            Icon { width: 14, height: 14, icon: LdGift }
                                            EditableText {
                                                value: details.promotion_offer2.clone(),
                                                on_change: field_updater(&details, on_update, |d, v| d.promotion_offer2 = v),
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if details.has_price_section() {
                            div {
                                class: "space-y-1 p-2 rounded-lg bg-gradient-to-br from-gray-50 to-gray-100",
                                style: "{footer_style}",
                                if !details.commitment_text.is_empty() {
                                    div { class: "flex items-center gap-1.5",
                                        Icon { width: 14, height: 14, class: "text-gray-600", icon: LdClock }
                                        EditableText {
                                            value: details.commitment_text.clone(),
                                            class: "text-xs font-medium text-gray-600",
                                            on_change: field_updater(&details, on_update, |d, v| d.commitment_text = v),
                                        }
                                    }
                                }
                                if !details.price.is_empty() {
                                    div { class: "flex items-baseline gap-1.5",
                                        span { class: "text-2xl font-bold text-gray-900 flex items-baseline gap-1",
                                            "AED"
                                            EditableText {
                                                value: details.price.clone(),
                                                class: "inline text-gray-900",
                                                on_change: field_updater(&details, on_update, |d, v| d.price = v),
                                            }
                                        }
                                        span { class: "text-sm text-gray-600", "/month" }
                                    }
                                }
                                if !details.vat_text.is_empty() {
                                    EditableText {
                                        value: details.vat_text.clone(),
                                        class: "text-[10px] text-gray-500",
                                        on_change: field_updater(&details, on_update, |d, v| d.vat_text = v),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
