use dioxus::prelude::*;
use promocard_model::{PlanDetails, SectionHues, SectionScales};
use promocard_ui::{
    AdjustPanel, DownloadButton, PlanCard, POSTER_ELEMENT_ID, POSTER_FILENAME, use_image_export,
};

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the card document (details, scales, hues) in signals and
/// wires the poster, the adjustment panel, and the download button
/// together. The poster wrapper carries a fixed element id so the
/// export pipeline can resolve the live subtree at trigger time.
fn app() -> Element {
    let mut details = use_signal(PlanDetails::default);
    let mut scales = use_signal(SectionScales::default);
    let mut hues = use_signal(SectionHues::default);
    let mut export = use_image_export();

    rsx! {
        // Tailwind utilities via the Play CDN; fine for a single-page
        // tool, and it keeps the build free of a Node toolchain.
        script { src: "https://cdn.tailwindcss.com" }
        style { dangerous_inner_html: include_str!("../assets/promocard.css") }

        div { class: "min-h-screen bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] \
                      from-gray-50 via-gray-100 to-gray-200 py-4 px-2",
            div { class: "container mx-auto flex flex-col items-center gap-4",
                div { id: POSTER_ELEMENT_ID, class: "flex items-center justify-center p-4",
                    PlanCard {
                        details: details(),
                        scales: scales(),
                        hues: hues(),
                        on_update: move |updated| details.set(updated),
                    }
                }

                AdjustPanel {
                    scales: scales(),
                    hues: hues(),
                    on_scales_change: move |updated| scales.set(updated),
                    on_hues_change: move |updated| hues.set(updated),
                }

                DownloadButton {
                    status: export.status(),
                    on_click: move |()| export.trigger(POSTER_ELEMENT_ID, POSTER_FILENAME),
                }

                footer { class: "text-center text-sm text-gray-500 mt-8",
                    "Built with "
                    span { class: "text-red-500", "♥" }
                    " by TAB"
                }
            }
        }
    }
}
