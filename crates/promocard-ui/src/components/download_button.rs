//! Status-aware poster download button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdDownload, LdLoaderCircle};

use promocard_export::ExportStatus;

/// Props for the [`DownloadButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DownloadButtonProps {
    /// Current export status, read from the export hook.
    status: ExportStatus,
    /// Fired when the user asks for a download.
    on_click: EventHandler<()>,
}

/// Download trigger that mirrors the export lifecycle.
///
/// Disabled while an export is in flight; turns red in the error
/// state, where a click retries immediately.
#[component]
pub fn DownloadButton(props: DownloadButtonProps) -> Element {
    let status = props.status;

    let gradient = if status == ExportStatus::Error {
        "from-red-600 to-red-800 hover:from-red-700 hover:to-red-900"
    } else {
        "from-blue-600 to-blue-800 hover:from-blue-700 hover:to-blue-900"
    };
    let label = match status {
        ExportStatus::Idle => "Download Poster",
        ExportStatus::Generating => "Generating Image...",
        ExportStatus::Downloading => "Downloading...",
        ExportStatus::Error => "Failed, Try Again",
    };

    rsx! {
        button {
            class: "w-full max-w-[380px] px-4 py-2 rounded-lg bg-gradient-to-r {gradient} \
                    text-white shadow-lg hover:shadow-xl transition-all duration-300 \
                    disabled:opacity-50 disabled:cursor-not-allowed \
                    flex items-center justify-center",
            disabled: status.is_busy(),
            onclick: move |_| props.on_click.call(()),
            span { class: "w-4 h-4 mr-2",
                {match status {
                    ExportStatus::Idle => rsx! {
                        Icon { width: 16, height: 16, icon: LdDownload }
                    },
                    ExportStatus::Generating | ExportStatus::Downloading => rsx! {
                        Icon { width: 16, height: 16, class: "animate-spin", icon: LdLoaderCircle }
                    },
                    ExportStatus::Error => rsx! {
                        Icon { width: 16, height: 16, icon: LdCircleAlert }
                    },
                }}
            }
            "{label}"
        }
    }
}
