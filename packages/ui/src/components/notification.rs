//! Notification banner for a [`store::Notice`].

use dioxus::prelude::*;
use store::{Notice, NoticeKind};

use crate::Icon;
use crate::icons::{FaCheck, FaXmark};

/// Renders a notice. A close button is shown only when `on_close` is set.
#[component]
pub fn Notification(notice: Notice, on_close: Option<EventHandler<()>>) -> Element {
    let class = match notice.kind {
        NoticeKind::Loading => "notification notification--loading",
        NoticeKind::Error => "notification notification--error",
        NoticeKind::Success => "notification notification--success",
    };

    rsx! {
        div {
            class: "{class}",
            role: if notice.is_error() { "alert" } else { "status" },
            span {
                class: "notification-icon",
                {match notice.kind {
                    NoticeKind::Loading => rsx! { span { class: "spinner" } },
                    NoticeKind::Error => rsx! { Icon { icon: FaXmark, width: 14, height: 14 } },
                    NoticeKind::Success => rsx! { Icon { icon: FaCheck, width: 14, height: 14 } },
                }}
            }
            div {
                class: "notification-body",
                div { class: "notification-title", "{notice.title}" }
                div { class: "notification-message", "{notice.message}" }
            }
            if let Some(handler) = on_close {
                button {
                    class: "notification-close",
                    r#type: "button",
                    title: "Close",
                    onclick: move |_| handler.call(()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}
