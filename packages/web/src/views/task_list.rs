use dioxus::prelude::*;
use store::{AsyncStatus, NoticeKind};
use ui::components::{Button, ButtonVariant, Notification};
use ui::icons::{FaArrowsRotate, FaPlus};
use ui::{fetch_tasks, use_api, use_auth, use_config, use_tasks, Icon, TaskCard};

use super::use_require_auth;
use crate::Route;

#[component]
pub fn TaskList() -> Element {
    use_require_auth();
    let auth = use_auth();
    let mut tasks = use_tasks();
    let api = use_api();
    let config = use_config();

    // Fetch on first mount, or on every mount when configured to.
    let mount_api = api.clone();
    use_hook(move || {
        let signed_in = auth.peek().is_authenticated();
        let should_fetch = tasks
            .peek()
            .should_fetch_on_mount(config.tasks.refresh_on_mount);
        if signed_in && should_fetch {
            spawn(fetch_tasks(tasks, mount_api, auth.peek().token()));
        }
    });

    let on_refresh = move |_: MouseEvent| {
        spawn(fetch_tasks(tasks, api.clone(), auth.peek().token()));
    };

    let slice = tasks();
    let empty = slice.status == AsyncStatus::Fulfilled && slice.tasks.is_empty();
    let created = slice
        .create_notice()
        .filter(|n| n.kind == NoticeKind::Success);

    rsx! {
        div {
            class: "task-list",
            div {
                class: "task-list-header",
                h2 { "Your tasks" }
                span { class: "task-count", "{slice.tasks.len()}" }
                div {
                    class: "task-list-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: slice.status.is_pending(),
                        onclick: on_refresh,
                        Icon { icon: FaArrowsRotate, width: 12, height: 12 }
                        " Refresh"
                    }
                    Link {
                        class: "btn btn-primary",
                        to: Route::TaskForm {},
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " New task"
                    }
                }
            }

            if let Some(notice) = created {
                Notification {
                    notice,
                    on_close: move |_: ()| tasks.write().reset_create(),
                }
            }

            if let Some(notice) = slice.notice() {
                Notification { notice }
            }

            if empty {
                div {
                    class: "task-empty",
                    p { "No tasks yet." }
                    Link { to: Route::TaskForm {}, "Create your first task" }
                }
            }

            div {
                class: "task-grid",
                for task in slice.tasks.iter() {
                    TaskCard { key: "{task.id}", task: task.clone() }
                }
            }
        }
    }
}
