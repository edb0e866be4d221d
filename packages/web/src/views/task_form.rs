use dioxus::prelude::*;
use store::{AsyncStatus, NoticeKind, TaskDraft, TaskErrors};
use ui::components::{Button, ButtonVariant, Input, Notification, Paper, TextArea};
use ui::{add_new_task, use_api, use_auth, use_tasks};

use super::use_require_auth;
use crate::Route;

#[component]
pub fn TaskForm() -> Element {
    use_require_auth();
    let auth = use_auth();
    let mut tasks = use_tasks();
    let api = use_api();
    let navigator = use_navigator();
    let mut draft = use_signal(TaskDraft::default);
    let mut errors = use_signal(TaskErrors::default);

    // A notice from an earlier submission does not belong to this form.
    use_effect(move || tasks.write().reset_create());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let values = draft();
        let task_errors = values.validate();
        let valid = task_errors.is_empty();
        errors.set(task_errors);
        if !valid {
            return;
        }
        let api = api.clone();
        let token = auth.peek().token();
        spawn(async move {
            add_new_task(tasks, api, token, values.to_new_task()).await;
            if tasks.peek().create_status == AsyncStatus::Fulfilled {
                navigator.push(Route::TaskList {});
            }
        });
    };

    let values = draft();
    let task_errors = errors();
    let slice = tasks();
    let pending = slice.create_status.is_pending();
    // Success is announced on the list after navigating.
    let notice = slice
        .create_notice()
        .filter(|n| n.kind != NoticeKind::Success);

    rsx! {
        Paper {
            class: "task-form",
            h2 { "New task" }
            form {
                class: "task-form-fields",
                novalidate: true,
                onsubmit,

                Input {
                    id: "task-title",
                    label: "Title",
                    placeholder: "What needs doing?",
                    required: true,
                    value: values.title.clone(),
                    error: task_errors.title.map(str::to_string),
                    oninput: move |evt: FormEvent| {
                        draft.write().title = evt.value();
                        errors.write().title = None;
                    },
                }

                TextArea {
                    id: "task-description",
                    label: "Description",
                    placeholder: "Details (optional)",
                    value: values.description.clone(),
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }

                div {
                    class: "form-actions",
                    Button {
                        submit: true,
                        disabled: pending,
                        if pending { "Saving..." } else { "Create task" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| {
                            navigator.push(Route::TaskList {});
                        },
                        "Cancel"
                    }
                }
            }

            if let Some(notice) = notice {
                Notification { notice }
            }
        }
    }
}
