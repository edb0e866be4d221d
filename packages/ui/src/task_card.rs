use dioxus::prelude::*;
use store::Task;

use crate::Icon;
use crate::icons::{FaCircle, FaCircleCheck};

/// One task in the list.
#[component]
pub fn TaskCard(task: Task) -> Element {
    let created = task
        .created_at
        .as_deref()
        .map(|ts| ts.split('T').next().unwrap_or(ts).to_string());

    rsx! {
        div {
            class: if task.completed { "paper task-card task-card--done" } else { "paper task-card" },
            div {
                class: "task-card-header",
                span {
                    class: "task-card-status",
                    title: if task.completed { "Completed" } else { "Open" },
                    if task.completed {
                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaCircle, width: 14, height: 14 }
                    }
                }
                h3 { class: "task-card-title", "{task.title}" }
            }
            if !task.description.is_empty() {
                p { class: "task-card-description", "{task.description}" }
            }
            if let Some(date) = created {
                span { class: "task-card-date", "Created {date}" }
            }
        }
    }
}
