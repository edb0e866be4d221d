//! Tasks slice: the fetched list plus the state of the list and create requests.
//!
//! `begin_*` hands out the current session number and `settle_*` drops any
//! result whose session has since been cleared, so a response arriving after
//! logout never repopulates the list.

use crate::models::Task;
use crate::notice::Notice;
use crate::status::{AsyncStatus, RequestFailure};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TasksSlice {
    pub tasks: Vec<Task>,
    /// State of the list request.
    pub status: AsyncStatus,
    pub error: Option<RequestFailure>,
    /// State of the create request.
    pub create_status: AsyncStatus,
    pub create_error: Option<RequestFailure>,
    /// Bumped by [`TasksSlice::clear`].
    pub session: u64,
}

impl TasksSlice {
    /// The list has never been requested in this session.
    pub fn needs_fetch(&self) -> bool {
        self.status == AsyncStatus::Idle
    }

    /// Whether the list view should request tasks when it mounts.
    pub fn should_fetch_on_mount(&self, refresh_on_mount: bool) -> bool {
        if self.status.is_pending() {
            return false;
        }
        self.needs_fetch() || refresh_on_mount
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.status = AsyncStatus::Pending;
        self.error = None;
        self.session
    }

    pub fn fetch_fulfilled(&mut self, tasks: Vec<Task>) {
        self.status = AsyncStatus::Fulfilled;
        self.tasks = tasks;
    }

    /// The previously fetched list stays visible.
    pub fn fetch_rejected(&mut self, failure: RequestFailure) {
        self.status = AsyncStatus::Rejected;
        self.error = Some(failure);
    }

    /// Returns `false` when the result belongs to a cleared session and was dropped.
    pub fn settle_fetch(&mut self, session: u64, result: Result<Vec<Task>, RequestFailure>) -> bool {
        if session != self.session {
            return false;
        }
        match result {
            Ok(tasks) => self.fetch_fulfilled(tasks),
            Err(failure) => self.fetch_rejected(failure),
        }
        true
    }

    pub fn begin_create(&mut self) -> u64 {
        self.create_status = AsyncStatus::Pending;
        self.create_error = None;
        self.session
    }

    pub fn create_fulfilled(&mut self, task: Task) {
        self.create_status = AsyncStatus::Fulfilled;
        self.tasks.push(task);
    }

    pub fn create_rejected(&mut self, failure: RequestFailure) {
        self.create_status = AsyncStatus::Rejected;
        self.create_error = Some(failure);
    }

    /// Returns `false` when the result belongs to a cleared session and was dropped.
    pub fn settle_create(&mut self, session: u64, result: Result<Task, RequestFailure>) -> bool {
        if session != self.session {
            return false;
        }
        match result {
            Ok(task) => self.create_fulfilled(task),
            Err(failure) => self.create_rejected(failure),
        }
        true
    }

    pub fn reset_create(&mut self) {
        self.create_status = AsyncStatus::Idle;
        self.create_error = None;
    }

    /// Drop every task and request state. In-flight requests are orphaned.
    pub fn clear(&mut self) {
        *self = Self {
            session: self.session.wrapping_add(1),
            ..Self::default()
        };
    }

    /// Notice for the list view.
    pub fn notice(&self) -> Option<Notice> {
        match self.status {
            AsyncStatus::Pending => Some(Notice::loading(
                "Loading tasks",
                "Fetching your tasks from the server.",
            )),
            AsyncStatus::Rejected => {
                let message = self
                    .error
                    .as_ref()
                    .map(|e| e.message.as_str())
                    .unwrap_or("Unknown error");
                Some(Notice::error("Could not load tasks", message))
            }
            _ => None,
        }
    }

    /// Notice for the creation form.
    pub fn create_notice(&self) -> Option<Notice> {
        match self.create_status {
            AsyncStatus::Pending => {
                Some(Notice::loading("Saving task", "Please wait while the task is saved."))
            }
            AsyncStatus::Rejected => {
                let message = self
                    .create_error
                    .as_ref()
                    .map(|e| e.message.as_str())
                    .unwrap_or("Unknown error");
                Some(Notice::error("Could not save task", message))
            }
            AsyncStatus::Fulfilled => {
                Some(Notice::success("Task created", "Your task was added to the list."))
            }
            AsyncStatus::Idle => None,
        }
    }
}
