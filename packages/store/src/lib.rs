pub mod auth;
pub mod config;
pub mod models;
pub mod notice;
pub mod status;
pub mod tasks;
pub mod validation;

pub use auth::AuthSlice;
pub use config::ClientConfig;
pub use models::{Credentials, NewTask, Registration, Task, UserInfo};
pub use notice::{Notice, NoticeKind};
pub use status::{AsyncStatus, RequestFailure};
pub use tasks::TasksSlice;
pub use validation::{AuthForm, AuthMode, FieldErrors, TaskDraft, TaskErrors};
