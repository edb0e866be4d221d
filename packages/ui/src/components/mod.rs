//! Form and layout primitives shared by every view.

use dioxus::prelude::*;

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, TextArea};

mod checkbox;
pub use checkbox::Checkbox;

mod label;
pub use label::Label;

mod notification;
pub use notification::Notification;

mod paper;
pub use paper::{Container, Paper};

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");
