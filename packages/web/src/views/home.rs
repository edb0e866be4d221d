//! Authentication form: login and register share one view with a mode toggle.

use dioxus::prelude::*;
use store::{AuthForm, AuthMode, FieldErrors};
use ui::components::{Button, ButtonVariant, Checkbox, Container, Input, Notification, Paper};
use ui::{login_user, register_user, use_api, use_auth};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();
    let mut mode = use_signal(AuthMode::default);
    let mut fields = use_signal(AuthForm::default);
    let mut errors = use_signal(FieldErrors::default);

    // Once the slice holds a named user, the session is usable.
    use_effect(move || {
        if auth.read().is_authenticated() {
            navigator.push(Route::TaskList {});
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let current_mode = mode();
        let values = fields();
        let field_errors = values.validate(current_mode);
        let valid = field_errors.is_empty();
        errors.set(field_errors);
        if !valid {
            return;
        }
        match current_mode {
            AuthMode::Register => spawn(register_user(auth, api.clone(), values.registration())),
            AuthMode::Login => spawn(login_user(auth, api.clone(), values.credentials())),
        };
    };

    let on_toggle = move |_: MouseEvent| {
        mode.set(mode().toggle());
        errors.set(FieldErrors::default());
    };

    let current_mode = mode();
    let values = fields();
    let field_errors = errors();
    let notice = auth.read().notice();
    let pending = auth.read().status.is_pending();

    rsx! {
        Container {
            size: "xs",
            Paper {
                p {
                    class: "auth-title",
                    "Welcome to Taskit, {current_mode.as_str()} with"
                }
                hr { class: "divider" }

                form {
                    class: "auth-form",
                    novalidate: true,
                    onsubmit,

                    if current_mode == AuthMode::Register {
                        Input {
                            id: "auth-name",
                            label: "Name",
                            placeholder: "Your name",
                            required: true,
                            value: values.name.clone(),
                            error: field_errors.name_message().map(str::to_string),
                            oninput: move |evt: FormEvent| {
                                fields.write().name = evt.value();
                                errors.write().name = None;
                            },
                        }
                    }

                    Input {
                        id: "auth-email",
                        label: "Email",
                        input_type: "email",
                        placeholder: "hello@taskit.dev",
                        required: true,
                        value: values.email.clone(),
                        error: field_errors.email.map(str::to_string),
                        oninput: move |evt: FormEvent| {
                            fields.write().email = evt.value();
                            errors.write().email = None;
                        },
                    }

                    Input {
                        id: "auth-password",
                        label: "Password",
                        input_type: "password",
                        placeholder: "Your password",
                        required: true,
                        value: values.password.clone(),
                        error: field_errors.password.map(str::to_string),
                        oninput: move |evt: FormEvent| {
                            fields.write().password = evt.value();
                            errors.write().password = None;
                        },
                    }

                    if current_mode == AuthMode::Register {
                        Checkbox {
                            id: "auth-terms",
                            label: "I accept terms and conditions",
                            checked: values.terms,
                            onchange: move |checked: bool| fields.write().terms = checked,
                        }
                    }

                    div {
                        class: "auth-actions",
                        Button {
                            variant: ButtonVariant::Subtle,
                            onclick: on_toggle,
                            "{current_mode.switch_prompt()}"
                        }
                        Button {
                            submit: true,
                            disabled: pending,
                            "{current_mode.label()}"
                        }
                    }
                }

                if let Some(notice) = notice {
                    Notification { notice }
                }
            }
        }
    }
}
