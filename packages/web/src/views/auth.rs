//! Combined sign-in / sign-up page.

use dioxus::prelude::*;

use api::Registration;
use store::validate;
use ui::{make_client, sign_in, use_session};

use crate::Route;

const AUTH_CSS: Asset = asset!("/assets/auth.css");

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Login,
    Register,
}

/// Every error the form can show at once: one per field, plus a form-level
/// line for API failures.
#[derive(Clone, Debug, Default, PartialEq)]
struct FormErrors {
    username: Option<&'static str>,
    password: Option<&'static str>,
    confirm_password: Option<&'static str>,
    first_name: Option<&'static str>,
    last_name: Option<&'static str>,
    phone_number: Option<&'static str>,
    form: Option<String>,
}

impl FormErrors {
    fn any_field(&self) -> bool {
        self.username.is_some()
            || self.password.is_some()
            || self.confirm_password.is_some()
            || self.first_name.is_some()
            || self.last_name.is_some()
            || self.phone_number.is_some()
    }
}

/// Username and password are checked in both modes; the rest only matters
/// when registering.
fn validate_form(
    mode: Mode,
    username: &str,
    password: &str,
    confirm_password: &str,
    first_name: &str,
    last_name: &str,
    phone_number: &str,
) -> FormErrors {
    let mut errors = FormErrors {
        username: validate::username(username).err(),
        password: validate::password(password).err(),
        ..FormErrors::default()
    };
    if mode == Mode::Register {
        errors.confirm_password = if confirm_password.is_empty() {
            Some("Please confirm your password")
        } else if password != confirm_password {
            Some("Passwords do not match")
        } else {
            None
        };
        errors.first_name = validate::first_name(first_name).err();
        errors.last_name = validate::last_name(last_name).err();
        errors.phone_number = validate::phone_number(phone_number).err();
    }
    errors
}

fn field_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        "error"
    } else {
        ""
    }
}

/// Auth page component.
///
/// Registration submits the new account and then signs in with the same
/// credentials, so a successful sign-up lands on the profile directly.
#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut mode = use_signal(|| Mode::Login);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the profile
    let state = session();
    if !state.loading && state.session.is_some() {
        nav.replace(Route::Profile {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let current_mode = mode();
            let found = validate_form(
                current_mode,
                &username(),
                &password(),
                &confirm_password(),
                &first_name(),
                &last_name(),
                &phone_number(),
            );
            if found.any_field() {
                errors.set(found);
                return;
            }
            errors.set(FormErrors::default());
            loading.set(true);

            let client = make_client();
            let result = match current_mode {
                Mode::Login => client.login(&username(), &password()).await,
                Mode::Register => {
                    let Ok(phone) = phone_number().trim().parse::<i64>() else {
                        loading.set(false);
                        errors.set(FormErrors {
                            phone_number: Some("Phone number must be 10 digits"),
                            ..FormErrors::default()
                        });
                        return;
                    };
                    let registration = Registration {
                        username: username(),
                        password: password(),
                        first_name: first_name(),
                        last_name: last_name(),
                        phone_number: phone,
                    };
                    match client.register(&registration).await {
                        // Log in automatically after a successful registration
                        Ok(()) => client.login(&username(), &password()).await,
                        Err(e) => Err(e),
                    }
                }
            };

            match result {
                Ok(new_session) => {
                    sign_in(session, new_session).await;
                    nav.push(Route::Profile {});
                }
                Err(e) => {
                    loading.set(false);
                    errors.set(FormErrors {
                        form: Some(e.to_string()),
                        ..FormErrors::default()
                    });
                }
            }
        });
    };

    let switch_mode = move |_| {
        mode.set(match mode() {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        });
        errors.set(FormErrors::default());
    };

    let (title, tagline, submit_label, switch_prompt, switch_label) = match mode() {
        Mode::Login => (
            "Welcome Back",
            "Sign in to continue to your account",
            "Sign In",
            "Don't have an account? ",
            "Sign Up",
        ),
        Mode::Register => (
            "Create Account",
            "Sign up to get started",
            "Sign Up",
            "Already have an account? ",
            "Sign In",
        ),
    };

    let FormErrors {
        username: username_error,
        password: password_error,
        confirm_password: confirm_error,
        first_name: first_name_error,
        last_name: last_name_error,
        phone_number: phone_error,
        form: form_error,
    } = errors();

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div { class: "auth-wrapper",
            div { class: "auth-form-container",
                div { class: "brand",
                    h1 { class: "brand-name", "{title}" }
                    p { class: "brand-tagline", "{tagline}" }
                }

                if let Some(message) = form_error {
                    div { class: "error-message", "{message}" }
                }

                form { class: "auth-form", onsubmit: handle_submit,
                    div { class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: username(),
                            class: field_class(username_error),
                            oninput: move |evt| username.set(evt.value()),
                        }
                        if let Some(message) = username_error {
                            span { class: "field-error", "{message}" }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            class: field_class(password_error),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(message) = password_error {
                            span { class: "field-error", "{message}" }
                        }
                    }

                    if mode() == Mode::Register {
                        div { class: "form-group",
                            label { r#for: "confirmPassword", "Confirm Password" }
                            input {
                                id: "confirmPassword",
                                r#type: "password",
                                placeholder: "Confirm your password",
                                value: confirm_password(),
                                class: field_class(confirm_error),
                                oninput: move |evt| confirm_password.set(evt.value()),
                            }
                            if let Some(message) = confirm_error {
                                span { class: "field-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "firstName", "First Name" }
                            input {
                                id: "firstName",
                                r#type: "text",
                                placeholder: "Enter your first name",
                                value: first_name(),
                                class: field_class(first_name_error),
                                oninput: move |evt| first_name.set(evt.value()),
                            }
                            if let Some(message) = first_name_error {
                                span { class: "field-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "lastName", "Last Name" }
                            input {
                                id: "lastName",
                                r#type: "text",
                                placeholder: "Enter your last name",
                                value: last_name(),
                                class: field_class(last_name_error),
                                oninput: move |evt| last_name.set(evt.value()),
                            }
                            if let Some(message) = last_name_error {
                                span { class: "field-error", "{message}" }
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "phoneNumber", "Phone Number" }
                            input {
                                id: "phoneNumber",
                                r#type: "text",
                                placeholder: "Enter your phone number",
                                value: phone_number(),
                                class: field_class(phone_error),
                                oninput: move |evt| phone_number.set(evt.value()),
                            }
                            if let Some(message) = phone_error {
                                span { class: "field-error", "{message}" }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "submit-button",
                        disabled: loading(),
                        if loading() { "Please wait..." } else { "{submit_label}" }
                    }

                    div { class: "mode-switch",
                        span { "{switch_prompt}" }
                        button {
                            r#type: "button",
                            class: "switch-button",
                            onclick: switch_mode,
                            "{switch_label}"
                        }
                    }
                }
            }
        }
    }
}
