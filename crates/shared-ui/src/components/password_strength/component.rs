use dioxus::prelude::*;
use shared_types::password::{validate_password, SPECIAL_CHARS};

/// Live strength meter and requirement checklist for a candidate password.
#[component]
pub fn PasswordStrengthBar(
    password: String,
    #[props(default = true)] show_requirements: bool,
) -> Element {
    let report = validate_password(&password);
    let strength = report.strength;
    let percent = strength.percent();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "password-strength",
            div { class: "password-strength-row",
                span { class: "password-strength-label", "Password Strength:" }
                span {
                    class: "password-strength-value",
                    "data-strength": strength.as_key(),
                    "{strength.label()}"
                }
            }
            div { class: "password-strength-track",
                div {
                    class: "password-strength-fill",
                    "data-strength": strength.as_key(),
                    style: "width: {percent}%",
                }
            }

            if show_requirements {
                RequirementList { password: password.clone() }
            }
        }
    }
}

#[component]
fn RequirementList(password: String) -> Element {
    let checks = requirement_checks(&password);

    rsx! {
        div { class: "password-requirements",
            h4 { class: "password-requirements-title", "Password Requirements:" }
            ul {
                for (met , text) in checks {
                    li { class: if met { "requirement met" } else { "requirement" },
                        span { class: "requirement-mark", if met { "\u{2713}" } else { "\u{25cb}" } }
                        span { "{text}" }
                    }
                }
            }
        }
    }
}

/// Per-requirement satisfaction, checked directly rather than by matching
/// error strings.
fn requirement_checks(password: &str) -> Vec<(bool, String)> {
    vec![
        (
            password.chars().count() >= 8,
            "At least 8 characters long".to_string(),
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "At least one uppercase letter (A-Z)".to_string(),
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "At least one lowercase letter (a-z)".to_string(),
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "At least one number (0-9)".to_string(),
        ),
        (
            password.chars().any(|c| SPECIAL_CHARS.contains(c)),
            "At least one special character".to_string(),
        ),
        (
            !password.chars().any(|c| "<>\"'&".contains(c)),
            "Cannot contain: < > \" ' &".to_string(),
        ),
    ]
}
