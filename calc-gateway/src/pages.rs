//! Server-rendered HTML for the key request form.

use calc_core::{Issued, Operation};
use maud::{html, Markup, DOCTYPE};

use crate::config::KeyGating;

fn layout(title: &str, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                (body)
            }
        }
    }
}

/// Landing page: the key request form plus the endpoint shapes for `gating`.
#[must_use]
pub fn home(gating: KeyGating) -> Markup {
    let suffix = match gating {
        KeyGating::Required => "/{api_key}",
        KeyGating::Disabled => "",
    };
    layout(
        "Calculator API",
        &html! {
            @if gating == KeyGating::Required {
                p { "Every request needs an API key. Enter your email to get one." }
                form method="post" action="/getkey" {
                    label for="email" { "Email" }
                    input type="email" id="email" name="email" required;
                    button type="submit" { "Get API key" }
                }
            } @else {
                p { "No API key is needed on this server." }
            }
            h2 { "Endpoints" }
            p { "Send a JSON body " code { r#"{"a": 1.5, "b": 2}"# } " and receive " code { r#"{"ans": 3.5}"# } "." }
            ul {
                @for op in Operation::ALL {
                    li { code { "POST /" (op) (suffix) } }
                }
            }
        },
    )
}

/// Result page for `POST /getkey`.
#[must_use]
pub fn issued_key(issued: &Issued) -> Markup {
    let record = &issued.record;
    layout(
        "Your API key",
        &html! {
            @if issued.existed {
                p { "A key was already issued to " strong { (record.email) } ". Here it is again." }
            } @else {
                p { "New key issued to " strong { (record.email) } "." }
            }
            p { code id="api-key" { (record.key) } }
            p { "Issued " (record.issued_at.format("%Y-%m-%d %H:%M:%S UTC")) "." }
            p { a href="/" { "Back" } }
        },
    )
}
