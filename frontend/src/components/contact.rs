use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
struct ContactRequest {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Deserialize)]
struct RelayResponse {
    message: String,
}

/// Contact form posting to the backend relay. The empty-field check here is a
/// fast-fail courtesy; the server repeats it as the authoritative gate.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let is_sending = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |e: InputEvent| {
            subject.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let error = error.clone();
        let success = success.clone();
        let is_sending = is_sending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let body = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };

            if body.name.trim().is_empty()
                || body.email.trim().is_empty()
                || body.subject.trim().is_empty()
                || body.message.trim().is_empty()
            {
                success.set(None);
                error.set(Some("Please fill in all fields before sending.".to_string()));
                return;
            }

            error.set(None);
            success.set(None);
            is_sending.set(true);

            let name = name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            let error = error.clone();
            let success = success.clone();
            let is_sending = is_sending.clone();

            spawn_local(async move {
                match Request::post(&format!("{}/api/sendEmail", config::get_backend_url()))
                    .json(&body)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            success.set(Some("Message sent successfully!".to_string()));
                            name.set(String::new());
                            email.set(String::new());
                            subject.set(String::new());
                            message.set(String::new());
                        } else {
                            log!("Relay failed with status:", response.status());
                            match response.json::<RelayResponse>().await {
                                Ok(resp) => error.set(Some(resp.message)),
                                Err(_) => {
                                    error.set(Some("Failed to send message".to_string()))
                                }
                            }
                        }
                    }
                    Err(e) => {
                        log!("Network error:", e.to_string());
                        error.set(Some(format!("Request failed: {}", e)));
                    }
                }
                is_sending.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Your Name"
                    value={(*name).clone()}
                    oninput={on_name}
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <input
                type="text"
                placeholder="Subject"
                value={(*subject).clone()}
                oninput={on_subject}
            />
            <textarea
                rows="6"
                placeholder="Your Message"
                value={(*message).clone()}
                oninput={on_message}
            />
            <button type="submit" disabled={*is_sending}>
                { if *is_sending { "Sending…" } else { "Send Message" } }
            </button>
            if let Some(msg) = (*success).clone() {
                <div class="form-status success">{msg}</div>
            }
            if let Some(msg) = (*error).clone() {
                <div class="form-status error">{msg}</div>
            }
        </form>
    }
}
