use chrono::Local;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::fields::{min_booking_date, FieldId, FormState};
use crate::booking::submission::{
    begin_submission, complete_submission, SimulatedDispatch, SubmissionGuard, SubmitPhase,
};
use crate::config::SiteConfig;
use crate::error::BookingError;

const SERVICES: &[&str] = &[
    "Complete Blood Count",
    "Lipid Profile",
    "Thyroid Panel",
    "Liver Function Test",
    "Diabetes Screening",
    "Home Sample Collection",
];

/// Classes for the `<form>` and for the wrapper inside it. The form is a
/// reveal target whose `visible` class is added outside Yew, so its own
/// class attribute must stay the same across renders; the shake goes on the
/// wrapper.
fn form_classes(shaking: bool) -> (Classes, Classes) {
    (classes!("booking-form"), classes!("form-body", shaking.then(|| "shake")))
}

fn control_value(target: Option<EventTarget>) -> String {
    let Some(target) = target else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        target
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default()
    }
}

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let form = use_state(|| FormState::new(config.phone_prefix));
    let phase = use_state(SubmitPhase::default);
    let shaking = use_state(|| false);
    let shake_timer = use_mut_ref(|| None::<Timeout>);
    let guard = use_state(SubmissionGuard::default);
    let min_date = use_state(|| min_booking_date(Local::now().date_naive()));

    let store = {
        let form = form.clone();
        move |id: FieldId, target: Option<EventTarget>| {
            let mut next = (*form).clone();
            next.input(id, control_value(target));
            form.set(next);
        }
    };

    let on_input = |id: FieldId| {
        let store = store.clone();
        Callback::from(move |e: InputEvent| store(id, e.target()))
    };

    let on_change = |id: FieldId| {
        let store = store.clone();
        Callback::from(move |e: Event| store(id, e.target()))
    };

    let on_blur = |id: FieldId| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur(id);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let phase = phase.clone();
        let shaking = shaking.clone();
        let shake_timer = shake_timer.clone();
        let guard = (*guard).clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let mut next_phase = (*phase).clone();
            let started = begin_submission(&guard, &mut next, &mut next_phase);
            form.set(next);
            let (in_flight, draft) = match started {
                Ok(started) => started,
                Err(BookingError::Incomplete { fields }) => {
                    info!("Booking rejected, check: {:?}", fields);
                    shaking.set(true);
                    let shaking = shaking.clone();
                    // Replacing the handle cancels a shake still pending.
                    *shake_timer.borrow_mut() =
                        Some(Timeout::new(config.shake_ms, move || shaking.set(false)));
                    return;
                }
                Err(err) => {
                    warn!("Ignoring submit: {}", err);
                    return;
                }
            };

            match serde_json::to_string(&draft) {
                Ok(json) => info!("Submitting booking {}", json),
                Err(err) => warn!("Could not serialize booking draft: {}", err),
            }
            phase.set(next_phase);

            let form = form.clone();
            let phase = phase.clone();
            let prefix = config.phone_prefix;
            let dispatch = SimulatedDispatch::from_config(&config);
            spawn_local(async move {
                let _in_flight = in_flight;
                match dispatch.send(draft).await {
                    Ok(confirmation) => {
                        info!("Booking confirmed for {}", confirmation.name);
                        let mut done = SubmitPhase::Submitting;
                        let mut cleared = FormState::new(prefix);
                        complete_submission(&mut done, &mut cleared, confirmation);
                        phase.set(done);
                        form.set(cleared);
                    }
                    Err(err) => {
                        warn!("Booking failed: {}", err);
                        phase.set(SubmitPhase::Idle);
                    }
                }
            });
        })
    };

    let marker = |id: FieldId| classes!(form.validity(id).marker_class());
    let (form_class, body_class) = form_classes(*shaking);
    let confirmation = phase.confirmation();
    let submitting = phase.is_submitting() || guard.is_busy();

    html! {
        <>
            <form
                id="appointmentForm"
                class={form_class}
                style={if confirmation.is_some() { "display: none;" } else { "" }}
                onsubmit={onsubmit}
            >
                <div class={body_class}>
                    <div class="form-row">
                        <label for="name">{"Full Name"}</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Your name"
                            class={marker(FieldId::Name)}
                            value={form.value(FieldId::Name).to_string()}
                            oninput={on_input(FieldId::Name)}
                            onblur={on_blur(FieldId::Name)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="phone">{"Phone"}</label>
                        <input
                            id="phone"
                            type="tel"
                            placeholder="+92 300 1234567"
                            class={marker(FieldId::Phone)}
                            value={form.value(FieldId::Phone).to_string()}
                            oninput={on_input(FieldId::Phone)}
                            onblur={on_blur(FieldId::Phone)}
                        />
                    </div>
                    <div class="form-row">
                        <label for="service">{"Service"}</label>
                        <select
                            id="service"
                            class={marker(FieldId::Service)}
                            onchange={on_change(FieldId::Service)}
                            onblur={on_blur(FieldId::Service)}
                        >
                            <option value="" selected={form.value(FieldId::Service).is_empty()}>
                                {"Select a test"}
                            </option>
                            {
                                SERVICES.iter().map(|service| html! {
                                    <option
                                        value={*service}
                                        selected={form.value(FieldId::Service) == *service}
                                    >
                                        {*service}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="form-row split">
                        <div>
                            <label for="date">{"Date"}</label>
                            <input
                                id="date"
                                type="date"
                                min={(*min_date).clone()}
                                class={marker(FieldId::Date)}
                                value={form.value(FieldId::Date).to_string()}
                                oninput={on_input(FieldId::Date)}
                                onblur={on_blur(FieldId::Date)}
                            />
                        </div>
                        <div>
                            <label for="time">{"Time"}</label>
                            <input
                                id="time"
                                type="time"
                                class={marker(FieldId::Time)}
                                value={form.value(FieldId::Time).to_string()}
                                oninput={on_input(FieldId::Time)}
                                onblur={on_blur(FieldId::Time)}
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <label for="notes">{"Notes (optional)"}</label>
                        <textarea
                            id="notes"
                            rows="3"
                            placeholder="Fasting, home visit address, ..."
                            value={form.value(FieldId::Notes).to_string()}
                            oninput={on_input(FieldId::Notes)}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={submitting}>
                        {
                            if submitting {
                                html! { <><span class="spinner"></span>{"Processing..."}</> }
                            } else {
                                html! { {"Book Appointment"} }
                            }
                        }
                    </button>
                </div>
            </form>
            <div
                id="successMessage"
                class={classes!("success-message", confirmation.is_some().then(|| "show"))}
            >
                {
                    if let Some(confirmation) = confirmation {
                        html! {
                            <>
                                <h4>{"Appointment Booked Successfully!"}</h4>
                                <p>{"> Thank you "}<strong>{&confirmation.name}</strong>{" for booking an appointment."}</p>
                                <p>{"> "}<strong>{"Service:"}</strong>{" "}{&confirmation.service}</p>
                                <p>{format!("> Date: {} at {}", confirmation.date, confirmation.time)}</p>
                                <div class="whatsapp-handoff">
                                    <p>{"You will receive a confirmation on WhatsApp shortly."}</p>
                                    <a
                                        href={confirmation.link.clone()}
                                        target="_blank"
                                        rel="noopener"
                                        class="btn btn-whatsapp"
                                    >
                                        {"Confirm via WhatsApp"}
                                    </a>
                                </div>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </>
    }
}
