use yew::prelude::*;

use crate::booking::form::BookingForm;
use crate::config::SiteConfig;
use crate::effects::anchor::smooth_scroll_link;
use crate::effects::header::SiteHeader;
use crate::effects::hero::use_hero_entrance;
use crate::effects::reveal::use_reveal_on_scroll;

const TEST_CATEGORIES: &[(&str, &[&str])] = &[
    ("Blood Work", &["Complete Blood Count", "ESR", "Blood Group & Rh"]),
    ("Metabolic", &["Lipid Profile", "HbA1c", "Fasting Glucose"]),
    ("Organ Function", &["Liver Function Test", "Renal Profile", "Thyroid Panel"]),
    ("At Home", &["Home Sample Collection", "Corporate Screening"]),
];

const GALLERY: &[(&str, &str)] = &[
    ("/assets/lab-analyzer.jpg", "Automated hematology analyzer"),
    ("/assets/lab-reception.jpg", "Patient reception"),
    ("/assets/lab-sampling.jpg", "Sampling room"),
];

const MANAGERS: &[(&str, &str)] = &[
    ("Dr. Sana Malik", "Consultant Pathologist"),
    ("Imran Qureshi", "Lab Operations Manager"),
];

const CONTACTS: &[(&str, &str)] = &[
    ("Visit", "Main Boulevard, Gulberg III, Lahore"),
    ("Call", "+92 336 7251204"),
    ("Hours", "Mon-Sat, 8:00 to 20:00"),
];

// Keyframes and state classes toggled by the controllers.
const PAGE_STYLE: &str = r#"
    @keyframes shake {
        0%, 100% { transform: translateX(0); }
        20% { transform: translateX(-8px); }
        40% { transform: translateX(8px); }
        60% { transform: translateX(-8px); }
        80% { transform: translateX(8px); }
    }
    @keyframes glitch {
        0% { transform: translate(0); }
        20% { transform: translate(-2px, 2px); }
        40% { transform: translate(-2px, -2px); }
        60% { transform: translate(2px, 2px); }
        80% { transform: translate(2px, -2px); }
        100% { transform: translate(0); }
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    .site-header {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 10;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .site-header.scrolled {
        background: rgba(10, 10, 15, 0.95) !important;
        box-shadow: 0 4px 30px rgba(151, 117, 250, 0.1);
    }
    .brand-kicker {
        display: inline-block;
    }
    .booking-form .form-body.shake {
        animation: shake 0.5s ease;
    }
    form input.error, form select.error {
        border-color: #ef4444 !important;
        box-shadow: 0 0 10px rgba(239, 68, 68, 0.3) !important;
    }
    form input.valid, form select.valid {
        border-color: #4ade80 !important;
        box-shadow: 0 0 10px rgba(74, 222, 128, 0.3) !important;
    }
    button .spinner {
        display: inline-block;
        width: 16px;
        height: 16px;
        border: 2px solid rgba(255, 255, 255, 0.3);
        border-top-color: #fff;
        border-radius: 50%;
        animation: spin 0.8s linear infinite;
        margin-right: 8px;
    }
    .success-message {
        display: none;
    }
    .success-message.show {
        display: block;
    }
    .btn-whatsapp {
        display: inline-flex;
        padding: 0.85rem 1.8rem;
        border-radius: 4px;
        font-weight: 700;
        text-decoration: none;
        text-transform: uppercase;
        background: linear-gradient(135deg, #25D366, #128C7E);
        color: #ffffff;
    }
    .test-category, .gallery-item, .manager-card {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .visible {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    use_hero_entrance(config.clone());
    use_reveal_on_scroll(config);
    let on_link = smooth_scroll_link();

    html! {
        <>
            <style>{PAGE_STYLE}</style>
            <SiteHeader />
            <main>
                <section id="top" class="hero">
                    <div class="hero-copy">
                        <p class="eyebrow">{"Accredited diagnostic laboratory"}</p>
                        <h1>{"Accurate results, booked in a minute."}</h1>
                        <p>{"Walk in or request a home collection. Reports reach you on WhatsApp."}</p>
                        <a href="#book" class="btn btn-primary" onclick={on_link.clone()}>
                            {"Book a test"}
                        </a>
                    </div>
                    <div class="hero-metrics">
                        <div><strong>{"120+"}</strong><span>{"tests offered"}</span></div>
                        <div><strong>{"24h"}</strong><span>{"typical turnaround"}</span></div>
                    </div>
                    <div class="hero-panel">
                        <img src="/assets/lab-hero.jpg" alt="Laboratory bench" />
                    </div>
                </section>

                <section id="tests">
                    <div class="section-head">
                        <h2>{"Tests"}</h2>
                    </div>
                    <div class="test-grid">
                        {
                            TEST_CATEGORIES.iter().map(|(title, tests)| html! {
                                <div class="test-category">
                                    <h3>{*title}</h3>
                                    <ul>
                                        { tests.iter().map(|test| html! { <li>{*test}</li> }).collect::<Html>() }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="gallery">
                    <div class="section-head">
                        <h2>{"Inside the lab"}</h2>
                    </div>
                    <div class="gallery-grid">
                        {
                            GALLERY.iter().map(|(src, caption)| html! {
                                <figure class="gallery-item">
                                    <img src={*src} alt={*caption} />
                                    <figcaption>{*caption}</figcaption>
                                </figure>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="book" class="book">
                    <div class="book-copy">
                        <h2>{"Book an appointment"}</h2>
                        <p>{"Pick a test and a slot. We confirm every booking over WhatsApp."}</p>
                    </div>
                    <BookingForm />
                </section>

                <section id="team">
                    <div class="section-head">
                        <h2>{"Management"}</h2>
                    </div>
                    {
                        MANAGERS.iter().map(|(name, role)| html! {
                            <div class="manager-card">
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <section id="contact">
                    <div class="section-head">
                        <h2>{"Contact"}</h2>
                    </div>
                    {
                        CONTACTS.iter().map(|(label, detail)| html! {
                            <div class="contact-card">
                                <h3>{*label}</h3>
                                <p>{*detail}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </section>
            </main>
            <footer class="site-footer">
                <a href="#top" onclick={on_link}>{"Back to top"}</a>
            </footer>
        </>
    }
}
