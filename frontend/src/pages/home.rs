use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::countdown::Countdown;
use crate::components::navbar::Navbar;

struct Track {
    title: &'static str,
    description: &'static str,
}

const TRACKS: [Track; 4] = [
    Track {
        title: "AI/ML",
        description: "Build innovative solutions using artificial intelligence and machine learning.",
    },
    Track {
        title: "Web3/Blockchain",
        description: "Create decentralized applications and explore blockchain technology.",
    },
    Track {
        title: "IoT/Hardware",
        description: "Develop solutions combining hardware and software for real-world impact.",
    },
    Track {
        title: "Open Innovation",
        description: "Choose your own path and innovate in any domain you're passionate about.",
    },
];

struct TimelineEvent {
    time: &'static str,
    title: &'static str,
}

const TIMELINE: [TimelineEvent; 9] = [
    TimelineEvent { time: "April 11, 8:00 AM", title: "Registration" },
    TimelineEvent { time: "April 11, 10:00 AM", title: "Inauguration" },
    TimelineEvent { time: "April 11, 11:00 AM", title: "Hackathon Begins" },
    TimelineEvent { time: "April 11, 3:00 PM", title: "Speaker Session & Review" },
    TimelineEvent { time: "April 11, 7:00 PM", title: "Dinner Break" },
    TimelineEvent { time: "April 11, 10:00 PM", title: "Review Round 1" },
    TimelineEvent { time: "April 12, 12:00 AM", title: "Dance/Music Flashmob" },
    TimelineEvent { time: "April 12, 10:00 AM", title: "Final Judging" },
    TimelineEvent { time: "April 12, 2:00 PM", title: "Closing Ceremony" },
];

struct Prize {
    place: &'static str,
    detail: &'static str,
}

const PRIZES: [Prize; 3] = [
    Prize {
        place: "Grand Prize",
        detail: "For the most innovative and impactful project across all tracks.",
    },
    Prize {
        place: "Runner Up",
        detail: "For outstanding execution, design and technical depth.",
    },
    Prize {
        place: "Track Winners",
        detail: "The best project in each track takes home its own prize.",
    },
];

struct Organiser {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const ORGANISERS: [Organiser; 2] = [
    Organiser {
        name: "OSPC",
        role: "Lead Organiser",
        bio: "The Open Source Programming Club at VIT Chennai is dedicated to fostering \
              innovation through open source collaboration and building a vibrant tech \
              community on campus.",
    },
    Organiser {
        name: "CSED",
        role: "Co-Organiser",
        bio: "The Computer Science & Engineering Department at VIT Chennai provides \
              cutting-edge education and research opportunities, supporting students in \
              their technological and entrepreneurial endeavours.",
    },
];

struct SponsorTier {
    tier: &'static str,
    sponsors: &'static [&'static str],
}

const SPONSOR_TIERS: [SponsorTier; 3] = [
    SponsorTier {
        tier: "Gold Sponsors",
        sponsors: &["Devfolio", "ETHIndia"],
    },
    SponsorTier {
        tier: "Silver Sponsors",
        sponsors: &["To Be Revealed Soon"],
    },
    SponsorTier {
        tier: "Bronze Sponsors",
        sponsors: &["To Be Revealed Soon"],
    },
];

const FAQS: [(&str, &str); 6] = [
    (
        "Who can participate in Spectrum Hackathon?",
        "Spectrum Hackathon is open to everyone, from students to professionals. Whether you're a beginner or an experienced developer, designer, or entrepreneur, you're welcome to join.",
    ),
    (
        "Do I need to have a team to register?",
        "No, you can register as an individual and form a team later. We'll have team formation activities before the hackathon starts. Teams can have up to 4 members.",
    ),
    (
        "Is there a registration fee?",
        "No, participation in Spectrum Hackathon is completely free. We believe in making technology and innovation accessible to everyone.",
    ),
    (
        "Can I work on a pre-existing project?",
        "All projects must be started during the hackathon. You can come with ideas and plans, but the actual development should begin at the event.",
    ),
    (
        "Will there be mentors and workshops?",
        "Yes, we'll have industry experts as mentors to guide you throughout the hackathon, plus workshops on various technologies before and during the event.",
    ),
    (
        "How will the projects be judged?",
        "Projects will be judged on innovation, technical complexity, design, practicality, and presentation by a panel of industry professionals.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span>{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <p class="faq-answer">{props.answer}</p>
            }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="spectrum-site">
            <style>
            {r#"
            .spectrum-site {
                background: #050510;
                color: #fff;
                font-family: 'Inter', system-ui, sans-serif;
                min-height: 100vh;
            }
            .navbar {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1rem 2rem;
                background: rgba(5, 5, 16, 0.8);
                backdrop-filter: blur(10px);
                border-bottom: 1px solid rgba(126, 178, 255, 0.1);
                z-index: 100;
            }
            .navbar-brand {
                font-size: 1.4rem;
                font-weight: 700;
                letter-spacing: 0.3em;
                color: #fff;
                text-decoration: none;
            }
            .navbar-links a {
                color: rgba(255, 255, 255, 0.8);
                text-decoration: none;
                margin-left: 1.5rem;
                font-size: 0.95rem;
            }
            .navbar-links a:hover {
                color: #7EB2FF;
            }
            .hero {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 6rem 2rem 4rem;
            }
            .hero h1 {
                font-size: clamp(3rem, 10vw, 6rem);
                letter-spacing: 0.25em;
                margin: 0;
                background: linear-gradient(45deg, #fff, #7EB2FF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .hero .tagline {
                font-size: 1.2rem;
                color: rgba(255, 255, 255, 0.7);
                margin: 1rem 0 0.5rem;
            }
            .hero .event-date {
                color: #7EB2FF;
                margin-bottom: 2.5rem;
            }
            .countdown {
                display: flex;
                gap: 1.5rem;
                justify-content: center;
            }
            .countdown-unit {
                display: flex;
                flex-direction: column;
                align-items: center;
                background: rgba(30, 30, 50, 0.7);
                border: 1px solid rgba(126, 178, 255, 0.15);
                border-radius: 12px;
                padding: 1rem 1.4rem;
                min-width: 5rem;
            }
            .countdown-value {
                font-size: 2.2rem;
                font-weight: 700;
            }
            .countdown-label {
                font-size: 0.8rem;
                text-transform: uppercase;
                letter-spacing: 0.15em;
                color: rgba(255, 255, 255, 0.6);
            }
            section {
                max-width: 1100px;
                margin: 0 auto;
                padding: 5rem 2rem;
            }
            section h2 {
                font-size: 2.2rem;
                text-align: center;
                margin-bottom: 2.5rem;
                color: #b49aff;
            }
            .section-intro {
                text-align: center;
                color: rgba(255, 255, 255, 0.7);
                max-width: 700px;
                margin: -1.5rem auto 2.5rem;
            }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                gap: 1.5rem;
            }
            .card {
                background: rgba(30, 30, 50, 0.7);
                border: 1px solid rgba(126, 178, 255, 0.1);
                border-radius: 16px;
                padding: 1.8rem;
            }
            .card h3 {
                margin-top: 0;
                color: #7EB2FF;
            }
            .card p {
                color: rgba(255, 255, 255, 0.75);
                margin-bottom: 0;
            }
            .organiser-role {
                display: block;
                color: rgba(255, 255, 255, 0.55);
                font-size: 0.85rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                margin-bottom: 0.8rem;
            }
            .tier-heading {
                text-align: center;
                font-size: 1.4rem;
                color: rgba(255, 255, 255, 0.85);
                margin: 2.2rem 0 1.2rem;
            }
            .sponsor-grid {
                max-width: 760px;
                margin: 0 auto;
            }
            .sponsor-card {
                text-align: center;
                font-size: 1.15rem;
                color: rgba(255, 255, 255, 0.85);
            }
            .timeline-list {
                list-style: none;
                margin: 0;
                padding: 0;
                border-left: 2px solid rgba(126, 178, 255, 0.3);
            }
            .timeline-list li {
                padding: 0.9rem 0 0.9rem 1.5rem;
                position: relative;
            }
            .timeline-list li::before {
                content: '';
                position: absolute;
                left: -7px;
                top: 1.35rem;
                width: 12px;
                height: 12px;
                border-radius: 50%;
                background: #7EB2FF;
            }
            .timeline-time {
                color: rgba(255, 255, 255, 0.55);
                font-size: 0.85rem;
                display: block;
            }
            .faq-item {
                border-bottom: 1px solid rgba(126, 178, 255, 0.15);
            }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                background: none;
                border: none;
                color: #fff;
                font-size: 1.05rem;
                padding: 1.1rem 0;
                cursor: pointer;
                text-align: left;
            }
            .faq-answer {
                color: rgba(255, 255, 255, 0.7);
                padding-bottom: 1.1rem;
                margin: 0;
            }
            .toggle-icon {
                color: #7EB2FF;
                font-size: 1.3rem;
            }
            .contact-form {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                max-width: 640px;
                margin: 0 auto;
            }
            .form-row {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
            }
            .contact-form input,
            .contact-form textarea {
                background: rgba(30, 30, 50, 0.7);
                border: 1px solid rgba(126, 178, 255, 0.15);
                border-radius: 8px;
                color: #fff;
                padding: 0.9rem 1rem;
                font-size: 1rem;
                font-family: inherit;
            }
            .contact-form button {
                background: linear-gradient(45deg, #4169E1, #7EB2FF);
                border: none;
                border-radius: 8px;
                color: #fff;
                font-size: 1.05rem;
                padding: 0.9rem;
                cursor: pointer;
            }
            .contact-form button:disabled {
                opacity: 0.6;
                cursor: wait;
            }
            .form-status {
                text-align: center;
                padding: 0.6rem;
                border-radius: 8px;
            }
            .form-status.success {
                background: rgba(50, 205, 50, 0.15);
                color: #90EE90;
            }
            .form-status.error {
                background: rgba(220, 20, 60, 0.15);
                color: #FF7F7F;
            }
            .site-footer {
                text-align: center;
                color: rgba(255, 255, 255, 0.5);
                padding: 2rem;
                border-top: 1px solid rgba(126, 178, 255, 0.1);
            }
            @media (max-width: 768px) {
                .navbar-links { display: none; }
                .countdown { gap: 0.8rem; }
                .form-row { grid-template-columns: 1fr; }
            }
            "#}
            </style>

            <Navbar />

            <header class="hero" id="home">
                <h1>{"SPECTRUM"}</h1>
                <p class="tagline">{"Innovation Meets Collaboration"}</p>
                <p class="event-date">{"April 11–12, 2027 · Chennai, India"}</p>
                <Countdown />
            </header>

            <section id="about">
                <h2>{"About Spectrum"}</h2>
                <p class="section-intro">
                    {"Spectrum is a 30-hour student hackathon bringing together developers, \
                      designers and builders to prototype ideas that matter. Two days of \
                      shipping, mentorship, workshops and very little sleep."}
                </p>
            </section>

            <section id="tracks">
                <h2>{"Tracks"}</h2>
                <div class="card-grid">
                    { for TRACKS.iter().map(|track| html! {
                        <div class="card">
                            <h3>{track.title}</h3>
                            <p>{track.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="timeline">
                <h2>{"Timeline"}</h2>
                <ul class="timeline-list">
                    { for TIMELINE.iter().map(|event| html! {
                        <li>
                            <span class="timeline-time">{event.time}</span>
                            <span>{event.title}</span>
                        </li>
                    }) }
                </ul>
            </section>

            <section id="prizes">
                <h2>{"Prizes"}</h2>
                <p class="section-intro">
                    {"Our sponsors are preparing an out-of-this-world prize pool for the most \
                      innovative and impactful projects. More surprises to be announced!"}
                </p>
                <div class="card-grid">
                    { for PRIZES.iter().map(|prize| html! {
                        <div class="card">
                            <h3>{prize.place}</h3>
                            <p>{prize.detail}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="organisers">
                <h2>{"Organisers"}</h2>
                <div class="card-grid">
                    { for ORGANISERS.iter().map(|organiser| html! {
                        <div class="card">
                            <h3>{organiser.name}</h3>
                            <span class="organiser-role">{organiser.role}</span>
                            <p>{organiser.bio}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="sponsors">
                <h2>{"Our Sponsors"}</h2>
                { for SPONSOR_TIERS.iter().map(|tier| html! {
                    <>
                        <h3 class="tier-heading">{tier.tier}</h3>
                        <div class="card-grid sponsor-grid">
                            { for tier.sponsors.iter().map(|&sponsor| html! {
                                <div class="card sponsor-card">{sponsor}</div>
                            }) }
                        </div>
                    </>
                }) }
            </section>

            <section id="faqs">
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="section-intro">
                    {"Have questions about Spectrum Hackathon? Find answers to common queries \
                      below, or reach out through the contact form."}
                </p>
                { for FAQS.iter().map(|&(question, answer)| html! {
                    <FaqItem {question} {answer} />
                }) }
            </section>

            <section id="contact">
                <h2>{"Get in Touch"}</h2>
                <ContactForm />
            </section>

            <footer class="site-footer">
                {"© 2027 Spectrum Hackathon · Built by the Spectrum team"}
            </footer>
        </div>
    }
}
