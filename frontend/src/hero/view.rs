use yew::prelude::*;

use crate::i18n::{Direction, I18n};

pub const BENEFIT_KEYS: [&str; 3] = ["hero.benefit1", "hero.benefit2", "hero.benefit3"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    SlideX(i32),
    SlideY(i32),
    GrowX,
    Pop,
}

/// Entry transition for one element: where it starts and how it gets home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub motion: Motion,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    pub const HEADLINE: Reveal = Reveal {
        motion: Motion::SlideY(30),
        delay_ms: 200,
        duration_ms: 800,
    };
    pub const SUBHEADLINE: Reveal = Reveal {
        motion: Motion::SlideY(20),
        delay_ms: 400,
        duration_ms: 800,
    };
    pub const BENEFITS: Reveal = Reveal {
        motion: Motion::SlideY(20),
        delay_ms: 600,
        duration_ms: 800,
    };
    pub const UNDERLINE: Reveal = Reveal {
        motion: Motion::GrowX,
        delay_ms: 1000,
        duration_ms: 600,
    };
    pub const CONFIRMATION: Reveal = Reveal {
        motion: Motion::Pop,
        delay_ms: 0,
        duration_ms: 500,
    };

    /// Copy column slides in from the reading end of the line.
    pub fn copy_column(direction: Direction) -> Reveal {
        Reveal {
            motion: Motion::SlideX(if direction.is_rtl() { -50 } else { 50 }),
            delay_ms: 0,
            duration_ms: 800,
        }
    }

    pub fn form_column(direction: Direction) -> Reveal {
        Reveal {
            motion: Motion::SlideX(if direction.is_rtl() { 50 } else { -50 }),
            delay_ms: 300,
            duration_ms: 800,
        }
    }

    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms
        );
        if revealed {
            return format!("opacity: 1; transform: none; {}", transition);
        }
        let hidden = match self.motion {
            Motion::SlideX(px) => format!("opacity: 0; transform: translateX({}px);", px),
            Motion::SlideY(px) => format!("opacity: 0; transform: translateY({}px);", px),
            Motion::GrowX => "opacity: 1; transform: scaleX(0);".to_string(),
            Motion::Pop => "opacity: 0; transform: scale(0.8);".to_string(),
        };
        format!("{} {}", hidden, transition)
    }
}

pub fn check_icon(class: &'static str) -> Html {
    html! {
        <svg class={class} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <path d="m9 11 3 3L22 4" />
        </svg>
    }
}

pub fn calendar_icon() -> Html {
    html! {
        <svg class="hero-form-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
            <line x1="16" y1="2" x2="16" y2="6" />
            <line x1="8" y1="2" x2="8" y2="6" />
            <line x1="3" y1="10" x2="21" y2="10" />
        </svg>
    }
}

pub fn arrow_icon() -> Html {
    html! {
        <svg class="hero-button-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </svg>
    }
}

/// Shown once a lead went through. Nothing in here is interactive.
pub fn confirmation(i18n: &I18n, revealed: bool) -> Html {
    html! {
        <section class="hero-section hero-confirmation" dir={i18n.direction().as_str()}>
            <style>{HERO_CSS}</style>
            <div class="hero-confirmation-panel" style={Reveal::CONFIRMATION.style(revealed)}>
                <div class="hero-confirmation-badge">
                    { check_icon("hero-confirmation-icon") }
                </div>
                <h2>{ i18n.t("hero.submitted.title") }</h2>
                <p class="hero-confirmation-message">{ i18n.t("hero.submitted.message") }</p>
                <p class="hero-confirmation-hint">{ i18n.t("hero.submitted.emailCta") }</p>
            </div>
        </section>
    }
}

pub fn marketing_copy(i18n: &I18n, revealed: bool) -> Html {
    html! {
        <div class="hero-copy" style={Reveal::copy_column(i18n.direction()).style(revealed)}>
            <h1 class="hero-headline" style={Reveal::HEADLINE.style(revealed)}>
                { i18n.t("hero.headline.main") }{ " " }
                <span class="hero-highlight">
                    { i18n.t("hero.headline.highlight") }
                    <span class="hero-underline" style={Reveal::UNDERLINE.style(revealed)}></span>
                </span>
            </h1>
            <p class="hero-subheadline" style={Reveal::SUBHEADLINE.style(revealed)}>
                { i18n.t("hero.subheadline") }
            </p>
            <ul class="hero-benefits" style={Reveal::BENEFITS.style(revealed)}>
                { for BENEFIT_KEYS.iter().map(|key| html! {
                    <li key={*key} class="hero-benefit">
                        <span class="hero-benefit-badge">{ check_icon("hero-benefit-icon") }</span>
                        <span>{ i18n.t(key) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

pub const HERO_CSS: &str = r#"
.hero-section {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: linear-gradient(135deg, #f8fafc 0%, #ffffff 50%, #f1f5f9 100%);
    color: #0f172a;
}
.hero-blob {
    position: absolute;
    width: 22rem;
    height: 22rem;
    border-radius: 9999px;
    opacity: 0.3;
    filter: blur(64px);
    pointer-events: none;
}
.hero-blob.top { top: -10rem; right: -10rem; background: #d1fae5; }
.hero-blob.bottom { bottom: -10rem; left: -10rem; background: #dbeafe; }
.hero-container {
    position: relative;
    z-index: 1;
    width: 100%;
    max-width: 1536px;
    margin: 0 auto;
    padding: 6rem 1.5rem 3rem;
}
.hero-grid {
    display: grid;
    gap: 3rem;
    align-items: center;
}
@media (min-width: 1024px) {
    .hero-grid { grid-template-columns: 1fr 1fr; }
    .hero-container { padding-top: 3rem; }
}
.hero-headline {
    font-size: 3rem;
    font-weight: 700;
    line-height: 1.15;
    margin: 0 0 1.5rem;
}
@media (min-width: 1024px) {
    .hero-headline { font-size: 3.75rem; }
}
.hero-highlight {
    position: relative;
    color: #059669;
}
.hero-underline {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 0.25rem;
    background: #a7f3d0;
}
.hero-subheadline {
    font-size: 1.25rem;
    line-height: 1.6;
    color: #475569;
    margin: 0 0 2rem;
}
.hero-benefits {
    list-style: none;
    padding: 0;
    margin: 0 0 2rem;
}
.hero-benefit {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 0.75rem;
    color: #334155;
}
.hero-benefit-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.25rem;
    height: 1.25rem;
    border-radius: 9999px;
    background: #10b981;
    color: #fff;
}
.hero-benefit-icon { width: 0.75rem; height: 0.75rem; }
.hero-card {
    background: #fff;
    border: 1px solid #f1f5f9;
    border-radius: 1rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    padding: 2rem;
}
.hero-card-header { text-align: center; margin-bottom: 1.5rem; }
.hero-card-header h3 { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.5rem; }
.hero-card-header p { color: #475569; margin: 0; }
.hero-form-icon { width: 2rem; height: 2rem; color: #059669; margin-bottom: 0.75rem; }
.hero-form { display: flex; flex-direction: column; gap: 1.5rem; }
.ui-label { display: block; color: #334155; font-weight: 500; }
.ui-input {
    width: 100%;
    box-sizing: border-box;
    height: 3rem;
    margin-top: 0.5rem;
    padding: 0 0.75rem;
    border: 1px solid #e2e8f0;
    border-radius: 0.5rem;
    font-size: 1rem;
}
.ui-input:focus { outline: none; border-color: #10b981; box-shadow: 0 0 0 2px #a7f3d0; }
.ui-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    width: 100%;
    height: 3.5rem;
    border: none;
    border-radius: 0.75rem;
    background: #059669;
    color: #fff;
    font-size: 1.125rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 200ms, background 200ms, box-shadow 200ms;
}
.ui-button:hover:not(:disabled) { background: #047857; transform: scale(1.05); box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.ui-button:disabled { opacity: 0.5; cursor: not-allowed; }
.hero-button-icon { width: 1.25rem; height: 1.25rem; }
.hero-spinner {
    width: 1.25rem;
    height: 1.25rem;
    border: 2px solid #fff;
    border-top-color: transparent;
    border-radius: 50%;
    animation: hero-spin 1s linear infinite;
}
@keyframes hero-spin { to { transform: rotate(360deg); } }
.hero-privacy { font-size: 0.75rem; color: #64748b; text-align: center; margin: 1rem 0 0; }
.hero-confirmation-panel { text-align: center; max-width: 32rem; padding: 0 1.5rem; }
.hero-confirmation-badge {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 9999px;
    background: #10b981;
    color: #fff;
}
.hero-confirmation-icon { width: 2.5rem; height: 2.5rem; }
.hero-confirmation h2 { font-size: 1.875rem; font-weight: 700; margin: 0 0 1rem; }
.hero-confirmation-message { font-size: 1.125rem; color: #475569; margin: 0 0 1.5rem; }
.hero-confirmation-hint { font-size: 0.875rem; color: #64748b; margin: 0; }
"#;
