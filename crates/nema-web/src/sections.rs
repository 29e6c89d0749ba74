//! Page Sections
//!
//! Static content blocks of the landing page, top to bottom.

use leptos::{ev::SubmitEvent, prelude::*};
use nema_core::{
    content::{
        Heading, Investor, Plan, BACKERS_HEADING, FEATURES, FEATURES_HEADING, FOOTER_LINKS,
        HOW_IT_WORKS_HEADING, INVESTORS, LEAD_INVESTOR_NOTE, NAV_LINKS, PLANS, PRICING_HEADING,
        STATS, USE_CASES, USE_CASES_HEADING, WAITLIST_ANCHOR, WAITLIST_HEADING,
    },
    SiteMeta, Waitlist,
};

use crate::components::{AgentGraph, CodeDemo, Counter};

/// Heading shared by most sections; only the highlight gets the gradient
#[component]
fn SectionTitle(heading: Heading) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-5xl font-bold mb-4">
            {heading.lead} " " <span class="text-gradient">{heading.highlight}</span> {heading.trailing}
        </h2>
    }
}

#[component]
fn Logo(#[prop(default = "w-9 h-9 text-lg")] size: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "{size} rounded-lg bg-gradient-to-br from-purple-500 to-blue-500 flex items-center justify-center text-white font-bold",
        )>"N"</div>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="relative z-50 flex items-center justify-between px-6 lg:px-16 py-5 border-b border-white/5">
            <div class="flex items-center gap-3">
                <Logo />
                <span class="text-xl font-bold tracking-tight">"nema"</span>
            </div>
            <div class="hidden md:flex items-center gap-8 text-sm text-gray-400">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! { <a href=link.href class="hover:text-white transition">{link.label}</a> }
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center gap-3">
                <a href=WAITLIST_ANCHOR class="btn-primary px-5 py-2.5 rounded-lg text-sm font-medium text-white">
                    "Get Early Access"
                </a>
            </div>
        </nav>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative z-10 max-w-6xl mx-auto px-6 pt-24 pb-32 text-center">
            <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full glass text-xs text-purple-300 mb-8">
                <span class="w-2 h-2 rounded-full bg-green-400 animate-pulse" />
                "Now in Private Beta"
            </div>
            <h1 class="text-5xl md:text-7xl lg:text-8xl font-black tracking-tight leading-[0.95] mb-8">
                <span class="text-gradient">"The Operating System"</span>
                <br />
                <span class="text-white">"for AI Agents"</span>
            </h1>
            <p class="text-lg md:text-xl text-gray-400 max-w-2xl mx-auto mb-12 leading-relaxed">
                "Deploy swarms of autonomous agents that collaborate, reason, and execute. "
                "Multi-model. Observable. Production-ready."
            </p>
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                <a href=WAITLIST_ANCHOR class="btn-primary px-8 py-4 rounded-xl text-base font-semibold text-white">
                    "Request Access →"
                </a>
                <a
                    href="#how-it-works"
                    class="px-8 py-4 rounded-xl text-base font-medium text-gray-300 glass hover:text-white transition"
                >
                    "See How It Works"
                </a>
            </div>

            <div class="flex flex-wrap justify-center gap-12 mt-20">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="text-center">
                                <div class="text-3xl md:text-4xl font-bold text-white">
                                    <Counter end=stat.value suffix=stat.suffix />
                                </div>
                                <div class="text-sm text-gray-500 mt-1">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="relative z-10 max-w-6xl mx-auto px-6 py-24">
            <div class="text-center mb-16">
                <SectionTitle heading=HOW_IT_WORKS_HEADING />
                <p class="text-gray-400 max-w-xl mx-auto">
                    "Each agent has a specialized role. They communicate through structured message passing, "
                    "share context, and converge on solutions autonomously."
                </p>
            </div>
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <AgentGraph />
                <CodeDemo />
            </div>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="glass glass-hover rounded-xl p-8 transition-all duration-300">
                    <div class="text-3xl mb-4">{feature.icon}</div>
                    <h3 class="text-lg font-semibold text-white mb-2">{feature.title}</h3>
                    <p class="text-gray-400 text-sm leading-relaxed">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="features" class="relative z-10 max-w-6xl mx-auto px-6 py-24">
            <div class="text-center mb-16">
                <SectionTitle heading=FEATURES_HEADING />
                <p class="text-gray-400 max-w-xl mx-auto">
                    "Not a toy. Not a demo. A real platform for deploying AI agent systems at scale."
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        </section>
    }
}

#[component]
pub fn UseCases() -> impl IntoView {
    let cards = USE_CASES
        .iter()
        .map(|case| {
            view! {
                <div class="glass glass-hover rounded-xl p-8 transition-all duration-300">
                    <h3 class="text-xl font-semibold text-white mb-3">{case.title}</h3>
                    <p class="text-gray-400 text-sm leading-relaxed mb-4">{case.description}</p>
                    <div class="inline-flex items-center gap-2 px-3 py-1.5 rounded-full bg-purple-500/10 text-purple-300 text-xs font-mono">
                        {case.metric}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="use-cases" class="relative z-10 max-w-6xl mx-auto px-6 py-24">
            <div class="text-center mb-16">
                <SectionTitle heading=USE_CASES_HEADING />
            </div>
            <div class="grid md:grid-cols-2 gap-6">{cards}</div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let (card, button) = if plan.featured {
        (
            "bg-gradient-to-b from-purple-500/10 to-blue-500/5 border border-purple-500/20",
            "btn-primary text-white",
        )
    } else {
        ("glass glass-hover", "glass text-gray-300 hover:text-white")
    };

    view! {
        <div class=format!("rounded-xl p-8 transition-all duration-300 {card}")>
            <div class="text-sm text-gray-400 mb-2">{plan.name}</div>
            <div class="text-3xl font-bold text-white mb-3">{plan.price}</div>
            <div class="text-sm text-gray-400 mb-6">{plan.description}</div>
            <a
                href=WAITLIST_ANCHOR
                class=format!("block w-full py-3 rounded-lg text-sm font-medium text-center transition {button}")
            >
                {plan.call_to_action}
            </a>
        </div>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section class="relative z-10 max-w-4xl mx-auto px-6 py-24 text-center">
            <SectionTitle heading=PRICING_HEADING />
            <p class="text-gray-400 mb-12">"Pay for what you use. No hidden fees. No lock-in."</p>
            <div class="grid md:grid-cols-3 gap-6">
                {PLANS.into_iter().map(|plan| view! { <PlanCard plan=plan /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn InvestorCard(investor: Investor) -> impl IntoView {
    let featured = investor.featured;
    let card = if featured {
        "bg-gradient-to-b from-yellow-500/10 to-orange-500/5 border-2 border-yellow-500/30 scale-105"
    } else {
        "glass glass-hover"
    };
    let avatar_style = if featured {
        "border-color: rgba(234, 179, 8, 0.5); box-shadow: 0 0 30px rgba(234, 179, 8, 0.2)"
    } else {
        ""
    };
    let name_color = if featured { "text-yellow-300" } else { "text-white" };

    view! {
        <div class=format!("rounded-xl p-8 text-center transition-all duration-300 {card}")>
            <Show when=move || featured>
                <div class="text-xs font-bold text-yellow-400 uppercase tracking-widest mb-3 animate-pulse">
                    "⭐ Lead Investor ⭐"
                </div>
            </Show>
            <div
                class="w-28 h-28 mx-auto mb-4 rounded-full overflow-hidden border-2 border-white/10"
                style=avatar_style
            >
                <img src=investor.image alt=investor.name class="w-full h-full object-cover" />
            </div>
            <h3 class=format!("text-lg font-bold mb-1 {name_color}")>{investor.name}</h3>
            <p class="text-sm text-gray-400 mb-4">{investor.title}</p>
            <p class="text-sm text-gray-300 italic leading-relaxed">{investor.quote}</p>
            <Show when=move || featured>
                <div class="mt-4 text-xs text-yellow-500/60 font-mono">{LEAD_INVESTOR_NOTE}</div>
            </Show>
        </div>
    }
}

#[component]
pub fn Backers() -> impl IntoView {
    view! {
        <section class="relative z-10 max-w-6xl mx-auto px-6 py-24">
            <div class="text-center mb-16">
                <SectionTitle heading=BACKERS_HEADING />
                <p class="text-gray-400 max-w-xl mx-auto">
                    "World-class investors who believe in the future of autonomous AI."
                </p>
            </div>
            <div class="grid md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                {INVESTORS
                    .into_iter()
                    .map(|investor| view! { <InvestorCard investor=investor /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Email capture. Submitting only swaps in the confirmation panel; nothing
/// leaves the browser.
#[component]
pub fn WaitlistSection() -> impl IntoView {
    let waitlist = RwSignal::new(Waitlist::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        waitlist.update(|w| {
            w.submit();
        });
    };

    let form = move || {
        view! {
            <form on:submit=on_submit class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto">
                <input
                    type="email"
                    placeholder="you@company.com"
                    required=true
                    class="flex-1 px-5 py-4 rounded-xl bg-white/5 border border-white/10 text-white placeholder-gray-500 focus:outline-none focus:border-purple-500/50 transition"
                    prop:value=move || waitlist.with(|w| w.email().to_owned())
                    on:input=move |ev| waitlist.update(|w| w.set_email(event_target_value(&ev)))
                />
                <button
                    type="submit"
                    class="btn-primary px-8 py-4 rounded-xl text-sm font-semibold text-white whitespace-nowrap"
                >
                    "Join Waitlist"
                </button>
            </form>
        }
    };

    view! {
        <section id="waitlist" class="relative z-10 max-w-2xl mx-auto px-6 py-24 text-center">
            <SectionTitle heading=WAITLIST_HEADING />
            <p class="text-gray-400 mb-8">
                "Join the waitlist for early access. We're onboarding teams weekly."
            </p>
            <Show when=move || waitlist.with(Waitlist::is_submitted) fallback=form>
                <div class="glass rounded-xl p-8 animate-fade-up">
                    <div class="text-4xl mb-4">"🎉"</div>
                    <h3 class="text-xl font-semibold text-white mb-2">"You're on the list!"</h3>
                    <p class="text-gray-400">"We'll reach out when your spot is ready."</p>
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 border-t border-white/5 px-6 lg:px-16 py-12">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex items-center gap-3">
                    <Logo size="w-8 h-8" />
                    <span class="font-semibold">"nema"</span>
                </div>
                <div class="flex items-center gap-8 text-sm text-gray-500">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            view! { <a href=link.href class="hover:text-gray-300 transition">{link.label}</a> }
                        })
                        .collect_view()}
                </div>
                <div class="text-sm text-gray-600">{SiteMeta::nema().copyright}</div>
            </div>
        </footer>
    }
}
