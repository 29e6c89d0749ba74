//! UI Components
//!
//! The four leaf widgets embedded in the landing page.

use std::time::Duration;

use leptos::{html::Span, prelude::*};
use nema_core::{
    content::{CODE_SAMPLE, CODE_SAMPLE_FILENAME},
    counter::{CounterTween, DEFAULT_DURATION, TICK, VISIBILITY_THRESHOLD},
    graph,
    meta::fonts,
    particles::{self, PARTICLE_COUNT},
};
use rand::{rngs::StdRng, SeedableRng};

use crate::viewport::{browser_error, report, ViewportWatch};

/// Number that counts up from 0 to `end` once it scrolls into view.
///
/// The viewport watch and the tick interval are separate subscriptions;
/// both are dropped with the component.
#[component]
pub fn Counter(
    end: u32,
    #[prop(optional)] suffix: &'static str,
    #[prop(default = DEFAULT_DURATION)] duration: Duration,
) -> impl IntoView {
    let tween = RwSignal::new(CounterTween::new(end, duration));
    let node_ref = NodeRef::<Span>::new();
    let watch = StoredValue::new_local(None::<ViewportWatch>);
    let interval = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        let Some(span) = node_ref.get() else {
            return;
        };
        if watch.with_value(Option::is_some) {
            return;
        }
        let observed = ViewportWatch::observe(&span, VISIBILITY_THRESHOLD, move |ratio| {
            tween.try_update(|t| t.observe(ratio));
        });
        match observed {
            Ok(handle) => watch.set_value(Some(handle)),
            Err(err) => report("counter", &err),
        }
    });

    Effect::new(move |_| {
        if !tween.with(CounterTween::is_running) || interval.with_value(Option::is_some) {
            return;
        }
        let step = move || {
            tween.try_update(CounterTween::tick);
            if tween.with_untracked(CounterTween::is_settled) {
                if let Some(handle) = interval.get_value() {
                    handle.clear();
                }
            }
        };
        match set_interval_with_handle(step, TICK) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => report("counter", &browser_error(err)),
        }
    });

    on_cleanup(move || {
        interval.try_with_value(|handle| {
            if let Some(handle) = handle {
                handle.clear();
            }
        });
        watch.try_update_value(Option::take);
    });

    view! {
        <span node_ref=node_ref>{move || tween.with(|t| t.label(suffix))}</span>
    }
}

/// Forty drifting dots behind the hero
#[component]
pub fn ParticleField() -> impl IntoView {
    let mut rng = StdRng::seed_from_u64(browser_seed());
    let dots = particles::scatter(&mut rng, PARTICLE_COUNT)
        .into_iter()
        .map(|particle| {
            view! {
                <div class="absolute w-1 h-1 rounded-full bg-purple-500/20" style=particle.style() />
            }
        })
        .collect_view();

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {dots}
        </div>
    }
}

fn browser_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    seed
}

/// Fixed five-agent illustration with pulsing nodes and edges
#[component]
pub fn AgentGraph() -> impl IntoView {
    let topology = graph::AgentGraph::standard();
    if let Err(err) = topology.validate() {
        report("agent-graph", &err);
    }

    let edges = topology
        .segments()
        .map(|segment| {
            view! {
                <line
                    x1=segment.from.x.to_string()
                    y1=segment.from.y.to_string()
                    x2=segment.to.x.to_string()
                    y2=segment.to.y.to_string()
                    stroke="rgba(124, 58, 237, 0.15)"
                    stroke-width="1.5"
                    stroke-dasharray="6 4"
                >
                    <animate
                        attributeName="stroke-opacity"
                        values="0.1;0.3;0.1"
                        dur=segment.pulse_duration()
                        repeatCount="indefinite"
                    />
                </line>
            }
        })
        .collect_view();

    let nodes = topology
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let (cx, cy) = (node.x.to_string(), node.y.to_string());
            view! {
                <g>
                    <circle cx=cx.clone() cy=cy.clone() r="28" fill=node.color opacity="0.08" />
                    <circle cx=cx.clone() cy=cy.clone() r="18" fill=node.color opacity="0.15">
                        <animate
                            attributeName="r"
                            values="18;22;18"
                            dur="4s"
                            begin=graph::halo_begin(i)
                            repeatCount="indefinite"
                        />
                    </circle>
                    <circle cx=cx.clone() cy=cy r="6" fill=node.color opacity="0.9">
                        <animate
                            attributeName="opacity"
                            values="0.6;1;0.6"
                            dur="3s"
                            begin=graph::core_begin(i)
                            repeatCount="indefinite"
                        />
                    </circle>
                    <text
                        x=cx
                        y=node.label_y().to_string()
                        text-anchor="middle"
                        fill="#94a3b8"
                        font-size="11"
                        font-family=fonts::MONO
                    >
                        {node.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg viewBox=graph::VIEW_BOX class="w-full max-w-xl mx-auto">
            {edges}
            {nodes}
        </svg>
    }
}

/// Editor-window frame around the fixed usage sample
#[component]
pub fn CodeDemo() -> impl IntoView {
    view! {
        <div class="glass rounded-xl overflow-hidden">
            <div class="flex items-center gap-2 px-4 py-3 border-b border-white/5">
                <div class="w-3 h-3 rounded-full bg-red-500/60" />
                <div class="w-3 h-3 rounded-full bg-yellow-500/60" />
                <div class="w-3 h-3 rounded-full bg-green-500/60" />
                <span class="ml-3 text-xs text-gray-500 font-mono">{CODE_SAMPLE_FILENAME}</span>
            </div>
            <pre
                class="p-6 text-sm leading-relaxed overflow-x-auto"
                style=format!("font-family: {}", fonts::MONO)
            >
                <code class="text-gray-300">{CODE_SAMPLE}</code>
            </pre>
        </div>
    }
}
