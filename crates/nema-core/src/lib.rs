//! # nema-core
//!
//! Content and widget behavior for the Nema landing page, kept free of any
//! browser dependency so it can be tested natively.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      nema-web (Leptos)                    │
//! │  Counter   ParticleField   AgentGraph   Waitlist form     │
//! └─────┬────────────┬─────────────┬─────────────┬───────────┘
//!       │            │             │             │
//!  CounterTween   Particle     AgentGraph     Waitlist
//!       └────────────┴──── nema-core ┴─────────────┘
//! ```
//!
//! Everything the page shows lives in [`content`] and [`meta`] as
//! `&'static` constants.

pub mod content;
pub mod counter;
pub mod error;
pub mod graph;
pub mod meta;
pub mod particles;
pub mod waitlist;

pub use counter::{CounterTween, TweenPhase};
pub use error::{Result, SiteError};
pub use graph::{AgentGraph, GraphNode};
pub use meta::SiteMeta;
pub use particles::Particle;
pub use waitlist::Waitlist;
