use crate::errors::{Result, RouteError};

use std::fmt::Display;
use log::warn;


pub const DEFAULT_INSIGHT: &str = "Safe travels across the beautiful landscape of Sindh!";

pub const DEFAULT_EXPLANATION: &str = "Dijkstra's algorithm selects the node with the smallest tentative distance at each step, \
ensuring the shortest path is found once the destination is reached.";


/// External text generation service used to describe a computed route
/// Route computation never depends on it, failures fall back to fixed texts
pub trait Annotator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Annotator for when no text generation service is configured
#[derive(Clone, Copy, Debug, Default)]
pub struct Offline;

impl Annotator for Offline {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Err(RouteError::Annotation("no text generation service configured".to_string()))
    }
}


/// Supplementary texts for a route
#[derive(Clone, Debug, PartialEq)]
pub struct Annotations {
    pub insight: String,
    pub explanation: String,
}

/// Ask the annotator for a travel insight and an explanation of the route
/// `names` are the display names of the route from start to end
pub fn annotate_route<A, D, S>(annotator: &A, names: &[S], distance: D) -> Annotations
where
    A: Annotator + ?Sized,
    D: Display,
    S: AsRef<str>,
{
    let start = names.first().map_or("", |n| n.as_ref());
    let end = names.last().map_or("", |n| n.as_ref());

    Annotations {
        insight: annotate_or_default(annotator, &insight_prompt(start, end, distance), DEFAULT_INSIGHT),
        explanation: annotate_or_default(annotator, &explanation_prompt(start, end, names), DEFAULT_EXPLANATION),
    }
}

/// Generated text, or `fallback` if the annotator fails or returns nothing
pub fn annotate_or_default<A: Annotator + ?Sized>(annotator: &A, prompt: &str, fallback: &str) -> String {
    match annotator.generate(prompt) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => fallback.to_string(),
        Err(e) => {
            warn!("{e}, using default text");
            fallback.to_string()
        }
    }
}

pub fn insight_prompt<D: Display>(start: &str, end: &str, distance: D) -> String {
    format!(
        "You are a travel expert for Sindh, Pakistan. Provide a short, engaging 2-sentence insight \
        for a traveler going from {start} to {end} (approx. {distance} km). Mention one interesting \
        fact about the destination or a cultural tip for the route."
    )
}

pub fn explanation_prompt<S: AsRef<str>>(start: &str, end: &str, names: &[S]) -> String {
    let route = names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" -> ");
    format!(
        "Explain briefly (max 3 sentences) how Dijkstra's algorithm found the shortest path from \
        {start} to {end} through {route}. Focus on the greedy nature of the algorithm."
    )
}
