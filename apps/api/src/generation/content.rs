//! Content strategies: where the free-text parts of a resume come from.
//!
//! `TemplateContent` samples from the static pools and never fails.
//! `GeminiContent` asks the LLM and falls back to the template output on any
//! error, so an unreachable or misbehaving provider never aborts a batch.
//!
//! The builder holds an `Arc<dyn ContentStrategy>` chosen from `ContentMode`.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generation::pools::{RESPONSIBILITIES, SUMMARIES};
use crate::llm_client::prompts::{job_bullets_prompt, summary_prompt};
use crate::llm_client::{LlmClient, LlmError};

/// Most bullets kept for a single position.
pub const MAX_BULLETS: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Content mode
// ────────────────────────────────────────────────────────────────────────────

/// Closed set of content variants accepted by `POST /generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    Template,
    Gemini,
}

impl ContentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Template => "template",
            ContentMode::Gemini => "gemini",
        }
    }
}

impl FromStr for ContentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template" => Ok(ContentMode::Template),
            "gemini" => Ok(ContentMode::Gemini),
            other => Err(format!("unknown content type '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy trait
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ContentStrategy: Send + Sync {
    /// "template" or "gemini", for logs.
    fn backend(&self) -> &'static str;

    /// Career summary for a candidate targeting `target_role`.
    async fn summary(&self, name: &str, target_role: &str, rng: &mut StdRng) -> String;

    /// Achievement bullets for one position. Never empty.
    async fn job_bullets(&self, title: &str, company: &str, rng: &mut StdRng) -> Vec<String>;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateContent
// ────────────────────────────────────────────────────────────────────────────

/// Pool-backed content. Deterministic for a given RNG state.
pub struct TemplateContent;

impl TemplateContent {
    pub fn sample_summary(rng: &mut StdRng) -> String {
        SUMMARIES.choose(rng).copied().unwrap_or_default().to_string()
    }

    /// 3 or 4 distinct responsibilities, in sampled order.
    pub fn sample_bullets(rng: &mut StdRng) -> Vec<String> {
        let count = rng.gen_range(3..=MAX_BULLETS);
        RESPONSIBILITIES
            .choose_multiple(rng, count)
            .map(|s| s.to_string())
            .collect()
    }
}

#[async_trait]
impl ContentStrategy for TemplateContent {
    fn backend(&self) -> &'static str {
        "template"
    }

    async fn summary(&self, _name: &str, _target_role: &str, rng: &mut StdRng) -> String {
        Self::sample_summary(rng)
    }

    async fn job_bullets(&self, _title: &str, _company: &str, rng: &mut StdRng) -> Vec<String> {
        Self::sample_bullets(rng)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiContent
// ────────────────────────────────────────────────────────────────────────────

/// LLM-backed content with per-call fallback to `TemplateContent`.
pub struct GeminiContent {
    llm: LlmClient,
}

impl GeminiContent {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn try_summary(&self, name: &str, target_role: &str) -> Result<String, LlmError> {
        let text = self
            .llm
            .generate_text(&summary_prompt(name, target_role))
            .await?;
        let summary = clean_summary(&text);
        if summary.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(summary)
    }

    async fn try_bullets(&self, title: &str, company: &str) -> Result<Vec<String>, LlmError> {
        let text = self
            .llm
            .generate_text(&job_bullets_prompt(title, company))
            .await?;
        let bullets = clean_bullets(&text);
        if bullets.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(bullets)
    }
}

#[async_trait]
impl ContentStrategy for GeminiContent {
    fn backend(&self) -> &'static str {
        "gemini"
    }

    async fn summary(&self, name: &str, target_role: &str, rng: &mut StdRng) -> String {
        match self.try_summary(name, target_role).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(model = self.llm.model(), "Gemini summary failed, using template summary: {e}");
                TemplateContent::sample_summary(rng)
            }
        }
    }

    async fn job_bullets(&self, title: &str, company: &str, rng: &mut StdRng) -> Vec<String> {
        match self.try_bullets(title, company).await {
            Ok(bullets) => bullets,
            Err(e) => {
                warn!(
                    model = self.llm.model(),
                    "Gemini bullets failed for {title} at {company}, using template bullets: {e}"
                );
                TemplateContent::sample_bullets(rng)
            }
        }
    }
}

/// Picks the strategy for a mode. Gemini requires a client.
pub fn strategy_for(mode: ContentMode, llm: Option<LlmClient>) -> Arc<dyn ContentStrategy> {
    match (mode, llm) {
        (ContentMode::Gemini, Some(llm)) => Arc::new(GeminiContent::new(llm)),
        _ => Arc::new(TemplateContent),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LLM output clean-up
// ────────────────────────────────────────────────────────────────────────────

/// Splits model output into bullet lines: markers and markdown emphasis are
/// stripped, blank lines dropped, at most `MAX_BULLETS` kept.
pub fn clean_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_bullet_marker(&line.replace("**", "")).to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_BULLETS)
        .collect()
}

/// Collapses the model's summary into a single plain line.
pub fn clean_summary(text: &str) -> String {
    text.replace("**", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_bullet_marker(line: &str) -> &str {
    let mut line = line.trim();
    loop {
        let before = line;
        line = line
            .trim_start_matches(['\u{2022}', '-', '*', '\u{2013}', '\u{2014}'])
            .trim_start();
        // Numbered markers: "1." or "2)" followed by whitespace or nothing,
        // so "99.9% uptime" keeps its figure.
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            let rest = &line[digits..];
            if let Some(stripped) = rest
                .strip_prefix('.')
                .or_else(|| rest.strip_prefix(')'))
                .filter(|r| r.is_empty() || r.starts_with(char::is_whitespace))
            {
                line = stripped.trim_start();
            }
        }
        if line == before {
            return line;
        }
    }
}
