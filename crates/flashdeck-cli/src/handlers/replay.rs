//! Replay a recorded pointer stream against the stored deck.
//!
//! Script entries are timed pointer events, e.g.
//! `[{"at_ms": 0, "kind": "down"}, {"at_ms": 40, "kind": "move", "dx": -120, "dy": 0},
//! {"at_ms": 80, "kind": "up"}]`. Time is driven by a manual clock, so the
//! long-press timer fires exactly when the script says it should.

use crate::cli::ReplayArgs;
use crate::context::CliContext;
use crate::output;
use anyhow::Context;
use flashdeck_core::{AppConfig, ManualClock};
use flashdeck_domain::{
    Action, Card, DeckOutcome, DeckStatus, Effect, EditorRequest, GesturePhase, PointerEvent,
    TagFilter,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: PointerEvent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum EffectReport {
    Haptic { duration_ms: u64 },
    OpenEditor(EditorRequest),
}

impl From<Effect> for EffectReport {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Haptic(duration) => Self::Haptic {
                duration_ms: millis(duration),
            },
            Effect::OpenEditor(request) => Self::OpenEditor(request),
        }
    }
}

/// One resolved step. `event` is absent when the long-press timer fired on its own,
/// in which case `at_ms` is the timer's deadline.
#[derive(Debug, Serialize)]
struct StepReport {
    at_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<PointerEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    effects: Vec<EffectReport>,
    phase: GesturePhase,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    steps: Vec<StepReport>,
    active_card: Option<Card>,
    flipped: bool,
    status: Option<DeckStatus>,
    total_cards: usize,
    saved: bool,
}

pub fn parse_script(bytes: &[u8]) -> anyhow::Result<Vec<ScriptStep>> {
    serde_json::from_slice(bytes).context("Replay script must be a JSON array of pointer events")
}

pub async fn handle(data_dir: &Path, config: &AppConfig, args: ReplayArgs) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.script)
        .await
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = parse_script(&bytes)?;

    let clock = ManualClock::new();
    let mut ctx = CliContext::load_with_clock(data_dir, config, clock.clone()).await;
    if let Some(tag) = args.tag {
        ctx.deck.select_tag(TagFilter::parse(&tag));
    }

    let mut steps = Vec::with_capacity(script.len());
    for step in script {
        let at = Duration::from_millis(step.at_ms);

        // A long-press due before this event fires at its own deadline.
        if let Some(deadline) = ctx.deck.long_press_deadline().filter(|due| *due <= at) {
            clock.set(deadline);
            let fired = ctx.deck.tick();
            if fired.action.is_some() {
                steps.push(report(
                    millis(deadline),
                    None,
                    fired,
                    ctx.deck.gesture_phase(),
                ));
            }
        }

        clock.set(at);
        let outcome = ctx.deck.handle_pointer(step.event);
        steps.push(report(
            step.at_ms,
            Some(step.event),
            outcome,
            ctx.deck.gesture_phase(),
        ));
    }
    tracing::debug!("Replayed {} steps", steps.len());

    if args.save {
        ctx.save().await?;
    }

    output::output_success(ReplayReport {
        steps,
        active_card: ctx.deck.active_card().cloned(),
        flipped: ctx.deck.is_flipped(),
        status: ctx.deck.status(),
        total_cards: ctx.deck.cards().len(),
        saved: args.save,
    })
}

fn millis(at: Duration) -> u64 {
    u64::try_from(at.as_millis()).unwrap_or(u64::MAX)
}

fn report(
    at_ms: u64,
    event: Option<PointerEvent>,
    outcome: DeckOutcome,
    phase: GesturePhase,
) -> StepReport {
    StepReport {
        at_ms,
        event,
        action: outcome.action,
        effects: outcome.effects.into_iter().map(EffectReport::from).collect(),
        phase,
    }
}
