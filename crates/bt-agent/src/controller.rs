//! The `AgentController` and its update function.

use std::sync::Arc;

use bt_behavior::{BehaviorScheduler, PatternCatalog, SchedulerCursor};
use bt_core::{AgentConfig, AgentRng, Animation, Position, Rotation, Tick};
use bt_dialogue::{Intent, IntentClassifier, ResponseSelector};

use crate::{
    AgentObserver, AgentState, ConversationTurn, CustomerEvent, NoopObserver, Snapshot, StateEvent,
};

/// The single owner of all mutable agent state.
///
/// Every field is written only from [`update_observed`][Self::update_observed]
/// (through `&mut self`), so one controller never sees overlapping updates.
/// To drive a controller from several threads, move it into an
/// [`AgentWorker`][crate::AgentWorker].
///
/// Create via [`AgentBuilder`][crate::AgentBuilder].
pub struct AgentController {
    pub(crate) config:     AgentConfig,
    pub(crate) position:   Position,
    pub(crate) rotation:   Rotation,
    pub(crate) animation:  Animation,
    pub(crate) dialogue:   String,
    pub(crate) state:      AgentState,
    pub(crate) tick:       Tick,
    pub(crate) scheduler:  BehaviorScheduler,
    pub(crate) classifier: Arc<IntentClassifier>,
    pub(crate) selector:   ResponseSelector,
    pub(crate) history:    Vec<ConversationTurn>,
    pub(crate) rng:        AgentRng,
}

impl AgentController {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process one event and return the resulting snapshot.
    pub fn update(&mut self, event: &CustomerEvent) -> Snapshot {
        self.update_observed(event, &mut NoopObserver)
    }

    /// Like [`update`][Self::update], reporting progress to `observer`.
    pub fn update_observed<O: AgentObserver>(
        &mut self,
        event:    &CustomerEvent,
        observer: &mut O,
    ) -> Snapshot {
        let now = self.tick;

        if let Some(customer) = event.position {
            self.handle_position(now, customer, observer);
        }
        if let Some(text) = event.query() {
            self.handle_query(now, text, observer);
        }

        let snapshot = self.snapshot();
        observer.on_snapshot(now, &snapshot);
        self.tick = now.next();
        snapshot
    }

    /// Current outbound view without advancing anything.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position:  self.position,
            rotation:  self.rotation,
            animation: self.animation,
            dialogue:  self.dialogue.clone(),
            state:     self.state,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Number of updates processed so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn scheduler_cursor(&self) -> SchedulerCursor {
        self.scheduler.cursor()
    }

    /// The idle behavior cycle this agent runs.
    pub fn patterns(&self) -> &PatternCatalog {
        self.scheduler.catalog()
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    // ── Branches ──────────────────────────────────────────────────────────

    fn handle_position<O: AgentObserver>(
        &mut self,
        now:      Tick,
        customer: Position,
        observer: &mut O,
    ) {
        let distance = self.position.planar_distance(customer);

        if distance < self.config.proximity_threshold {
            self.rotation = self.position.heading_to(customer);
            let next = self.state.transition(StateEvent::CustomerNear);
            if next == AgentState::Greeting {
                self.set_state(now, next, observer);
                self.animation = Animation::Talking;
                self.dialogue = self.selector.select(Intent::Greeting, &mut self.rng).to_owned();
                tracing::debug!(tick = now.0, distance, "customer in range, greeting");
            }
        } else {
            let next = self.state.transition(StateEvent::CustomerFar);
            self.set_state(now, next, observer);
            self.idle_step(now, observer);
        }
    }

    fn idle_step<O: AgentObserver>(&mut self, now: Tick, observer: &mut O) {
        let step = self.scheduler.tick();
        observer.on_behavior(now, &step);
        if !step.transitioned {
            return;
        }

        self.animation = step.animation;
        if let Some(d) = step.displacement {
            self.position = self.position.displaced(d, self.config.bounds);
            // Heading follows the intended step even when the clamp ate it.
            if let Some(heading) = d.heading() {
                self.rotation = heading;
            }
        }
        tracing::trace!(
            tick      = now.0,
            pattern   = self.scheduler.cursor().current_index,
            animation = %step.animation,
            position  = %self.position,
            "behavior transition"
        );
    }

    fn handle_query<O: AgentObserver>(&mut self, now: Tick, text: &str, observer: &mut O) {
        let classifier = Arc::clone(&self.classifier);
        let (intent, keyword) = classifier.classify_with_keyword(text);
        let answered_from = self.selector.resolve(intent);
        let reply = self.selector.select(intent, &mut self.rng).to_owned();

        let next = self.state.transition(StateEvent::Query);
        self.set_state(now, next, observer);
        self.animation = Animation::Talking;
        self.dialogue = reply.clone();

        tracing::info!(tick = now.0, %intent, %answered_from, keyword, "answered customer query");

        let turn = ConversationTurn {
            tick:          now,
            customer_text: text.to_owned(),
            intent,
            agent_text:    reply,
        };
        observer.on_turn(now, &turn);
        self.history.push(turn);
    }

    fn set_state<O: AgentObserver>(&mut self, now: Tick, next: AgentState, observer: &mut O) {
        let prev = self.state;
        if prev == next {
            return;
        }
        self.state = next;
        tracing::debug!(tick = now.0, from = %prev, to = %next, "state transition");
        observer.on_state_change(now, prev, next);
    }
}
