//! Fluent builder for constructing an [`AgentController`].

use std::sync::Arc;

use bt_behavior::{BehaviorScheduler, PatternCatalog};
use bt_core::{AgentConfig, AgentRng, Animation, Position, Rotation, Tick};
use bt_dialogue::{DialogueCatalog, Intent, IntentClassifier, ResponseSelector};

use crate::{AgentController, AgentError, AgentResult, AgentState};

/// Fluent builder for [`AgentController`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                        |
/// |-----------------------|------------------------------------------------|
/// | `.catalog(c)`         | `DialogueCatalog::banking()`                   |
/// | `.classifier(c)`      | `IntentClassifier::banking()`                  |
/// | `.patterns(p)`        | `PatternCatalog::banking()`                    |
/// | `.initial_position(p)`| `Position::ORIGIN`                             |
/// | `.rng(r)`             | seeded from `config.seed`, else OS entropy     |
///
/// Catalogs are taken as `Arc` so several agents can share one validated copy.
///
/// # Example
///
/// ```rust,ignore
/// let agent = AgentBuilder::new(config)
///     .catalog(Arc::new(load_catalog_csv(path)?))
///     .rng(AgentRng::new(7))
///     .build()?;
/// ```
pub struct AgentBuilder {
    config:     AgentConfig,
    catalog:    Option<Arc<DialogueCatalog>>,
    classifier: Option<Arc<IntentClassifier>>,
    patterns:   Option<Arc<PatternCatalog>>,
    position:   Option<Position>,
    rng:        Option<AgentRng>,
}

impl AgentBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            catalog:    None,
            classifier: None,
            patterns:   None,
            position:   None,
            rng:        None,
        }
    }

    pub fn catalog(mut self, catalog: Arc<DialogueCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn classifier(mut self, classifier: Arc<IntentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn patterns(mut self, patterns: Arc<PatternCatalog>) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Where the agent stands before its first update.  Must lie inside
    /// `config.bounds`.
    pub fn initial_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Override the response RNG (takes precedence over `config.seed`).
    pub fn rng(mut self, rng: AgentRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs and return a controller in the `idle` state.
    pub fn build(self) -> AgentResult<AgentController> {
        self.config.validate()?;

        let position = self.position.unwrap_or(Position::ORIGIN);
        if !self.config.bounds.contains(position) {
            return Err(AgentError::Config(format!(
                "initial position {position} lies outside bounds [{}, {}]",
                self.config.bounds.min, self.config.bounds.max
            )));
        }

        let catalog    = self.catalog.unwrap_or_else(|| Arc::new(DialogueCatalog::banking()));
        let classifier = self.classifier.unwrap_or_else(|| Arc::new(IntentClassifier::banking()));
        let patterns   = self.patterns.unwrap_or_else(|| Arc::new(PatternCatalog::banking()));
        let rng        = self.rng.unwrap_or_else(|| AgentRng::from_seed_opt(self.config.seed));

        // Classifiable intents without their own list still answer, but
        // from the `unknown` list.
        let reachable = classifier.rules().iter().map(|r| r.intent).chain([Intent::Greeting]);
        for intent in reachable {
            if !catalog.contains(intent) {
                tracing::warn!(%intent, "catalog has no list for intent; `unknown` replies will be used");
            }
        }

        tracing::debug!(
            patterns  = patterns.len(),
            intents   = catalog.len(),
            rules     = classifier.rules().len(),
            threshold = self.config.proximity_threshold,
            "agent built"
        );

        Ok(AgentController {
            config:    self.config,
            position,
            rotation:  Rotation::default(),
            animation: Animation::Idle,
            dialogue:  String::new(),
            state:     AgentState::Idle,
            tick:      Tick::ZERO,
            scheduler: BehaviorScheduler::new(patterns),
            classifier,
            selector:  ResponseSelector::new(catalog),
            history:   Vec::new(),
            rng,
        })
    }
}
