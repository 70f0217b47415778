//! Generate Phrases use case
//!
//! Fans out one completion call per goal (or several, see
//! [`GenerationParams::generations_per_goal`]) under one shared deadline,
//! then folds every successful response into a flat list of phrases.
//! A call that fails contributes nothing; the batch only fails when no
//! phrase at all was produced.

use crate::config::GenerationParams;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use focus_domain::{CompletionRequest, Credential, Goal, Phrase, extract_phrases, preview};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio::time::{Instant, timeout_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during phrase generation
#[derive(Error, Debug)]
pub enum GeneratePhrasesError {
    #[error("No goals provided")]
    NoGoals,

    #[error("Not enough credentials: {needed} needed, {available} available")]
    InsufficientCredentials { needed: usize, available: usize },

    #[error("no phrases generated")]
    NoPhrasesGenerated,
}

/// Input for the GeneratePhrases use case
#[derive(Debug, Clone)]
pub struct GeneratePhrasesInput {
    /// Goals as submitted by the caller
    pub goals: Vec<Goal>,
    /// One credential per unit, drawn by the caller before dispatch
    pub credentials: Vec<Credential>,
    /// Cancels the batch early (e.g., on server shutdown)
    pub cancellation: Option<CancellationToken>,
}

impl GeneratePhrasesInput {
    pub fn new(goals: Vec<Goal>, credentials: Vec<Credential>) -> Self {
        Self {
            goals,
            credentials,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// What happened to one completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Succeeded { phrases: usize },
    Failed { reason: String },
    TimedOut,
    Cancelled,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Succeeded { .. } => "succeeded",
            UnitStatus::Failed { .. } => "failed",
            UnitStatus::TimedOut => "timed_out",
            UnitStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UnitStatus::Succeeded { .. })
    }
}

/// Outcome of one unit, in dispatch order
#[derive(Debug, Clone)]
pub struct UnitOutcome {
    pub index: usize,
    pub goal: Goal,
    pub status: UnitStatus,
}

/// Result of a generation batch
#[derive(Debug, Clone)]
pub struct GeneratePhrasesOutput {
    /// Phrases in the order their calls completed
    pub phrases: Vec<Phrase>,
    /// Per-unit outcomes, sorted by dispatch index
    pub outcomes: Vec<UnitOutcome>,
}

impl GeneratePhrasesOutput {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn into_phrases(self) -> Vec<Phrase> {
        self.phrases
    }
}

/// Use case for generating motivational phrases
pub struct GeneratePhrasesUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    params: GenerationParams,
    logger: Arc<dyn GenerationLogger>,
}

impl<G: CompletionGateway + 'static> GeneratePhrasesUseCase<G> {
    pub fn new(gateway: Arc<G>, params: GenerationParams) -> Self {
        Self {
            gateway,
            params,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Repeat the goal list `generations` times (at least once)
    ///
    /// Duplicates are kept: each copy becomes an independent call.
    pub fn expand_units(goals: &[Goal], generations: usize) -> Vec<Goal> {
        let rounds = generations.max(1);
        let mut units = Vec::with_capacity(goals.len() * rounds);
        for _ in 0..rounds {
            units.extend(goals.iter().cloned());
        }
        units
    }

    /// Execute the batch
    pub async fn execute(
        &self,
        input: GeneratePhrasesInput,
    ) -> Result<GeneratePhrasesOutput, GeneratePhrasesError> {
        if input.goals.is_empty() {
            return Err(GeneratePhrasesError::NoGoals);
        }

        let units = Self::expand_units(&input.goals, self.params.generations_per_goal);
        if input.credentials.len() < units.len() {
            return Err(GeneratePhrasesError::InsufficientCredentials {
                needed: units.len(),
                available: input.credentials.len(),
            });
        }

        info!(
            "Generating phrases for {} goals ({} calls, deadline {:?})",
            input.goals.len(),
            units.len(),
            self.params.deadline
        );

        let deadline = Instant::now() + self.params.deadline;
        let mut pending: BTreeMap<usize, Goal> = BTreeMap::new();
        let mut task_units = HashMap::new();
        let mut join_set = JoinSet::new();

        for (index, (goal, credential)) in units.into_iter().zip(input.credentials).enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let request =
                CompletionRequest::for_goal(self.params.model.clone(), &goal, &self.params.prompt)
                    .with_max_tokens(self.params.max_tokens)
                    .with_temperature(self.params.temperature);

            debug!("Dispatching unit {} with credential {}", index, credential);
            pending.insert(index, goal.clone());

            let handle = join_set.spawn(async move {
                let result = gateway.complete(&credential, &request).await;
                (index, goal, result)
            });
            task_units.insert(handle.id(), index);
        }

        let mut phrases = Vec::new();
        let mut outcomes = Vec::new();
        let mut interrupted = None;

        loop {
            let next = tokio::select! {
                joined = timeout_at(deadline, join_set.join_next()) => joined,
                _ = cancelled(input.cancellation.as_ref()) => {
                    interrupted = Some(UnitStatus::Cancelled);
                    break;
                }
            };

            match next {
                Ok(Some(Ok((index, goal, result)))) => {
                    pending.remove(&index);
                    let status = self.fold_result(index, &goal, result, &mut phrases);
                    outcomes.push(UnitOutcome {
                        index,
                        goal,
                        status,
                    });
                }
                Ok(Some(Err(e))) => {
                    let Some((index, goal)) = task_units
                        .get(&e.id())
                        .and_then(|index| pending.remove_entry(index))
                    else {
                        warn!("Join error for an unknown task: {}", e);
                        continue;
                    };
                    let reason = if e.is_panic() {
                        "task panicked"
                    } else {
                        "task cancelled"
                    };
                    warn!("Unit {} failed: {} ({})", index, reason, e);
                    let status = UnitStatus::Failed {
                        reason: reason.to_string(),
                    };
                    self.record(index, &goal, &status);
                    outcomes.push(UnitOutcome {
                        index,
                        goal,
                        status,
                    });
                }
                Ok(None) => break,
                Err(_) => {
                    warn!(
                        "Deadline of {:?} expired with {} calls outstanding",
                        self.params.deadline,
                        join_set.len()
                    );
                    interrupted = Some(UnitStatus::TimedOut);
                    break;
                }
            }
        }

        if interrupted == Some(UnitStatus::Cancelled) {
            warn!("Generation cancelled with {} calls outstanding", join_set.len());
        }
        if interrupted.is_some() {
            join_set.abort_all();
        }

        // Every finished or failed task has left `pending`
        for (index, goal) in pending {
            let status = interrupted.clone().unwrap_or_else(|| UnitStatus::Failed {
                reason: "task lost".to_string(),
            });
            self.record(index, &goal, &status);
            outcomes.push(UnitOutcome {
                index,
                goal,
                status,
            });
        }
        outcomes.sort_by_key(|o| o.index);

        let output = GeneratePhrasesOutput { phrases, outcomes };
        info!(
            "Generation finished: {} phrases, {} calls succeeded, {} failed",
            output.phrases.len(),
            output.succeeded(),
            output.failed()
        );
        self.logger.log(
            GenerationEvent::new("batch_complete")
                .with("goals", input.goals.len())
                .with("calls", output.outcomes.len())
                .with("succeeded", output.succeeded())
                .with("phrases", output.phrases.len()),
        );

        if output.phrases.is_empty() {
            return Err(GeneratePhrasesError::NoPhrasesGenerated);
        }
        Ok(output)
    }

    /// Turn one call result into phrases, appending them to `phrases`
    fn fold_result(
        &self,
        index: usize,
        goal: &Goal,
        result: Result<Vec<String>, GatewayError>,
        phrases: &mut Vec<Phrase>,
    ) -> UnitStatus {
        let status = match result {
            Ok(texts) => {
                let mut produced = 0;
                for raw in &texts {
                    match extract_phrases(raw, self.params.prompt.format) {
                        Ok(found) => {
                            produced += found.len();
                            phrases.extend(found);
                        }
                        Err(e) => {
                            warn!(
                                "Unit {} returned unparseable text ({}): {}",
                                index,
                                e,
                                preview(raw, 120)
                            );
                        }
                    }
                }
                debug!("Unit {} produced {} phrases", index, produced);
                UnitStatus::Succeeded { phrases: produced }
            }
            Err(e) => {
                warn!("Generation for goal {:?} failed: {}", goal.content(), e);
                UnitStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };
        self.record(index, goal, &status);
        status
    }

    fn record(&self, index: usize, goal: &Goal, status: &UnitStatus) {
        let kind = match status {
            UnitStatus::Succeeded { .. } => "unit_succeeded",
            UnitStatus::Failed { .. } => "unit_failed",
            UnitStatus::TimedOut => "unit_timed_out",
            UnitStatus::Cancelled => "unit_cancelled",
        };
        let event = GenerationEvent::new(kind)
            .with("unit", index)
            .with("goal", goal.content())
            .with("status", status.as_str());
        let event = match status {
            UnitStatus::Succeeded { phrases } => event.with("phrases", *phrases),
            UnitStatus::Failed { reason } => event.with("reason", reason.as_str()),
            UnitStatus::TimedOut | UnitStatus::Cancelled => event,
        };
        self.logger.log(event);
    }
}

async fn cancelled(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}
