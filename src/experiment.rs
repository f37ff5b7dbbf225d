//! A/B Experiment
//!
//! Weighted, per-visitor variant assignment with manual override and
//! display/win notifications.

use leptos::prelude::*;
use thiserror::Error;

use crate::config::ExperimentConfig;
use crate::error::AppResult;
use crate::storage;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("experiment '{0}' has no variants")]
    NoVariants(String),
    #[error("variant '{0}' is defined twice")]
    DuplicateVariant(String),
    #[error("variant weights sum to {0}, expected 100")]
    WeightSum(u32),
    #[error("variant weights overflow")]
    WeightOverflow,
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    name: String,
    variants: Vec<Variant>,
}

impl Experiment {
    pub fn new<N: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (N, u32)>,
    ) -> Result<Self, ExperimentError> {
        let name = name.into();
        let mut list: Vec<Variant> = Vec::new();
        for (variant, weight) in variants {
            let variant = variant.into();
            if list.iter().any(|v| v.name == variant) {
                return Err(ExperimentError::DuplicateVariant(variant));
            }
            list.push(Variant { name: variant, weight });
        }
        if list.is_empty() {
            return Err(ExperimentError::NoVariants(name));
        }
        let sum = list
            .iter()
            .try_fold(0u32, |acc, v| acc.checked_add(v.weight))
            .ok_or(ExperimentError::WeightOverflow)?;
        if sum != 100 {
            return Err(ExperimentError::WeightSum(sum));
        }
        Ok(Self { name, variants: list })
    }

    pub fn from_config(config: &ExperimentConfig) -> Result<Self, ExperimentError> {
        Self::new(config.name.clone(), config.variants.iter().cloned())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.variants.iter().any(|v| v.name == variant)
    }

    /// Map a bucket in `0..100` onto a variant by cumulative weight.
    pub fn assign(&self, bucket: u32) -> &str {
        let bucket = bucket % 100;
        let mut upper: u32 = 0;
        for variant in &self.variants {
            upper = upper.saturating_add(variant.weight);
            if bucket < upper {
                return &variant.name;
            }
        }
        // Weights sum to 100, so only reachable for an empty tail
        &self.variants[self.variants.len() - 1].name
    }

    /// Stable bucket for a visitor, so revisits land on the same variant.
    pub fn bucket_for(&self, visitor_id: &str) -> u32 {
        let key = format!("{}:{}", self.name, visitor_id);
        (fnv1a(key.as_bytes()) % 100) as u32
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in bytes {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

type Listener = Box<dyn Fn(&str, &str)>;

/// Tracks the active variant and notifies listeners.
pub struct ExperimentEmitter {
    experiment: Experiment,
    active: String,
    displayed: Option<String>,
    play_listeners: Vec<Listener>,
    win_listeners: Vec<Listener>,
}

impl ExperimentEmitter {
    pub fn new(experiment: Experiment, active: &str) -> Result<Self, ExperimentError> {
        if !experiment.contains(active) {
            return Err(ExperimentError::UnknownVariant(active.to_string()));
        }
        Ok(Self {
            active: active.to_string(),
            experiment,
            displayed: None,
            play_listeners: Vec::new(),
            win_listeners: Vec::new(),
        })
    }

    pub fn experiment(&self) -> &Experiment {
        &self.experiment
    }

    pub fn active_variant(&self) -> &str {
        &self.active
    }

    pub fn add_play_listener(&mut self, listener: impl Fn(&str, &str) + 'static) {
        self.play_listeners.push(Box::new(listener));
    }

    pub fn add_win_listener(&mut self, listener: impl Fn(&str, &str) + 'static) {
        self.win_listeners.push(Box::new(listener));
    }

    /// Force a variant. Returns whether the active variant changed.
    pub fn set_active_variant(&mut self, variant: &str) -> Result<bool, ExperimentError> {
        if !self.experiment.contains(variant) {
            return Err(ExperimentError::UnknownVariant(variant.to_string()));
        }
        if self.active == variant {
            return Ok(false);
        }
        self.active = variant.to_string();
        Ok(true)
    }

    /// Report that the active variant is on screen. Emits only when it
    /// differs from the last one reported since the page was last hidden.
    pub fn play(&mut self) -> bool {
        if self.displayed.as_deref() == Some(self.active.as_str()) {
            return false;
        }
        self.displayed = Some(self.active.clone());
        for listener in &self.play_listeners {
            listener(&self.experiment.name, &self.active);
        }
        true
    }

    /// The experiment left the screen; the next `play` emits again.
    pub fn hide(&mut self) {
        self.displayed = None;
    }

    pub fn win(&self) {
        for listener in &self.win_listeners {
            listener(&self.experiment.name, &self.active);
        }
    }
}

// ========================
// Browser integration
// ========================

fn visitor_id(key: &str) -> String {
    if let Ok(Some(id)) = storage::get_raw(key) {
        return id;
    }
    let id = format!("{:013x}", (js_sys::Math::random() * (1u64 << 52) as f64) as u64);
    if let Err(e) = storage::set_raw(key, &id) {
        tracing::warn!("visitor id not persisted: {}", e);
    }
    id
}

/// Variant for this browser: a stored choice if still valid, else the
/// visitor's weighted assignment.
fn initial_variant(experiment: &Experiment, config: &ExperimentConfig) -> String {
    let key = format!("{}{}", config.variant_key_prefix, experiment.name());
    if let Ok(Some(stored)) = storage::get_raw(&key) {
        if experiment.contains(&stored) {
            return stored;
        }
    }
    let bucket = experiment.bucket_for(&visitor_id(&config.visitor_key));
    let chosen = experiment.assign(bucket).to_string();
    tracing::debug!(bucket, variant = %chosen, "assigned experiment variant");
    if let Err(e) = storage::set_raw(&key, &chosen) {
        tracing::warn!("variant choice not persisted: {}", e);
    }
    chosen
}

/// Copyable handle to the page's experiment, provided via context.
#[derive(Clone, Copy)]
pub struct ExperimentHandle {
    emitter: StoredValue<ExperimentEmitter, LocalStorage>,
    active: RwSignal<String>,
    storage_key: StoredValue<String>,
}

pub fn use_experiment() -> ExperimentHandle {
    expect_context::<ExperimentHandle>()
}

impl ExperimentHandle {
    pub fn init(config: &ExperimentConfig) -> AppResult<Self> {
        let experiment = Experiment::from_config(config)?;
        let variant = initial_variant(&experiment, config);
        let storage_key = format!("{}{}", config.variant_key_prefix, experiment.name());
        let mut emitter = ExperimentEmitter::new(experiment, &variant)?;

        emitter.add_play_listener(|experiment, variant| {
            tracing::info!("Displaying experiment '{}' variant '{}'", experiment, variant);
        });
        emitter.add_win_listener(|experiment, variant| {
            tracing::info!("Variant '{}' of experiment '{}' was clicked", variant, experiment);
        });

        Ok(Self {
            emitter: StoredValue::new_local(emitter),
            active: RwSignal::new(variant),
            storage_key: StoredValue::new(storage_key),
        })
    }

    pub fn name(&self) -> String {
        self.emitter.with_value(|e| e.experiment().name().to_string())
    }

    /// Reactive: the currently active variant
    pub fn active_variant(&self) -> String {
        self.active.get()
    }

    pub fn set_active_variant(&self, variant: &str) {
        let changed = self.emitter.try_update_value(|e| e.set_active_variant(variant));
        match changed {
            Some(Ok(true)) => {
                if let Err(e) = storage::set_raw(&self.storage_key.get_value(), variant) {
                    tracing::warn!("variant override not persisted: {}", e);
                }
                self.active.set(variant.to_string());
            }
            Some(Ok(false)) | None => {}
            Some(Err(e)) => tracing::warn!("{}", e),
        }
    }

    pub fn played(&self) {
        self.emitter.update_value(|e| {
            e.play();
        });
    }

    pub fn hidden(&self) {
        self.emitter.try_update_value(|e| e.hide());
    }

    pub fn win(&self) {
        self.emitter.with_value(|e| e.win());
    }
}
