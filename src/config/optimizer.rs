//! Optimizer and learning rate schedule configuration

use serde::{Deserialize, Serialize};

/// Cosine learning rate schedule with linear warmup.
///
/// Field names and the `"cosine"` schedule name cross the boundary to the
/// training engine's optimizer factory. `decay_steps` is the total schedule
/// length including warmup, and is kept equal to the run's step count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRateSpec {
    /// Schedule name understood by the training engine
    pub name: String,
    /// Value at step 0 of warmup
    pub init_value: f64,
    /// Value reached at the end of warmup
    pub peak_value: f64,
    /// Linear warmup length in steps
    pub warmup_steps: usize,
    /// Total schedule length in steps, warmup included
    pub decay_steps: usize,
    /// Value reached at the end of decay
    pub end_value: f64,
}

impl LearningRateSpec {
    /// Warmup from zero to `peak_value`, then cosine decay to zero.
    pub fn cosine(peak_value: f64, warmup_steps: usize, decay_steps: usize) -> Self {
        Self {
            name: "cosine".to_string(),
            init_value: 0.0,
            peak_value,
            warmup_steps,
            decay_steps,
            end_value: 0.0,
        }
    }

    /// Learning rate at `step`.
    ///
    /// Linear ramp from `init_value` to `peak_value` over `warmup_steps`,
    /// then cosine decay to `end_value` at `decay_steps`. Past the schedule
    /// end the rate stays at `end_value`.
    pub fn value_at(&self, step: usize) -> f64 {
        if step < self.warmup_steps {
            let progress = step as f64 / self.warmup_steps as f64;
            return self.init_value + (self.peak_value - self.init_value) * progress;
        }

        let decay_span = self.decay_steps.saturating_sub(self.warmup_steps);
        if decay_span == 0 {
            return self.end_value;
        }

        let decay_step = step - self.warmup_steps;
        if decay_step >= decay_span {
            return self.end_value;
        }

        let progress = decay_step as f64 / decay_span as f64;
        let cosine = 0.5 * (1.0 + (std::f64::consts::PI * progress).cos());
        self.end_value + (self.peak_value - self.end_value) * cosine
    }
}

/// Optimizer configuration for a finetuning run.
///
/// `frozen_keys` holds glob patterns for parameters excluded from updates;
/// `None` trains everything and serializes as an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerSpec {
    /// Learning rate schedule
    pub learning_rate: LearningRateSpec,
    /// Decoupled weight decay coefficient
    pub weight_decay: f64,
    /// Global gradient norm clip
    pub clip_gradient: f64,
    /// Parameter patterns excluded from updates, or `None` to train everything
    #[serde(default)]
    pub frozen_keys: Option<Vec<String>>,
    /// Batches accumulated per optimizer update
    pub grad_accumulation_steps: usize,
}
