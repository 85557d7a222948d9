//! Tuning configuration for the scoring pipeline.
//!
//! Every tuned constant in the engine lives here as a field with the
//! reference value as its default. The magnitudes are calibration, not
//! contract: tests assert qualitative properties (ordering, fallback,
//! anti-domination) rather than exact adjusted scores.

/// Top-level weights combining the similarity and penalty terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the trait cosine term.
    pub alpha: f32,
    /// Weight of the element cosine term when a birth date is present.
    pub beta: f32,
    /// Factor applied to `beta` when the birth time is absent or invalid.
    pub beta_time_damping: f32,
    /// Weight of the subtracted penalty term.
    pub gamma: f32,
    /// Weight of the independent season adjustment.
    pub season: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            alpha: 0.50,
            beta: 0.40,
            beta_time_damping: 0.7,
            gamma: 0.35,
            season: 1.00,
        }
    }
}

/// Shaping applied to the query trait vector before similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitShaping {
    /// Multiplier pulling each trait away from the neutral 0.5.
    pub salience: f32,
    /// Bonus factor on the highest trait.
    pub peak_primary: f32,
    /// Bonus factor on the second-highest trait.
    pub peak_secondary: f32,
    /// Interpolation coefficient toward the companion bias vector.
    pub companion_blend: f32,
}

impl Default for TraitShaping {
    fn default() -> Self {
        Self {
            salience: 1.35,
            peak_primary: 0.18,
            peak_secondary: 0.10,
            companion_blend: 0.18,
        }
    }
}

/// Reward for destinations that stand out on the query's top traits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecializationBonus {
    /// Overall gain on the centred top-trait average.
    pub gain: f32,
    /// Weight of the highest query trait.
    pub primary_weight: f32,
    /// Weight of the second-highest query trait.
    pub secondary_weight: f32,
}

impl Default for SpecializationBonus {
    fn default() -> Self {
        Self {
            gain: 0.10,
            primary_weight: 0.6,
            secondary_weight: 0.4,
        }
    }
}

/// Weighting of the companion-fit bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanionBonus {
    /// Weight floor when a destination provides no companion signals.
    pub base: f32,
    /// Additional weight as signal coverage approaches 1.
    pub coverage_gain: f32,
    /// Small tie-break term reusing the same fit score.
    pub rank_nudge: f32,
}

impl Default for CompanionBonus {
    fn default() -> Self {
        Self {
            base: 0.18,
            coverage_gain: 0.24,
            rank_nudge: 0.03,
        }
    }
}

/// Season reward and penalties, scaled by best-months specificity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonAdjust {
    /// Reward when the travel month is a best month.
    pub bonus: f32,
    /// Penalty when the travel month is adjacent to a best month.
    pub near_penalty: f32,
    /// Penalty when the travel month is further away.
    pub far_penalty: f32,
}

impl Default for SeasonAdjust {
    fn default() -> Self {
        Self {
            bonus: 0.08,
            near_penalty: 0.10,
            far_penalty: 0.22,
        }
    }
}

/// Budget mismatch contributions to the penalty term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetPenalty {
    /// Penalty per level the destination exceeds the requested budget.
    pub overage: f32,
    /// Discount per level the destination undercuts the requested budget.
    pub discount: f32,
}

impl Default for BudgetPenalty {
    fn default() -> Self {
        Self {
            overage: 0.55,
            discount: 0.06,
        }
    }
}

/// Logistic flight-hours overage penalty. Disabled in the reference tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistancePenalty {
    /// Whether the term contributes at all.
    pub enabled: bool,
    /// Weight of the logistic overage.
    pub weight: f32,
    /// Steepness of the logistic curve.
    pub steepness: f32,
    /// Hours of overage at the curve's midpoint.
    pub midpoint: f32,
}

impl Default for DistancePenalty {
    fn default() -> Self {
        Self {
            enabled: false,
            weight: 0.25,
            steepness: 0.8,
            midpoint: 1.0,
        }
    }
}

/// Post-scoring perturbations guarding against domination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RerankConfig {
    /// Half-width of the deterministic jitter band.
    pub jitter: f32,
    /// Penalty per additional catalog entry sharing the country.
    pub country_step: f32,
    /// Cap on the country-concentration penalty.
    pub country_cap: f32,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            jitter: 0.05,
            country_step: 0.02,
            country_cap: 0.06,
        }
    }
}

/// The full tuning surface of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Term weights.
    pub weights: ScoreWeights,
    /// Query-vector shaping.
    pub shaping: TraitShaping,
    /// Specialization bonus.
    pub specialization: SpecializationBonus,
    /// Companion-fit bonus weighting.
    pub companion: CompanionBonus,
    /// Season adjustment.
    pub season: SeasonAdjust,
    /// Budget penalty.
    pub budget: BudgetPenalty,
    /// Flight-distance penalty (off by default).
    pub distance: DistancePenalty,
    /// Anti-domination perturbations.
    pub rerank: RerankConfig,
    /// Solo-travel stability bonus on high structure+culture destinations.
    pub solo_stability: f32,
    /// Softmax temperature for presentation shares.
    pub softmax_temperature: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl ScoringConfig {
    /// The reference tuning.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            weights: ScoreWeights::default(),
            shaping: TraitShaping::default(),
            specialization: SpecializationBonus::default(),
            companion: CompanionBonus::default(),
            season: SeasonAdjust::default(),
            budget: BudgetPenalty::default(),
            distance: DistancePenalty::default(),
            rerank: RerankConfig::default(),
            solo_stability: 0.08,
            softmax_temperature: 0.08,
        }
    }
}
