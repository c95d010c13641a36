use serde::Serialize;

use super::checks;
use super::config::ScoringConfig;
use super::criteria::{Criterion, ScoringMode};
use crate::content::ContentBundle;
use crate::tips::TipCatalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub passed: bool,
}

/// Snapshot of one scoring run. Never cached: build a new one after the
/// bundle changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub mode: ScoringMode,
    pub score: usize,
    pub threshold: usize,
    pub percentage: u32,
    pub star_rating: f64,
    pub criteria: Vec<CriterionResult>,
    pub tips: Vec<String>,
}

/// Scores a [`ContentBundle`] against the criterion set selected by its
/// subject. Every call evaluates the bundle as it is now.
#[derive(Debug, Clone, Default)]
pub struct SeoCalculator {
    bundle: ContentBundle,
    config: ScoringConfig,
    tips: TipCatalog,
}

impl SeoCalculator {
    pub fn new(bundle: ContentBundle, config: ScoringConfig) -> Self {
        Self {
            bundle,
            config,
            tips: TipCatalog::default(),
        }
    }

    pub fn with_tip_catalog(mut self, tips: TipCatalog) -> Self {
        self.tips = tips;
        self
    }

    pub fn bundle(&self) -> &ContentBundle {
        &self.bundle
    }

    pub fn bundle_mut(&mut self) -> &mut ContentBundle {
        &mut self.bundle
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn mode(&self) -> ScoringMode {
        ScoringMode::for_subject(self.bundle.subject())
    }

    /// Criteria that count toward the score, in tip order.
    pub fn relevant_criteria(&self) -> &'static [Criterion] {
        self.mode().criteria()
    }

    /// Number of criteria in the active set. Both sets hold 7.
    pub fn threshold(&self) -> usize {
        self.relevant_criteria().len()
    }

    pub fn check(&self, criterion: Criterion) -> bool {
        checks::evaluate(criterion, &self.bundle, &self.config)
    }

    /// Subject in the body outside the first paragraph.
    pub fn check_subject_in_content(&self) -> bool {
        self.check(Criterion::SubjectInContent)
    }

    /// Evaluate every criterion of the active set, in declaration order.
    pub fn evaluate(&self) -> Vec<CriterionResult> {
        self.relevant_criteria()
            .iter()
            .map(|&criterion| {
                let passed = self.check(criterion);
                tracing::debug!(%criterion, passed, "criterion evaluated");
                CriterionResult { criterion, passed }
            })
            .collect()
    }

    /// Number of passed criteria.
    pub fn calculate_score(&self) -> usize {
        tally(&self.evaluate())
    }

    pub fn calculate_score_percentage(&self) -> u32 {
        percentage(self.calculate_score(), self.threshold())
    }

    /// Percentage on a 0 to 5 scale; half units are left to the renderer.
    pub fn score_out_of_five(&self) -> f64 {
        out_of_five(self.calculate_score_percentage())
    }

    /// Catalog message for every failed criterion, in declaration order.
    /// Criteria the catalog has no message for are skipped.
    pub fn tips(&self) -> Vec<String> {
        self.tips_for(&self.evaluate())
    }

    /// Everything above from a single evaluation pass.
    pub fn report(&self) -> ScoreReport {
        let criteria = self.evaluate();
        let score = tally(&criteria);
        let threshold = self.threshold();
        let percentage = percentage(score, threshold);

        ScoreReport {
            mode: self.mode(),
            score,
            threshold,
            percentage,
            star_rating: out_of_five(percentage),
            tips: self.tips_for(&criteria),
            criteria,
        }
    }

    fn tips_for(&self, results: &[CriterionResult]) -> Vec<String> {
        results
            .iter()
            .filter(|result| !result.passed)
            .filter_map(|result| self.tips.message(result.criterion))
            .map(str::to_string)
            .collect()
    }
}

fn tally(results: &[CriterionResult]) -> usize {
    results.iter().filter(|result| result.passed).count()
}

/// `round(score / threshold * 100)`; an empty criterion set scores 0.
pub fn percentage(score: usize, threshold: usize) -> u32 {
    if threshold == 0 {
        return 0;
    }
    ((score as f64 / threshold as f64) * 100.0).round() as u32
}

pub fn out_of_five(percentage: u32) -> f64 {
    percentage as f64 / 10.0 / 2.0
}
