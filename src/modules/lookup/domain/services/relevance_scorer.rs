use crate::modules::lookup::domain::{
    entities::{CandidateRecord, ScoredCandidate},
    value_objects::LookupQuery,
};

use super::text_processor::TextNormalizer;

/// Hard cap on the number of ranked items returned
pub const MAX_RESULTS: usize = 100;

/// Weights for the local relevance score
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Candidate code contains the code query. Dominates every name signal.
    pub code_match_weight: u32,

    /// No-space query is a substring of the no-space candidate name
    pub no_space_match_weight: u32,

    /// Per query token found in the candidate name
    pub token_hit_weight: u32,

    /// Bonus when nearly every token is found
    pub completeness_bonus: u32,

    /// Fraction of tokens that must hit for the completeness bonus
    pub completeness_ratio: f64,

    /// Hits always required for the completeness bonus, whatever the ratio
    pub completeness_min_hits: usize,

    pub max_results: usize,
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self {
            code_match_weight: 200,
            no_space_match_weight: 80,
            token_hit_weight: 12,
            completeness_bonus: 40,
            completeness_ratio: 0.75,
            completeness_min_hits: 2,
            max_results: MAX_RESULTS,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.completeness_ratio) {
            return Err(format!(
                "completeness_ratio must be between 0.0 and 1.0, got {}",
                self.completeness_ratio
            ));
        }

        if self.max_results == 0 || self.max_results > MAX_RESULTS {
            return Err(format!(
                "max_results must be between 1 and {}, got {}",
                MAX_RESULTS, self.max_results
            ));
        }

        if self.code_match_weight == 0 {
            return Err("code_match_weight must be positive".to_string());
        }

        Ok(())
    }

    /// Token hits needed for the completeness bonus
    pub fn required_hits(&self, token_count: usize) -> usize {
        let by_ratio = (token_count as f64 * self.completeness_ratio).floor() as usize;
        by_ratio.max(self.completeness_min_hits)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores and ranks candidates locally, without any I/O.
///
/// Scoring is additive:
/// - code path: `code_match_weight` when the candidate's code digits contain
///   the code query
/// - name path (only without a code query): no-space containment, per-token
///   hits and the completeness bonus
pub struct RelevanceScorer {
    config: ScoringConfig,
    normalizer: TextNormalizer,
}

impl RelevanceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::default_pipeline(),
        }
    }

    pub fn score(&self, query: &LookupQuery, candidate: &CandidateRecord) -> u32 {
        let query_no_space = self.normalizer.normalize_no_space(&query.name_query);
        self.score_with(query, &query_no_space, candidate)
    }

    /// Scores every candidate, drops zero scores, sorts by descending score
    /// (stable, so ties keep the store order) and truncates.
    pub fn rank(
        &self,
        query: &LookupQuery,
        candidates: Vec<CandidateRecord>,
    ) -> Vec<ScoredCandidate> {
        let query_no_space = self.normalizer.normalize_no_space(&query.name_query);
        let input_count = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|record| {
                let score = self.score_with(query, &query_no_space, &record);
                log::trace!("SCORER: '{}' -> {}", record.display_name, score);
                ScoredCandidate { record, score }
            })
            .filter(|c| c.score > 0)
            .collect();

        let matched = scored.len();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.config.max_results);

        log::debug!(
            "SCORER: {} candidates, {} matched, {} kept",
            input_count,
            matched,
            scored.len()
        );

        scored
    }

    fn score_with(
        &self,
        query: &LookupQuery,
        query_no_space: &str,
        candidate: &CandidateRecord,
    ) -> u32 {
        let mut score = 0;

        if query.is_code_like() {
            if candidate.code_digits().contains(query.code_query.as_str()) {
                score += self.config.code_match_weight;
            }
            return score;
        }

        let name_norm = self.normalizer.normalize(&candidate.display_name);
        let name_no_space: String = name_norm.chars().filter(|c| !c.is_whitespace()).collect();

        if !query_no_space.is_empty() && name_no_space.contains(query_no_space) {
            score += self.config.no_space_match_weight;
        }

        if !query.tokens.is_empty() {
            let hits = query
                .tokens
                .iter()
                .filter(|token| name_norm.contains(token.as_str()))
                .count();

            score += hits as u32 * self.config.token_hit_weight;

            if hits >= self.config.required_hits(query.tokens.len()) {
                score += self.config.completeness_bonus;
            }
        }

        score
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::lookup::domain::services::{text_processor::Tokenizer, QueryClassifier};
    use std::sync::Arc;

    fn classify(raw: &str) -> LookupQuery {
        QueryClassifier::new(Arc::new(Tokenizer::default()))
            .classify(raw, None, None)
            .unwrap()
    }

    fn record(name: &str, code: &str) -> CandidateRecord {
        CandidateRecord::new(name).with_code(code)
    }

    #[test]
    fn test_code_match_scores_code_weight_only() {
        let scorer = RelevanceScorer::default();
        let query = classify("222490");
        assert_eq!(scorer.score(&query, &record("Produto X", "0222490000")), 200);
        assert_eq!(scorer.score(&query, &record("222490 Produto", "111")), 0);
    }

    #[test]
    fn test_code_match_ignores_formatting_in_candidate_code() {
        let scorer = RelevanceScorer::default();
        let query = classify("2224");
        assert_eq!(scorer.score(&query, &record("Produto", "7-222.4")), 200);
    }

    #[test]
    fn test_code_match_outranks_name_matches() {
        let scorer = RelevanceScorer::default();
        let query = classify("7891");
        let ranked = scorer.rank(
            &query,
            vec![
                record("Produto 7891 Especial 7891", "0000"),
                record("Outro", "78910001"),
            ],
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.display_name, "Outro");
    }

    #[test]
    fn test_code_query_skips_name_signals() {
        let scorer = RelevanceScorer::default();
        let query = classify("7891");
        // Name contains the digits verbatim but only the code is looked at
        assert_eq!(scorer.score(&query, &record("7891", "")), 0);
    }

    #[test]
    fn test_no_space_tolerance() {
        let scorer = RelevanceScorer::default();
        let query = classify("tododia");
        // Token "tododia" is not in "todo dia"; the no-space form is
        assert_eq!(scorer.score(&query, &record("Todo Dia", "1")), 80);
    }

    #[test]
    fn test_no_space_tolerance_other_direction() {
        let scorer = RelevanceScorer::default();
        let query = classify("todo dia");
        // 80 no-space + 2 token hits + completeness
        assert_eq!(
            scorer.score(&query, &record("Sabonete TodoDia", "1")),
            80 + 24 + 40
        );
    }

    #[test]
    fn test_token_hits_and_completeness_bonus() {
        let scorer = RelevanceScorer::default();
        let query = classify("arroz integral tipo");
        // 3 tokens, 2 hits: floor(0.75 * 3) = 2 → bonus
        assert_eq!(
            scorer.score(&query, &record("Arroz Integral Camil 1kg", "1")),
            24 + 40
        );
        // 1 hit only
        assert_eq!(scorer.score(&query, &record("Arroz Branco", "1")), 12);
    }

    #[test]
    fn test_tokens_beyond_filter_cap_still_score() {
        let scorer = RelevanceScorer::default();
        let query = classify("aa bb cc dd ee ff gg hh zebra");
        assert_eq!(query.tokens.len(), 9);
        // only "zebra" hits, and 1 of 9 is short of floor(0.75 * 9) = 6
        assert_eq!(scorer.score(&query, &record("Zebra", "1")), 12);
    }

    #[test]
    fn test_completeness_counts_every_token() {
        let scorer = RelevanceScorer::default();
        let query = classify("aa bb cc dd ee ff gg hh zebra");
        // 7 of 9 tokens hit: 7 >= 6 earns the bonus
        let candidate = record("aa bb cc dd ee ff zebra", "1");
        assert_eq!(scorer.score(&query, &candidate), 7 * 12 + 40);
    }

    #[test]
    fn test_single_token_never_gets_completeness_bonus() {
        let scorer = RelevanceScorer::default();
        let query = classify("feijao");
        assert_eq!(scorer.score(&query, &record("Feijão Carioca", "1")), 80 + 12);
    }

    #[test]
    fn test_plural_query_matches_singular_name() {
        let scorer = RelevanceScorer::default();
        let query = classify("biscoitos");
        assert_eq!(scorer.score(&query, &record("Biscoito Maizena", "1")), 12);
    }

    #[test]
    fn test_unrelated_candidate_scores_zero_and_is_dropped() {
        let scorer = RelevanceScorer::default();
        let query = classify("cafe torrado");
        let candidate = record("Detergente Neutro", "1");
        assert_eq!(scorer.score(&query, &candidate), 0);
        assert!(scorer.rank(&query, vec![candidate]).is_empty());
    }

    #[test]
    fn test_rank_sorts_descending_and_is_stable() {
        let scorer = RelevanceScorer::default();
        let query = classify("leite integral");
        let ranked = scorer.rank(
            &query,
            vec![
                record("Leite Desnatado", "1"),
                record("Leite Integral Italac", "2"),
                record("Leite Semidesnatado", "3"),
                record("Bebida Láctea", "4"),
            ],
        );

        let names: Vec<&str> = ranked
            .iter()
            .map(|c| c.record.display_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Leite Integral Italac", "Leite Desnatado", "Leite Semidesnatado"]
        );
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(ranked.iter().all(|c| c.score > 0));
    }

    #[test]
    fn test_rank_truncates_to_cap() {
        let scorer = RelevanceScorer::default();
        let query = classify("sabonete");
        let candidates: Vec<CandidateRecord> = (0..150)
            .map(|i| record(&format!("Sabonete {}", i), &i.to_string()))
            .collect();

        let ranked = scorer.rank(&query, candidates);
        assert_eq!(ranked.len(), MAX_RESULTS);
        // Equal scores keep store order
        assert_eq!(ranked[0].record.display_name, "Sabonete 0");
        assert_eq!(ranked[99].record.display_name, "Sabonete 99");
    }

    #[test]
    fn test_required_hits() {
        let config = ScoringConfig::default();
        assert_eq!(config.required_hits(1), 2);
        assert_eq!(config.required_hits(3), 2);
        assert_eq!(config.required_hits(4), 3);
        assert_eq!(config.required_hits(8), 6);
    }

    #[test]
    fn test_config_validation() {
        let mut config = ScoringConfig::default();
        assert!(config.validate().is_ok());

        config.completeness_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.max_results = 0;
        assert!(config.validate().unwrap_err().contains("max_results"));
    }
}
