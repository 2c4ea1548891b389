//! Analyze command: decides whether candidates are worth reselling.

use crate::amazon::{AmazonClient, AmazonSearch};
use crate::arbitrage::{EvaluationResult, Evaluator, PriceCache, ResaleCandidate};
use crate::config::{Config, OutputFormat};
use crate::format::Formatter;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Evaluates one or more resale candidates against Amazon reference prices.
pub struct AnalyzeCommand {
    config: Config,
}

impl AnalyzeCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads candidates from a JSON array file.
    pub fn load_candidates(path: impl AsRef<Path>) -> Result<Vec<ResaleCandidate>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidates file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse candidates file: {}", path.display()))
    }

    /// Runs the evaluation and returns formatted output.
    pub async fn execute(&self, candidates: &[ResaleCandidate]) -> Result<String> {
        let client = AmazonClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, candidates).await
    }

    /// Runs the evaluation with a provided client (for testing).
    ///
    /// Candidates are evaluated in order and share one price cache, so a
    /// repeated product name costs a single fetch.
    pub async fn execute_with_client(
        &self,
        client: impl AmazonSearch,
        candidates: &[ResaleCandidate],
    ) -> Result<String> {
        let evaluator = Evaluator::new(client).with_min_profit(self.config.min_profit_percent);
        let mut cache = PriceCache::new();

        let mut results: Vec<(&str, EvaluationResult)> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let result = evaluator.analyze_product(&mut cache, candidate).await;
            results.push((candidate.product_name.as_str(), result));
        }

        let accepted = results.iter().filter(|(_, r)| r.ok).count();
        info!("{} of {} candidates worth reselling", accepted, results.len());

        self.render(&results)
    }

    fn render(&self, results: &[(&str, EvaluationResult)]) -> Result<String> {
        let formatter = Formatter::new(self.config.format);

        let output = match (self.config.format, results) {
            (_, [(name, result)]) => formatter.format_evaluation(name, result),
            (OutputFormat::Json, _) => {
                let all: Vec<&EvaluationResult> = results.iter().map(|(_, r)| r).collect();
                serde_json::to_string_pretty(&all).context("Failed to serialize evaluations")?
            }
            _ => results
                .iter()
                .map(|(name, result)| formatter.format_evaluation(name, result))
                .collect::<Vec<_>>()
                .join("\n\n"),
        };

        Ok(output)
    }
}
