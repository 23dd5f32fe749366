//! Offline prompt-comparison report writer.
//!
//! Given responses collected for the same questions under different
//! prompting strategies, this module scores each response against expected
//! keywords and writes a fixed-format text report: the raw responses per
//! question and strategy, then a fenced CSV-like block with per-question
//! scores, per-strategy averages, and the best-performing strategy. This is
//! a standalone utility; it shares only the error type with the session
//! machinery.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// The prompting strategies compared, in report column order.
pub const STRATEGIES: [&str; 3] = ["Zero-shot", "One-shot", "Few-shot"];

/// One collected response: a question, the strategy used, and the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyResponse {
    /// The question that was asked.
    pub question: String,

    /// The prompting strategy used, one of [`STRATEGIES`].
    pub strategy: String,

    /// The model's response.
    pub response: String,
}

impl StrategyResponse {
    /// Creates a new collected response.
    pub fn new<Q, S, R>(question: Q, strategy: S, response: R) -> Self
    where
        Q: Into<String>,
        S: Into<String>,
        R: Into<String>,
    {
        Self {
            question: question.into(),
            strategy: strategy.into(),
            response: response.into(),
        }
    }
}

/// Scores a response as the fraction of expected keywords it contains.
///
/// Matching is case-insensitive. An empty keyword list scores zero rather
/// than dividing by zero.
pub fn score_response(response: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let haystack = response.to_lowercase();
    let hits = keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .count();
    hits as f64 / keywords.len() as f64
}

/// Normalizes a question into a CSV row key: lowercase, spaces to
/// underscores, question marks dropped.
fn normalize_question(question: &str) -> String {
    question.to_lowercase().replace(' ', "_").replace('?', "")
}

/// Writes the comparison report to `path`.
///
/// `expected_keywords` maps each question to the keywords its answers are
/// scored against; questions without an entry score zero. Averages and the
/// best strategy are computed from the same scores that appear in the
/// per-question rows.
pub fn write_comparison_report<P: AsRef<Path>>(
    path: P,
    questions: &[String],
    results: &[StrategyResponse],
    expected_keywords: &HashMap<String, Vec<String>>,
) -> Result<()> {
    let file = File::create(path.as_ref())
        .map_err(|err| Error::io("failed to create report file", err))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Prompt Engineering Results")?;
    writeln!(out)?;

    for question in questions {
        writeln!(out, "## Question: {}", question)?;
        writeln!(out)?;
        for strategy in STRATEGIES {
            writeln!(out, "### {} response:", strategy)?;
            let entry = results
                .iter()
                .find(|r| &r.question == question && r.strategy == strategy);
            match entry {
                Some(entry) => writeln!(out, "{}", entry.response)?,
                None => writeln!(out, "[Response not found]")?,
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "--------------------------------------------------")?;
    writeln!(out)?;
    writeln!(out, "## Scores")?;
    writeln!(out)?;
    writeln!(out, "```")?;
    writeln!(out, "question,zero_shot,one_shot,few_shot")?;

    let no_keywords = Vec::new();
    let mut strategy_totals = [0.0f64; STRATEGIES.len()];
    for question in questions {
        let keywords = expected_keywords.get(question).unwrap_or(&no_keywords);
        let mut row_scores = [0.0f64; STRATEGIES.len()];
        for (i, strategy) in STRATEGIES.iter().enumerate() {
            let score = results
                .iter()
                .find(|r| &r.question == question && &r.strategy == strategy)
                .map(|r| score_response(&r.response, keywords))
                .unwrap_or(0.0);
            row_scores[i] = score;
            strategy_totals[i] += score;
        }
        writeln!(
            out,
            "{},{:.2},{:.2},{:.2}",
            normalize_question(question),
            row_scores[0],
            row_scores[1],
            row_scores[2]
        )?;
    }

    let question_count = questions.len().max(1) as f64;
    let averages: Vec<f64> = strategy_totals
        .iter()
        .map(|total| total / question_count)
        .collect();
    writeln!(
        out,
        "\naverage,{:.2},{:.2},{:.2}",
        averages[0], averages[1], averages[2]
    )?;

    let best = STRATEGIES
        .iter()
        .zip(averages.iter())
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(strategy, _)| *strategy)
        .unwrap_or(STRATEGIES[0]);
    writeln!(out, "best_method,{}", best)?;
    writeln!(out, "```")?;

    out.flush()?;
    Ok(())
}
