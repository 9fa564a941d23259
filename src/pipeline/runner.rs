// file: src/pipeline/runner.rs
// description: searches every taxonomy line and writes the extracted texts in input order
// reference: orchestrates the read, search, extract and write workflow

use crate::config::{Config, FailurePolicy};
use crate::error::{PipelineError, Result};
use crate::exporter::JsonLinesWriter;
use crate::extractor::PassageExtractor;
use crate::models::{ExtractedTexts, Term};
use crate::pipeline::progress::{ProgressTracker, RunStats};
use crate::search::{SearchBackend, YandexClient};
use crate::taxonomy::TaxonomyReader;
use crate::utils::Validator;
use futures::stream::{self, StreamExt};
use std::path::Path;
use tracing::{debug, error, info, warn};

pub struct Extractor<B> {
    config: Config,
    backend: B,
    parser: PassageExtractor,
}

impl Extractor<YandexClient> {
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let backend = YandexClient::new(config.credentials.clone(), &config.search)?;
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: SearchBackend> Extractor<B> {
    pub fn with_backend(config: Config, backend: B) -> Self {
        let parser = PassageExtractor::new(config.search.language_filter());
        Self {
            config,
            backend,
            parser,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Searches one term and extracts its fragments. Blank terms short-circuit
    /// to an empty list without a request.
    pub async fn process(&self, term: &Term) -> Result<ExtractedTexts> {
        if term.is_blank() {
            debug!("Line {} is blank, skipping search", term.line);
            return Ok(ExtractedTexts::new());
        }

        let result = self.backend.search(&term.query()).await?;
        self.parser.extract(&result)
    }

    /// Writes exactly one output line per input line. Under
    /// [`FailurePolicy::Skip`] a failed term becomes `[]`; under
    /// [`FailurePolicy::Abort`] the lines before it are flushed and the run
    /// stops with [`PipelineError::TermFailed`].
    pub async fn run(&self, input: &Path, output: &Path) -> Result<RunStats> {
        Validator::validate_input_file(input)?;
        Validator::validate_output_path(output)?;
        Validator::validate_distinct_paths(input, output)?;

        let terms = TaxonomyReader::read(input)?;
        let mut writer = JsonLinesWriter::create(output)?;

        info!("Searching Yandex for lines of {}", input.display());

        let policy = self.config.pipeline.failure_policy;
        let interval = self.config.pipeline.progress_interval;
        let workers = self.config.pipeline.workers.max(1);
        let progress = ProgressTracker::new(terms.len(), self.config.pipeline.show_progress);

        if workers > 1 {
            info!("Running up to {} searches concurrently", workers);
        }

        let this = self;
        let mut outcomes = stream::iter(terms.iter())
            .map(move |term| async move { (term, this.process(term).await) })
            .buffered(workers);

        while let Some((term, outcome)) = outcomes.next().await {
            let texts = match outcome {
                Ok(texts) => {
                    if term.is_blank() {
                        progress.inc_blank();
                    } else {
                        progress.inc_processed(texts.len());
                    }
                    texts
                }
                Err(e) if e.is_term_failure() && policy == FailurePolicy::Skip => {
                    warn!("Search for line {} ({:?}) failed: {}", term.line, term.raw, e);
                    progress.inc_failed();
                    ExtractedTexts::new()
                }
                Err(e) => {
                    error!("An error occurred at line {}: {}", term.line, e);
                    writer.flush()?;
                    progress.abandon(format!("Stopped at line {}", term.line));
                    return Err(PipelineError::TermFailed {
                        line: term.line,
                        source: Box::new(e),
                    });
                }
            };

            writer.write(&texts)?;

            if interval > 0 && writer.lines_written() % interval == 0 {
                info!("Processed {} lines", writer.lines_written());
            }
        }

        let lines = writer.finish()?;
        progress.finish();

        let stats = progress.get_stats();
        debug_assert_eq!(lines, stats.lines_written());
        self.log_final_stats(&stats);

        Ok(stats)
    }

    fn log_final_stats(&self, stats: &RunStats) {
        info!("=== Run Summary ===");
        info!("Duration: {:.2} seconds", stats.duration_secs);
        info!("Lines written: {}", stats.lines_written());
        info!("Terms searched: {}", stats.terms_processed + stats.terms_failed);
        info!("Terms failed: {}", stats.terms_failed);
        info!("Blank lines: {}", stats.terms_blank);
        info!("Success rate: {:.2}%", stats.success_rate());
        info!("Fragments extracted: {}", stats.fragments_extracted);
        info!("Speed: {:.2} lines/sec", stats.terms_per_second());
        info!("===================");
    }
}
