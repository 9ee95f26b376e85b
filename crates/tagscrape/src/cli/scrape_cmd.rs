//! `tagscrape` run: acquire the page, extract with the prompt, write results.

use crate::acquisition::{HtmlSource, HttpClient, UserAgentProvider};
use crate::cli::args::ScrapeArgs;
use crate::cli::output::{self, Styled};
use crate::error::ScrapeError;
use crate::extraction::{extract_text, PresetPrompt, PromptError, SelectorPrompt};
use crate::results::{write_lines, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Values were written to `path`.
    Saved { path: PathBuf, count: usize },
    /// The operator cancelled at the selector prompt. Nothing was written.
    Cancelled,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub source: HtmlSource,
    pub output: PathBuf,
    pub user_agents: UserAgentProvider,
    pub timeout: Option<Duration>,
    pub preset_selector: Option<String>,
}

impl ScrapeRequest {
    /// A request with the default output file, side file, and no timeout.
    pub fn new(source: HtmlSource) -> Self {
        Self {
            source,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            user_agents: UserAgentProvider::default(),
            timeout: None,
            preset_selector: None,
        }
    }

    pub fn from_args(args: &ScrapeArgs) -> Result<Self, ScrapeError> {
        let source = HtmlSource::from_flags(args.site.clone(), args.file.clone())?;
        Ok(Self {
            source,
            output: args.output.clone(),
            user_agents: UserAgentProvider::new(&args.user_agent_file),
            timeout: args.timeout.map(Duration::from_secs),
            preset_selector: args.selector.clone(),
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_user_agents(mut self, user_agents: UserAgentProvider) -> Self {
        self.user_agents = user_agents;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_preset_selector(mut self, selector: impl Into<String>) -> Self {
        self.preset_selector = Some(selector.into());
        self
    }
}

/// Drive one run to completion.
///
/// Fetch, read, and write failures end the run with an error and no output.
/// Cancellation at the prompt is reported as [`ScrapeOutcome::Cancelled`].
pub async fn run<P>(request: &ScrapeRequest, prompt: &mut P) -> Result<ScrapeOutcome, ScrapeError>
where
    P: SelectorPrompt + ?Sized,
{
    let s = Styled::new();
    let client = HttpClient::new(request.timeout)?;

    match &request.source {
        HtmlSource::Site(_) => {
            output::print_ok(&format!("Requesting page {}", s.bold(&request.source.describe())))
        }
        HtmlSource::File(_) => output::print_ok(&format!(
            "Getting content from file {}",
            s.bold(&request.source.describe())
        )),
    }

    let mut session = request.source.acquire(&client, &request.user_agents).await?;

    match &request.source {
        HtmlSource::Site(_) => {
            if session.user_agent.is_none() {
                output::print_warn(&format!(
                    "User agent not found in {}. Using default user agent.",
                    request.user_agents.path().display()
                ));
            }
            output::print_ok("Page returned.");
        }
        HtmlSource::File(_) => output::print_ok("File content got."),
    }

    let mut prompt = PresetPrompt::new(request.preset_selector.clone(), prompt);
    session.values = match extract_text(&session.html, &mut prompt) {
        Ok(values) => values,
        Err(PromptError::Cancelled) => {
            info!("selection cancelled, nothing written");
            return Ok(ScrapeOutcome::Cancelled);
        }
        Err(PromptError::Input(source)) => return Err(ScrapeError::Prompt(source)),
    };

    output::print_ok(&format!(
        "Writing the contents to file {}",
        s.bold(&request.output.display().to_string())
    ));
    write_lines(&request.output, &session.values)?;
    output::print_ok("Writing completed.");

    Ok(ScrapeOutcome::Saved {
        path: request.output.clone(),
        count: session.values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ScriptedPrompt;
    use clap::Parser;

    #[test]
    fn test_from_args_maps_flags() {
        let args = ScrapeArgs::try_parse_from([
            "tagscrape",
            "-g",
            "example.com",
            "-o",
            "out.txt",
            "-s",
            "h1",
            "--timeout",
            "5",
            "--user-agent-file",
            "ua.txt",
        ])
        .unwrap();

        let request = ScrapeRequest::from_args(&args).unwrap();
        assert_eq!(request.source, HtmlSource::Site("example.com".into()));
        assert_eq!(request.output, PathBuf::from("out.txt"));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
        assert_eq!(request.preset_selector.as_deref(), Some("h1"));
        assert_eq!(request.user_agents.path(), std::path::Path::new("ua.txt"));
    }

    #[test]
    fn test_from_args_requires_one_source() {
        let args = ScrapeArgs::try_parse_from(["tagscrape"]).unwrap();
        let err = ScrapeRequest::from_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let args =
            ScrapeArgs::try_parse_from(["tagscrape", "-g", "a.com", "-f", "a.html"]).unwrap();
        assert!(matches!(
            ScrapeRequest::from_args(&args),
            Err(ScrapeError::Usage(_))
        ));
    }

    #[tokio::test]
    async fn test_run_preset_selector_skips_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        let out = dir.path().join("out.txt");
        std::fs::write(&page, "<h1>Heading</h1>").unwrap();

        let request = ScrapeRequest::new(HtmlSource::File(page))
            .with_output(&out)
            .with_preset_selector("h1");
        let mut prompt = ScriptedPrompt::default();

        let outcome = run(&request, &mut prompt).await.unwrap();
        assert_eq!(
            outcome,
            ScrapeOutcome::Saved {
                path: out.clone(),
                count: 1
            }
        );
        assert_eq!(prompt.prompts(), 0);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Heading\n");
    }

    #[tokio::test]
    async fn test_run_preset_miss_falls_back_to_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        let out = dir.path().join("out.txt");
        std::fs::write(&page, "<p>one</p>").unwrap();

        let request = ScrapeRequest::new(HtmlSource::File(page))
            .with_output(&out)
            .with_preset_selector("h1");
        let mut prompt = ScriptedPrompt::new(["p"]);

        run(&request, &mut prompt).await.unwrap();
        assert_eq!(prompt.prompts(), 1);
        assert_eq!(prompt.retries().len(), 1);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "one\n");
    }
}
