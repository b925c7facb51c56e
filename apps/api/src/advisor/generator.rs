//! Suggestion pipeline.
//!
//! Flow: aggregate_profile → build_prompt → LLM generate → format_suggestions.

use tracing::info;

use crate::advisor::markup::format_suggestions;
use crate::advisor::prompts::{SUGGESTION_PROMPT_TEMPLATE, SUGGESTION_SYSTEM};
use crate::errors::AppError;
use crate::github::aggregator::{aggregate_profile, ProfileBundle};
use crate::github::ProfileSource;
use crate::llm_client::TextGenerator;

/// Builds the suggestion prompt: the instruction template followed by the
/// bundle as pretty-printed JSON.
pub fn build_prompt(username: &str, bundle: &ProfileBundle) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(bundle)
        .map_err(|e| AppError::GenerationFailed(format!("Failed to serialize profile: {e}")))?;

    Ok(SUGGESTION_PROMPT_TEMPLATE
        .replace("{username}", username)
        .replace("{profile_json}", &profile_json))
}

/// Runs the full pipeline for one username and returns formatted suggestions.
pub async fn suggest_projects(
    profiles: &dyn ProfileSource,
    generator: &dyn TextGenerator,
    username: &str,
) -> Result<String, AppError> {
    let bundle = aggregate_profile(profiles, username).await?;
    let prompt = build_prompt(username, &bundle)?;

    info!("Requesting suggestions for {username}");
    let raw = generator
        .generate(&prompt, SUGGESTION_SYSTEM)
        .await
        .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

    Ok(format_suggestions(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{profile, repo, FakeGenerator, FakeProfileSource, ReadmeBehavior};

    #[test]
    fn test_prompt_embeds_username_and_bundle() {
        let bundle = ProfileBundle {
            profile: profile("Mona"),
            repos: vec![repo("spoon-knife", false)],
            readme: "Hi there".to_string(),
        };

        let prompt = build_prompt("mona", &bundle).unwrap();

        assert!(prompt.contains("GitHub profile for @mona and suggest 3-5"));
        assert!(prompt.contains("\"name\": \"spoon-knife\""));
        assert!(prompt.contains("\"readme\": \"Hi there\""));
        assert!(prompt.trim_end().ends_with('}'));
        assert!(!prompt.contains("{profile_json}"));
    }

    #[tokio::test]
    async fn test_pipeline_formats_generated_text() {
        let source = FakeProfileSource::new(Some(profile("Mona")), vec![repo("a", false)])
            .with_readme(ReadmeBehavior::Fails);
        let generator = FakeGenerator::replying("# Idea\n**CLI** tool\n\nmore");

        let out = suggest_projects(&source, generator.as_ref(), "mona")
            .await
            .unwrap();

        assert_eq!(out, "<b>Idea</b><br><b>CLI</b> tool<br>more");
        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("\"readme\": \"\""));
    }

    #[tokio::test]
    async fn test_generation_failure_maps_to_generation_failed() {
        let source = FakeProfileSource::new(Some(profile("Mona")), Vec::new());
        let generator = FakeGenerator::failing();

        let err = suggest_projects(&source, generator.as_ref(), "mona")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_profile_never_reaches_generator() {
        let source = FakeProfileSource::new(None, Vec::new());
        let generator = FakeGenerator::replying("unused");

        let err = suggest_projects(&source, generator.as_ref(), "ghost")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ProfileNotFound(_)));
        assert!(generator.last_prompt().is_none());
    }
}
