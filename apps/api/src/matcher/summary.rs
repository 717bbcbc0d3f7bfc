//! Summary and rating generation — formats the stored prompt templates,
//! calls the chat agent, and post-processes the rating reply into a number
//! inside the configured range.

use crate::agent::{AgentError, ChatAgent, ChatReply};
use crate::engine::normalize::RatingRange;
use crate::prompts::{PromptStore, PromptType};

/// Generates the fit summary for one CV against the vacancy.
pub async fn generate_summary(
    agent: &dyn ChatAgent,
    prompts: &PromptStore,
    vacancy_description: &str,
    cv_content: &str,
) -> Result<ChatReply, AgentError> {
    let system = prompts.get(PromptType::SummarySystem);
    let user = render_template(
        &prompts.get(PromptType::SummaryUser),
        vacancy_description,
        cv_content,
    );
    agent.complete(&system, &user).await
}

/// Generates the numeric rating for one CV against the vacancy.
///
/// The raw reply is free text; [`extract_rating`] turns it into a rating
/// clamped into `range`.
pub async fn generate_rating(
    agent: &dyn ChatAgent,
    prompts: &PromptStore,
    vacancy_description: &str,
    cv_content: &str,
    range: RatingRange,
) -> Result<(f64, ChatReply), AgentError> {
    let system = prompts.get(PromptType::RatingSystem);
    let user = render_template(
        &prompts.get(PromptType::RatingUser),
        vacancy_description,
        cv_content,
    );
    let reply = agent.complete(&system, &user).await?;
    let rating = extract_rating(&reply.content, range);
    Ok((rating, reply))
}

/// Substitutes the `{vacancy_description}` and `{cv_content}` placeholders.
fn render_template(template: &str, vacancy_description: &str, cv_content: &str) -> String {
    template
        .replace("{vacancy_description}", vacancy_description)
        .replace("{cv_content}", cv_content)
}

/// Pulls a rating out of a free-text agent reply.
///
/// Strips everything but digits, parses, and clamps into the range. An
/// unparseable reply degrades to the range minimum rather than failing.
pub fn extract_rating(content: &str, range: RatingRange) -> f64 {
    let digits: String = content.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<f64>()
        .map(|rating| range.clamp(rating))
        .unwrap_or(range.min)
}
