// Prompt templates for Gemini-enhanced resume content.
// Placeholders are replaced with `str::replace` before sending.

/// Bullet prompt. Replace `{job_title}` and `{company}`.
pub const JOB_BULLETS_PROMPT_TEMPLATE: &str = "Generate 3-4 professional bullet points for a \
    {job_title} position at {company}. Each bullet point should be 1-2 sentences and highlight \
    key responsibilities and achievements. Put each bullet on its own line, starting with '- '. \
    Return only the bullet points.";

/// Summary prompt. Replace `{name}` and `{target_role}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "Write a two-sentence professional resume summary for \
    {name}, an experienced {target_role}. Write in resume style without pronouns, \
    plain text only, no headings, no markdown.";

pub fn job_bullets_prompt(job_title: &str, company: &str) -> String {
    JOB_BULLETS_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{company}", company)
}

pub fn summary_prompt(name: &str, target_role: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{target_role}", target_role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_bullets_prompt_fills_placeholders() {
        let prompt = job_bullets_prompt("Data Scientist", "TechCorp");
        assert!(prompt.contains("Data Scientist position at TechCorp"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_summary_prompt_fills_placeholders() {
        let prompt = summary_prompt("Riley Lee", "Cloud Architect");
        assert!(prompt.contains("Riley Lee"));
        assert!(prompt.contains("Cloud Architect"));
        assert!(!prompt.contains('{'));
    }
}
