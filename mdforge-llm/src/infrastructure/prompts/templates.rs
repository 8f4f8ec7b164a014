use mdforge_core::domain::{GenerationMode, ProjectInfo};

pub const README_SYSTEM_PROMPT: &str = "You are a README generator that outputs only clean Markdown content based STRICTLY on the provided information. Do not make up additional details.";

pub const PROFILE_TASK_HEADER: &str =
    "TASK: Create a professional GitHub Profile README in Markdown.\n\n";

pub const PROJECT_TASK_HEADER: &str = "TASK: Create a professional Project README in Markdown.\n\n";

pub const GITHUB_REPOSITORIES_URL: &str = "https://github.com/{username}?tab=repositories";

pub const GITHUB_STATS_URL: &str =
    "https://github-readme-stats.vercel.app/api?username={username}&show_icons=true&theme=radical";

pub const GITHUB_TOP_LANGS_URL: &str = "https://github-readme-stats.vercel.app/api/top-langs/?username={username}&layout=compact&theme=radical";

pub const PROFILE_REPOSITORIES_SECTION: &str = r#"
IMPORTANT: Check this GitHub Profile and include REAL repositories:
GitHub Profile URL: {repositories_url}

- Visit this URL and look at the actual public repositories
- Include ONLY real repositories that exist on this profile, not generic placeholders
- Mention only programming languages actually used in these repositories
- Use these exact URLs for GitHub stats:
  * Stats: {stats_url}
  * Top languages: {top_langs_url}
"#;

pub const PROFILE_RESTRICTIONS: &str = r#"
RESTRICTIONS - DO NOT:
- DO NOT add country information (like "from Argentina 🇦🇷")
- DO NOT add personal details that are not explicitly provided
- DO NOT make up any information that is not provided or visible in the GitHub profile
- DO NOT include education, age, location, or any other biographical details unless explicitly stated
- STICK ONLY to the information provided and visible repositories
"#;

pub const PROJECT_RESTRICTIONS: &str = r#"
RESTRICTIONS - DO NOT:
- DO NOT add any information not explicitly provided above
- DO NOT make up features, technologies, or details
- STICK ONLY to the information provided
"#;

pub const FORMATTING_REQUIREMENTS: &str = r#"
FORMATTING REQUIREMENTS:
1. Output a well-formatted Markdown file
2. Use appropriate emojis to enhance readability
3. Include a clear header, sections with proper hierarchy
4. For GitHub profiles, include stats and top languages images
5. DO NOT include any made-up biographical information
"#;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the generation prompt for a project or profile README.
    ///
    /// User-supplied values are quoted verbatim; blank list entries are
    /// dropped and an empty list omits its section.
    pub fn build_prompt(info: &ProjectInfo) -> String {
        let mut prompt = match info.mode() {
            GenerationMode::Profile => Self::profile_section(info),
            GenerationMode::Project => Self::project_section(info),
        };
        prompt.push_str(FORMATTING_REQUIREMENTS);
        prompt
    }

    /// System instruction and prompt joined into one string, for endpoints
    /// that take plain text input.
    pub fn build_text_input(prompt: &str) -> String {
        format!("{}\n\n{}", README_SYSTEM_PROMPT, prompt)
    }

    fn profile_section(info: &ProjectInfo) -> String {
        let username = info.github_handle().unwrap_or_default();

        let mut prompt = String::from(PROFILE_TASK_HEADER);
        prompt.push_str("INSTRUCTIONS:\n");
        prompt.push_str(&format!(
            "- Create a complete GitHub profile README for {} (GitHub username: {})\n",
            info.name, username
        ));
        prompt.push_str(&format!(
            "- Use ONLY this description: \"{}\"\n",
            info.description
        ));

        let links = info.filtered_social_links();
        if !links.is_empty() {
            prompt.push_str("- Include ONLY these social links:\n");
            for link in links {
                prompt.push_str(&format!("  * {}: {}\n", link.kind, link.url));
            }
        }

        prompt.push_str(
            &PROFILE_REPOSITORIES_SECTION
                .replace("{repositories_url}", &Self::repositories_url(username))
                .replace("{stats_url}", &Self::stats_url(username))
                .replace("{top_langs_url}", &Self::top_langs_url(username)),
        );
        prompt.push_str(PROFILE_RESTRICTIONS);
        prompt
    }

    fn project_section(info: &ProjectInfo) -> String {
        let mut prompt = String::from(PROJECT_TASK_HEADER);
        prompt.push_str("INSTRUCTIONS:\n");
        prompt.push_str(&format!(
            "- Create a complete project README for \"{}\"\n",
            info.name
        ));
        prompt.push_str(&format!(
            "- Use ONLY this description: \"{}\"\n",
            info.description
        ));

        Self::push_list(&mut prompt, "- Include ONLY these features:\n", &info.filtered_features());
        Self::push_list(
            &mut prompt,
            "- Include ONLY this tech stack:\n",
            &info.filtered_tech_stack(),
        );

        prompt.push_str(PROJECT_RESTRICTIONS);
        prompt
    }

    fn push_list(prompt: &mut String, heading: &str, items: &[&str]) {
        if items.is_empty() {
            return;
        }
        prompt.push_str(heading);
        for item in items {
            prompt.push_str(&format!("  * {}\n", item));
        }
    }

    pub fn repositories_url(username: &str) -> String {
        GITHUB_REPOSITORIES_URL.replace("{username}", username)
    }

    pub fn stats_url(username: &str) -> String {
        GITHUB_STATS_URL.replace("{username}", username)
    }

    pub fn top_langs_url(username: &str) -> String {
        GITHUB_TOP_LANGS_URL.replace("{username}", username)
    }
}
