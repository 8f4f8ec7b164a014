//! Unit tests for prompt rendering

use mdforge_core::domain::{ProjectInfo, SocialLink};
use mdforge_llm::prompts::{
    FORMATTING_REQUIREMENTS, PROFILE_RESTRICTIONS, PROJECT_RESTRICTIONS, PromptBuilder,
    README_SYSTEM_PROMPT,
};

#[test]
fn test_project_prompt_lists_features_and_stack() {
    let info = ProjectInfo::project("Foo", "A tool")
        .with_features(["Fast", "", "Offline"])
        .with_tech_stack(["Rust", "   "]);

    let prompt = PromptBuilder::build_prompt(&info);

    assert!(prompt.starts_with("TASK: Create a professional Project README in Markdown."));
    assert!(prompt.contains("- Create a complete project README for \"Foo\""));
    assert!(prompt.contains("- Use ONLY this description: \"A tool\""));
    assert!(prompt.contains("- Include ONLY these features:\n  * Fast\n  * Offline\n"));
    assert!(prompt.contains("- Include ONLY this tech stack:\n  * Rust\n"));
    assert!(!prompt.contains("  * \n"));
    assert!(!prompt.contains("github-readme-stats.vercel.app"));
    assert!(!prompt.contains("?tab=repositories"));
    assert!(prompt.contains(PROJECT_RESTRICTIONS));
    assert!(prompt.ends_with(FORMATTING_REQUIREMENTS));
}

#[test]
fn test_project_prompt_omits_empty_lists() {
    let info = ProjectInfo::project("Foo", "A tool");
    let prompt = PromptBuilder::build_prompt(&info);

    assert!(!prompt.contains("features:"));
    assert!(!prompt.contains("tech stack:"));
}

#[test]
fn test_profile_prompt_embeds_github_urls() {
    let info = ProjectInfo::profile("Ada", "Engineer", " ada ")
        .with_social_link(SocialLink::new("Twitter", "https://twitter.com/ada"))
        .with_social_link(SocialLink::new("LinkedIn", ""));

    let prompt = PromptBuilder::build_prompt(&info);

    assert!(prompt.starts_with("TASK: Create a professional GitHub Profile README in Markdown."));
    assert!(prompt.contains("for Ada (GitHub username: ada)"));
    assert!(prompt.contains("https://github.com/ada?tab=repositories"));
    assert!(prompt.contains(
        "https://github-readme-stats.vercel.app/api?username=ada&show_icons=true&theme=radical"
    ));
    assert!(prompt.contains("api/top-langs/?username=ada&layout=compact&theme=radical"));
    assert!(prompt.contains("  * Twitter: https://twitter.com/ada\n"));
    assert!(!prompt.contains("LinkedIn"));
    assert!(prompt.contains(PROFILE_RESTRICTIONS));
}

#[test]
fn test_profile_prompt_ignores_project_lists() {
    let info = ProjectInfo::profile("Ada", "Engineer", "ada").with_features(["Secret feature"]);
    let prompt = PromptBuilder::build_prompt(&info);

    assert!(!prompt.contains("Secret feature"));
}

#[test]
fn test_prompt_is_deterministic() {
    let info = ProjectInfo::project("Foo", "A tool")
        .with_features(["Fast"])
        .with_tech_stack(["Rust"]);

    assert_eq!(PromptBuilder::build_prompt(&info), PromptBuilder::build_prompt(&info));
}

#[test]
fn test_text_input_prefixes_system_prompt() {
    let text = PromptBuilder::build_text_input("TASK: x");
    assert_eq!(text, format!("{}\n\nTASK: x", README_SYSTEM_PROMPT));
}
