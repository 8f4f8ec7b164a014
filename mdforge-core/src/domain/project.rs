//! Project and profile metadata collected from the user

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A social account listed on a GitHub profile README
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    /// Account kind, e.g. GitHub, Twitter, LinkedIn
    #[serde(rename = "type")]
    #[schema(example = "LinkedIn")]
    pub kind: String,
    #[schema(example = "https://www.linkedin.com/in/octocat")]
    pub url: String,
}

impl SocialLink {
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
        }
    }
}

/// Which kind of README is being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// README for a software project
    Project,
    /// README for a personal GitHub profile
    Profile,
}

/// Structured input describing a project or a GitHub profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[schema(example = "Foo")]
    pub name: String,
    #[schema(example = "A tool")]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// Required field missing from a [`ProjectInfo`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectInfoError {
    #[error("name is required")]
    MissingName,
    #[error("description is required")]
    MissingDescription,
    #[error("at least one feature is required")]
    MissingFeatures,
    #[error("at least one tech stack entry is required")]
    MissingTechStack,
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .collect()
}

impl ProjectInfo {
    pub fn project(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn profile(
        name: impl Into<String>,
        description: impl Into<String>,
        github_username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            github_username: Some(github_username.into()),
            ..Default::default()
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech_stack.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_social_link(mut self, link: SocialLink) -> Self {
        self.social_links.push(link);
        self
    }

    /// Trimmed GitHub handle, if one was given
    pub fn github_handle(&self) -> Option<&str> {
        self.github_username
            .as_deref()
            .map(str::trim)
            .filter(|handle| !handle.is_empty())
    }

    /// Profile mode is selected solely by a non-empty GitHub handle
    pub fn mode(&self) -> GenerationMode {
        if self.github_handle().is_some() {
            GenerationMode::Profile
        } else {
            GenerationMode::Project
        }
    }

    pub fn filtered_features(&self) -> Vec<&str> {
        non_blank(&self.features)
    }

    pub fn filtered_tech_stack(&self) -> Vec<&str> {
        non_blank(&self.tech_stack)
    }

    /// Social links whose URL is not blank, in input order
    pub fn filtered_social_links(&self) -> Vec<&SocialLink> {
        self.social_links
            .iter()
            .filter(|link| !link.url.trim().is_empty())
            .collect()
    }

    /// Check the required fields for the active mode.
    pub fn validate(&self) -> Result<(), ProjectInfoError> {
        if self.name.trim().is_empty() {
            return Err(ProjectInfoError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ProjectInfoError::MissingDescription);
        }
        if self.mode() == GenerationMode::Project {
            if self.filtered_features().is_empty() {
                return Err(ProjectInfoError::MissingFeatures);
            }
            if self.filtered_tech_stack().is_empty() {
                return Err(ProjectInfoError::MissingTechStack);
            }
        }
        Ok(())
    }
}

/// One generation call: the selected template plus the user's metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub template_content: String,
    pub project_info: ProjectInfo,
}

impl GenerationRequest {
    pub fn new(template_content: impl Into<String>, project_info: ProjectInfo) -> Self {
        Self {
            template_content: template_content.into(),
            project_info,
        }
    }
}
