//! Create-project form state and its validation schema.
//!
//! The form has two shapes selected by [`SbomMode`]: a repository URL the
//! backend extracts an SBOM from, or an uploaded SBOM JSON document. Only
//! the fields of the active mode are validated or submitted.

use url::Url;

use crate::models::NewProject;

pub const PROJECT_NAME_MIN_CHARS: usize = 3;

pub const PROJECT_NAME_ERROR: &str = "Project name must be at least 3 characters.";
pub const REPO_URL_ERROR: &str = "Provide valid repository url.";
pub const SBOM_FILE_ERROR: &str = "Select valid JSON files.";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SbomMode {
    #[default]
    Url,
    File,
}

impl SbomMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::File => "file",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "url" => Some(Self::Url),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CreateProjectForm {
    pub project_name: String,
    pub mode: SbomMode,
    pub repo_url: String,
    /// Raw content of the selected SBOM file
    pub sbom_json_file: Option<String>,
}

impl CreateProjectForm {
    /// Switches mode and drops whatever the other mode had collected.
    pub fn set_mode(&mut self, mode: SbomMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            SbomMode::Url => self.sbom_json_file = None,
            SbomMode::File => self.repo_url.clear(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormErrors {
    pub project_name: Option<String>,
    pub repo_url: Option<String>,
    pub sbom_json_file: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none() && self.repo_url.is_none() && self.sbom_json_file.is_none()
    }

    /// Clears errors belonging to fields of the inactive mode.
    pub fn retain_mode(&mut self, mode: SbomMode) {
        match mode {
            SbomMode::Url => self.sbom_json_file = None,
            SbomMode::File => self.repo_url = None,
        }
    }
}

pub fn validate(form: &CreateProjectForm) -> Result<NewProject, FormErrors> {
    let mut errors = FormErrors::default();

    let title = form.project_name.trim();
    if title.chars().count() < PROJECT_NAME_MIN_CHARS {
        errors.project_name = Some(PROJECT_NAME_ERROR.to_string());
    }

    let mut repo_url = None;
    let mut sbom = None;
    match form.mode {
        SbomMode::Url => match parse_repo_url(&form.repo_url) {
            Some(url) => repo_url = Some(url),
            None => errors.repo_url = Some(REPO_URL_ERROR.to_string()),
        },
        SbomMode::File => match form
            .sbom_json_file
            .as_deref()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(content).ok())
        {
            Some(document) => sbom = Some(document),
            None => errors.sbom_json_file = Some(SBOM_FILE_ERROR.to_string()),
        },
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let description = match &repo_url {
        Some(url) => format!("SBOM extracted from {url}"),
        None => "SBOM uploaded from a JSON file".to_string(),
    };

    Ok(NewProject {
        title: title.to_string(),
        description,
        repo_url,
        sbom,
    })
}

fn parse_repo_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_form(name: &str, url: &str) -> CreateProjectForm {
        CreateProjectForm {
            project_name: name.to_string(),
            repo_url: url.to_string(),
            ..CreateProjectForm::default()
        }
    }

    #[test]
    fn accepts_url_mode_project() {
        let project = validate(&url_form("  api-gateway ", "https://github.com/acme/api")).unwrap();
        assert_eq!(project.title, "api-gateway");
        assert_eq!(project.repo_url.as_deref(), Some("https://github.com/acme/api"));
        assert_eq!(project.sbom, None);
        assert!(project.description.contains("github.com/acme/api"));
    }

    #[test]
    fn rejects_short_name_and_bad_url_together() {
        let errors = validate(&url_form("ab", "not a url")).unwrap_err();
        assert_eq!(errors.project_name.as_deref(), Some(PROJECT_NAME_ERROR));
        assert_eq!(errors.repo_url.as_deref(), Some(REPO_URL_ERROR));
        assert_eq!(errors.sbom_json_file, None);
    }

    #[test]
    fn rejects_non_http_schemes() {
        let errors = validate(&url_form("project", "ftp://example.com/repo")).unwrap_err();
        assert_eq!(errors.repo_url.as_deref(), Some(REPO_URL_ERROR));
        assert!(errors.project_name.is_none());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(validate(&url_form("äöü", "https://example.com")).is_ok());
        assert!(validate(&url_form("äö", "https://example.com")).is_err());
    }

    #[test]
    fn file_mode_requires_json_content() {
        let mut form = url_form("sbom-upload", "");
        form.set_mode(SbomMode::File);

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.sbom_json_file.as_deref(), Some(SBOM_FILE_ERROR));
        assert_eq!(errors.repo_url, None);

        form.sbom_json_file = Some("{not json".to_string());
        assert!(validate(&form).is_err());

        form.sbom_json_file = Some(r#"{"bomFormat": "CycloneDX", "components": []}"#.to_string());
        let project = validate(&form).unwrap();
        assert_eq!(project.repo_url, None);
        assert_eq!(project.sbom.unwrap()["bomFormat"], "CycloneDX");
    }

    #[test]
    fn switching_mode_drops_other_mode_value() {
        let mut form = url_form("project", "https://example.com");
        form.set_mode(SbomMode::File);
        assert!(form.repo_url.is_empty());

        form.sbom_json_file = Some("{}".to_string());
        form.set_mode(SbomMode::Url);
        assert_eq!(form.sbom_json_file, None);

        let mut errors = FormErrors {
            repo_url: Some(REPO_URL_ERROR.to_string()),
            sbom_json_file: Some(SBOM_FILE_ERROR.to_string()),
            ..FormErrors::default()
        };
        errors.retain_mode(SbomMode::File);
        assert_eq!(errors.repo_url, None);
        assert!(errors.sbom_json_file.is_some());
    }

    #[test]
    fn mode_round_trips_through_radio_values() {
        assert_eq!(SbomMode::parse(SbomMode::File.as_str()), Some(SbomMode::File));
        assert_eq!(SbomMode::parse("zip"), None);
    }
}
