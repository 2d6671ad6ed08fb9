//! Project onboarding domain rules.
//!
//! Validates a submitted onboarding form, applies field defaults, derives
//! the sonar project key, and defines the standard secret set every
//! onboarded project receives. Everything here is a pure function of its
//! input; persistence happens in `devsecops-db`.

use serde::Deserialize;
use url::Url;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Branch used when none is supplied.
pub const DEFAULT_MAIN_BRANCH: &str = "main";
/// Node.js version used when none is supplied.
pub const DEFAULT_NODE_VERSION: &str = "18.17.1";
/// Dockerfile path used when none is supplied.
pub const DEFAULT_DOCKER_FILE_PATH: &str = "Dockerfile";
/// Build command used when none is supplied.
pub const DEFAULT_BUILD_COMMAND: &str = "npm run build";
/// Test command used when none is supplied.
pub const DEFAULT_TEST_COMMAND: &str = "npm test";
/// Sonar organization used when none is supplied.
pub const DEFAULT_SONAR_ORGANIZATION: &str = "default-org";

// ---------------------------------------------------------------------------
// Standard secrets
// ---------------------------------------------------------------------------

pub const SECRET_SONAR_TOKEN: &str = "SONAR_TOKEN";
pub const SECRET_STAGING_SSH_KEY: &str = "STAGING_SSH_KEY";
pub const SECRET_STAGING_USER: &str = "STAGING_USER";
pub const SECRET_STAGING_HOST: &str = "STAGING_HOST";
pub const SECRET_NOTIFICATION_WEBHOOK: &str = "NOTIFICATION_WEBHOOK";

/// Names of the five secrets every project requires by default.
pub const STANDARD_SECRET_NAMES: &[&str] = &[
    SECRET_SONAR_TOKEN,
    SECRET_STAGING_SSH_KEY,
    SECRET_STAGING_USER,
    SECRET_STAGING_HOST,
    SECRET_NOTIFICATION_WEBHOOK,
];

/// One standard secret requirement, ready for insertion.
#[derive(Debug, Clone)]
pub struct SecretSpec {
    pub name: &'static str,
    pub description: String,
    pub required: bool,
}

/// The standard secret set for a project.
///
/// `NOTIFICATION_WEBHOOK` is only required when the submission supplied a
/// notification endpoint; the other four are always required.
pub fn standard_secrets(staging_server_address: &str, has_notification: bool) -> Vec<SecretSpec> {
    vec![
        SecretSpec {
            name: SECRET_SONAR_TOKEN,
            description:
                "Token for SonarCloud authentication. Obtain from your SonarCloud account."
                    .to_string(),
            required: true,
        },
        SecretSpec {
            name: SECRET_STAGING_SSH_KEY,
            description:
                "The content of your SSH private key file for accessing the staging server."
                    .to_string(),
            required: true,
        },
        SecretSpec {
            name: SECRET_STAGING_USER,
            description: "Username for SSH access to the staging server.".to_string(),
            required: true,
        },
        SecretSpec {
            name: SECRET_STAGING_HOST,
            description: format!(
                "Hostname or IP address of your staging server (e.g., {staging_server_address})."
            ),
            required: true,
        },
        SecretSpec {
            name: SECRET_NOTIFICATION_WEBHOOK,
            description:
                "Webhook URL for sending pipeline notifications (e.g., Slack, Teams).".to_string(),
            required: has_notification,
        },
    ]
}

// ---------------------------------------------------------------------------
// Submission types
// ---------------------------------------------------------------------------

/// A port value as submitted: HTML forms post strings, API clients post
/// numbers, so both are accepted and validated the same way.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortNumber {
    Number(i64),
    Text(String),
}

impl PortNumber {
    /// The validated port, if this value converts to an integer in [1, 65535].
    pub fn as_port(&self) -> Option<u16> {
        let n = match self {
            PortNumber::Number(n) => *n,
            PortNumber::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        u16::try_from(n).ok().filter(|p| *p >= 1)
    }
}

/// One custom secret descriptor from the submission form.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomSecretInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The raw onboarding form submission.
///
/// Every field is optional at this level; [`validate`] decides which are
/// actually required and reports all problems together.
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingSubmission {
    pub project_name: Option<String>,
    pub repository_url: Option<String>,
    pub main_branch: Option<String>,
    pub node_version: Option<String>,
    pub docker_file_path: Option<String>,
    pub build_command: Option<String>,
    pub test_command: Option<String>,
    pub port_number: Option<PortNumber>,
    pub staging_server_address: Option<String>,
    pub sonar_project_key: Option<String>,
    pub sonar_organization: Option<String>,
    pub notification_endpoint: Option<String>,
    #[serde(default)]
    pub custom_secrets: Vec<CustomSecretInput>,
}

/// A validated, normalized project ready for persistence.
///
/// All defaults have been applied and the custom secret list is filtered
/// down to entries with a non-blank name.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub project_name: String,
    pub repository_url: String,
    pub main_branch: String,
    pub node_version: String,
    pub docker_file_path: String,
    pub build_command: String,
    pub test_command: String,
    pub port_number: u16,
    pub staging_server_address: String,
    pub sonar_project_key: String,
    pub sonar_organization: String,
    pub notification_endpoint: Option<String>,
    pub custom_secrets: Vec<NewCustomSecret>,
}

/// A filtered custom secret: trimmed non-empty name, description defaulted
/// to the empty string.
#[derive(Debug, Clone)]
pub struct NewCustomSecret {
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a submission, reporting every failing rule.
///
/// On success returns the normalized [`NewProject`]; on failure returns the
/// full ordered list of human-readable error messages. Pure function, no
/// side effects.
pub fn validate(submission: &OnboardingSubmission) -> Result<NewProject, Vec<String>> {
    let mut errors = Vec::new();

    let project_name = submission.project_name.as_deref().unwrap_or("");
    if project_name.trim().is_empty() {
        errors.push("Project name is required.".to_string());
    }

    let repository_url = submission.repository_url.as_deref().unwrap_or("");
    if repository_url.trim().is_empty() {
        errors.push("Repository URL is required.".to_string());
    } else if !is_well_formed_url(repository_url) {
        errors.push("Invalid repository URL format.".to_string());
    }

    let staging_server_address = submission.staging_server_address.as_deref().unwrap_or("");
    if staging_server_address.trim().is_empty() {
        errors.push("Staging server address is required.".to_string());
    }

    let port = submission.port_number.as_ref().and_then(PortNumber::as_port);
    if port.is_none() {
        errors.push("Application port must be a number between 1 and 65535.".to_string());
    }

    if matches!(&submission.main_branch, Some(b) if b.trim().is_empty()) {
        errors.push("Main branch cannot be empty if provided.".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    let Some(port_number) = port else {
        // Guarded above: a missing or invalid port always records an error.
        return Err(vec![
            "Application port must be a number between 1 and 65535.".to_string(),
        ]);
    };

    let sonar_project_key = match submission.sonar_project_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => derive_sonar_project_key(project_name),
    };

    let notification_endpoint = submission
        .notification_endpoint
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    let custom_secrets = submission
        .custom_secrets
        .iter()
        .filter_map(|secret| {
            let name = secret.name.as_deref().unwrap_or("").trim();
            if name.is_empty() {
                return None;
            }
            Some(NewCustomSecret {
                name: name.to_string(),
                description: secret.description.clone().unwrap_or_default(),
            })
        })
        .collect();

    Ok(NewProject {
        project_name: project_name.to_string(),
        repository_url: repository_url.to_string(),
        main_branch: or_default(submission.main_branch.as_deref(), DEFAULT_MAIN_BRANCH),
        node_version: or_default(submission.node_version.as_deref(), DEFAULT_NODE_VERSION),
        docker_file_path: or_default(
            submission.docker_file_path.as_deref(),
            DEFAULT_DOCKER_FILE_PATH,
        ),
        build_command: or_default(submission.build_command.as_deref(), DEFAULT_BUILD_COMMAND),
        test_command: or_default(submission.test_command.as_deref(), DEFAULT_TEST_COMMAND),
        port_number,
        staging_server_address: staging_server_address.to_string(),
        sonar_project_key,
        sonar_organization: or_default(
            submission.sonar_organization.as_deref(),
            DEFAULT_SONAR_ORGANIZATION,
        ),
        notification_endpoint,
        custom_secrets,
    })
}

/// Derive the sonar project key from the project name: trim, lowercase,
/// replace every character outside `[a-z0-9_.-]` with `_`, then append
/// `_sonarkey`.
pub fn derive_sonar_project_key(project_name: &str) -> String {
    let mut key: String = project_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    key.push_str("_sonarkey");
    key
}

/// A URL is well-formed when it parses with a scheme and has a host.
fn is_well_formed_url(value: &str) -> bool {
    Url::parse(value).map(|u| u.has_host()).unwrap_or(false)
}

/// The submitted value, or `default` when absent or blank.
fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn full_submission() -> OnboardingSubmission {
        OnboardingSubmission {
            project_name: Some("Demo App".to_string()),
            repository_url: Some("https://github.com/acme/demo-app".to_string()),
            main_branch: Some("develop".to_string()),
            node_version: Some("20.1.0".to_string()),
            docker_file_path: Some("docker/Dockerfile".to_string()),
            build_command: Some("npm run build:prod".to_string()),
            test_command: Some("npm run test:ci".to_string()),
            port_number: Some(PortNumber::Text("8080".to_string())),
            staging_server_address: Some("staging.acme.dev".to_string()),
            sonar_project_key: None,
            sonar_organization: None,
            notification_endpoint: None,
            custom_secrets: Vec::new(),
        }
    }

    #[test]
    fn full_submission_passes() {
        let project = validate(&full_submission()).unwrap();
        assert_eq!(project.project_name, "Demo App");
        assert_eq!(project.port_number, 8080);
        assert_eq!(project.main_branch, "develop");
    }

    #[test]
    fn missing_required_fields_all_reported() {
        let submission = OnboardingSubmission {
            project_name: None,
            repository_url: None,
            staging_server_address: None,
            ..full_submission()
        };
        let errors = validate(&submission).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Project name is required.",
                "Repository URL is required.",
                "Staging server address is required.",
            ]
        );
    }

    #[test]
    fn malformed_url_distinct_from_missing() {
        let submission = OnboardingSubmission {
            repository_url: Some("not a url".to_string()),
            ..full_submission()
        };
        let errors = validate(&submission).unwrap_err();
        assert_eq!(errors, vec!["Invalid repository URL format."]);
    }

    #[test]
    fn url_without_host_rejected() {
        let submission = OnboardingSubmission {
            repository_url: Some("mailto:dev@acme.dev".to_string()),
            ..full_submission()
        };
        assert!(validate(&submission).is_err());
    }

    #[test]
    fn port_range_boundaries() {
        for port in ["1", "5000", "65535"] {
            let submission = OnboardingSubmission {
                port_number: Some(PortNumber::Text(port.to_string())),
                ..full_submission()
            };
            assert!(validate(&submission).is_ok(), "port {port} should pass");
        }
        for port in ["0", "70000", "abc", "-1"] {
            let submission = OnboardingSubmission {
                port_number: Some(PortNumber::Text(port.to_string())),
                ..full_submission()
            };
            let errors = validate(&submission).unwrap_err();
            assert_eq!(
                errors,
                vec!["Application port must be a number between 1 and 65535."],
                "port {port} should fail"
            );
        }
    }

    #[test]
    fn missing_port_rejected() {
        let submission = OnboardingSubmission {
            port_number: None,
            ..full_submission()
        };
        assert!(validate(&submission).is_err());
    }

    #[test]
    fn numeric_port_accepted() {
        let submission = OnboardingSubmission {
            port_number: Some(PortNumber::Number(5000)),
            ..full_submission()
        };
        assert_eq!(validate(&submission).unwrap().port_number, 5000);
    }

    #[test]
    fn blank_main_branch_rejected_but_absent_defaults() {
        let blank = OnboardingSubmission {
            main_branch: Some("   ".to_string()),
            ..full_submission()
        };
        let errors = validate(&blank).unwrap_err();
        assert_eq!(errors, vec!["Main branch cannot be empty if provided."]);

        let absent = OnboardingSubmission {
            main_branch: None,
            ..full_submission()
        };
        assert_eq!(validate(&absent).unwrap().main_branch, "main");
    }

    #[test]
    fn defaults_applied_when_omitted() {
        let submission = OnboardingSubmission {
            node_version: None,
            docker_file_path: None,
            build_command: None,
            test_command: None,
            sonar_organization: None,
            ..full_submission()
        };
        let project = validate(&submission).unwrap();
        assert_eq!(project.node_version, "18.17.1");
        assert_eq!(project.docker_file_path, "Dockerfile");
        assert_eq!(project.build_command, "npm run build");
        assert_eq!(project.test_command, "npm test");
        assert_eq!(project.sonar_organization, "default-org");
    }

    #[test]
    fn sonar_key_derived_from_name() {
        assert_eq!(derive_sonar_project_key("My App!"), "my_app__sonarkey");
        assert_eq!(derive_sonar_project_key("demo-app"), "demo-app_sonarkey");
        assert_eq!(
            derive_sonar_project_key("  Spaced Out  "),
            "spaced_out_sonarkey"
        );
    }

    #[test]
    fn explicit_sonar_key_wins_over_derivation() {
        let submission = OnboardingSubmission {
            sonar_project_key: Some("custom_key".to_string()),
            ..full_submission()
        };
        assert_eq!(validate(&submission).unwrap().sonar_project_key, "custom_key");
    }

    #[test]
    fn blank_custom_secret_names_filtered() {
        let submission = OnboardingSubmission {
            custom_secrets: vec![
                CustomSecretInput {
                    name: Some("  API_KEY  ".to_string()),
                    description: None,
                },
                CustomSecretInput {
                    name: Some("   ".to_string()),
                    description: Some("ignored".to_string()),
                },
                CustomSecretInput {
                    name: None,
                    description: None,
                },
            ],
            ..full_submission()
        };
        let project = validate(&submission).unwrap();
        assert_eq!(project.custom_secrets.len(), 1);
        assert_eq!(project.custom_secrets[0].name, "API_KEY");
        assert_eq!(project.custom_secrets[0].description, "");
    }

    #[test]
    fn blank_notification_endpoint_treated_as_absent() {
        let submission = OnboardingSubmission {
            notification_endpoint: Some("  ".to_string()),
            ..full_submission()
        };
        assert!(validate(&submission).unwrap().notification_endpoint.is_none());
    }

    #[test]
    fn standard_secret_set_shape() {
        let secrets = standard_secrets("staging.acme.dev", false);
        let names: Vec<&str> = secrets.iter().map(|s| s.name).collect();
        assert_eq!(names, STANDARD_SECRET_NAMES);
        assert!(secrets[..4].iter().all(|s| s.required));
        assert!(!secrets[4].required);
        assert!(secrets[3].description.contains("staging.acme.dev"));

        let with_webhook = standard_secrets("staging.acme.dev", true);
        assert!(with_webhook[4].required);
    }

    #[test]
    fn port_deserializes_from_number_or_string() {
        let from_number: OnboardingSubmission =
            serde_json::from_value(serde_json::json!({ "port_number": 8080 })).unwrap();
        assert_eq!(from_number.port_number.unwrap().as_port(), Some(8080));

        let from_string: OnboardingSubmission =
            serde_json::from_value(serde_json::json!({ "port_number": "8080" })).unwrap();
        assert_eq!(from_string.port_number.unwrap().as_port(), Some(8080));
    }
}
