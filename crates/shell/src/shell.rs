//! Application shell: owns the session and turns commands into output.

use std::fmt::Write as _;

use schoolhub_auth::{
    NavigationItem, PrincipalRegistry, Role, capabilities_for, explain_access, navigation_for,
    navigation_for_tag,
};
use schoolhub_session::{Session, SessionError, SessionStorage};

use crate::cli::Command;

/// Result of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    fn failed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

/// Top-level owner of the process-wide session.
pub struct Shell<S> {
    session: Session<S>,
}

impl<S: SessionStorage> Shell<S> {
    /// Take ownership of `session` and restore any persisted sign-in.
    pub fn start(session: Session<S>) -> Self {
        session.restore_session();
        Self { session }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub async fn execute(&self, command: Command) -> anyhow::Result<Outcome> {
        let outcome = match command {
            Command::Login { email, password } => {
                match self.session.authenticate(&email, &password).await {
                    Ok(p) => Outcome::ok(format!("signed in as {p}")),
                    Err(SessionError::Authentication) => Outcome::failed("invalid credentials"),
                    Err(err) => return Err(err.into()),
                }
            }

            Command::Logout => {
                self.session.logout()?;
                Outcome::ok("signed out")
            }

            Command::Whoami => match self.session.current_principal() {
                Some(p) => Outcome::ok(p.to_string()),
                None => Outcome::failed("not signed in"),
            },

            Command::Nav { role: Some(tag) } => {
                let items = navigation_for_tag(&tag);
                if items.is_empty() {
                    Outcome::failed(format!("no navigation items for '{tag}'"))
                } else {
                    Outcome::ok(render_navigation(items))
                }
            }

            Command::Nav { role: None } => match self.session.current_principal() {
                Some(p) => Outcome::ok(render_navigation(navigation_for(p.role()))),
                None => Outcome::failed("not signed in"),
            },

            Command::SwitchRole { role } => {
                let target = match role.parse::<Role>() {
                    Ok(target) => target,
                    Err(err) => return Ok(Outcome::failed(err.to_string())),
                };
                match self.session.switch_role(target) {
                    Ok(p) => Outcome::ok(format!("now acting as {p}")),
                    Err(err @ (SessionError::Authorization(_) | SessionError::NoPrincipalForRole(_))) => {
                        Outcome::failed(err.to_string())
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            Command::Check { path, explain: true } => {
                let current = self.session.current_principal();
                let explanation = explain_access(current.as_ref(), &path);
                let rendered = serde_json::to_string_pretty(&explanation)?;
                Outcome {
                    output: rendered,
                    success: explanation.granted,
                }
            }

            Command::Check { path, explain: false } => match self.session.authorize_route(&path) {
                Ok(()) => Outcome::ok("access granted"),
                Err(err) => Outcome::failed(format!("access denied: {err}")),
            },

            Command::Roles => Outcome::ok(render_roles(self.session.registry())),
        };

        Ok(outcome)
    }
}

fn render_navigation(items: &[NavigationItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{:<14} {:<16} ({})", item.label, item.path, item.icon);
    }
    out.trim_end().to_string()
}

/// One line per role: tag, label, the principal a switch would assume, and
/// the role's capabilities.
fn render_roles(registry: &PrincipalRegistry) -> String {
    let mut out = String::new();
    for role in Role::ALL {
        let caps: Vec<&str> = capabilities_for(role).iter().map(|c| c.as_str()).collect();
        let email = registry.find_by_role(role).map_or("-", |p| p.email());
        let _ = writeln!(
            out,
            "{:<14} {:<22} {:<22} [{}]",
            role.as_str(),
            role.label(),
            email,
            caps.join(", ")
        );
    }
    out.trim_end().to_string()
}
