//! Specialist role instruction template.
//!
//! The system instruction sent ahead of every request is a fixed four-clause
//! directive with the persona label template-filled in:
//!
//! ```text
//! あなたは{{role}}です。
//! 専門的な知識を活かして、ユーザーのリクエストに対して具体的かつ実践的なアドバイスを提供してください。
//! 専門分野ではないリクエストには他の専門家に相談するように促してください。
//! 回答は簡潔に、わかりやすく説明してください。
//! ```
//!
//! The template can be overridden by a plain-text file under the prompts
//! directory (`specialist.txt`, `{{role}}` placeholder); a missing file
//! silently falls back to the built-in default so the directory is optional.

use std::fs;
use std::path::Path;

use crate::roles::SpecialistRole;

const ROLE_VAR: &str = "{{role}}";

const DEFAULT_TEMPLATE: &str = "あなたは{{role}}です。\n\
専門的な知識を活かして、ユーザーのリクエストに対して具体的かつ実践的なアドバイスを提供してください。\n\
専門分野ではないリクエストには他の専門家に相談するように促してください。\n\
回答は簡潔に、わかりやすく説明してください。";

/// Renders the system instruction for a selected [`SpecialistRole`].
///
/// Rendering is pure string substitution - for a fixed template and role the
/// output is identical every time.
#[derive(Debug, Clone)]
pub struct RolePrompt {
    template: String,
}

impl RolePrompt {
    /// The built-in four-clause directive.
    pub fn built_in() -> Self {
        Self { template: DEFAULT_TEMPLATE.to_string() }
    }

    /// Load `specialist.txt` from `prompts_dir`, falling back to the built-in
    /// template when the file is missing or unreadable.
    pub fn from_dir(prompts_dir: impl AsRef<Path>) -> Self {
        let path = prompts_dir.as_ref().join("specialist.txt");
        match fs::read_to_string(&path) {
            Ok(text) if !text.trim().is_empty() => Self { template: text.trim().to_string() },
            Ok(_) => Self::built_in(),
            Err(_) => {
                tracing::debug!("prompt: '{}' not found - using built-in template", path.display());
                Self::built_in()
            }
        }
    }

    /// Fill the persona label into the template.
    pub fn render(&self, role: SpecialistRole) -> String {
        self.template.replace(ROLE_VAR, role.label())
    }
}
