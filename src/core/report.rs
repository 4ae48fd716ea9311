//! Dry-run summaries.
//!
//! Builds the label/value listing printed when `--apply` is absent. Secret
//! references and payload contents are masked unless `--reveal` is given.

use crate::core::constants::{LABEL_WIDTH, UNSPECIFIED_TITLE};
use crate::core::payload::Payload;
use crate::core::plan::{CloudTarget, Plan, VaultTarget};

const DRY_RUN_NOTICE: &str = "DRY-RUN finished. Use -a option to apply.";
const MASK: &str = "***";

/// Preview of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    header: &'static str,
    lines: Vec<(&'static str, String)>,
    contents: Option<String>,
}

impl Summary {
    /// Preview for the password-manager target.
    pub fn vault(plan: &Plan, target: &VaultTarget) -> Self {
        let title = target
            .title
            .clone()
            .unwrap_or_else(|| UNSPECIFIED_TITLE.to_string());

        Self {
            header: "[onepassword]",
            lines: vec![
                ("operation", target.operation.to_string()),
                ("file path", plan.file.display().to_string()),
                ("vault", target.vaults.join(",")),
                ("title", title),
            ],
            contents: None,
        }
    }

    /// Preview for the cloud target in `region`.
    pub fn cloud(plan: &Plan, target: &CloudTarget, region: &str, payload: &Payload) -> Self {
        let secret = if plan.reveal {
            target.secret.clone()
        } else {
            mask_secret_ref(&target.secret)
        };

        let contents = plan.reveal.then(|| match payload.as_text() {
            Some(text) => text.to_string(),
            None => format!("<{} bytes of binary data>", payload.len()),
        });

        Self {
            header: "[aws-secrets-manager]",
            lines: vec![
                ("env", target.env.to_string()),
                ("profile", target.profile.clone()),
                ("file path", plan.file.display().to_string()),
                ("file size", format!("{} bytes", payload.len())),
                ("file sha256", payload.sha256()),
                ("region", region.to_string()),
                ("secret name", secret),
            ],
            contents,
        }
    }

    pub fn header(&self) -> &str {
        self.header
    }

    /// Notice and label/value lines, without the header.
    pub fn body(&self) -> Vec<String> {
        let mut out = vec![DRY_RUN_NOTICE.to_string()];
        out.extend(
            self.lines
                .iter()
                .map(|(label, value)| format!("{:<width$}: {}", label, value, width = LABEL_WIDTH)),
        );
        if let Some(contents) = &self.contents {
            out.push(format!("{:<width$}:", "contents", width = LABEL_WIDTH));
            out.push(contents.clone());
        }
        out
    }

    /// Plain-text rendering, header included.
    #[cfg(test)]
    fn render(&self) -> String {
        let mut out = String::from(self.header);
        for line in self.body() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

/// Hide most of a secret name or ARN.
///
/// ARNs keep their service and region; the account id is hidden and the
/// secret name keeps only its first characters. Short names are fully hidden.
pub fn mask_secret_ref(secret: &str) -> String {
    let parts: Vec<&str> = secret.splitn(7, ':').collect();
    if parts.len() == 7 && parts[0] == "arn" {
        return format!(
            "{}:{}:{}:{}:{}:{}:{}",
            parts[0],
            parts[1],
            parts[2],
            parts[3],
            MASK,
            parts[5],
            mask_name(parts[6])
        );
    }
    mask_name(secret)
}

fn mask_name(name: &str) -> String {
    const VISIBLE: usize = 3;

    if name.chars().count() <= VISIBLE + 1 {
        return MASK.to_string();
    }
    let head: String = name.chars().take(VISIBLE).collect();
    format!("{}{}", head, MASK)
}
