//! Release-notes generation through the `claude` CLI

use crate::error::{HeraldError, Result};
use crate::process::{ensure_installed, Tool};

/// Turns a prompt into generated release notes
pub trait NotesModel {
    /// Raw model output for `prompt`; callers normalize it.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// [NotesModel] backed by `claude -p`, prompt on stdin
#[derive(Debug, Clone)]
pub struct ClaudeCli {
    tool: Tool,
    model: Option<String>,
}

impl ClaudeCli {
    /// `model` is a model alias or full name passed as `--model`.
    pub fn new(model: Option<String>) -> Self {
        ClaudeCli {
            tool: Tool::new("claude"),
            model: model.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Use a different program in place of `claude`
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Verify the claude CLI is installed and runs.
    pub fn check_available(&self) -> Result<()> {
        ensure_installed(self.tool.program())?;
        self.tool.run(&["--version"]).map_err(|e| {
            HeraldError::environment(format!("claude CLI not available: {}", e))
        })?;
        Ok(())
    }

    fn args(&self) -> Vec<&str> {
        let mut args = vec!["-p"];
        if let Some(ref model) = self.model {
            args.push("--model");
            args.push(model);
        }
        args
    }
}

impl NotesModel for ClaudeCli {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.tool
            .run_with_input(&self.args(), Some(prompt))
            .map_err(|e| HeraldError::tool("failed to generate notes with Claude", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_without_model() {
        assert_eq!(ClaudeCli::new(None).args(), vec!["-p"]);
        assert_eq!(ClaudeCli::new(Some("  ".to_string())).args(), vec!["-p"]);
    }

    #[test]
    fn test_args_with_model() {
        let cli = ClaudeCli::new(Some("opus".to_string()));
        assert_eq!(cli.args(), vec!["-p", "--model", "opus"]);
        assert_eq!(cli.model(), Some("opus"));
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_pipes_prompt() {
        use std::os::unix::fs::PermissionsExt;

        // Stand-in claude that echoes stdin and ignores its arguments.
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("claude");
        std::fs::write(&script, "#!/bin/sh\ncat\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let cli = ClaudeCli::new(None).with_tool(Tool::new(script.to_string_lossy().into_owned()));
        assert_eq!(cli.generate("the prompt").unwrap(), "the prompt");
    }
}
