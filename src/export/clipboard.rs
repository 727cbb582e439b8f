//! Clipboard export.

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

use crate::core::{ClipboardConfig, ClipboardError};

/// A place plain text can be copied to.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}

/// Copy text, reporting success as a boolean.
///
/// Failures are logged and swallowed; callers only learn whether the copy
/// happened.
pub async fn copy_to_clipboard<C: Clipboard + ?Sized>(clipboard: &C, text: &str) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => {
            tracing::debug!(clipboard = clipboard.name(), bytes = text.len(), "Copied to clipboard");
            true
        }
        Err(e) => {
            tracing::error!(clipboard = clipboard.name(), error = %e, "Failed to copy to clipboard");
            false
        }
    }
}

/// Platform clipboard, reached through the usual command-line tools.
///
/// Candidates are tried in order until one succeeds. A program that isn't
/// installed is skipped, and a failing one falls through to the next.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<Vec<String>>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    /// Use the platform's default clipboard tools.
    pub fn new() -> Self {
        Self { candidates: default_candidates() }
    }

    /// Use one specific program (plus arguments) that reads from stdin.
    pub fn with_command(command: Vec<String>) -> Self {
        Self { candidates: vec![command] }
    }

    /// Build from configuration: the configured command, else the defaults.
    pub fn from_config(config: &ClipboardConfig) -> Self {
        match &config.command {
            Some(command) if !command.is_empty() => Self::with_command(command.clone()),
            _ => Self::new(),
        }
    }

    /// Commands that will be tried.
    pub fn candidates(&self) -> &[Vec<String>] {
        &self.candidates
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error: Option<ClipboardError> = None;

        for candidate in &self.candidates {
            let Some((program, args)) = candidate.split_first() else {
                continue;
            };

            let spawned = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(program = %program, "Clipboard tool not installed");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(program = %program, error = %e, "Failed to start clipboard tool");
                    last_error = Some(e.into());
                    continue;
                }
            };

            match feed(child, program, text).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(program = %program, error = %e, "Clipboard tool failed");
                    last_error = Some(e);
                }
            }
        }

        if let Some(e) = last_error {
            return Err(e);
        }

        let tried: Vec<&str> =
            self.candidates.iter().filter_map(|c| c.first().map(String::as_str)).collect();
        Err(ClipboardError::NoTool(tried.join(", ")))
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Write `text` to the child's stdin and wait for it to exit.
///
/// The child is always reaped, also when writing to it fails.
async fn feed(mut child: Child, program: &str, text: &str) -> Result<(), ClipboardError> {
    if let Some(mut stdin) = child.stdin.take() {
        let written = async {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await
        }
        .await;

        if let Err(e) = written {
            // Closed pipe: the tool may already have exited on its own.
            if child.try_wait()?.is_none() {
                child.kill().await?;
            }
            return Err(e.into());
        }
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(ClipboardError::ToolFailed { program: program.to_string(), status });
    }
    Ok(())
}

fn default_candidates() -> Vec<Vec<String>> {
    let commands: &[&[&str]] = if cfg!(target_os = "macos") {
        &[&["pbcopy"]]
    } else if cfg!(target_os = "windows") {
        &[&["clip"]]
    } else {
        &[&["wl-copy"], &["xclip", "-selection", "clipboard"], &["xsel", "--clipboard", "--input"]]
    };

    commands.iter().map(|c| c.iter().map(|s| (*s).to_string()).collect()).collect()
}

/// In-memory clipboard for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that rejects every write.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Last copied text.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("permission denied".to_string()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_success() {
        let clipboard = MemoryClipboard::new();
        assert!(copy_to_clipboard(&clipboard, "# Phase 1\n✅ done").await);
        assert_eq!(clipboard.contents().as_deref(), Some("# Phase 1\n✅ done"));
    }

    #[tokio::test]
    async fn test_copy_failure_returns_false() {
        let clipboard = MemoryClipboard::failing();
        assert!(!copy_to_clipboard(&clipboard, "text").await);
        assert!(clipboard.contents().is_none());
    }

    #[tokio::test]
    async fn test_copy_through_trait_object() {
        let clipboard: Box<dyn Clipboard> = Box::new(MemoryClipboard::new());
        assert!(copy_to_clipboard(clipboard.as_ref(), "x").await);
    }

    #[tokio::test]
    async fn test_missing_tool_is_reported() {
        let clipboard =
            SystemClipboard::with_command(vec!["ucplan-no-such-clipboard-tool".to_string()]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::NoTool(ref tried) if tried == "ucplan-no-such-clipboard-tool"));
        assert!(!copy_to_clipboard(&clipboard, "x").await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_configured_command_receives_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let clipboard = SystemClipboard::with_command(vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("cat > '{}'", out.display()),
        ]);

        assert!(copy_to_clipboard(&clipboard, "| a | b |\n").await);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "| a | b |\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command() {
        let clipboard = SystemClipboard::with_command(vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat > /dev/null; exit 3".to_string(),
        ]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::ToolFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_tool_falls_through_to_next() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let clipboard = SystemClipboard {
            candidates: vec![
                vec!["sh".to_string(), "-c".to_string(), "cat > /dev/null; exit 1".to_string()],
                vec!["ucplan-no-such-clipboard-tool".to_string()],
                vec!["sh".to_string(), "-c".to_string(), format!("cat > '{}'", out.display())],
            ],
        };

        assert!(copy_to_clipboard(&clipboard, "# Phase 2\n").await);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "# Phase 2\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_last_failure_reported_when_all_fail() {
        let clipboard = SystemClipboard {
            candidates: vec![
                vec!["sh".to_string(), "-c".to_string(), "cat > /dev/null; exit 2".to_string()],
                vec!["ucplan-no-such-clipboard-tool".to_string()],
            ],
        };

        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::ToolFailed { ref program, .. } if program == "sh"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tool_exiting_before_reading_is_reaped() {
        let clipboard = SystemClipboard::with_command(vec![
            "sh".to_string(),
            "-c".to_string(),
            "exec 0<&-; exit 0".to_string(),
        ]);

        // Large enough to overflow the pipe buffer once the reader is gone.
        let text = "x".repeat(1 << 20);
        let result = clipboard.write_text(&text).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_from_config() {
        let config = ClipboardConfig { command: Some(vec!["xsel".to_string(), "-b".to_string()]) };
        let clipboard = SystemClipboard::from_config(&config);
        assert_eq!(clipboard.candidates(), [vec!["xsel".to_string(), "-b".to_string()]]);

        let empty = ClipboardConfig { command: Some(Vec::new()) };
        assert!(!SystemClipboard::from_config(&empty).candidates().is_empty());
        assert!(!SystemClipboard::from_config(&ClipboardConfig::default()).candidates().is_empty());
    }
}
