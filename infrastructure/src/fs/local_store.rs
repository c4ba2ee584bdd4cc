//! Local file system document store
//!
//! Reads saved pages and writes exported chat logs with `tokio::fs`.
//! Pages are decoded as UTF-8, with invalid bytes replaced by U+FFFD.
//! Output files are created or truncated; concurrent runs writing the same
//! path are not coordinated.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use transcripty_application::{ChatDocumentPort, DocumentError};

/// Document store backed by the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalDocumentStore;

impl LocalDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatDocumentPort for LocalDocumentStore {
    async fn read_document(&self, path: &Path) -> Result<String, DocumentError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DocumentError::NotFound(path.to_path_buf()))
            }
            Err(source) => Err(DocumentError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    async fn write_output(&self, path: &Path, content: &str) -> Result<(), DocumentError> {
        tokio::fs::write(path, content)
            .await
            .map_err(|source| DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use transcripty_application::{ExportChatError, ExportChatInput, ExportChatUseCase};
    use transcripty_domain::OutputTargets;

    const MEET_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="Ge9Kpc z38b6">
  <div class="nMcdL bj4p3b">
    <div class="ptNLrf">
      <span class="NWpY1d">Alice Smith</span>
      <span class="MuzmKe">9:58 AM</span>
    </div>
    <div class="beTDc">
      <div class="ygicle VbkSUe">
        Morning all
      </div>
    </div>
  </div>
  <div class="nMcdL bj4p3b">
    <div class="ptNLrf">
      <span class="NWpY1d">Bob</span>
    </div>
    <div class="beTDc">
      <div class="ygicle VbkSUe">Agenda: https://example.com/doc</div>
    </div>
  </div>
</div>
</body>
</html>
"#;

    fn export_use_case() -> ExportChatUseCase {
        ExportChatUseCase::new(Arc::new(LocalDocumentStore::new()))
    }

    fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalDocumentStore::new()
            .read_document(&dir.path().join("missing.html"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_read_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        fs::write(&path, b"caf\xe9 ok").unwrap();

        let content = LocalDocumentStore::new().read_document(&path).await.unwrap();
        assert_eq!(content, "caf\u{fffd} ok");
    }

    #[tokio::test]
    async fn test_export_page_with_latin1_byte() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.html");
        let mut page = Vec::new();
        page.extend_from_slice(br#"<div class="nMcdL bj4p3b"><span class="NWpY1d">Ren"#);
        page.push(0xE9);
        page.extend_from_slice(br#"</span><div class="ygicle VbkSUe">Bonjour</div></div>"#);
        fs::write(&input, page).unwrap();

        let output = export_use_case()
            .execute(ExportChatInput::new(&input).with_targets(OutputTargets::text_only()))
            .await
            .unwrap();

        assert_eq!(output.entry_count, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("latin1_chat.txt")).unwrap(),
            "Ren\u{fffd}: Bonjour"
        );
    }

    #[tokio::test]
    async fn test_read_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalDocumentStore::new()
            .read_document(dir.path())
            .await
            .unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(dir.path(), "out.txt", "a much longer previous content");

        LocalDocumentStore::new()
            .write_output(&path, "short")
            .await
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalDocumentStore::new()
            .write_output(&dir.path().join("nope").join("out.txt"), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }

    #[tokio::test]
    async fn test_export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "meeting.html", MEET_HTML);

        let output = export_use_case()
            .execute(ExportChatInput::new(&input))
            .await
            .unwrap();

        assert_eq!(output.entry_count, 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("meeting_chat.txt")).unwrap(),
            "Alice Smith: Morning all\n\nBob: Agenda: https://example.com/doc"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("meeting_chat.md")).unwrap(),
            "# Google Meet Chat Log\n\n**Alice Smith:** Morning all\n\n**Bob:** Agenda: https://example.com/doc"
        );
    }

    #[tokio::test]
    async fn test_export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "meeting.html", MEET_HTML);
        let base = dir.path().join("out");

        export_use_case()
            .execute(ExportChatInput::new(&input).with_base_path(Some(base.clone())))
            .await
            .unwrap();
        let first_txt = fs::read(dir.path().join("out.txt")).unwrap();
        let first_md = fs::read(dir.path().join("out.md")).unwrap();

        export_use_case()
            .execute(ExportChatInput::new(&input).with_base_path(Some(base)))
            .await
            .unwrap();
        assert_eq!(fs::read(dir.path().join("out.txt")).unwrap(), first_txt);
        assert_eq!(fs::read(dir.path().join("out.md")).unwrap(), first_md);
    }

    #[tokio::test]
    async fn test_export_empty_document_writes_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "blank.html", "<html><body></body></html>");

        let output = export_use_case()
            .execute(ExportChatInput::new(&input))
            .await
            .unwrap();

        assert!(output.is_empty_log());
        assert_eq!(
            fs::read_to_string(dir.path().join("blank_chat.txt")).unwrap(),
            "No chat messages found."
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("blank_chat.md")).unwrap(),
            "# Google Meet Chat Log\n\nNo chat messages found."
        );
    }

    #[tokio::test]
    async fn test_export_missing_input_creates_no_files() {
        let dir = tempfile::tempdir().unwrap();

        let err = export_use_case()
            .execute(ExportChatInput::new(dir.path().join("ghost.html")))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportChatError::InputNotFound(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_export_respects_targets() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "meeting.html", MEET_HTML);

        export_use_case()
            .execute(ExportChatInput::new(&input).with_targets(OutputTargets::text_only()))
            .await
            .unwrap();
        assert!(dir.path().join("meeting_chat.txt").exists());
        assert!(!dir.path().join("meeting_chat.md").exists());

        fs::remove_file(dir.path().join("meeting_chat.txt")).unwrap();
        export_use_case()
            .execute(ExportChatInput::new(&input).with_targets(OutputTargets::markdown_only()))
            .await
            .unwrap();
        assert!(!dir.path().join("meeting_chat.txt").exists());
        assert!(dir.path().join("meeting_chat.md").exists());
    }
}
