use crate::core::message::{Message, TranscriptRole};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Optional plain-text transcript file, appended to as the chat goes on.
pub struct LoggingState {
    file_path: Option<String>,
}

impl LoggingState {
    /// Verifies the file is writable up front so a bad path fails at startup
    /// rather than mid-conversation.
    pub fn new(log_file: Option<String>) -> Result<Self, std::io::Error> {
        if let Some(path) = &log_file {
            Self::test_file_access(path)?;
        }
        Ok(LoggingState {
            file_path: log_file,
        })
    }

    pub fn log_message(&self, content: &str) -> Result<(), std::io::Error> {
        let Some(file_path) = &self.file_path else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }
        // Blank line between entries, matching the screen layout
        writeln!(writer)?;

        writer.flush()
    }

    pub fn log_turn(&self, message: &Message) -> Result<(), std::io::Error> {
        match message.role {
            TranscriptRole::User => self.log_message(&format!("You: {}", message.content)),
            TranscriptRole::Assistant => self.log_message(&message.content),
            TranscriptRole::AppError => self.log_message(&format!("## {}", message.content)),
        }
    }

    pub fn get_status_string(&self) -> String {
        match &self.file_path {
            None => "disabled".to_string(),
            Some(path) => format!(
                "active ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
        }
    }

    fn test_file_access(path: &str) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()
    }
}
