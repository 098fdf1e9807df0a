// src/output.rs
use crate::types::{DomainReport, OutputConfig, OutputFormat, ParaMinerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub struct OutputManager {
    config: OutputConfig,
}

impl OutputManager {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn write_report(&self, report: &DomainReport) -> Result<(), ParaMinerError> {
        if let Some(file_path) = &self.config.file {
            self.write_to_file(file_path, report)
        } else {
            self.write_to_stdout(report)
        }
    }

    fn write_to_file(&self, file_path: &str, report: &DomainReport) -> Result<(), ParaMinerError> {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ParaMinerError::OutputError(format!("Failed to create directory: {}", e))
            })?;
        }

        // Append so list runs accumulate every domain in one file
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .map_err(|e| ParaMinerError::OutputError(format!("Failed to open file: {}", e)))?;

        self.write_output(&mut file, report)?;

        if self.config.verbose {
            println!("Results written to: {}", file_path);
        }
        Ok(())
    }

    fn write_to_stdout(&self, report: &DomainReport) -> Result<(), ParaMinerError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_output(&mut handle, report)
    }

    fn write_output<W: Write>(&self, writer: &mut W, report: &DomainReport) -> Result<(), ParaMinerError> {
        match self.config.format {
            OutputFormat::Text => self.write_text_output(writer, report),
            OutputFormat::Json => self.write_json_output(writer, report),
        }
    }

    fn write_text_output<W: Write>(
        &self,
        writer: &mut W,
        report: &DomainReport,
    ) -> Result<(), ParaMinerError> {
        for url in &report.urls {
            writeln!(writer, "{}", url).map_err(|e| ParaMinerError::OutputError(e.to_string()))?;
        }
        Ok(())
    }

    fn write_json_output<W: Write>(
        &self,
        writer: &mut W,
        report: &DomainReport,
    ) -> Result<(), ParaMinerError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ParaMinerError::OutputError(format!("Failed to serialize JSON: {}", e)))?;

        writeln!(writer, "{}", json).map_err(|e| ParaMinerError::OutputError(e.to_string()))
    }
}
