#![allow(dead_code)]

use anyhow::{Result, anyhow, bail};

use crate::jsontext;

use super::catalog::ConfigMapCatalog;
use super::types::ConfigMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    View,
    Edit,
    History,
}

/// An edit session over one ConfigMap: a working buffer, the current view
/// mode, and the last validation error. The stored payload only changes on
/// a successful save or restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    map_id: u32,
    mode: ViewMode,
    buffer: String,
    error: Option<String>,
}

impl EditSession {
    pub fn open(map: &ConfigMap) -> Self {
        Self {
            map_id: map.id,
            mode: ViewMode::View,
            buffer: map.data.clone(),
            error: None,
        }
    }

    pub fn map_id(&self) -> u32 {
        self.map_id
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn edit(&mut self) {
        self.mode = ViewMode::Edit;
    }

    pub fn view_history(&mut self) {
        self.mode = ViewMode::History;
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Pretty-print the buffer in place. A buffer that does not parse is
    /// left untouched and the error is surfaced instead.
    pub fn beautify(&mut self) -> Result<()> {
        match jsontext::beautify(&self.buffer) {
            Ok(pretty) => {
                self.buffer = pretty;
                self.error = None;
                Ok(())
            }
            Err(_) => {
                let message = "Invalid JSON format. Please check your syntax.";
                self.error = Some(message.to_string());
                Err(anyhow!(message))
            }
        }
    }

    /// Persist the buffer into the catalog. An invalid buffer surfaces an
    /// error and mutates nothing, leaving the stored payload as it was.
    pub fn save(
        &mut self,
        catalog: &mut ConfigMapCatalog,
        editor: &str,
        changes: &str,
    ) -> Result<()> {
        if jsontext::validate(&self.buffer).is_err() {
            let message = "Cannot save invalid JSON. Please fix the errors first.";
            self.error = Some(message.to_string());
            bail!(message);
        }

        catalog.update_data(self.map_id, self.buffer.clone(), editor, changes)?;
        self.mode = ViewMode::View;
        self.error = None;
        Ok(())
    }

    /// Drop buffer edits and return to viewing the stored payload.
    pub fn cancel(&mut self, catalog: &ConfigMapCatalog) -> Result<()> {
        let Some(map) = catalog.get(self.map_id) else {
            bail!("Unknown ConfigMap id {}", self.map_id);
        };
        self.buffer = map.data.clone();
        self.mode = ViewMode::View;
        self.error = None;
        Ok(())
    }

    /// Make a stored version current and return to view mode.
    pub fn restore(&mut self, catalog: &mut ConfigMapCatalog, version_id: u32) -> Result<()> {
        let restored = catalog.restore_version(self.map_id, version_id)?;
        self.buffer = restored;
        self.mode = ViewMode::View;
        self.error = None;
        Ok(())
    }
}
