use crate::appointments::Appointment;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

/// Read-only appointment source, stored as TOML:
///
/// ```toml
/// [[appointments]]
/// datetime = "2025-08-15T10:00:00"
/// buyer = "Alice Pauline"
/// seller = "Benson Meier"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentBook {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl AppointmentBook {
    /// Loads the book at `path`. A missing file is an empty book.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no appointment book found, starting empty");
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let book = Self::parse(&s).with_context(|| format!("parsing {}", path.display()))?;
        debug!(
            path = %path.display(),
            count = book.appointments.len(),
            "loaded appointment book"
        );
        Ok(book)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str::<AppointmentBook>(s)?)
    }
}
