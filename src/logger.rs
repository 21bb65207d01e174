// (C) Copyright IBM Corp. 2024.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::Level;

use crate::errors::{Error, Result};

/// Default location of the debug log, relative to the working directory of
/// the host process.
pub const DEFAULT_DEBUG_LOG_PATH: &str = "provider-debug.log";

/// Plain-text debug log file shared by everything a provider creates.
///
/// Every message is written as one complete line while holding the lock, so
/// concurrent reads never interleave partial lines. Messages are also
/// forwarded to the [`log`] facade.
#[derive(Debug)]
pub struct DebugLog {
    file: Mutex<Option<File>>,
}

impl DebugLog {
    /// Opens (or creates) the log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::DebugLogError {
                path: path.display().to_string(),
                source,
            })?;

        let logger = Self {
            file: Mutex::new(Some(file)),
        };
        logger.info("Logger initialized");
        Ok(logger)
    }

    /// A log that only forwards to the [`log`] facade.
    pub fn disabled() -> Self {
        Self {
            file: Mutex::new(None),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }

    pub fn debug(&self, message: impl Display) {
        self.write(Level::Debug, "DEBUG", message);
    }

    pub fn info(&self, message: impl Display) {
        self.write(Level::Info, "INFO", message);
    }

    pub fn error(&self, message: impl Display) {
        self.write(Level::Error, "ERROR", message);
    }

    /// Flushes and releases the file. Later messages only reach the facade.
    pub fn close(&self) {
        if let Ok(mut file) = self.file.lock() {
            if let Some(mut file) = file.take() {
                let _ = file.flush();
            }
        }
    }

    fn write(&self, level: Level, prefix: &str, message: impl Display) {
        log::log!(level, "{message}");

        // Poisoning does not invalidate the file handle.
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = file.as_mut() {
            let line = format!(
                "{} {prefix}: {message}\n",
                chrono::Local::now().format("%Y/%m/%d %H:%M:%S")
            );
            if let Err(e) = file.write_all(line.as_bytes()) {
                log::warn!("Cannot write to debug log: {e}");
            }
        }
    }
}
