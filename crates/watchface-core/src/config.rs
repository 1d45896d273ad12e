//! Persistent watchface configuration
//!
//! The config record is owned by whoever composes the UI and handed to the
//! setup screen as a [`WatchfaceConfigStore`]. Loading and saving are
//! explicit; nothing here touches storage behind the caller's back.

use core::fmt::{Debug, Write};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Storage key under which the watchface config blob is kept
pub const WATCHFACE_CONFIG_KEY: &str = "watchface.cfg";

/// Upper bound on the encoded config size
const CONFIG_BUF_LEN: usize = 32;

/// Watchface settings persisted across reboots
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchfaceConfig {
    /// Show the watchface tile after wakeup
    pub watchface_enable: bool,
    /// Render the watchface with anti-aliasing
    pub watchface_antialias: bool,
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self {
            watchface_enable: false,
            watchface_antialias: true,
        }
    }
}

/// Keyed blob storage backing the config (flash partition, SD card, file).
pub trait ConfigStorage {
    type Error: Debug;

    /// Read the blob stored under `key` into `buf`.
    ///
    /// Returns `Ok(None)` if nothing is stored under `key`, otherwise the
    /// number of bytes written into `buf`.
    fn read(&mut self, key: &str, buf: &mut [u8]) -> Result<Option<usize>, Self::Error>;

    /// Replace the blob stored under `key`.
    fn write(&mut self, key: &str, data: &[u8]) -> Result<(), Self::Error>;
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Config storage error: {0}")]
    Storage(heapless::String<64>),
    #[error("Config could not be encoded")]
    Encode,
    #[error("Stored config is corrupt")]
    Decode,
}

impl ConfigError {
    fn storage<E: Debug>(err: E) -> Self {
        let mut msg = heapless::String::new();
        // Overlong messages are truncated by the failed write
        write!(&mut msg, "{:?}", err).ok();
        ConfigError::Storage(msg)
    }
}

/// The watchface config together with the storage it is persisted in.
pub struct WatchfaceConfigStore<S: ConfigStorage> {
    storage: S,
    config: WatchfaceConfig,
}

impl<S: ConfigStorage> WatchfaceConfigStore<S> {
    /// Wrap `storage`, starting from default settings until [`load`](Self::load).
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: WatchfaceConfig::default(),
        }
    }

    /// Replace the in-memory config with the persisted one.
    ///
    /// A missing blob leaves the defaults in place. A corrupt blob resets
    /// to defaults and reports [`ConfigError::Decode`].
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let mut buf = [0u8; CONFIG_BUF_LEN];
        let len = match self
            .storage
            .read(WATCHFACE_CONFIG_KEY, &mut buf)
            .map_err(ConfigError::storage)?
        {
            Some(len) => len.min(CONFIG_BUF_LEN),
            None => {
                debug!("No stored watchface config, using defaults");
                self.config = WatchfaceConfig::default();
                return Ok(());
            }
        };

        match postcard::from_bytes::<WatchfaceConfig>(&buf[..len]) {
            Ok(config) => {
                debug!("Loaded watchface config: {:?}", config);
                self.config = config;
                Ok(())
            }
            Err(e) => {
                warn!("Discarding corrupt watchface config: {:?}", e);
                self.config = WatchfaceConfig::default();
                Err(ConfigError::Decode)
            }
        }
    }

    /// Persist the in-memory config.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let mut buf = [0u8; CONFIG_BUF_LEN];
        let bytes = postcard::to_slice(&self.config, &mut buf).map_err(|_| ConfigError::Encode)?;
        self.storage
            .write(WATCHFACE_CONFIG_KEY, bytes)
            .map_err(ConfigError::storage)?;
        debug!("Saved watchface config: {:?}", self.config);
        Ok(())
    }

    pub fn config(&self) -> &WatchfaceConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WatchfaceConfig {
        &mut self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
