use std::path::{Path, PathBuf};

use superpy_config::{Config, ConfigManager};
use superpy_core::InventoryService;
use superpy_storage_csv::{CsvLedgerStorage, FileClock, StoragePaths};
use tracing::debug;

use crate::cli::output::{set_preferences, OutputPreferences};
use crate::errors::Result;

/// Everything a command needs: resolved config, ledger storage, and clock.
pub struct AppContext {
    base_dir: PathBuf,
    config_manager: ConfigManager,
    config: Config,
    storage: CsvLedgerStorage,
    clock: FileClock,
}

impl AppContext {
    /// Loads the config under `base_dir` and wires storage to the files it names.
    pub fn load(base_dir: PathBuf) -> Result<Self> {
        let config_manager = ConfigManager::with_base_dir(&base_dir);
        let config = config_manager.load()?;
        set_preferences(OutputPreferences {
            plain_mode: !config.ui_color_enabled,
        });

        let paths = storage_paths(&config, &base_dir);
        debug!(
            purchases = %paths.purchases.display(),
            sales = %paths.sales.display(),
            clock = %paths.clock.display(),
            "resolved ledger files"
        );

        Ok(Self {
            storage: CsvLedgerStorage::new(&paths),
            clock: FileClock::new(paths.clock),
            base_dir,
            config_manager,
            config,
        })
    }

    pub fn inventory(&self) -> InventoryService<'_> {
        InventoryService::new(&self.storage, &self.clock)
    }

    pub fn clock(&self) -> &FileClock {
        &self.clock
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Persists `config`. File locations take effect on the next invocation.
    pub fn save_config(&mut self, config: Config) -> Result<()> {
        self.config_manager.save(&config)?;
        self.config = config;
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        self.config_manager.config_path()
    }
}

fn storage_paths(config: &Config, base: &Path) -> StoragePaths {
    StoragePaths {
        purchases: config.resolve(base, &config.purchases_file),
        sales: config.resolve(base, &config.sales_file),
        clock: config.resolve(base, &config.clock_file),
    }
}
