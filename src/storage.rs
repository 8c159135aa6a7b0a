use crate::calendar::Month;
use crate::model::Roster;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Support de persistance des rosters, indexé par mois.
pub trait Storage {
    /// Charge le roster d'un mois.
    fn load(&self, month: Month) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique (jamais de seed tronqué).
    fn save(&self, month: Month, roster: &Roster) -> anyhow::Result<()>;
}

/// Un fichier JSON par mois dans un répertoire,
/// nommé `November_2025_data.json`.
pub struct JsonStorage {
    base_dir: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let base_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("creating storage directory {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    pub fn path_for(&self, month: Month) -> PathBuf {
        self.base_dir
            .join(format!("{}_data.json", month.to_string().replace(' ', "_")))
    }
}

impl Storage for JsonStorage {
    fn load(&self, month: Month) -> anyhow::Result<Roster> {
        let path = self.path_for(month);
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let roster: Roster = serde_json::from_slice(&data)
            .with_context(|| format!("parsing roster {}", path.display()))?;
        roster.validate()?;
        Ok(roster)
    }

    fn save(&self, month: Month, roster: &Roster) -> anyhow::Result<()> {
        let path = self.path_for(month);
        let json = serde_json::to_vec_pretty(roster)?;
        let mut tmp = NamedTempFile::new_in(&self.base_dir)
            .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
