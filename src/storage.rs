use crate::io;
use crate::model::Dataset;
use crate::scheduler::Schedule;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const EMPLOYEES_FILE: &str = "employees.json";
pub const RULES_FILE: &str = "rule-definitions.json";
pub const SHIFT_RULES_FILE: &str = "shift-rules.json";
pub const TIME_OFF_FILE: &str = "time-off-requests.json";
pub const SCHEDULE_FILE: &str = "schedule.json";

pub trait Storage {
    /// Charge les quatre jeux de données.
    fn load(&self) -> anyhow::Result<Dataset>;
    /// Sauvegarde le planning de manière atomique.
    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

/// Répertoire de fichiers JSON (un tableau par jeu de données).
pub struct JsonStorage {
    dir: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            anyhow::bail!("data directory not found: {}", dir.display());
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn schedule_path(&self) -> PathBuf {
        self.dir.join(SCHEDULE_FILE)
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Dataset> {
        let dataset = Dataset {
            employees: io::load_json_records(self.dir.join(EMPLOYEES_FILE))?,
            rules: io::load_json_records(self.dir.join(RULES_FILE))?,
            shift_rules: io::load_json_records(self.dir.join(SHIFT_RULES_FILE))?,
            time_off: io::load_json_records(self.dir.join(TIME_OFF_FILE))?,
        };
        io::validate_time_off(&dataset.time_off)
            .with_context(|| format!("validating {TIME_OFF_FILE}"))?;
        Ok(dataset)
    }

    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(schedule)?;
        let mut tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.schedule_path())
            .with_context(|| "atomic rename")?;
        Ok(())
    }
}
