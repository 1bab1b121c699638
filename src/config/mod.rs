use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

/// Relative location of the bundled dataset, searched for next to the
/// executable and under the working directory.
const DATA_RELATIVE_PATH: &str = "assets/data/gita-data.json";
const PROGRESS_FILE_NAME: &str = "gitaflow-progress.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub progress_path: PathBuf,
}

impl AppConfig {
    pub fn from_overrides(data: Option<PathBuf>, progress: Option<PathBuf>) -> Result<Self> {
        let data_path = match data {
            Some(custom) => canonicalize_file(&custom)?,
            None => default_data_path()?,
        };
        let progress_path = progress.unwrap_or_else(|| PathBuf::from(PROGRESS_FILE_NAME));
        Ok(Self {
            data_path,
            progress_path,
        })
    }
}

fn canonicalize_file(path: &Path) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to resolve dataset file at {:?}", path))?;
    if canonical.is_file() {
        Ok(canonical)
    } else {
        Err(anyhow!("dataset path {:?} is not a file", canonical))
    }
}

fn default_data_path() -> Result<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        roots.extend(exe.ancestors().skip(1).map(Path::to_path_buf));
    }
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    roots
        .iter()
        .map(|root| root.join(DATA_RELATIVE_PATH))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            anyhow!(
                "could not locate {} next to the binary or working directory; \
                 pass --data to point at a dataset file",
                DATA_RELATIVE_PATH
            )
        })
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::io::Write;

    #[test]
    fn accepts_dataset_override() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("gita-data.json");
        write!(std::fs::File::create(&data).unwrap(), "{{}}").unwrap();

        let config = AppConfig::from_overrides(Some(data.clone()), None).unwrap();
        assert!(config.data_path.ends_with("gita-data.json"));
        assert!(config.progress_path.ends_with("gitaflow-progress.json"));
    }

    #[test]
    fn rejects_directory_as_dataset() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::from_overrides(Some(dir.path().to_path_buf()), None).is_err());
    }

    #[test]
    fn rejects_missing_dataset_override() {
        let result = AppConfig::from_overrides(Some("no/such/file.json".into()), None);
        assert!(result.is_err());
    }
}
