use crate::prelude::*;
use ratehub_core::config::{clamp_per_page, HubConfig};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "ratehub.toml";

/// Hub selection flags, shared by every subcommand
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HubArgs {
    /// Path to a TOML configuration file
    #[clap(long, env = "RATEHUB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Owner of the tracker repository
    #[clap(long, env = "RATEHUB_OWNER", global = true)]
    pub owner: Option<String>,

    /// Name of the tracker repository
    #[clap(long, env = "RATEHUB_REPO", global = true)]
    pub repo: Option<String>,

    /// Label that marks an issue as a catalog item
    #[clap(long, env = "RATEHUB_LABEL", global = true)]
    pub label: Option<String>,

    /// Records requested per page (1-100)
    #[clap(long, env = "RATEHUB_PER_PAGE", global = true)]
    pub per_page: Option<u32>,

    /// Tracker REST API root
    #[clap(long, env = "RATEHUB_API_BASE", global = true)]
    pub api_base: Option<String>,
}

impl HubArgs {
    /// Build the hub configuration: file first, then flags and environment
    ///
    /// The result is not validated here; the client does that before its
    /// first request.
    pub fn resolve(&self) -> Result<HubConfig> {
        let base = match &self.config {
            Some(path) => load_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    load_file(default)?
                } else {
                    HubConfig::default()
                }
            }
        };

        Ok(self.apply_overrides(base))
    }

    /// Apply flag values on top of `config`
    pub fn apply_overrides(&self, mut config: HubConfig) -> HubConfig {
        if let Some(owner) = &self.owner {
            config.owner = owner.clone();
        }
        if let Some(repo) = &self.repo {
            config.repo = repo.clone();
        }
        if let Some(label) = &self.label {
            config.label = label.clone();
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }

        let clamped = clamp_per_page(config.per_page);
        if clamped != config.per_page {
            log::warn!(
                "per_page {} is outside 1-100, using {}",
                config.per_page,
                clamped
            );
            config.per_page = clamped;
        }

        config
    }
}

/// Read and parse a configuration file
pub fn load_file(path: &Path) -> Result<HubConfig> {
    log::debug!("Loading configuration from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    HubConfig::from_toml_str(&text)
        .map_err(|e| eyre!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_reads_explicit_file() {
        let file = write_config("owner = \"acme\"\nrepo = \"ratings\"\nper_page = 25\n");
        let args = HubArgs {
            config: Some(file.path().to_path_buf()),
            ..HubArgs::default()
        };

        let config = args.resolve().unwrap();

        assert_eq!(config.owner, "acme");
        assert_eq!(config.repo, "ratings");
        assert_eq!(config.per_page, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = write_config("owner = \"acme\"\nrepo = \"ratings\"\nlabel = \"catalog\"\n");
        let args = HubArgs {
            config: Some(file.path().to_path_buf()),
            repo: Some("other".to_string()),
            api_base: Some("http://localhost:9000".to_string()),
            ..HubArgs::default()
        };

        let config = args.resolve().unwrap();

        assert_eq!(config.owner, "acme");
        assert_eq!(config.repo, "other");
        assert_eq!(config.label, "catalog");
        assert_eq!(config.api_base, "http://localhost:9000");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let args = HubArgs {
            config: Some(PathBuf::from("/definitely/not/here/ratehub.toml")),
            ..HubArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let file = write_config("owner = [");
        assert!(load_file(file.path()).is_err());
    }

    #[test]
    fn test_apply_overrides_clamps_page_size() {
        let args = HubArgs {
            per_page: Some(500),
            ..HubArgs::default()
        };
        assert_eq!(args.apply_overrides(HubConfig::default()).per_page, 100);

        let args = HubArgs {
            per_page: Some(0),
            ..HubArgs::default()
        };
        assert_eq!(args.apply_overrides(HubConfig::default()).per_page, 1);
    }

    #[test]
    fn test_apply_overrides_without_flags_keeps_config() {
        let config = HubConfig::new("acme", "ratings");
        assert_eq!(HubArgs::default().apply_overrides(config.clone()), config);
    }
}
