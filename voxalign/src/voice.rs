//! Piper voice identifiers and model lookup.

use eyre::{ContextCompat, Result, WrapErr, bail};
use hf_hub::CacheRepo;
use hf_hub::api::sync::ApiRepo;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Hugging Face Hub repository hosting Piper voices.
pub const VOICES_REPO: &str = "rhasspy/piper-voices";

/// Piper voice identifier of the form `<locale>-<name>-<quality>`.
///
/// e.g. `en_US-lessac-medium` or `en_GB-northern_english_male-medium`.
#[derive(Clone, Debug, PartialEq)]
pub struct VoiceId {
    pub locale: String,
    pub name: String,
    pub quality: String,
}

impl FromStr for VoiceId {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();

        let [locale, name, quality] = parts[..] else {
            bail!("invalid voice {s:?}: expected <locale>-<name>-<quality>");
        };

        if [locale, name, quality].iter().any(|p| p.is_empty()) || !locale.contains('_') {
            bail!("invalid voice {s:?}: expected <locale>-<name>-<quality>");
        }

        Ok(Self {
            locale: locale.to_string(),
            name: name.to_string(),
            quality: quality.to_string(),
        })
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.locale, self.name, self.quality)
    }
}

impl VoiceId {
    /// Language code, the locale before `_` (e.g. `en`).
    pub fn language(&self) -> &str {
        self.locale.split('_').next().unwrap_or(&self.locale)
    }

    /// Model file name, e.g. `en_US-lessac-medium.onnx`.
    pub fn model_file(&self) -> String {
        format!("{self}.onnx")
    }

    /// Model config file name Piper expects next to the model.
    pub fn config_file(&self) -> String {
        format!("{self}.onnx.json")
    }

    /// Path of `file` inside the voices repository.
    ///
    /// Layout: `<language>/<locale>/<name>/<quality>/<file>`
    pub fn hub_path(&self, file: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.language(),
            self.locale,
            self.name,
            self.quality,
            file
        )
    }
}

/// Voice model sources.
#[derive(Debug)]
pub enum ModelRepo {
    /// Explicit model file
    File(PathBuf),
    /// Local directory holding `<voice>.onnx`
    Path(PathBuf),
    /// HuggingFace cache repository
    Cache(CacheRepo),
    /// HuggingFace API repository
    Api(ApiRepo),
}

impl ModelRepo {
    /// Resolve the `.onnx` model path for `voice`, downloading it if needed.
    pub fn resolve(&self, voice: &VoiceId) -> Result<PathBuf> {
        let model_file = voice.model_file();
        let config_file = voice.config_file();

        let path = match self {
            ModelRepo::File(path) => local_model(path)?,
            ModelRepo::Path(dir) => local_model(&dir.join(&model_file))?,
            ModelRepo::Cache(cache_repo) => {
                cache_repo
                    .get(&voice.hub_path(&config_file))
                    .wrap_err_with(|| format!("model config not in cache: {config_file}"))?;
                cache_repo
                    .get(&voice.hub_path(&model_file))
                    .wrap_err_with(|| format!("model not in cache: {model_file}"))?
            }
            ModelRepo::Api(api_repo) => {
                api_repo
                    .get(&voice.hub_path(&config_file))
                    .wrap_err_with(|| format!("failed to download from api: {config_file}"))?;
                api_repo
                    .get(&voice.hub_path(&model_file))
                    .wrap_err_with(|| format!("failed to download from api: {model_file}"))?
            }
        };

        let config = path.with_extension("onnx.json");
        if !config.exists() {
            tracing::warn!(path = %config.display(), "model config not found next to model");
        }

        Ok(path)
    }
}

/// Absolute path of a local model file, keeping symlinks so Piper finds the
/// `.onnx.json` beside the name it was given.
fn local_model(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        bail!("model not found: {:?}", path.display());
    }

    std::path::absolute(path)
        .wrap_err_with(|| format!("failed to resolve model: {:?}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessac() -> VoiceId {
        "en_US-lessac-medium".parse().unwrap()
    }

    #[test]
    fn parses_voice_id() {
        assert_eq!(
            lessac(),
            VoiceId {
                locale: "en_US".to_string(),
                name: "lessac".to_string(),
                quality: "medium".to_string(),
            }
        );
        assert_eq!(lessac().to_string(), "en_US-lessac-medium");
    }

    #[test]
    fn parses_name_with_underscores() {
        let voice: VoiceId = "en_GB-northern_english_male-medium".parse().unwrap();
        assert_eq!(voice.name, "northern_english_male");
        assert_eq!(voice.language(), "en");
    }

    #[test]
    fn rejects_malformed_voice_ids() {
        for id in ["lessac", "en_US-lessac", "en-lessac-medium", "en_US--medium", "a_b-c-d-e"] {
            assert!(id.parse::<VoiceId>().is_err(), "{id} should be rejected");
        }
    }

    #[test]
    fn builds_hub_paths() {
        let voice = lessac();
        assert_eq!(voice.model_file(), "en_US-lessac-medium.onnx");
        assert_eq!(
            voice.hub_path(&voice.config_file()),
            "en/en_US/lessac/medium/en_US-lessac-medium.onnx.json"
        );
    }

    #[test]
    fn resolves_model_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("en_US-lessac-medium.onnx");
        std::fs::write(&model, b"onnx").unwrap();
        std::fs::write(dir.path().join("en_US-lessac-medium.onnx.json"), b"{}").unwrap();

        let path = ModelRepo::Path(dir.path().to_path_buf())
            .resolve(&lessac())
            .unwrap();
        assert_eq!(path, model);
    }

    #[cfg(unix)]
    #[test]
    fn keeps_symlinked_model_beside_its_config() {
        let blobs = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(blobs.path().join("blob-model"), b"onnx").unwrap();
        std::fs::write(blobs.path().join("blob-config"), b"{}").unwrap();

        let model = dir.path().join("en_US-lessac-medium.onnx");
        std::os::unix::fs::symlink(blobs.path().join("blob-model"), &model).unwrap();
        std::os::unix::fs::symlink(
            blobs.path().join("blob-config"),
            dir.path().join("en_US-lessac-medium.onnx.json"),
        )
        .unwrap();

        let path = ModelRepo::Path(dir.path().to_path_buf())
            .resolve(&lessac())
            .unwrap();
        assert_eq!(path, model);
        assert!(path.with_extension("onnx.json").is_file());

        let path = ModelRepo::File(model.clone()).resolve(&lessac()).unwrap();
        assert_eq!(path, model);
    }

    #[test]
    fn missing_model_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModelRepo::File(dir.path().join("voice.onnx")).resolve(&lessac());
        assert!(result.is_err());
    }

    #[test]
    fn missing_model_in_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModelRepo::Path(dir.path().to_path_buf()).resolve(&lessac());
        assert!(result.is_err());
    }
}
