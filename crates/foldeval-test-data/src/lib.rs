//! foldeval-test-data
//!
//! A module to provide evaluation config fixtures embedded in the crate for
//! use in testing. Fixtures are the YAML artifacts the loader is expected to
//! handle: an evaluation sweep layered over a named inference base.
//!
//! The fixtures are represented as `TestConfig` objects which package the raw
//! text and create temporary files for programs to operate on, or as a
//! `TestConfigDir` materializing the whole named-config directory at once.
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile, TempDir};

/// Test Config
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use foldeval_test_data::TestConfig;
/// let (cfg_file, _temp) = TestConfig::inference_base().create_temp().unwrap();
/// ```
#[derive(Debug)]
pub struct TestConfig {
    filetext: &'static str,
    name: &'static str,
}

impl TestConfig {
    /// FID evaluation sweep: 60..=255 step 5, three metric-factory entries.
    /// Extends `inference_ucond_200m_notri`.
    pub fn fid_eval() -> Self {
        Self {
            filetext: include_str!("../data/configs/fid_eval.yaml"),
            name: "fid_eval",
        }
    }

    /// Unconditional 200M inference base config (complete, no `extends`).
    pub fn inference_base() -> Self {
        Self {
            filetext: include_str!("../data/configs/inference_ucond_200m_notri.yaml"),
            name: "inference_ucond_200m_notri",
        }
    }

    /// Raw YAML text of the fixture.
    pub fn text(&self) -> &'static str {
        self.filetext
    }

    /// Config name as referenced by an `extends` directive.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let mut temp = Builder::new().suffix(".yaml").tempfile()?;
        temp.write_all(self.filetext.as_bytes())?;
        temp.flush()?;
        let path = temp.path().to_string_lossy().into_owned();
        Ok((path, temp))
    }
}

/// Materializes the named-config directory used by `extends` resolution.
#[derive(Debug)]
pub struct TestConfigDir {
    dir: TempDir,
}

impl TestConfigDir {
    /// Directory holding `fid_eval.yaml` and its `inference_ucond_200m_notri`
    /// base, as the loader expects to find them on disk.
    pub fn standard() -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        for fixture in [TestConfig::fid_eval(), TestConfig::inference_base()] {
            let path = dir.path().join(format!("{}.yaml", fixture.name()));
            fs::write(path, fixture.text())?;
        }
        Ok(Self { dir })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}
