use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw sensor package: an activity code plus its positional fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }
}

/// Packages used when no input file is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of `{"code": "RUN", "data": [15000, 1, 75]}` objects.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let text = fs::read_to_string(path).with_context(|| format!("reading packages: {shown}"))?;
    let packages: Vec<Package> =
        serde_json::from_str(&text).with_context(|| format!("parsing packages: {shown}"))?;

    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_json_packages_in_order() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"[
                {{"code": "RUN", "data": [15000, 1, 75]}},
                {{"code": "SWM", "data": [720, 1, 80, 25, 40]}}
            ]"#
        )
        .unwrap();

        let packages = load_packages(f.path()).unwrap();
        assert_eq!(
            packages,
            vec![
                Package::new("RUN", &[15000.0, 1.0, 75.0]),
                Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            ]
        );
    }

    #[test]
    fn malformed_json_mentions_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"[{{"code": "RUN"}}]"#).unwrap();

        let err = load_packages(f.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("parsing packages"), "{msg}");
        assert!(msg.contains(&f.path().display().to_string()), "{msg}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_packages(&dir.path().join("nope.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading packages"));
    }

    #[test]
    fn samples_cover_every_workout_type() {
        let codes: Vec<_> = sample_packages().into_iter().map(|p| p.code).collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    }
}
