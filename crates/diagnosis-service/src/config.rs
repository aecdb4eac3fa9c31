//! Service configuration from environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use diagnosis_engine::{
    discover_kb_files, DiagnosisEngine, KbResult, KnowledgeBase, LoadConfig, NoopAnalyzer,
};

/// Default bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Which report analyzer the engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// Keyword heuristics over extracted lab text.
    #[default]
    Heuristic,
    /// Placeholder analysis for every report.
    None,
}

impl AnalyzerKind {
    /// Parses an analyzer name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Some(Self::Heuristic),
            "none" | "noop" => Some(Self::None),
            _ => None,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Directory of knowledge base TSV files.
    pub kb_path: Option<PathBuf>,
    /// Load `kb_path` on top of the builtin tables instead of replacing them.
    pub kb_extend: bool,
    /// Report analyzer.
    pub analyzer: AnalyzerKind,
    /// Bind address.
    pub bind: String,
    /// HTTP port.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            kb_path: None,
            kb_extend: false,
            analyzer: AnalyzerKind::default(),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Reads the configuration from the process environment.
    ///
    /// | variable | meaning |
    /// |---|---|
    /// | `DIAGNOSIS_KB_PATH` | directory of TSV tables |
    /// | `DIAGNOSIS_KB_EXTEND` | `1`/`true`/`yes` to extend the builtin tables |
    /// | `DIAGNOSIS_ANALYZER` | `heuristic` or `none` |
    /// | `DIAGNOSIS_BIND` | bind address |
    /// | `DIAGNOSIS_PORT` | HTTP port |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unparsable values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let kb_path = lookup("DIAGNOSIS_KB_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let kb_extend = lookup("DIAGNOSIS_KB_EXTEND")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.kb_extend);

        let analyzer = match lookup("DIAGNOSIS_ANALYZER") {
            Some(name) => AnalyzerKind::from_name(&name).unwrap_or_else(|| {
                tracing::warn!("Unknown analyzer {:?}, using heuristic", name);
                AnalyzerKind::Heuristic
            }),
            None => defaults.analyzer,
        };

        let bind = lookup("DIAGNOSIS_BIND").unwrap_or(defaults.bind);

        let port = match lookup("DIAGNOSIS_PORT") {
            Some(p) => p.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid port {:?}, using {}", p, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            kb_path,
            kb_extend,
            analyzer,
            bind,
            port,
        }
    }

    /// Returns the socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Loads the knowledge base this configuration describes.
    pub fn load_knowledge_base(&self) -> KbResult<KnowledgeBase> {
        let Some(path) = &self.kb_path else {
            return Ok(KnowledgeBase::builtin());
        };

        let files = discover_kb_files(path)?;
        let mut kb = if self.kb_extend {
            KnowledgeBase::builtin()
        } else {
            KnowledgeBase::new()
        };

        let stats = kb.load_all(&files, &LoadConfig::default())?;
        tracing::info!(
            "Loaded {} of {} knowledge base rows from {} ({} skipped)",
            stats.inserted_records,
            stats.total_records,
            path.display(),
            stats.error_count
        );

        Ok(kb)
    }

    /// Builds the engine: knowledge base plus analyzer.
    pub fn build_engine(&self) -> KbResult<DiagnosisEngine> {
        let engine = DiagnosisEngine::new(Arc::new(self.load_knowledge_base()?));
        Ok(match self.analyzer {
            AnalyzerKind::Heuristic => engine,
            AnalyzerKind::None => engine.with_analyzer(NoopAnalyzer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("DIAGNOSIS_KB_PATH", "/data/kb"),
            ("DIAGNOSIS_KB_EXTEND", "TRUE"),
            ("DIAGNOSIS_ANALYZER", "none"),
            ("DIAGNOSIS_BIND", "0.0.0.0"),
            ("DIAGNOSIS_PORT", "9000"),
        ]));

        assert_eq!(config.kb_path, Some(PathBuf::from("/data/kb")));
        assert!(config.kb_extend);
        assert_eq!(config.analyzer, AnalyzerKind::None);
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("DIAGNOSIS_ANALYZER", "remote"),
            ("DIAGNOSIS_PORT", "not-a-port"),
            ("DIAGNOSIS_KB_PATH", "  "),
        ]));

        assert_eq!(config.analyzer, AnalyzerKind::Heuristic);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.kb_path, None);
    }

    #[test]
    fn test_build_engine_builtin() {
        let engine = ServiceConfig::default().build_engine().unwrap();
        assert_eq!(engine.analyzer_name(), "heuristic");
        assert_eq!(engine.knowledge_base().keyword_count(), 66);

        let config = ServiceConfig {
            analyzer: AnalyzerKind::None,
            ..Default::default()
        };
        assert_eq!(config.build_engine().unwrap().analyzer_name(), "none");
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("symptom_conditions.tsv"),
            "keyword\tcondition\nearache\tOtitis media\n",
        )
        .unwrap();

        let replace = ServiceConfig {
            kb_path: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let kb = replace.load_knowledge_base().unwrap();
        assert_eq!(kb.keyword_count(), 1);

        let extend = ServiceConfig {
            kb_path: Some(dir.path().to_path_buf()),
            kb_extend: true,
            ..Default::default()
        };
        let kb = extend.load_knowledge_base().unwrap();
        assert_eq!(kb.keyword_count(), 67);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let config = ServiceConfig {
            kb_path: Some(PathBuf::from("/nonexistent/kb")),
            ..Default::default()
        };
        assert!(config.build_engine().is_err());
    }
}
