//! OpenAPI document translation
//!
//! Replaces `api.doc.*` placeholders in a JSON OpenAPI document with the
//! entries of a language dictionary.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apidesc_core::batch;
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::CliError;

/// Prefix marking a string as a dictionary key
pub const KEY_PREFIX: &str = "api.doc.";

/// Object fields whose values may be dictionary keys
pub const TRANSLATABLE_FIELDS: [&str; 4] = ["description", "summary", "title", "name"];

/// Members added to `info` when absent. Values are dictionary keys except
/// for the version and license.
pub fn default_info() -> Map<String, Value> {
    let info = json!({
        "title": "api.doc.general.title",
        "description": "api.doc.general.description",
        "version": "1.0.0",
        "contact": {
            "name": "api.doc.general.contact.name",
            "email": "api.doc.general.contact.email"
        },
        "license": {
            "name": "Apache 2.0",
            "url": "https://www.apache.org/licenses/LICENSE-2.0.html"
        }
    });

    match info {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Key lookups performed during one translation
#[derive(Debug, Default, Clone)]
pub struct TranslationStats {
    pub total_keys: usize,
    pub translated_keys: usize,
    pub missing_keys: BTreeSet<String>,
    /// Problems met for the language: unloadable dictionary, malformed tags
    pub errors: Vec<String>,
}

impl TranslationStats {
    fn record(&mut self, key: &str, found: bool) {
        self.total_keys += 1;
        if found {
            self.translated_keys += 1;
        } else {
            self.missing_keys.insert(key.to_string());
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        log::warn!("{error}");
        self.errors.push(error);
    }

    /// Share of lookups that found a translation, in percent
    pub fn translation_rate(&self) -> f64 {
        if self.total_keys == 0 {
            return 0.0;
        }
        100.0 * self.translated_keys as f64 / self.total_keys as f64
    }

    pub fn summary(&self) -> TranslationSummary {
        TranslationSummary {
            total_keys: self.total_keys,
            translated_keys: self.translated_keys,
            missing_keys_count: self.missing_keys.len(),
            translation_rate: format!("{:.1}%", self.translation_rate()),
            errors: self.errors.len(),
        }
    }
}

/// Counters as written to the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationSummary {
    pub total_keys: usize,
    pub translated_keys: usize,
    pub missing_keys_count: usize,
    pub translation_rate: String,
    pub errors: usize,
}

/// `translation_report_{language}.json`
#[derive(Debug, Serialize)]
pub struct TranslationReport<'a> {
    pub language: &'a str,
    /// RFC 3339, local time
    pub timestamp: String,
    pub statistics: TranslationSummary,
    pub missing_keys: &'a BTreeSet<String>,
    pub errors: &'a [String],
}

/// Translates documents with one dictionary
#[derive(Debug)]
pub struct DocumentTranslator<'a> {
    dictionary: &'a IndexMap<String, String>,
    stats: TranslationStats,
}

impl<'a> DocumentTranslator<'a> {
    pub fn new(dictionary: &'a IndexMap<String, String>) -> Self {
        Self {
            dictionary,
            stats: TranslationStats::default(),
        }
    }

    pub fn stats(&self) -> &TranslationStats {
        &self.stats
    }

    pub fn into_stats(self) -> TranslationStats {
        self.stats
    }

    /// Fill `info`, translate tags, then every translatable field.
    ///
    /// Every placeholder is looked up exactly once. Missing keys stay in
    /// the document as written.
    pub fn translate(&mut self, document: &mut Value) -> Result<(), CliError> {
        let root = document.as_object_mut().ok_or_else(|| {
            CliError::ProcessingError("OpenAPI document must be a JSON object".to_string())
        })?;

        ensure_info(root);
        self.translate_tags(root);
        self.translate_value(document);
        Ok(())
    }

    /// Tags found in the dictionary get their name and description set to
    /// the translation
    fn translate_tags(&mut self, root: &mut Map<String, Value>) {
        let tags = match root.get_mut("tags") {
            None => return,
            Some(Value::Array(tags)) => tags,
            Some(_) => {
                self.stats.add_error("'tags' is not an array");
                return;
            }
        };

        for (i, tag) in tags.iter_mut().enumerate() {
            let Some(tag) = tag.as_object_mut() else {
                self.stats.add_error(format!("tags[{i}] is not an object"));
                continue;
            };
            let Some(key) = tag.get("name").and_then(Value::as_str) else {
                continue;
            };
            if !key.starts_with(KEY_PREFIX) {
                continue;
            }
            if let Some(translated) = self.dictionary.get(key) {
                self.stats.record(key, true);
                tag.insert("name".to_string(), Value::String(translated.clone()));
                tag.insert("description".to_string(), Value::String(translated.clone()));
            }
        }
    }

    fn translate_value(&mut self, value: &mut Value) {
        match value {
            Value::Object(map) => {
                for (field, child) in map.iter_mut() {
                    match child {
                        Value::String(text)
                            if TRANSLATABLE_FIELDS.contains(&field.as_str())
                                && text.starts_with(KEY_PREFIX) =>
                        {
                            if let Some(translated) = self.lookup(text, field) {
                                *text = translated;
                            }
                        }
                        other => self.translate_value(other),
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.translate_value(item);
                }
            }
            _ => {}
        }
    }

    fn lookup(&mut self, key: &str, context: &str) -> Option<String> {
        let found = self.dictionary.get(key).cloned();
        self.stats.record(key, found.is_some());
        if found.is_none() {
            log::warn!("Missing translation for key: '{key}' (context: {context})");
        }
        found
    }
}

/// Create `info` when absent and add any missing default member
pub fn ensure_info(root: &mut Map<String, Value>) {
    let info = root
        .entry("info")
        .or_insert_with(|| Value::Object(Map::new()));
    if !info.is_object() {
        *info = Value::Object(Map::new());
    }

    if let Value::Object(info) = info {
        for (key, default) in default_info() {
            info.entry(key).or_insert(default);
        }
    }
}

/// Dictionary for `language` under `dir`: the merged `*.json` files of
/// `{dir}/{language}/`, or `{dir}/{language}.json`
pub fn load_dictionary(dir: &Path, language: &str) -> Result<IndexMap<String, String>> {
    let language_dir = dir.join(language);
    let files = if language_dir.is_dir() {
        batch::discover_dictionaries(&language_dir)?
    } else {
        let file = dir.join(format!("{language}.json"));
        if !file.is_file() {
            return Err(CliError::FileNotFound(file.display().to_string()).into());
        }
        vec![file]
    };

    let mut dictionary = IndexMap::new();
    for file in files {
        let content = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read dictionary {}", file.display()))?;
        dictionary.extend(batch::parse_dictionary(&file, &content)?);
    }

    log::debug!("Loaded {} entries for {language}", dictionary.len());
    Ok(dictionary)
}

/// Paths written for one language
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedOutput {
    pub document: PathBuf,
    pub report: Option<PathBuf>,
}

/// Write `openapi_{language}.json` and, when asked, its report into
/// `output_dir`
pub fn write_outputs(
    output_dir: &Path,
    language: &str,
    document: &Value,
    stats: &TranslationStats,
    create_report: bool,
) -> Result<TranslatedOutput> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let document_path = output_dir.join(format!("openapi_{language}.json"));
    write_json(&document_path, document)?;

    let report = if create_report {
        let report_path = output_dir.join(format!("translation_report_{language}.json"));
        let report = TranslationReport {
            language,
            timestamp: Local::now().to_rfc3339(),
            statistics: stats.summary(),
            missing_keys: &stats.missing_keys,
            errors: &stats.errors,
        };
        write_json(&report_path, &report)?;
        Some(report_path)
    } else {
        None
    };

    Ok(TranslatedOutput {
        document: document_path,
        report,
    })
}

/// Copy the untouched document to
/// `{output_dir}/backup/openapi_original_{%Y%m%d_%H%M%S}.json`
pub fn write_backup(output_dir: &Path, document: &Value, at: DateTime<Local>) -> Result<PathBuf> {
    let backup_dir = output_dir.join("backup");
    fs::create_dir_all(&backup_dir)
        .with_context(|| format!("Failed to create {}", backup_dir.display()))?;

    let path = backup_dir.join(format!("openapi_original_{}.json", at.format("%Y%m%d_%H%M%S")));
    write_json(&path, document)?;
    log::info!("Backup of the original document saved to {}", path.display());
    Ok(path)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn dictionary() -> IndexMap<String, String> {
        [
            ("api.doc.general.title", "API de Visitas"),
            ("api.doc.general.description", "Gerencia visitas."),
            ("api.doc.tag.visit", "Visitas"),
            ("api.doc.v1.visit.get.summary", "Busca uma visita."),
            ("api.doc.v1.visit.id.description", "ID da visita."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn document() -> Value {
        json!({
            "openapi": "3.0.1",
            "tags": [{"name": "api.doc.tag.visit"}, {"name": "Plain"}],
            "paths": {
                "/visits/{id}": {
                    "get": {
                        "summary": "api.doc.v1.visit.get.summary",
                        "operationId": "api.doc.not.a.field",
                        "parameters": [{
                            "name": "id",
                            "description": "api.doc.v1.visit.id.description"
                        }],
                        "responses": {
                            "404": {"description": "api.doc.v1.visit.get-404.description"}
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_translate_document() {
        let dictionary = dictionary();
        let mut doc = document();
        let mut translator = DocumentTranslator::new(&dictionary);
        translator.translate(&mut doc).unwrap();

        assert_eq!(doc["info"]["title"], "API de Visitas");
        assert_eq!(doc["info"]["version"], "1.0.0");
        assert_eq!(doc["info"]["license"]["name"], "Apache 2.0");
        assert_eq!(doc["tags"][0]["name"], "Visitas");
        assert_eq!(doc["tags"][0]["description"], "Visitas");
        assert_eq!(doc["tags"][1], json!({"name": "Plain"}));

        let get = &doc["paths"]["/visits/{id}"]["get"];
        assert_eq!(get["summary"], "Busca uma visita.");
        assert_eq!(get["operationId"], "api.doc.not.a.field");
        assert_eq!(get["parameters"][0]["name"], "id");
        assert_eq!(get["parameters"][0]["description"], "ID da visita.");
        assert_eq!(
            get["responses"]["404"]["description"],
            "api.doc.v1.visit.get-404.description"
        );
    }

    #[test]
    fn test_stats_count_each_placeholder_once() {
        let dictionary = dictionary();
        let mut doc = document();
        let mut translator = DocumentTranslator::new(&dictionary);
        translator.translate(&mut doc).unwrap();
        let stats = translator.into_stats();

        // info: title, description, contact.name, contact.email
        // tags: 1; paths: summary, parameter description, 404 description
        assert_eq!(stats.total_keys, 8);
        assert_eq!(stats.translated_keys, 5);
        assert_eq!(
            stats.missing_keys.iter().map(String::as_str).collect::<Vec<_>>(),
            vec![
                "api.doc.general.contact.email",
                "api.doc.general.contact.name",
                "api.doc.v1.visit.get-404.description",
            ]
        );
        assert_eq!(stats.summary().translation_rate, "62.5%");
    }

    #[test]
    fn test_existing_info_members_are_kept() {
        let mut root = Map::new();
        root.insert("info".to_string(), json!({"title": "Minha API", "version": "2.3.0"}));
        ensure_info(&mut root);

        assert_eq!(root["info"]["title"], "Minha API");
        assert_eq!(root["info"]["version"], "2.3.0");
        assert_eq!(root["info"]["description"], "api.doc.general.description");
        assert!(root["info"]["contact"].is_object());
    }

    #[test]
    fn test_rejects_non_object_document() {
        let dictionary = IndexMap::new();
        let mut doc = json!(["not", "a", "document"]);
        assert!(DocumentTranslator::new(&dictionary).translate(&mut doc).is_err());
    }

    #[test]
    fn test_empty_stats_rate() {
        assert_eq!(TranslationStats::default().summary().translation_rate, "0.0%");
    }

    #[test]
    fn test_load_dictionary_from_language_dir_or_file() {
        let temp_dir = TempDir::new().unwrap();
        let pt = temp_dir.path().join("pt-BR");
        fs::create_dir(&pt).unwrap();
        fs::write(pt.join("a.json"), r#"{"api.doc.a": "A"}"#).unwrap();
        fs::write(pt.join("b.json"), r#"{"api.doc.b": "B", "api.doc.a": "A2"}"#).unwrap();
        fs::write(temp_dir.path().join("en-US.json"), r#"{"api.doc.a": "en"}"#).unwrap();

        let merged = load_dictionary(temp_dir.path(), "pt-BR").unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["api.doc.a"], "A2");

        let single = load_dictionary(temp_dir.path(), "en-US").unwrap();
        assert_eq!(single["api.doc.a"], "en");

        let missing = load_dictionary(temp_dir.path(), "fr-FR").unwrap_err();
        assert!(matches!(
            missing.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_write_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("dist");
        let mut stats = TranslationStats::default();
        stats.record("api.doc.x", false);

        let written = write_outputs(&out, "pt-BR", &json!({"openapi": "3.0.1"}), &stats, true)
            .unwrap();
        assert_eq!(written.document, out.join("openapi_pt-BR.json"));

        let report: Value =
            serde_json::from_str(&fs::read_to_string(written.report.unwrap()).unwrap()).unwrap();
        assert_eq!(report["language"], "pt-BR");
        assert_eq!(report["statistics"]["missing_keys_count"], 1);
        assert_eq!(report["missing_keys"], json!(["api.doc.x"]));
        let timestamp = report["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());

        let no_report = write_outputs(&out, "en-US", &json!({}), &stats, false).unwrap();
        assert!(no_report.report.is_none());
        assert!(!out.join("translation_report_en-US.json").exists());
    }

    #[test]
    fn test_malformed_tags_are_recorded() {
        let dictionary = dictionary();
        let mut doc = json!({"tags": ["api.doc.tag.visit", {"name": "api.doc.tag.visit"}]});
        let mut translator = DocumentTranslator::new(&dictionary);
        translator.translate(&mut doc).unwrap();
        assert_eq!(doc["tags"][1]["name"], "Visitas");
        assert_eq!(translator.stats().errors, vec!["tags[0] is not an object"]);

        let mut doc = json!({"tags": {"name": "api.doc.tag.visit"}});
        let mut translator = DocumentTranslator::new(&dictionary);
        translator.translate(&mut doc).unwrap();
        let stats = translator.into_stats();
        assert_eq!(stats.errors, vec!["'tags' is not an array"]);
        assert_eq!(stats.summary().errors, 1);
    }

    #[test]
    fn test_errors_reach_the_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut stats = TranslationStats::default();
        stats.add_error("Dictionary not found");

        let written = write_outputs(temp_dir.path(), "es-ES", &json!({}), &stats, true).unwrap();
        let report: Value =
            serde_json::from_str(&fs::read_to_string(written.report.unwrap()).unwrap()).unwrap();
        assert_eq!(report["statistics"]["errors"], 1);
        assert_eq!(report["errors"], json!(["Dictionary not found"]));
    }

    #[test]
    fn test_write_backup() {
        let temp_dir = TempDir::new().unwrap();
        let at = Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 5).unwrap();
        let doc = json!({"openapi": "3.0.1", "info": {"title": "api.doc.general.title"}});

        let path = write_backup(temp_dir.path(), &doc, at).unwrap();
        assert_eq!(
            path,
            temp_dir.path().join("backup").join("openapi_original_20240517_093005.json")
        );
        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, doc);
    }
}
