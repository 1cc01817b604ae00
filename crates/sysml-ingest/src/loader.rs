//! Document parsing and per-category merge.

use std::path::Path;
use std::time::Instant;

use serde_yaml::Value;
use tracing::{debug, info, info_span};

use sysml_model::{Category, CategoryPolicy, Element, Model};

use crate::discovery::list_yaml_files;
use crate::error::{IngestError, Result};

/// Loads a model directory into a single merged [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelLoader {
    policy: CategoryPolicy,
}

impl ModelLoader {
    pub fn new(policy: CategoryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    /// Read every `*.yaml` document in `dir` in file-name order and
    /// concatenate each category's list across documents.
    pub fn load(&self, dir: &Path) -> Result<Model> {
        let span = info_span!("load_model", model_dir = %dir.display());
        let _guard = span.enter();
        let start = Instant::now();

        let files = list_yaml_files(dir)?;
        let mut model = Model::new();
        for path in &files {
            let content = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            self.merge_document(&mut model, path, &content)?;
        }

        info!(
            file_count = files.len(),
            element_count = model.element_count(),
            duration_ms = start.elapsed().as_millis(),
            "model loaded"
        );
        Ok(model)
    }

    /// Merge one document's category lists into `model`.
    ///
    /// `path` is used only for diagnostics.
    pub fn merge_document(&self, model: &mut Model, path: &Path, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            debug!(path = %path.display(), "empty document skipped");
            return Ok(());
        }

        let document: Value =
            serde_yaml::from_str(content).map_err(|e| IngestError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mapping = match document {
            Value::Null => return Ok(()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(IngestError::DocumentFormat {
                    path: path.to_path_buf(),
                    reason: format!("root is {}, expected a mapping", describe(&other)),
                });
            }
        };

        for (key, value) in mapping {
            let Some(key) = key.as_str() else {
                debug!(path = %path.display(), "non-string document key skipped");
                continue;
            };
            match Category::from_key(key) {
                Some(category) => {
                    let elements = decode_elements(path, key, value)?;
                    debug!(path = %path.display(), category = key, count = elements.len(), "merged");
                    model.extend(category, elements);
                }
                None => match self.policy {
                    CategoryPolicy::Strict => {
                        debug!(path = %path.display(), category = key, "unknown category ignored");
                    }
                    CategoryPolicy::Permissive => {
                        let elements = decode_elements(path, key, value)?;
                        debug!(path = %path.display(), category = key, count = elements.len(), "passthrough");
                        model.extend_passthrough(key, elements);
                    }
                },
            }
        }
        Ok(())
    }
}

/// Load a model directory with the given category policy.
pub fn load_model(dir: &Path, policy: CategoryPolicy) -> Result<Model> {
    ModelLoader::new(policy).load(dir)
}

/// A category value is a list of element records; a single record is
/// accepted as a one-element list and `null` as an empty one.
fn decode_elements(path: &Path, category: &str, value: Value) -> Result<Vec<Element>> {
    let items = match value {
        Value::Null => Vec::new(),
        Value::Sequence(items) => items,
        other => vec![other],
    };
    items
        .into_iter()
        .map(|item| {
            serde_yaml::from_value::<Element>(item).map_err(|e| IngestError::ElementDecode {
                path: path.to_path_buf(),
                category: category.to_string(),
                source: e,
            })
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
