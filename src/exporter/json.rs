// file: src/exporter/json.rs
// description: json export of search results to disk

use crate::error::Result;
use crate::models::{SearchResult, Topic};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedSearch<'a> {
    pub topic: &'a Topic,
    pub exported_at: String,
    pub image_count: usize,
    pub video_count: usize,
    #[serde(flatten)]
    pub result: &'a SearchResult,
}

impl<'a> ExportedSearch<'a> {
    pub fn new(topic: &'a Topic, result: &'a SearchResult) -> Self {
        Self {
            topic,
            exported_at: Utc::now().to_rfc3339(),
            image_count: result.images.len(),
            video_count: result.videos.len(),
            result,
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `{topic-slug}-{timestamp}.json` and returns its path.
    pub fn export(&self, topic: &Topic, result: &SearchResult, pretty: bool) -> Result<PathBuf> {
        let exported = ExportedSearch::new(topic, result);
        let json = if pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };

        let file_name = format!(
            "{}-{}.json",
            topic.slug(),
            Utc::now().format("%Y%m%dT%H%M%S%3f")
        );
        let path = self.output_dir.join(file_name);
        fs::write(&path, json)?;

        info!(
            "Exported {} images and {} videos to {}",
            exported.image_count,
            exported.video_count,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageUrl, VideoRef};
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("exports/today");
        assert!(JsonExporter::new(&nested).is_ok());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_export_writes_topic_and_results() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let topic = Topic::parse("Water Cycle").unwrap();
        let result = SearchResult::new(
            vec![ImageUrl::parse("https://cdn.example.org/rain.jpg", &[]).unwrap()],
            vec![VideoRef::new(
                "wc000000001".to_string(),
                "The Water Cycle".to_string(),
                "https://www.youtube.com/watch?v=",
            )],
        );

        let path = exporter.export(&topic, &result, true).unwrap();
        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("water-cycle-"));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["topic"], "Water Cycle");
        assert_eq!(written["image_count"], 1);
        assert_eq!(written["images"][0], "https://cdn.example.org/rain.jpg");
        assert_eq!(written["videos"][0]["title"], "The Water Cycle");
    }
}
