// file: src/query/builder.rs
// description: turns a topic into source-specific search urls
// reference: https://docs.rs/urlencoding

use crate::config::SourcesConfig;
use crate::models::SourceKind;

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    sources: SourcesConfig,
}

impl QueryBuilder {
    pub fn new(sources: SourcesConfig) -> Self {
        Self { sources }
    }

    /// Pure string transformation; any topic yields a valid URL.
    pub fn build_search_url(&self, topic: &str, kind: SourceKind) -> String {
        match kind {
            SourceKind::Image => format!(
                "{}?q={}&form={}",
                self.sources.image_search_url,
                urlencoding::encode(topic),
                urlencoding::encode(&self.sources.image_form)
            ),
            SourceKind::Video => {
                let query = self.video_query(topic);
                format!(
                    "{}?search_query={}",
                    self.sources.video_search_url,
                    urlencoding::encode(&query)
                )
            }
        }
    }

    fn video_query(&self, topic: &str) -> String {
        let qualifier = self.sources.video_qualifier.trim();
        if qualifier.is_empty() {
            topic.to_string()
        } else {
            format!("{} {}", topic, qualifier)
        }
    }
}
