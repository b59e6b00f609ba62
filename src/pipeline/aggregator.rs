// file: src/pipeline/aggregator.rs
// description: runs the image and video branches for a topic and assembles the result
// reference: orchestrates query building, fetching and extraction per source

use crate::config::{Config, SearchConfig};
use crate::error::Result;
use crate::extractor::{Extractor, ImageExtractor, VideoExtractor};
use crate::fetch::SourceFetcher;
use crate::models::{ImageUrl, SearchResult, SourceKind, Topic, VideoRef};
use crate::query::QueryBuilder;
use crate::utils::OperationTimer;
use std::time::Duration;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

pub struct ContentAggregator {
    search: SearchConfig,
    queries: QueryBuilder,
    fetcher: SourceFetcher,
    images: Box<dyn Extractor<Item = ImageUrl>>,
    videos: Box<dyn Extractor<Item = VideoRef>>,
}

impl ContentAggregator {
    pub fn new(config: &Config) -> Result<Self> {
        let images = ImageExtractor::new(&config.extraction)?;
        let videos = VideoExtractor::new(config.sources.watch_url_prefix.clone());
        Self::with_extractors(config, Box::new(images), Box::new(videos))
    }

    /// Builds an aggregator around caller-supplied extraction strategies.
    pub fn with_extractors(
        config: &Config,
        images: Box<dyn Extractor<Item = ImageUrl>>,
        videos: Box<dyn Extractor<Item = VideoRef>>,
    ) -> Result<Self> {
        config.validate()?;
        let fetcher = SourceFetcher::new(config.http.clone())?;

        Ok(Self {
            search: config.search.clone(),
            queries: QueryBuilder::new(config.sources.clone()),
            fetcher,
            images,
            videos,
        })
    }

    /// Searches both sources for `topic`. Never fails: a source that cannot
    /// be fetched or parsed contributes an empty list and a logged warning.
    pub async fn search(&self, topic: &str) -> SearchResult {
        let topic = match Topic::parse(topic) {
            Ok(topic) => topic,
            Err(_) => return SearchResult::empty(),
        };

        let span = info_span!("search", search_id = %Uuid::new_v4(), topic = %topic);
        self.search_topic(&topic).instrument(span).await
    }

    async fn search_topic(&self, topic: &Topic) -> SearchResult {
        info!("Searching content for topic: {}", topic);
        let timer = OperationTimer::new("search");

        let (images, videos) = if self.search.concurrent_sources {
            futures::future::join(self.search_images(topic), self.search_videos(topic)).await
        } else {
            let images = self.search_images(topic).await;
            let videos = self.search_videos(topic).await;
            (images, videos)
        };

        let images = reduce(SourceKind::Image, images);
        let videos = reduce(SourceKind::Video, videos);
        let result = SearchResult::new(images, videos);

        timer.warn_if_slow(Duration::from_secs(15), "both sources");
        timer.finish_with_count(result.total_items());

        if self.search.pacing_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.search.pacing_delay_ms)).await;
        }

        result
    }

    pub async fn search_images(&self, topic: &Topic) -> Result<Vec<ImageUrl>> {
        self.run_source(topic, self.images.as_ref(), self.search.image_limit)
            .await
    }

    pub async fn search_videos(&self, topic: &Topic) -> Result<Vec<VideoRef>> {
        self.run_source(topic, self.videos.as_ref(), self.search.video_limit)
            .await
    }

    async fn run_source<T>(
        &self,
        topic: &Topic,
        extractor: &dyn Extractor<Item = T>,
        limit: usize,
    ) -> Result<Vec<T>> {
        let kind = extractor.kind();
        let url = self.queries.build_search_url(topic.as_str(), kind);
        let body = self.fetcher.fetch(&url, kind).await.into_result(kind)?;
        extractor.extract(&body, limit)
    }
}

fn reduce<T>(kind: SourceKind, outcome: Result<Vec<T>>) -> Vec<T> {
    match outcome {
        Ok(items) => {
            info!("{} source yielded {} results", kind, items.len());
            items
        }
        Err(e) => {
            warn!("{} source yielded no results: {}", kind, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const IMAGE_PAGE: &str = r#"<html><body>
<a class="iusc" m='{"murl":"https://cdn.example.org/one.jpg"}'>1</a>
<a class="iusc" m='{"murl":"https://cdn.example.org/two.webp"}'>2</a>
<a class="iusc" m='{"murl":"https:\/\/cdn.example.org\/three.png"}'>3</a>
</body></html>"#;

    const VIDEO_PAGE: &str = r#"<html><body><script>var ytInitialData = {"contents":[{"videoRenderer":{"videoId":"vid00000001","title":{"runs":[{"text":"Photosynthesis"}]}}},{"videoRenderer":{"videoId":"vid00000002","title":{"runs":[{"text":"Chlorophyll"}]}}}]};</script></body></html>"#;

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default_config();
        config.sources.image_search_url = format!("{}/images/search", server.uri());
        config.sources.video_search_url = format!("{}/results", server.uri());
        config.http.timeout_ms = 2_000;
        config.search.pacing_delay_ms = 0;
        config
    }

    async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    struct FailingImages;

    impl Extractor for FailingImages {
        type Item = ImageUrl;

        fn kind(&self) -> SourceKind {
            SourceKind::Image
        }

        fn extract(&self, _body: &str, _limit: usize) -> Result<Vec<ImageUrl>> {
            Err(ScrapeError::Parse {
                kind: SourceKind::Image,
                message: "unreadable".to_string(),
            })
        }
    }

    #[test]
    fn test_blank_topic_short_circuits() {
        let aggregator = ContentAggregator::new(&Config::default_config()).unwrap();
        let result = tokio_test::block_on(aggregator.search("   \t"));
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_search_combines_both_sources() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/search"))
            .and(query_param("q", "Photosynthesis"))
            .and(query_param("form", "HDRSC2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(IMAGE_PAGE))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/results"))
            .and(query_param("search_query", "Photosynthesis educational"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VIDEO_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let aggregator = ContentAggregator::new(&config_for(&server)).unwrap();
        let (images, videos) = aggregator.search("  Photosynthesis ").await.into_parts();

        let images: Vec<&str> = images.iter().map(ImageUrl::as_str).collect();
        assert_eq!(
            images,
            vec![
                "https://cdn.example.org/one.jpg",
                "https://cdn.example.org/three.png"
            ]
        );
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Photosynthesis");
        assert_eq!(videos[1].url, "https://www.youtube.com/watch?v=vid00000002");
    }

    #[tokio::test]
    async fn test_image_failure_does_not_affect_videos() {
        let server = MockServer::start().await;
        mount_page(&server, "/images/search", 503, "unavailable").await;
        mount_page(&server, "/results", 200, VIDEO_PAGE).await;

        let aggregator = ContentAggregator::new(&config_for(&server)).unwrap();
        let result = aggregator.search("Photosynthesis").await;

        assert!(result.images.is_empty());
        assert_eq!(result.videos.len(), 2);
    }

    #[tokio::test]
    async fn test_video_failure_does_not_affect_images_concurrently() {
        let server = MockServer::start().await;
        mount_page(&server, "/images/search", 200, IMAGE_PAGE).await;
        mount_page(&server, "/results", 500, "boom").await;

        let mut config = config_for(&server);
        config.search.concurrent_sources = true;
        let aggregator = ContentAggregator::new(&config).unwrap();
        let result = aggregator.search("Photosynthesis").await;

        assert_eq!(result.images.len(), 2);
        assert!(result.videos.is_empty());
    }

    #[tokio::test]
    async fn test_branch_errors_are_explicit() {
        let server = MockServer::start().await;
        mount_page(&server, "/images/search", 429, "slow down").await;
        mount_page(&server, "/results", 200, VIDEO_PAGE).await;

        let aggregator = ContentAggregator::new(&config_for(&server)).unwrap();
        let topic = Topic::parse("Photosynthesis").unwrap();

        let err = aggregator.search_images(&topic).await.unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::HttpStatus {
                kind: SourceKind::Image,
                status: 429
            }
        ));
        assert_eq!(aggregator.search_videos(&topic).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_swapped_extractor_failure_is_contained() {
        let server = MockServer::start().await;
        mount_page(&server, "/images/search", 200, IMAGE_PAGE).await;
        mount_page(&server, "/results", 200, VIDEO_PAGE).await;

        let config = config_for(&server);
        let aggregator = ContentAggregator::with_extractors(
            &config,
            Box::new(FailingImages),
            Box::new(VideoExtractor::new(config.sources.watch_url_prefix.clone())),
        )
        .unwrap();

        let result = aggregator.search("Photosynthesis").await;
        assert!(result.images.is_empty());
        assert_eq!(result.videos.len(), 2);
    }

    #[tokio::test]
    async fn test_limits_applied_from_config() {
        let server = MockServer::start().await;
        mount_page(&server, "/images/search", 200, IMAGE_PAGE).await;
        mount_page(&server, "/results", 200, VIDEO_PAGE).await;

        let mut config = config_for(&server);
        config.search.image_limit = 1;
        config.search.video_limit = 1;
        let aggregator = ContentAggregator::new(&config).unwrap();
        let result = aggregator.search("Photosynthesis").await;

        assert_eq!(result.images.len(), 1);
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.videos[0].id, "vid00000001");
    }

    #[tokio::test]
    async fn test_pacing_delay_applied_after_search() {
        let server = MockServer::start().await;
        mount_page(&server, "/images/search", 200, IMAGE_PAGE).await;
        mount_page(&server, "/results", 200, VIDEO_PAGE).await;

        let mut config = config_for(&server);
        config.search.pacing_delay_ms = 150;
        let aggregator = ContentAggregator::new(&config).unwrap();

        let start = std::time::Instant::now();
        aggregator.search("Photosynthesis").await;
        assert!(start.elapsed() >= Duration::from_millis(150));
    }
}
