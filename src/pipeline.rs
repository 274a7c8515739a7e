// src/pipeline.rs
//! The site build: fetch entries, compose article pages, write them, and
//! refresh the index.
//!
//! Each stage is a capability trait so it can be exercised on its own;
//! [`SiteBuild`] implements all three over one [`SiteConfig`].

use crate::api::NotionRepository;
use crate::config::{FailurePolicy, SiteConfig};
use crate::error::AppError;
use crate::formatting::{
    extract_metadata, render_article, render_blocks, splice_article_list, update_article_count,
    ArticleMetadata, ListItemRenderer, RenderContext,
};
use crate::model::{Block, Entry};
use crate::output::{
    article_filename, article_path, deliver, DeliveryTarget, OutputPlan, OutputReport,
};
use crate::types::EntryId;

/// Retrieves the database rows and their content.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn list_entries(&self) -> Result<Vec<Entry>, AppError>;
    async fn list_blocks(&self, entry: &EntryId) -> Result<Vec<Block>, AppError>;
}

/// Turns one entry and its blocks into a finished article page.
pub trait ArticleComposer {
    fn compose(
        &self,
        entry: &Entry,
        metadata: ArticleMetadata,
        blocks: &[Block],
    ) -> Result<ComposedArticle, AppError>;
}

/// Writes the generated pages and refreshes the index.
pub trait SiteDelivery {
    fn deliver_articles(&self, articles: &[ComposedArticle]) -> Result<OutputReport, AppError>;

    /// Returns whether the index file was rewritten.
    fn update_index(&self, articles: &[ComposedArticle]) -> Result<bool, AppError>;
}

/// An article page ready to be written.
#[derive(Debug, Clone)]
pub struct ComposedArticle {
    pub id: EntryId,
    pub filename: String,
    pub metadata: ArticleMetadata,
    pub html: String,
}

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub entry_count: usize,
    pub articles_written: usize,
    pub index_updated: bool,
}

/// One run of the site build.
pub struct SiteBuild<'a> {
    config: &'a SiteConfig,
    repository: &'a dyn NotionRepository,
}

impl<'a> SiteBuild<'a> {
    pub fn new(config: &'a SiteConfig, repository: &'a dyn NotionRepository) -> Self {
        Self { config, repository }
    }

    /// Runs every stage in order. Requests are issued one at a time, in
    /// query order; nothing is written until every entry has been composed.
    pub async fn run(&self) -> Result<BuildReport, AppError> {
        log::info!("Fetching articles from Notion...");
        let entries = self.tolerate("articles", self.list_entries().await)?;
        log::debug!("Query returned {} entries", entries.len());

        let mut articles = Vec::with_capacity(entries.len());
        for entry in &entries {
            let metadata = extract_metadata(entry);
            log::info!("Processing: {}", metadata.title);

            let blocks = self.tolerate("page content", self.list_blocks(&entry.id).await)?;
            articles.push(self.compose(entry, metadata, &blocks)?);
        }

        let report = self.deliver_articles(&articles)?;

        log::info!("Updating {}...", self.config.index_path.display());
        let index_updated = self.update_index(&articles)?;
        if index_updated {
            log::info!("Site updated successfully!");
        }

        Ok(BuildReport {
            entry_count: entries.len(),
            articles_written: report.stats.operations_completed,
            index_updated,
        })
    }

    /// Applies the failure policy to the result of a Notion request.
    fn tolerate<T: Default>(&self, what: &str, result: Result<T, AppError>) -> Result<T, AppError> {
        match result {
            Err(e)
                if self.config.failure_policy == FailurePolicy::Degrade
                    && e.is_request_failure() =>
            {
                match e.response_body() {
                    Some(body) => log::error!("Error fetching {}: {}", what, body),
                    None => log::error!("Error fetching {}: {}", what, e),
                }
                Ok(T::default())
            }
            other => other,
        }
    }

    fn render_list(&self, articles: &[ComposedArticle]) -> Result<String, AppError> {
        let renderer = ListItemRenderer::new(self.config.escape_html)?;
        let items = articles
            .iter()
            .map(|article| renderer.render(&article.metadata, &article.filename))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items.join("\n"))
    }
}

#[async_trait::async_trait]
impl ContentSource for SiteBuild<'_> {
    async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        self.repository
            .query_entries(&self.config.credentials.database_id, &self.config.query)
            .await
    }

    async fn list_blocks(&self, entry: &EntryId) -> Result<Vec<Block>, AppError> {
        self.repository.retrieve_children(entry).await
    }
}

impl ArticleComposer for SiteBuild<'_> {
    fn compose(
        &self,
        entry: &Entry,
        metadata: ArticleMetadata,
        blocks: &[Block],
    ) -> Result<ComposedArticle, AppError> {
        let context = RenderContext {
            escape_html: self.config.escape_html,
        };
        let content = render_blocks(blocks, &context);
        let html = render_article(
            &self.config.template_path,
            &metadata,
            &content,
            self.config.escape_html,
        )?;

        Ok(ComposedArticle {
            id: entry.id.clone(),
            filename: article_filename(&entry.id),
            metadata,
            html,
        })
    }
}

impl SiteDelivery for SiteBuild<'_> {
    fn deliver_articles(&self, articles: &[ComposedArticle]) -> Result<OutputReport, AppError> {
        let plan = articles
            .iter()
            .fold(OutputPlan::new(), |plan, article| {
                plan.with_operation(DeliveryTarget::WriteFile {
                    path: article_path(&self.config.output_dir, &article.id),
                    content: article.html.clone(),
                })
            });

        let report = deliver(plan)?;
        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }
        Ok(report)
    }

    fn update_index(&self, articles: &[ComposedArticle]) -> Result<bool, AppError> {
        let index_path = &self.config.index_path;
        let original = std::fs::read_to_string(index_path)?;
        let list = self.render_list(articles)?;

        let spliced = match splice_article_list(&original, &list, &index_path.display().to_string())
        {
            Ok(spliced) => spliced,
            Err(e @ AppError::IndexMarkersMissing { .. }) => {
                log::error!("Error: {}", e);
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let (updated, count_found) = update_article_count(&spliced, articles.len());
        if !count_found {
            log::warn!(
                "No article count found in {}; count left unchanged",
                index_path.display()
            );
        }

        let report = deliver(OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: index_path.clone(),
            content: updated,
        }))?;
        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }
        Ok(true)
    }
}
