//! Site layout blocks: the hero banner, FAQ list and category list.

use chrono::Utc;
use sqlx::types::Json;
use tracing::info;
use uuid::Uuid;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::media::{MediaAsset, MediaStore};
use learnhub_database::repositories::layout::LayoutRepository;
use learnhub_entity::layout::{Banner, Category, FaqItem, Layout, LayoutKind};
use learnhub_media::MediaManager;

/// Payload for creating or replacing a layout block.
#[derive(Debug, Clone)]
pub enum LayoutInput {
    Banner {
        /// Base64 data URI for a new image, or an existing http(s) URL to
        /// keep the current one on edit.
        image: String,
        title: String,
        sub_title: String,
    },
    Faq(Vec<FaqItem>),
    Categories(Vec<Category>),
}

impl LayoutInput {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> LayoutKind {
        match self {
            Self::Banner { .. } => LayoutKind::Banner,
            Self::Faq(_) => LayoutKind::Faq,
            Self::Categories(_) => LayoutKind::Categories,
        }
    }
}

/// Layout service.
#[derive(Debug, Clone)]
pub struct LayoutService {
    layouts: LayoutRepository,
    media: MediaManager,
}

impl LayoutService {
    /// Create a new layout service.
    pub fn new(layouts: LayoutRepository, media: MediaManager) -> Self {
        Self { layouts, media }
    }

    /// Create a layout block. Each kind may exist at most once. Admin only.
    pub async fn create(&self, input: LayoutInput) -> AppResult<Layout> {
        let kind = input.kind();
        if self.layouts.find_by_kind(kind).await?.is_some() {
            return Err(AppError::validation(format!("{kind} already exists")));
        }

        let now = Utc::now();
        let mut layout = Layout {
            id: Uuid::new_v4(),
            kind,
            banner: None,
            faq: None,
            categories: None,
            created_at: now,
            updated_at: now,
        };
        self.apply_payload(&mut layout, input, None).await?;
        self.layouts.insert(&layout).await?;

        info!(kind = %kind, "Layout created");
        Ok(layout)
    }

    /// Replace the payload of an existing layout block. Admin only.
    pub async fn edit(&self, input: LayoutInput) -> AppResult<Layout> {
        let kind = input.kind();
        let mut layout = self
            .layouts
            .find_by_kind(kind)
            .await?
            .ok_or_else(|| AppError::not_found("Layout not found"))?;

        let previous_banner = layout.banner.take().map(|Json(banner)| banner);
        layout.faq = None;
        layout.categories = None;
        self.apply_payload(&mut layout, input, previous_banner).await?;
        self.layouts.update(&layout).await?;

        info!(kind = %kind, "Layout updated");
        Ok(layout)
    }

    /// Fetch the layout block of a kind.
    pub async fn get(&self, kind: LayoutKind) -> AppResult<Layout> {
        self.layouts
            .find_by_kind(kind)
            .await?
            .ok_or_else(|| AppError::not_found("Layout not found"))
    }

    async fn apply_payload(
        &self,
        layout: &mut Layout,
        input: LayoutInput,
        previous_banner: Option<Banner>,
    ) -> AppResult<()> {
        match input {
            LayoutInput::Banner {
                image,
                title,
                sub_title,
            } => {
                // An http(s) value means the client kept the existing image.
                let asset = if image.starts_with("http") {
                    previous_banner
                        .map(|banner| banner.image)
                        .unwrap_or(MediaAsset {
                            public_id: String::new(),
                            url: image,
                        })
                } else {
                    if let Some(banner) = &previous_banner {
                        if !banner.image.public_id.is_empty() {
                            self.media.destroy(&banner.image.public_id).await?;
                        }
                    }
                    self.media.upload("layouts", &image).await?
                };

                layout.banner = Some(Json(Banner {
                    image: asset,
                    title,
                    sub_title,
                }));
            }
            LayoutInput::Faq(items) => {
                layout.faq = Some(Json(items));
            }
            LayoutInput::Categories(items) => {
                layout.categories = Some(Json(items));
            }
        }
        Ok(())
    }
}
