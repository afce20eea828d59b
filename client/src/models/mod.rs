//! Records for the resources and list responses of the YouTube Data API.
//!
//! Every resource record embeds [`BaseResource`] (`kind`, `etag`, `id`) in a field named `base`,
//! and every list response embeds [`BaseList`] and [`Pagination`] in `base` and `page`. Parts
//! that were not requested come back as `None`.
//!
//! Field names follow Rust conventions; the JSON keys are the API's camelCase names.

pub mod abuse_report;
pub mod caption;
pub mod category;
pub mod channel;
pub mod channel_section;
pub mod comment;
pub mod common;
pub mod i18n;
pub mod member;
pub mod playlist;
pub mod search;
pub mod subscription;
pub mod video;
pub mod watermark;

pub use common::{
    BaseList, BaseResource, BaseTopicDetails, Localized, PageInfo, Pagination, Player, ResourceId,
    Thumbnail, Thumbnails,
};

pub use abuse_report::{VideoAbuseReportReason, VideoAbuseReportReasonListResponse};
pub use caption::{Caption, CaptionListResponse};
pub use category::{VideoCategory, VideoCategoryListResponse};
pub use channel::{Channel, ChannelListResponse};
pub use channel_section::{ChannelSection, ChannelSectionListResponse};
pub use comment::{Comment, CommentListResponse, CommentThread, CommentThreadListResponse};
pub use i18n::{I18nLanguage, I18nLanguageListResponse, I18nRegion, I18nRegionListResponse};
pub use member::{Member, MemberListResponse, MembershipsLevel, MembershipsLevelListResponse};
pub use playlist::{Playlist, PlaylistItem, PlaylistItemListResponse, PlaylistListResponse};
pub use search::{SearchListResponse, SearchResult};
pub use subscription::{Subscription, SubscriptionListResponse};
pub use video::{Video, VideoListResponse};
pub use watermark::Watermark;
