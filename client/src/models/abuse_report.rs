//! Reasons a video can be reported for abuse.

use super::common::{BaseList, BaseResource, Pagination};
use ytdata_codec::record;

record! {
    pub struct SecondaryReason {
        pub id: String,
        pub label: String,
    }
}

record! {
    pub struct VideoAbuseReportReasonSnippet {
        pub label: String,
        pub secondary_reasons: Vec<SecondaryReason> as "secondaryReasons" = Vec::new(),
    }
}

record! {
    pub struct VideoAbuseReportReason extends { base: BaseResource } {
        pub snippet: VideoAbuseReportReasonSnippet,
    }
}

record! {
    pub struct VideoAbuseReportReasonListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<VideoAbuseReportReason> = Vec::new(),
    }
}
