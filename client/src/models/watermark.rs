//! Channel watermarks.
//!
//! The watermarks endpoints upload rather than list, so nothing in this crate requests them; the
//! records are here for callers that build or read watermark payloads themselves.

use ytdata_codec::record;

record! {
    pub struct WatermarkTiming {
        /// `offsetFromStart` or `offsetFromEnd`.
        pub r#type: Option<String> as "type",
        pub offset_ms: Option<u64> as "offsetMs",
        pub duration_ms: Option<u64> as "durationMs",
    }
}

record! {
    pub struct WatermarkPosition {
        pub r#type: Option<String> as "type",
        pub corner_position: Option<String> as "cornerPosition",
    }
}

record! {
    pub struct Watermark {
        pub timing: Option<WatermarkTiming>,
        pub position: Option<WatermarkPosition>,
        pub image_url: Option<String> as "imageUrl",
        /// Base64-encoded image data.
        pub image_bytes: Option<String> as "imageBytes",
        pub target_channel_id: Option<String> as "targetChannelId",
    }
}
