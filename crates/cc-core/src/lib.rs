//! campus-commons/crates/cc-core/src/lib.rs
//!
//! The record shapes, the backend port and the client-side form rules for
//! the CampusCommons web client.

pub mod error;
pub mod forms;
pub mod lookup;
pub mod models;
pub mod session;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use forms::*;
pub use lookup::find_topic;
pub use models::*;
pub use session::Session;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn topic_without_description_decodes() {
        // The backend drops an empty description from the JSON.
        let topic: Topic = serde_json::from_str(
            r#"{"id":1,"title":"Welcome","created_by":2,"created_at":"2024-09-01T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(topic.description, "");
        assert_eq!(topic.created_display(), "2024-09-01 08:30 UTC");
    }

    #[test]
    fn post_accepts_fractional_offsets() {
        let post: Post = serde_json::from_str(
            r#"{"id":5,"topic_id":1,"title":"t","body":"b","created_by":2,
                "created_at":"2024-09-01T10:15:42.123456+02:00"}"#,
        )
        .unwrap();
        assert_eq!(post.created_display(), "2024-09-01 08:15 UTC");
    }
}
