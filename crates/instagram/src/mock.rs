//! Canned demo dataset used when no graph API credentials are configured.
//!
//! Values mirror a real architecture-studio account so the demo screens
//! look plausible. Analytics are not hard-coded here; callers derive them
//! from the post list via `formaflow_core::social`, so the numbers always
//! agree with the posts.

use formaflow_core::social::{Post, PostType};
use formaflow_core::types::Timestamp;
use serde_json::json;

use crate::types::{CompetitorProfile, Profile};

/// Default demo account handle.
pub const DEFAULT_USERNAME: &str = "martacalvinho";

/// Canned profile for `username` (or the default handle when empty).
pub fn profile(username: &str) -> Profile {
    let username = if username.trim().is_empty() {
        DEFAULT_USERNAME
    } else {
        username.trim()
    };
    Profile {
        username: username.to_string(),
        followers: 5284,
        posts: 158,
        engagement: 4.3,
        bio: "Architecture & Interior Design Studio | Lisbon, Portugal".to_string(),
    }
}

fn ts(s: &str) -> Timestamp {
    // Static dataset; every literal below is valid RFC 3339.
    s.parse().expect("static demo timestamp")
}

fn post(
    id: &str,
    image_url: &str,
    caption: &str,
    likes: i64,
    comments: i64,
    timestamp: &str,
    post_type: PostType,
) -> Post {
    Post {
        id: id.to_string(),
        image_url: image_url.to_string(),
        caption: caption.to_string(),
        likes,
        comments,
        timestamp: ts(timestamp),
        post_type,
    }
}

/// The canned 12-post feed.
pub fn posts() -> Vec<Post> {
    vec![
        post(
            "post1",
            "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d",
            "Light study for our latest residential project #architecture #interiordesign",
            328,
            24,
            "2023-01-15T09:23:00Z",
            PostType::Image,
        ),
        post(
            "post2",
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
            "Materials exploration for the urban loft project. Combining concrete and wood creates a stunning contrast.",
            452,
            41,
            "2023-02-03T14:15:00Z",
            PostType::Carousel,
        ),
        post(
            "post3",
            "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea",
            "Site visit at our current construction project. Progress is looking good!",
            197,
            15,
            "2023-02-10T11:30:00Z",
            PostType::Image,
        ),
        post(
            "post4",
            "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3",
            "Model making in the studio today. Getting ready for client presentation tomorrow.",
            384,
            32,
            "2023-02-20T16:45:00Z",
            PostType::Image,
        ),
        post(
            "post5",
            "https://images.unsplash.com/photo-1600607687939-ce8a6c349279",
            "Final photos of the completed Riverside House project.",
            723,
            89,
            "2023-03-05T10:20:00Z",
            PostType::Carousel,
        ),
        post(
            "post6",
            "https://images.unsplash.com/photo-1600607687644-c7531e71d2e3",
            "Behind the scenes: Construction phase of our latest commercial project.",
            251,
            18,
            "2023-03-15T13:40:00Z",
            PostType::Video,
        ),
        post(
            "post7",
            "https://images.unsplash.com/photo-1600607688066-89c6a7272f2e",
            "Sketching session with the team. Many ideas for the new cultural center.",
            302,
            27,
            "2023-03-22T15:10:00Z",
            PostType::Image,
        ),
        post(
            "post8",
            "https://images.unsplash.com/photo-1600607688066-89c6a7272f2e",
            "Concept development for a sustainable housing project #sustainability",
            415,
            36,
            "2023-04-01T09:30:00Z",
            PostType::Image,
        ),
        post(
            "post9",
            "https://images.unsplash.com/photo-1531835551805-16d864c8d311",
            "Exploring the relationship between interior spaces and natural light",
            518,
            45,
            "2023-04-10T11:15:00Z",
            PostType::Carousel,
        ),
        post(
            "post10",
            "https://images.unsplash.com/photo-1600585154526-990dced4db3d",
            "Material selections for our luxury apartment renovation",
            289,
            22,
            "2023-04-18T14:50:00Z",
            PostType::Image,
        ),
        post(
            "post11",
            "https://images.unsplash.com/photo-1600585154363-67eb9e2e2099",
            "Urban context analysis for our new city center project",
            345,
            31,
            "2023-04-27T16:20:00Z",
            PostType::Image,
        ),
        post(
            "post12",
            "https://images.unsplash.com/photo-1600573472432-27195c041e5f",
            "Office tour: Our newly designed studio space is finally complete!",
            632,
            74,
            "2023-05-05T10:40:00Z",
            PostType::Video,
        ),
    ]
}

/// Canned competitor summaries.
pub fn competitors() -> Vec<CompetitorProfile> {
    vec![
        CompetitorProfile {
            username: "studioarchitectura".to_string(),
            followers: 12_500,
            posts: 320,
            engagement: 6.2,
            top_post_types: json!({ "image": 60, "carousel": 35, "video": 5 }),
            post_frequency: "Daily".to_string(),
        },
        CompetitorProfile {
            username: "modernspaces".to_string(),
            followers: 8_700,
            posts: 215,
            engagement: 5.1,
            top_post_types: json!({ "image": 45, "carousel": 40, "video": 15 }),
            post_frequency: "3-4 per week".to_string(),
        },
        CompetitorProfile {
            username: "designatelier".to_string(),
            followers: 15_300,
            posts: 412,
            engagement: 7.8,
            top_post_types: json!({ "image": 30, "carousel": 50, "video": 20 }),
            post_frequency: "5 per week".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use formaflow_core::social;

    #[test]
    fn feed_has_twelve_posts() {
        assert_eq!(posts().len(), 12);
    }

    #[test]
    fn derived_type_mix_sums_to_100() {
        let mix = social::type_mix_percentages(&posts());
        assert_eq!(mix.total(), 100);
    }

    #[test]
    fn top_post_is_the_riverside_reveal() {
        let top = social::top_posts(&posts(), 6);
        assert_eq!(top[0].id, "post5");
        assert_eq!(top.len(), 6);
    }

    #[test]
    fn profile_falls_back_to_default_handle() {
        assert_eq!(profile("").username, DEFAULT_USERNAME);
        assert_eq!(profile("  ").username, DEFAULT_USERNAME);
        assert_eq!(profile("someone").username, "someone");
    }

    #[test]
    fn three_canned_competitors() {
        let c = competitors();
        assert_eq!(c.len(), 3);
        assert!(c.iter().all(|p| p.followers > 0));
    }
}
