//! Post analytics for the social-analysis step.
//!
//! Both the canned dataset and the live social-graph client produce a list
//! of [`Post`]s; everything derived from them (type mix, top posts, timing
//! histograms, engagement rate) goes through this module so the two data
//! sources behave identically.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Media type of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Image,
    Carousel,
    Video,
}

/// A single published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub image_url: String,
    pub caption: String,
    pub likes: i64,
    pub comments: i64,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub post_type: PostType,
}

impl Post {
    /// Engagement score used for ranking: likes + comments.
    pub fn engagement(&self) -> i64 {
        self.likes + self.comments
    }
}

/// Post-type share of an account's content, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMix {
    pub images: u32,
    pub carousels: u32,
    pub videos: u32,
}

impl TypeMix {
    pub fn total(&self) -> u32 {
        self.images + self.carousels + self.videos
    }
}

/// Percentage share of each post type, normalized to sum to exactly 100.
///
/// Uses largest-remainder rounding: floor every share, then hand the
/// leftover points to the types with the largest fractional parts. An empty
/// post set yields an all-zero mix.
pub fn type_mix_percentages(posts: &[Post]) -> TypeMix {
    if posts.is_empty() {
        return TypeMix {
            images: 0,
            carousels: 0,
            videos: 0,
        };
    }

    let total = posts.len() as u64;
    let count_of = |t: PostType| posts.iter().filter(|p| p.post_type == t).count() as u64;
    let counts = [
        count_of(PostType::Image),
        count_of(PostType::Carousel),
        count_of(PostType::Video),
    ];

    let mut shares = [0u32; 3];
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(3);
    let mut assigned = 0u32;
    for (i, &count) in counts.iter().enumerate() {
        shares[i] = (count * 100 / total) as u32;
        assigned += shares[i];
        remainders.push((i, count * 100 % total));
    }

    // Largest fractional remainder first; index order breaks ties so the
    // result is deterministic.
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let mut leftover = 100 - assigned;
    for (i, _) in remainders {
        if leftover == 0 {
            break;
        }
        shares[i] += 1;
        leftover -= 1;
    }

    TypeMix {
        images: shares[0],
        carousels: shares[1],
        videos: shares[2],
    }
}

/// The `n` highest-engagement posts, best first.
pub fn top_posts(posts: &[Post], n: usize) -> Vec<Post> {
    let mut ranked = posts.to_vec();
    ranked.sort_by(|a, b| b.engagement().cmp(&a.engagement()).then(a.id.cmp(&b.id)));
    ranked.truncate(n);
    ranked
}

/// Average engagement per post as a percentage of the follower count,
/// rounded to one decimal. Zero when there are no posts or no followers.
pub fn engagement_rate(posts: &[Post], followers: i64) -> f64 {
    if posts.is_empty() || followers <= 0 {
        return 0.0;
    }
    let total: i64 = posts.iter().map(Post::engagement).sum();
    let avg = total as f64 / posts.len() as f64;
    (avg / followers as f64 * 1000.0).round() / 10.0
}

/// When an account posts: per-weekday counts and coarse daypart counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTiming {
    /// Post count per weekday name (Monday..Sunday, all keys present).
    pub weekdays: BTreeMap<String, u32>,
    /// Post count per daypart: morning (before 12), afternoon (12-17),
    /// evening (18 onward). UTC hours.
    pub times: BTreeMap<String, u32>,
}

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Derive the posting-time histograms from a post set.
pub fn post_timing(posts: &[Post]) -> PostTiming {
    let mut weekdays: BTreeMap<String, u32> = WEEKDAYS
        .iter()
        .map(|(_, name)| (name.to_string(), 0))
        .collect();
    let mut times: BTreeMap<String, u32> = ["morning", "afternoon", "evening"]
        .iter()
        .map(|name| (name.to_string(), 0))
        .collect();

    for post in posts {
        let weekday = post.timestamp.weekday();
        let name = WEEKDAYS
            .iter()
            .find(|(w, _)| *w == weekday)
            .map(|(_, n)| *n)
            .unwrap_or("Monday");
        *weekdays.entry(name.to_string()).or_default() += 1;

        let daypart = match post.timestamp.hour() {
            0..=11 => "morning",
            12..=17 => "afternoon",
            _ => "evening",
        };
        *times.entry(daypart.to_string()).or_default() += 1;
    }

    PostTiming { weekdays, times }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, post_type: PostType, likes: i64, comments: i64, iso: &str) -> Post {
        Post {
            id: id.to_string(),
            image_url: format!("https://example.com/{id}.jpg"),
            caption: String::new(),
            likes,
            comments,
            timestamp: iso.parse().unwrap(),
            post_type,
        }
    }

    fn mixed_posts(images: usize, carousels: usize, videos: usize) -> Vec<Post> {
        let mut posts = Vec::new();
        for i in 0..images {
            posts.push(post(&format!("i{i}"), PostType::Image, 10, 1, "2023-01-15T09:23:00Z"));
        }
        for i in 0..carousels {
            posts.push(post(&format!("c{i}"), PostType::Carousel, 10, 1, "2023-02-03T14:15:00Z"));
        }
        for i in 0..videos {
            posts.push(post(&format!("v{i}"), PostType::Video, 10, 1, "2023-03-05T20:20:00Z"));
        }
        posts
    }

    #[test]
    fn percentages_sum_to_100_for_any_nonempty_set() {
        let cases = [
            (1, 0, 0),
            (8, 3, 2),
            (1, 1, 1),
            (7, 7, 7),
            (3, 2, 1),
            (0, 0, 5),
            (33, 33, 34),
            (1, 2, 4),
        ];
        for (i, c, v) in cases {
            let mix = type_mix_percentages(&mixed_posts(i, c, v));
            assert_eq!(mix.total(), 100, "mix {mix:?} for ({i},{c},{v})");
        }
    }

    #[test]
    fn percentages_match_exact_splits() {
        let mix = type_mix_percentages(&mixed_posts(6, 3, 1));
        assert_eq!(
            mix,
            TypeMix {
                images: 60,
                carousels: 30,
                videos: 10
            }
        );
    }

    #[test]
    fn thirds_are_hand_rounded_to_100() {
        let mix = type_mix_percentages(&mixed_posts(1, 1, 1));
        assert_eq!(mix.total(), 100);
        // One of the thirds picks up the leftover point.
        assert_eq!(mix.images, 34);
        assert_eq!(mix.carousels, 33);
        assert_eq!(mix.videos, 33);
    }

    #[test]
    fn empty_post_set_is_all_zero() {
        let mix = type_mix_percentages(&[]);
        assert_eq!(mix.total(), 0);
    }

    #[test]
    fn top_posts_sorted_by_engagement_desc() {
        let posts = vec![
            post("a", PostType::Image, 100, 5, "2023-01-15T09:23:00Z"),
            post("b", PostType::Carousel, 700, 80, "2023-02-03T14:15:00Z"),
            post("c", PostType::Image, 300, 20, "2023-03-05T10:20:00Z"),
        ];
        let top = top_posts(&posts, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "b");
        assert_eq!(top[1].id, "c");
    }

    #[test]
    fn top_posts_handles_short_sets() {
        let posts = vec![post("a", PostType::Image, 1, 0, "2023-01-15T09:23:00Z")];
        assert_eq!(top_posts(&posts, 6).len(), 1);
        assert!(top_posts(&[], 6).is_empty());
    }

    #[test]
    fn engagement_rate_is_avg_over_followers() {
        let posts = vec![
            post("a", PostType::Image, 90, 10, "2023-01-15T09:23:00Z"),
            post("b", PostType::Image, 190, 10, "2023-02-03T14:15:00Z"),
        ];
        // avg engagement 150 over 5000 followers = 3.0%
        assert_eq!(engagement_rate(&posts, 5000), 3.0);
    }

    #[test]
    fn engagement_rate_degenerate_inputs() {
        assert_eq!(engagement_rate(&[], 5000), 0.0);
        let posts = vec![post("a", PostType::Image, 10, 0, "2023-01-15T09:23:00Z")];
        assert_eq!(engagement_rate(&posts, 0), 0.0);
    }

    #[test]
    fn timing_buckets_weekdays_and_dayparts() {
        let posts = vec![
            // Sunday morning UTC.
            post("a", PostType::Image, 1, 0, "2023-01-15T09:23:00Z"),
            // Friday afternoon.
            post("b", PostType::Image, 1, 0, "2023-02-03T14:15:00Z"),
            // Sunday evening.
            post("c", PostType::Image, 1, 0, "2023-03-05T20:20:00Z"),
        ];
        let timing = post_timing(&posts);
        assert_eq!(timing.weekdays["Sunday"], 2);
        assert_eq!(timing.weekdays["Friday"], 1);
        assert_eq!(timing.weekdays["Monday"], 0);
        assert_eq!(timing.times["morning"], 1);
        assert_eq!(timing.times["afternoon"], 1);
        assert_eq!(timing.times["evening"], 1);
    }

    #[test]
    fn timing_has_all_buckets_even_when_empty() {
        let timing = post_timing(&[]);
        assert_eq!(timing.weekdays.len(), 7);
        assert_eq!(timing.times.len(), 3);
        assert!(timing.weekdays.values().all(|&v| v == 0));
    }
}
