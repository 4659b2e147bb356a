//! Account analysis for the analyze-instagram function.
//!
//! Returns canned content recommendations plus per-competitor insight lists
//! templated with each competitor's handle. The wire format mirrors the
//! original function's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::strategy::FormatMix;

/// Request body for the analyze-instagram function.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub instagram_data: serde_json::Value,
    pub competitor_usernames: Vec<String>,
}

/// Insights generated for a single competitor handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorInsights {
    pub username: String,
    pub insights: Vec<String>,
}

/// Posting-schedule recommendation block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingSchedule {
    pub optimal_days: Vec<&'static str>,
    pub optimal_times: Vec<&'static str>,
}

/// The nested recommendations block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub content_formats: FormatMix,
    pub content_themes: Vec<&'static str>,
    pub posting_schedule: PostingSchedule,
}

/// The full analysis report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub content_recommendations: Vec<&'static str>,
    pub competitor_insights: Vec<CompetitorInsights>,
    pub recommendations: Recommendations,
}

/// Generate the analysis report for an account and its competitors.
pub fn analyze_account(competitor_usernames: &[String]) -> AnalysisReport {
    AnalysisReport {
        content_recommendations: vec![
            "Focus on sharing more behind-the-scenes content of your design process",
            "Create carousel posts that show the evolution of a project from concept to completion",
            "Add technical details in your captions to engage industry professionals",
            "Post on Thursdays at 7PM for optimal engagement based on your audience patterns",
        ],
        competitor_insights: competitor_usernames
            .iter()
            .filter(|u| !u.trim().is_empty())
            .map(|username| competitor_insights(username.trim()))
            .collect(),
        recommendations: Recommendations {
            content_formats: FormatMix {
                carousels: 45,
                images: 35,
                videos: 20,
            },
            content_themes: vec![
                "Design Process & Evolution",
                "Material Details & Techniques",
                "Space & Light Interactions",
                "Sustainability Features",
            ],
            posting_schedule: PostingSchedule {
                optimal_days: vec!["Thursday", "Sunday"],
                optimal_times: vec!["7PM", "11AM"],
            },
        },
    }
}

fn competitor_insights(username: &str) -> CompetitorInsights {
    CompetitorInsights {
        username: username.to_string(),
        insights: vec![
            format!("@{username} gets higher engagement from posts featuring project process vs final result"),
            format!("@{username}'s carousel posts receive 35% more engagement than single images"),
            format!("@{username} successfully uses storytelling captions to increase follower interactions"),
            format!("@{username} posts most frequently on weekends with good results"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_insight_block_per_competitor() {
        let competitors = vec!["zahahadid".to_string(), "fosterandpartners".to_string()];
        let report = analyze_account(&competitors);
        assert_eq!(report.competitor_insights.len(), 2);
        assert_eq!(report.competitor_insights[0].username, "zahahadid");
        assert!(report.competitor_insights[0]
            .insights
            .iter()
            .all(|i| i.contains("@zahahadid")));
    }

    #[test]
    fn blank_competitor_handles_are_skipped() {
        let competitors = vec!["  ".to_string(), "modernspaces".to_string()];
        let report = analyze_account(&competitors);
        assert_eq!(report.competitor_insights.len(), 1);
        assert_eq!(report.competitor_insights[0].username, "modernspaces");
    }

    #[test]
    fn report_without_competitors_still_has_recommendations() {
        let report = analyze_account(&[]);
        assert!(report.competitor_insights.is_empty());
        assert_eq!(report.content_recommendations.len(), 4);
        let formats = report.recommendations.content_formats;
        assert_eq!(formats.carousels + formats.images + formats.videos, 100);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let report = analyze_account(&["a".to_string()]);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("contentRecommendations").is_some());
        assert!(json.get("competitorInsights").is_some());
        assert!(json["recommendations"].get("postingSchedule").is_some());
    }

    #[test]
    fn request_body_deserializes() {
        let req: AnalyzeRequest = serde_json::from_str(
            r#"{ "instagramData": { "followers": 10 }, "competitorUsernames": ["x"] }"#,
        )
        .unwrap();
        assert_eq!(req.competitor_usernames, vec!["x".to_string()]);
    }
}
