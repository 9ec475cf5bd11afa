//! Cross-collection keyword search
//!
//! Fans out one substring search per entity kind concurrently, folds in the
//! static informational pages, and merges everything into a single ranked
//! list: featured hits first, then newest first among dated hits. A failing
//! kind is logged and contributes nothing; the request still succeeds with
//! partial results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    config::{SearchConfig, StaticPage},
    error::AppResult,
    models::{MediaItem, News, Notice, Recruitment, Tender},
    repository::Repository,
};

/// Entity kinds addressable through the `type` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    News,
    Notices,
    Tenders,
    Recruitments,
    Media,
    Pages,
}

/// A single hit in the uniform result shape
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchHit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub title: String,
    pub description: String,
    /// Where the hit navigates to; kind-specific default route when the
    /// record carries no document or link URL
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub featured: bool,
}

/// Per-kind hit counts over the merged, untruncated list
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TypeCounts {
    pub news: i64,
    pub notices: i64,
    pub tenders: i64,
    pub recruitments: i64,
    pub media: i64,
    pub pages: i64,
}

/// Wire shape of GET /api/search
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub results: Vec<SearchHit>,
    pub total: i64,
    pub query: String,
    pub types: TypeCounts,
}

impl SearchResponse {
    fn empty(query: &str) -> Self {
        Self {
            success: true,
            error: None,
            results: Vec::new(),
            total: 0,
            query: query.to_string(),
            types: TypeCounts::default(),
        }
    }

    pub fn failure(query: &str, error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            results: Vec::new(),
            total: 0,
            query: query.to_string(),
            types: TypeCounts::default(),
        }
    }
}

/// Trim the raw query; queries shorter than two characters are not searched
fn effective_term(raw: &str) -> Option<&str> {
    let term = raw.trim();
    if term.chars().count() < 2 {
        None
    } else {
        Some(term)
    }
}

/// Featured first (stable), then newest first; undated hits sink below dated
/// ones and keep their relative order
fn rank(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| b.featured.cmp(&a.featured).then_with(|| b.date.cmp(&a.date)));
}

fn count_kinds(hits: &[SearchHit]) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for hit in hits {
        match hit.kind {
            SearchKind::News => counts.news += 1,
            SearchKind::Notices => counts.notices += 1,
            SearchKind::Tenders => counts.tenders += 1,
            SearchKind::Recruitments => counts.recruitments += 1,
            SearchKind::Media => counts.media += 1,
            SearchKind::Pages => counts.pages += 1,
        }
    }
    counts
}

/// Case-insensitive substring match over the static page list
fn match_pages(pages: &[StaticPage], term: &str) -> Vec<SearchHit> {
    let needle = term.to_lowercase();
    pages
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .map(|p| SearchHit {
            id: p.id.clone(),
            kind: SearchKind::Pages,
            title: p.title.clone(),
            description: p.description.clone(),
            url: p.url.clone(),
            date: None,
            category: Some(p.category.clone()),
            featured: false,
        })
        .collect()
}

fn notice_hit(n: Notice) -> SearchHit {
    SearchHit {
        id: n.id.to_string(),
        kind: SearchKind::Notices,
        title: n.heading,
        description: n.subheading,
        url: n.document_url.unwrap_or_else(|| "/notices".to_string()),
        date: Some(n.published_date),
        category: None,
        featured: n.featured,
    }
}

fn tender_hit(t: Tender) -> SearchHit {
    SearchHit {
        id: t.id.to_string(),
        kind: SearchKind::Tenders,
        title: t.heading,
        description: t.description,
        url: t.document_url.unwrap_or_else(|| "/tenders".to_string()),
        date: Some(t.published_date),
        category: Some(t.tender_no),
        featured: t.featured,
    }
}

fn recruitment_hit(r: Recruitment) -> SearchHit {
    SearchHit {
        id: r.id.to_string(),
        kind: SearchKind::Recruitments,
        title: r.heading,
        description: r.subheading,
        url: r.document_url.unwrap_or_else(|| "/recruitment".to_string()),
        date: Some(r.published_date),
        category: None,
        featured: false,
    }
}

fn news_hit(n: News) -> SearchHit {
    SearchHit {
        id: n.id.to_string(),
        kind: SearchKind::News,
        title: n.text,
        description: String::new(),
        url: n.link.unwrap_or_else(|| "/".to_string()),
        date: Some(n.created_at.date_naive()),
        category: None,
        featured: false,
    }
}

fn media_hit(m: MediaItem) -> SearchHit {
    SearchHit {
        id: m.id.to_string(),
        kind: SearchKind::Media,
        title: m.heading,
        description: m.description,
        url: m.link,
        date: Some(m.media_date),
        category: Some(m.media_type.to_string()),
        featured: m.featured,
    }
}

#[derive(Clone)]
pub struct SearchService {
    repository: Repository,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(repository: Repository, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    /// Run the cross-collection search for `raw_query`, optionally narrowed
    /// to one kind and capped at `limit` (config default when omitted)
    pub async fn search(
        &self,
        raw_query: &str,
        kind: Option<SearchKind>,
        limit: Option<i64>,
    ) -> AppResult<SearchResponse> {
        let term = match effective_term(raw_query) {
            Some(term) => term,
            None => return Ok(SearchResponse::empty(raw_query.trim())),
        };
        let limit = limit.unwrap_or(self.config.default_limit).max(0) as usize;
        let include = |k: SearchKind| kind.map_or(true, |wanted| wanted == k);

        // Fan out concurrently; no ordering dependency between the kinds
        let (news, notices, tenders, recruitments, media) = tokio::join!(
            self.news_hits(term, include(SearchKind::News)),
            self.notice_hits(term, include(SearchKind::Notices)),
            self.tender_hits(term, include(SearchKind::Tenders)),
            self.recruitment_hits(term, include(SearchKind::Recruitments)),
            self.media_hits(term, include(SearchKind::Media)),
        );

        let mut hits: Vec<SearchHit> = Vec::new();
        hits.extend(news);
        hits.extend(notices);
        hits.extend(tenders);
        hits.extend(recruitments);
        hits.extend(media);
        if include(SearchKind::Pages) {
            hits.extend(match_pages(&self.config.pages, term));
        }

        rank(&mut hits);

        // total and the per-kind breakdown are computed before truncation
        let types = count_kinds(&hits);
        let total = hits.len() as i64;
        hits.truncate(limit);

        Ok(SearchResponse {
            success: true,
            error: None,
            results: hits,
            total,
            query: term.to_string(),
            types,
        })
    }

    async fn news_hits(&self, term: &str, include: bool) -> Vec<SearchHit> {
        if !include {
            return Vec::new();
        }
        match self.repository.news.search(term, Some(true)).await {
            Ok(rows) => rows.into_iter().map(news_hit).collect(),
            Err(e) => {
                tracing::warn!("news search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn notice_hits(&self, term: &str, include: bool) -> Vec<SearchHit> {
        if !include {
            return Vec::new();
        }
        match self.repository.notices.search(term, Some(true)).await {
            Ok(rows) => rows.into_iter().map(notice_hit).collect(),
            Err(e) => {
                tracing::warn!("notice search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn tender_hits(&self, term: &str, include: bool) -> Vec<SearchHit> {
        if !include {
            return Vec::new();
        }
        match self.repository.tenders.search(term, Some(true)).await {
            Ok(rows) => rows.into_iter().map(tender_hit).collect(),
            Err(e) => {
                tracing::warn!("tender search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn recruitment_hits(&self, term: &str, include: bool) -> Vec<SearchHit> {
        if !include {
            return Vec::new();
        }
        match self.repository.recruitments.search(term, Some(true)).await {
            Ok(rows) => rows.into_iter().map(recruitment_hit).collect(),
            Err(e) => {
                tracing::warn!("recruitment search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn media_hits(&self, term: &str, include: bool) -> Vec<SearchHit> {
        if !include {
            return Vec::new();
        }
        match self.repository.media.search(term, Some(true)).await {
            Ok(rows) => rows.into_iter().map(media_hit).collect(),
            Err(e) => {
                tracing::warn!("media search failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hit(id: &str, kind: SearchKind, date: Option<(i32, u32, u32)>, featured: bool) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            kind,
            title: format!("hit {}", id),
            description: String::new(),
            url: "/".to_string(),
            date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            category: None,
            featured,
        }
    }

    #[test]
    fn short_queries_are_not_searched() {
        assert_eq!(effective_term("  a "), None);
        assert_eq!(effective_term(" "), None);
        assert_eq!(effective_term(""), None);
    }

    #[test]
    fn two_trimmed_characters_are_enough() {
        assert_eq!(effective_term("  cu  "), Some("cu"));
    }

    #[test]
    fn featured_hits_sort_first_regardless_of_date() {
        let mut hits = vec![
            hit("new", SearchKind::Notices, Some((2024, 6, 1)), false),
            hit("old-featured", SearchKind::Tenders, Some((2020, 1, 1)), true),
        ];
        rank(&mut hits);
        assert_eq!(hits[0].id, "old-featured");
    }

    #[test]
    fn dated_hits_sort_newest_first() {
        let mut hits = vec![
            hit("a", SearchKind::Notices, Some((2024, 1, 1)), false),
            hit("b", SearchKind::Notices, Some((2024, 3, 1)), false),
            hit("c", SearchKind::Notices, Some((2024, 2, 1)), false),
        ];
        rank(&mut hits);
        let order: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn undated_hits_sink_below_dated_and_keep_their_order() {
        let mut hits = vec![
            hit("page-1", SearchKind::Pages, None, false),
            hit("page-2", SearchKind::Pages, None, false),
            hit("notice", SearchKind::Notices, Some((2023, 5, 5)), false),
        ];
        rank(&mut hits);
        let order: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(order, vec!["notice", "page-1", "page-2"]);
    }

    #[test]
    fn type_counts_sum_to_total() {
        let hits = vec![
            hit("1", SearchKind::News, None, false),
            hit("2", SearchKind::Notices, None, false),
            hit("3", SearchKind::Notices, None, false),
            hit("4", SearchKind::Pages, None, false),
        ];
        let counts = count_kinds(&hits);
        assert_eq!(counts.news, 1);
        assert_eq!(counts.notices, 2);
        assert_eq!(counts.pages, 1);
        let sum = counts.news
            + counts.notices
            + counts.tenders
            + counts.recruitments
            + counts.media
            + counts.pages;
        assert_eq!(sum, hits.len() as i64);
    }

    #[test]
    fn page_matching_is_case_insensitive() {
        let pages = vec![crate::config::StaticPage {
            id: "faqs".to_string(),
            title: "Frequently Asked Questions".to_string(),
            description: "Baggage rules and duty payment".to_string(),
            url: "/faqs".to_string(),
            category: "Help".to_string(),
        }];
        assert_eq!(match_pages(&pages, "BAGGAGE").len(), 1);
        assert_eq!(match_pages(&pages, "help").len(), 1);
        assert_eq!(match_pages(&pages, "vessel").len(), 0);
    }

    #[test]
    fn page_hits_carry_their_category_and_route() {
        let pages = vec![crate::config::StaticPage {
            id: "about".to_string(),
            title: "About Us".to_string(),
            description: "History of the Commissionerate".to_string(),
            url: "/about".to_string(),
            category: "Information".to_string(),
        }];
        let hits = match_pages(&pages, "history");
        assert_eq!(hits[0].url, "/about");
        assert_eq!(hits[0].category.as_deref(), Some("Information"));
        assert!(!hits[0].featured);
    }
}
