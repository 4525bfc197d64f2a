use std::cmp::Reverse;

use talent_core::{Job, Professional, SearchRequest, SearchResult};

use crate::{ListingSource, SearchError};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Serves a fixed catalog, applying filters and query matching locally.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticListingSource {
    catalog: SearchResult,
}

impl StaticListingSource {
    pub fn new(catalog: SearchResult) -> Self {
        Self { catalog }
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUILTIN_CATALOG).map(Self::new)
    }

    pub fn catalog(&self) -> &SearchResult {
        &self.catalog
    }

    /// Filters, ranks by query-term hits and truncates to `top_k`.
    pub fn query(&self, request: &SearchRequest) -> SearchResult {
        let terms = query_terms(&request.query);
        let limit = request.top_k as usize;
        let filters = &request.filters;

        let jobs = rank(
            self.catalog.jobs.iter().filter(|job| filters.admits_job(job)),
            &terms,
            limit,
            job_text,
        );
        let professionals = rank(
            self.catalog
                .professionals
                .iter()
                .filter(|pro| filters.admits_professional(pro)),
            &terms,
            limit,
            professional_text,
        );

        let response = if jobs.is_empty() && professionals.is_empty() {
            "No listings match your search. Try other criteria.".to_string()
        } else {
            format!(
                "Found {} jobs and {} professionals for '{}'",
                jobs.len(),
                professionals.len(),
                request.query.trim()
            )
        };

        SearchResult {
            professionals,
            jobs,
            response: Some(response),
            query: Some(request.query.clone()),
            cached: false,
        }
    }
}

#[async_trait::async_trait]
impl ListingSource for StaticListingSource {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        Ok(self.query(request))
    }

    async fn browse(&self) -> Result<SearchResult, SearchError> {
        Ok(SearchResult {
            professionals: self.catalog.professionals.clone(),
            jobs: self.catalog.jobs.clone(),
            ..SearchResult::default()
        })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

// Stable: equal scores keep catalog order.
fn rank<'a, T: Clone + 'a>(
    items: impl Iterator<Item = &'a T>,
    terms: &[String],
    limit: usize,
    text: fn(&T) -> String,
) -> Vec<T> {
    let mut scored: Vec<(usize, &T)> = items
        .map(|item| {
            let haystack = text(item);
            let hits = terms
                .iter()
                .filter(|term| haystack.contains(term.as_str()))
                .count();
            (hits, item)
        })
        .filter(|(hits, _)| *hits > 0)
        .collect();
    scored.sort_by_key(|(hits, _)| Reverse(*hits));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, item)| item.clone())
        .collect()
}

fn job_text(job: &Job) -> String {
    [
        job.title.as_str(),
        job.company.as_str(),
        &job.skills.join(" "),
        &job.work_mode.join(" "),
        job.description.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

fn professional_text(pro: &Professional) -> String {
    [
        pro.name.as_str(),
        pro.title.as_str(),
        &pro.skills.join(" "),
        &pro.work_mode.join(" "),
        pro.experience.as_str(),
        &pro.certifications.join(" "),
        pro.description.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let source = StaticListingSource::builtin().unwrap();
        assert_eq!(source.catalog().jobs.len(), 3);
        assert_eq!(source.catalog().professionals.len(), 5);
    }

    #[test]
    fn terms_are_lowercased() {
        assert_eq!(query_terms("  React  Developer "), vec!["react", "developer"]);
    }
}
