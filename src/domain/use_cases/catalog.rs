use std::{collections::HashMap, collections::HashSet, sync::Arc};

use feruca::Collator;

use crate::{
    entities::project::{CatalogQuery, CatalogStats, ProjectRecord, SortKey, TagFilter, TechnologyFacet},
    slug::matches_slug,
};

/// The project list together with the query that narrows it.
///
/// Records are shared and never mutated; every read of
/// [`visible_projects`](Self::visible_projects) re-runs the whole pipeline
/// from the full list.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    records: Arc<[ProjectRecord]>,
    query: CatalogQuery,
}

impl ProjectCatalog {
    pub fn new(records: Arc<[ProjectRecord]>) -> Self {
        ProjectCatalog {
            records,
            query: CatalogQuery::default(),
        }
    }

    pub fn with_query(records: Arc<[ProjectRecord]>, query: CatalogQuery) -> Self {
        ProjectCatalog { records, query }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Replaces the record list, keeping the current query.
    pub fn replace_records(&mut self, records: Arc<[ProjectRecord]>) {
        self.records = records;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn select_tag(&mut self, tag: impl Into<TagFilter>) {
        self.query.selected_tag = tag.into();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.query.sort_key = sort_key;
    }

    /// Clears search text and tag selection. The sort key is left alone.
    pub fn reset_filters(&mut self) {
        self.query.reset_filters();
    }

    /// Distinct technologies with usage counts, in first-seen order.
    pub fn technology_facets(&self) -> Vec<TechnologyFacet> {
        compute_technology_facets(&self.records)
    }

    /// The filtered, sorted list for display.
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        apply_filter_pipeline(
            &self.records,
            &self.query.search_term,
            &self.query.selected_tag,
            self.query.sort_key,
        )
    }

    /// Looks a project up by its URL segment.
    pub fn find_by_slug(&self, segment: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| matches_slug(&r.name, segment))
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_projects: self.records.len(),
            technologies: self.technology_facets().len(),
            deployed: self.records.iter().filter(|r| r.is_deployed()).count(),
        }
    }
}

/// Collects every distinct `tech_stack` entry across `records`.
///
/// Order is first appearance scanning records in order. A record counts
/// once per tag even if it lists the tag twice.
pub fn compute_technology_facets(records: &[ProjectRecord]) -> Vec<TechnologyFacet> {
    let mut facets: Vec<TechnologyFacet> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let mut seen_in_record: HashSet<&str> = HashSet::new();

        for tech in &record.tech_stack {
            if !seen_in_record.insert(tech.as_str()) {
                continue;
            }

            match index.get(tech.as_str()) {
                Some(&i) => facets[i].count += 1,
                None => {
                    index.insert(tech.as_str(), facets.len());
                    facets.push(TechnologyFacet {
                        name: tech.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    facets
}

/// Search, then tag filter, then sort.
pub fn apply_filter_pipeline<'a>(
    records: &'a [ProjectRecord],
    search_term: &str,
    selected_tag: &TagFilter,
    sort_key: SortKey,
) -> Vec<&'a ProjectRecord> {
    let searched = search_stage(records.iter().collect(), search_term);
    let tagged = tag_stage(searched, selected_tag);
    sort_stage(tagged, sort_key)
}

/// Case-insensitive substring match on name, description or any technology.
///
/// Only emptiness is checked, so a lone space still filters.
pub fn search_stage<'a>(records: Vec<&'a ProjectRecord>, search_term: &str) -> Vec<&'a ProjectRecord> {
    if search_term.is_empty() {
        return records;
    }

    let needle = search_term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tech_stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

pub fn tag_stage<'a>(records: Vec<&'a ProjectRecord>, selected_tag: &TagFilter) -> Vec<&'a ProjectRecord> {
    match selected_tag {
        TagFilter::All => records,
        TagFilter::Tag(tag) => records.into_iter().filter(|r| r.uses(tag)).collect(),
    }
}

/// Stable sort; ties keep their input order.
///
/// Names use Unicode collation with the root locale, so accents and case are
/// secondary to the base letter and lowercase wins an otherwise-equal pair.
pub fn sort_stage(mut records: Vec<&ProjectRecord>, sort_key: SortKey) -> Vec<&ProjectRecord> {
    match sort_key {
        SortKey::Name => {
            let mut collator = Collator::default();
            records.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortKey::Date => records.sort_by(|a, b| b.completion_date.cmp(&a.completion_date)),
        SortKey::Tech => records.sort_by(|a, b| b.tech_stack.len().cmp(&a.tech_stack.len())),
    }
    records
}
