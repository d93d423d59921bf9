//! Candidate surface forms for probing the primary catalog.
//!
//! Catalog resource names use underscores as word separators, so every
//! candidate is an underscored rewrite of the entity's name. The base form
//! always comes first; the rest are normalization-adjacent variants tried
//! in a fixed order until one resolves.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;

use crate::config::VariantConfig;

/// Generates ordered candidate lists for persons and organizations.
///
/// Pure: the generator holds only immutable data loaded at startup and its
/// methods are functions of their inputs.
pub struct VariantGenerator {
    abbreviations: BTreeMap<String, Vec<String>>,
    university: Option<Regex>,
    institute: Option<Regex>,
}

impl VariantGenerator {
    pub fn new(config: &VariantConfig) -> Self {
        Self {
            abbreviations: config.abbreviations.clone(),
            university: Regex::new(r"(?i)^(.+?)\s+University$").ok(),
            institute: Regex::new(r"(?i)^(.+?)\s+Institute").ok(),
        }
    }

    /// The single candidate for a person: `Given_Family` with whitespace
    /// collapsed to underscores.
    pub fn person(&self, given_name: &str, family_name: &str) -> Vec<String> {
        vec![normalize(&format!("{given_name}_{family_name}"))]
    }

    /// Ordered, deduplicated candidates for an organization name.
    ///
    /// The base form (spaces to underscores) is always first. A name that
    /// matches no pattern and no abbreviation yields only the base form.
    pub fn organization(&self, name: &str, location: Option<&str>) -> Vec<String> {
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        push(&mut candidates, &mut seen, name);

        let lower = name.to_lowercase();

        if let Some(cap) = self.university.as_ref().and_then(|re| re.captures(name)) {
            push(
                &mut candidates,
                &mut seen,
                &format!("University_of_{}", cap[1].trim()),
            );
        }

        if let Some(cap) = self.institute.as_ref().and_then(|re| re.captures(name)) {
            let stem = cap[1].trim().to_string();
            push(&mut candidates, &mut seen, &format!("{stem}_Institute"));
            if lower.contains("technology") {
                push(
                    &mut candidates,
                    &mut seen,
                    &format!("{stem}_Institute_of_Technology"),
                );
            }
        }

        if name.contains("School of Medicine") {
            let simplified = name.replace("School of Medicine", "");
            let simplified = simplified.trim();
            if !simplified.is_empty() {
                push(&mut candidates, &mut seen, simplified);
                push(
                    &mut candidates,
                    &mut seen,
                    &format!("{simplified}_School_of_Medicine"),
                );
            }
        }

        let key: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        if let Some(expansions) = self.abbreviations.get(&key) {
            for expansion in expansions {
                push(&mut candidates, &mut seen, expansion);
            }
        }

        if let Some(location) = location {
            if lower.contains("university") {
                push(
                    &mut candidates,
                    &mut seen,
                    &format!("University_of_{location}"),
                );
            }
            if lower.contains("institute") {
                push(&mut candidates, &mut seen, &format!("{location}_Institute"));
            }
        }

        candidates
    }
}

fn push(candidates: &mut Vec<String>, seen: &mut HashSet<String>, candidate: &str) {
    let normalized = normalize(candidate);
    if !normalized.is_empty() && seen.insert(normalized.clone()) {
        candidates.push(normalized);
    }
}

/// Spaces to underscores, runs of underscores collapsed, leading and
/// trailing underscores trimmed.
fn normalize(candidate: &str) -> String {
    let underscored = candidate.trim().replace(' ', "_");
    let mut out = String::with_capacity(underscored.len());
    let mut prev_sep = false;
    for ch in underscored.chars() {
        if ch == '_' {
            if prev_sep {
                continue;
            }
            prev_sep = true;
        } else {
            prev_sep = false;
        }
        out.push(ch);
    }
    out.trim_matches('_').to_string()
}
