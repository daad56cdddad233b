use anyhow::Result;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::Config;
use crate::patterns;
use crate::stats::ListStats;

/// Mutation categories in their fixed processing order. The order matters:
/// when the size cap cuts a run short, which candidates made it in depends
/// only on this sequence and the configured term order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Identity,
    Date,
    Numeric,
    Keyboard,
    Leetspeak,
    Case,
    Special,
}

const CATEGORY_ORDER: [Category; 7] = [
    Category::Identity,
    Category::Date,
    Category::Numeric,
    Category::Keyboard,
    Category::Leetspeak,
    Category::Case,
    Category::Special,
];

/// Final artifact of a generation run: the ordered candidate list plus the
/// statistics computed over it.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub words: Vec<String>,
    pub stats: ListStats,
}

/// Dictionary builder - expands seed terms into a bounded candidate list.
pub struct Generator;

impl Generator {
    /// Run one full generation pass for the given configuration.
    ///
    /// Deterministic: identical configuration produces an identical ordered
    /// list. Candidates are accumulated into a set, sorted by length then
    /// lexicographically, and truncated from the tail to the configured cap.
    pub fn generate(config: &Config) -> Result<GenerationResult> {
        config.validate()?;

        let terms = Self::resolve_base_terms(config);
        info!("Resolved {} base terms", terms.len());

        let cap = config.generation.max_words;
        let mut candidates: HashSet<String> = HashSet::new();

        'terms: for term in &terms {
            for category in CATEGORY_ORDER {
                if candidates.len() >= cap {
                    info!("Size cap of {} reached, skipping remaining expansions", cap);
                    break 'terms;
                }
                Self::expand_into(&mut candidates, cap, term, category, config);
            }
            debug!("Expanded term {:?}, {} candidates so far", term, candidates.len());
        }

        let mut words: Vec<String> = candidates.into_iter().collect();
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words.truncate(cap);

        let stats = ListStats::from_words(&words);
        info!("Generated {} unique candidates", stats.total);

        Ok(GenerationResult { words, stats })
    }

    /// Effective seed terms in processing order: literal words, then
    /// username-derived tokens, then the weak-password catalog. First
    /// occurrence wins; later duplicates are dropped.
    fn resolve_base_terms(config: &Config) -> Vec<String> {
        let mut terms = Vec::new();
        let mut seen = HashSet::new();

        for word in &config.generation.base_words {
            push_term(word, &mut terms, &mut seen);
        }

        for username in &config.generation.usernames {
            push_term(username, &mut terms, &mut seen);
            for token in username.split(['.', '_', '-']) {
                push_term(token, &mut terms, &mut seen);
            }
        }

        if config.generation.use_common {
            for password in patterns::common_passwords() {
                push_term(password, &mut terms, &mut seen);
            }
        }

        terms
    }

    /// Expand one term through one category, inserting until the cap fills.
    /// Disabled categories produce nothing; the identity form always does.
    fn expand_into(
        set: &mut HashSet<String>,
        cap: usize,
        term: &str,
        category: Category,
        config: &Config,
    ) {
        let generation = &config.generation;
        let mutations = &config.mutations;
        let limits = &config.mutation_limits;

        let produced: Vec<String> = match category {
            Category::Identity => vec![term.to_string()],
            Category::Date if generation.use_dates => {
                let mut dates =
                    patterns::year_suffixes(term, generation.start_year, generation.end_year);
                dates.extend(patterns::month_suffixes(term));
                dates.extend(patterns::day_suffixes(term));
                dates
            }
            Category::Numeric if mutations.numbers => {
                patterns::number_suffixes(term, limits.max_number)
            }
            Category::Keyboard if generation.use_keyboard => patterns::keyboard_walks().to_vec(),
            Category::Leetspeak if mutations.leetspeak => {
                patterns::leet_variants(term, limits.max_leet_variants)
            }
            Category::Case if mutations.uppercase => patterns::case_variants(term),
            Category::Special if mutations.special => patterns::special_char_variants(term),
            _ => Vec::new(),
        };

        for candidate in produced {
            if set.len() >= cap {
                break;
            }
            set.insert(candidate);
        }
    }
}

fn push_term(term: &str, terms: &mut Vec<String>, seen: &mut HashSet<String>) {
    let term = term.trim();
    if term.is_empty() {
        return;
    }
    if seen.insert(term.to_string()) {
        terms.push(term.to_string());
    }
}
