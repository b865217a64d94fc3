//! Domain construction for thin analysis.
//!
//! Domains are rebuilt from the link set alone. Each link whose label matches
//! a domain starter opens one domain; its member links are the starter plus
//! every link touching a word the domain reaches. Domains are kept in the
//! canonical order of their starting links, so index order is traversal order.

use std::collections::VecDeque;

use linkforge_core::{Linkage, WordPos};

use crate::rules::{DomainKind, DomainReach, RuleSet};

/// One domain instance within a linkage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    /// Kind named by the starter.
    pub kind: DomainKind,
    /// Index of the link that opened the domain.
    pub starter: usize,
    /// Leftmost word covered: the starter's left word.
    pub start: WordPos,
    /// Rightmost word reached.
    pub end: WordPos,
    /// Member link indices, ascending. Includes the starter.
    pub members: Vec<usize>,
}

impl Domain {
    /// Returns true if spans strictly interleave.
    ///
    /// Domains that share an endpoint, nest, or are disjoint do not cross.
    pub fn crosses(&self, other: &Domain) -> bool {
        let (a, b) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        a.start < b.start && b.start < a.end && a.end < b.end
    }

    /// Returns true if `link` is a member.
    pub fn contains(&self, link: usize) -> bool {
        self.members.binary_search(&link).is_ok()
    }
}

/// The graph and domain structure implied by a labeled linkage.
#[derive(Debug, Clone)]
pub struct DomainStructure {
    /// Link indices incident to each word.
    adjacency: Vec<Vec<usize>>,
    /// Domains in canonical order of their starters.
    domains: Vec<Domain>,
    /// For each link, the domains containing it, ascending.
    link_domains: Vec<Vec<usize>>,
    /// For each link, the domain it opened.
    started_by: Vec<Option<usize>>,
    /// Connected component of each word; `None` for null words.
    components: Vec<Option<usize>>,
}

impl DomainStructure {
    /// Builds the structure for `linkage` under `rule_set`.
    ///
    /// # Panics
    ///
    /// Panics if any link is unlabeled.
    pub fn build(rule_set: &RuleSet, linkage: &Linkage) -> Self {
        let links = linkage.links();
        let mut adjacency = vec![Vec::new(); linkage.word_count()];
        for (i, link) in links.iter().enumerate() {
            adjacency[link.left()].push(i);
            adjacency[link.right()].push(i);
        }

        let mut domains = Vec::new();
        let mut started_by = vec![None; links.len()];
        for i in linkage.canonical_order() {
            let label = links[i]
                .label()
                .unwrap_or_else(|| panic!("link {i} has no label; derive labels before analysis"));
            let Some(starter) = rule_set.starter_for(label) else {
                continue;
            };
            started_by[i] = Some(domains.len());
            domains.push(build_domain(linkage, &adjacency, i, starter.domain.clone(), starter.reach));
        }

        let mut link_domains = vec![Vec::new(); links.len()];
        for (d, domain) in domains.iter().enumerate() {
            for &m in &domain.members {
                link_domains[m].push(d);
            }
        }

        let components = label_components(linkage, &adjacency);

        Self {
            adjacency,
            domains,
            link_domains,
            started_by,
            components,
        }
    }

    /// All domains, in canonical order of their starters.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Domain indices containing `link`.
    pub fn domains_of(&self, link: usize) -> &[usize] {
        &self.link_domains[link]
    }

    /// Kinds of the domains containing `link`.
    pub fn domain_names_of(&self, link: usize) -> Vec<&DomainKind> {
        self.link_domains[link]
            .iter()
            .map(|&d| &self.domains[d].kind)
            .collect()
    }

    /// Index of the domain opened by `link`, if any.
    pub fn domain_started_by(&self, link: usize) -> Option<usize> {
        self.started_by[link]
    }

    /// Link indices incident to `word`.
    pub fn links_at(&self, word: WordPos) -> &[usize] {
        &self.adjacency[word]
    }

    /// Connected component of `word`, or `None` for a null word.
    pub fn component_of(&self, word: WordPos) -> Option<usize> {
        self.components[word]
    }

    /// Returns true if removing `link` still leaves its endpoints connected.
    pub fn on_cycle(&self, linkage: &Linkage, link: usize) -> bool {
        let target = linkage.link(link).right();
        let source = linkage.link(link).left();
        let mut visited = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(w) = queue.pop_front() {
            for &l in &self.adjacency[w] {
                if l == link {
                    continue;
                }
                let next = linkage.link(l).other_end(w);
                if next == target {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

fn build_domain(
    linkage: &Linkage,
    adjacency: &[Vec<usize>],
    starter: usize,
    kind: DomainKind,
    reach: DomainReach,
) -> Domain {
    let root = linkage.link(starter).left();
    let first = linkage.link(starter).right();

    let reached = match reach {
        DomainReach::RightWordOnly => vec![first],
        DomainReach::Full => {
            let mut visited = vec![false; adjacency.len()];
            let mut queue = VecDeque::from([first]);
            let mut reached = Vec::new();
            visited[first] = true;
            while let Some(w) = queue.pop_front() {
                reached.push(w);
                for &l in &adjacency[w] {
                    let next = linkage.link(l).other_end(w);
                    if next <= root || visited[next] {
                        continue;
                    }
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
            reached
        }
    };

    let mut members: Vec<usize> = reached
        .iter()
        .flat_map(|&w| adjacency[w].iter().copied())
        .chain(std::iter::once(starter))
        .collect();
    members.sort_unstable();
    members.dedup();

    let end = reached.iter().copied().max().unwrap_or(first);

    Domain {
        kind,
        starter,
        start: root,
        end,
        members,
    }
}

fn label_components(linkage: &Linkage, adjacency: &[Vec<usize>]) -> Vec<Option<usize>> {
    let mut components = vec![None; adjacency.len()];
    let mut next_id = 0;

    for start in 0..adjacency.len() {
        if components[start].is_some() || adjacency[start].is_empty() {
            continue;
        }
        components[start] = Some(next_id);
        let mut queue = VecDeque::from([start]);
        while let Some(w) = queue.pop_front() {
            for &l in &adjacency[w] {
                let next = linkage.link(l).other_end(w);
                if components[next].is_none() {
                    components[next] = Some(next_id);
                    queue.push_back(next);
                }
            }
        }
        next_id += 1;
    }
    components
}
