//! Route discovery between two currencies.
//!
//! Resolution runs in two passes. A depth-first walk from the origin labels
//! every currency with the depth at which it was first popped, stopping once
//! the destination is labelled. A greedy walk back from the destination then
//! always steps to the neighbour with the smallest label. This favours short
//! routes but does not guarantee the fewest hops on every topology.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crossrate_common::{Currency, CurrencyPair};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{FxError, FxResult};
use crate::graph::{CurrencyGraph, Edge};

/// One step of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Currency converted out of.
    pub from: Currency,
    /// Currency arrived at.
    pub to: Currency,
    /// Quote used for the step, as originally listed.
    pub pair: CurrencyPair,
}

impl Hop {
    /// True when the hop follows the quote's base->quote direction, so its
    /// price applies as-is rather than inverted.
    pub fn is_direct(&self) -> bool {
        self.from == self.pair.base
    }
}

/// Ordered hops from the origin to the destination. Empty for self-conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    hops: Vec<Hop>,
}

impl Path {
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hop> {
        self.hops.iter()
    }

    /// Pairs used, in travel order.
    pub fn pairs(&self) -> Vec<&CurrencyPair> {
        self.hops.iter().map(|h| &h.pair).collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.hops.first() else {
            return write!(f, "(identity)");
        };
        write!(f, "{}", first.from)?;
        for hop in &self.hops {
            write!(f, " -[{}]-> {}", hop.pair, hop.to)?;
        }
        Ok(())
    }
}

/// Depth labels from the forward pass.
type Labels<'g> = HashMap<&'g Currency, usize>;

/// Finds routes over a borrowed [`CurrencyGraph`].
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'g> {
    graph: &'g CurrencyGraph,
}

impl<'g> PathResolver<'g> {
    pub fn new(graph: &'g CurrencyGraph) -> Self {
        Self { graph }
    }

    /// Resolve a route from `from` to `to`.
    #[instrument(skip_all, fields(from = %from, to = %to))]
    pub fn resolve(&self, from: &'g Currency, to: &'g Currency) -> FxResult<Path> {
        self.graph.neighbors(from)?;
        self.graph.neighbors(to)?;

        if from == to {
            return Ok(Path::default());
        }

        let labels = self.label_depths(from, to)?;
        debug!(labelled = labels.len(), "Reachability labelling complete");

        let path = backtrack(self.graph, &labels, from, to)?;
        debug!(hops = path.len(), path = %path, "Resolved path");
        Ok(path)
    }

    /// Stack-based depth-first labelling. First pop wins.
    fn label_depths(&self, from: &'g Currency, to: &Currency) -> FxResult<Labels<'g>> {
        let mut labels = Labels::new();
        let mut stack = vec![(from, 0usize)];

        while let Some((currency, depth)) = stack.pop() {
            if labels.contains_key(currency) {
                continue;
            }
            labels.insert(currency, depth);
            if currency == to {
                return Ok(labels);
            }
            for edge in self.graph.neighbors(currency)? {
                stack.push((&edge.currency, depth + 1));
            }
        }

        Err(FxError::NoPathExists {
            from: from.clone(),
            to: to.clone(),
        })
    }
}

/// Walk back from `to` along the smallest labels until `from` is reached.
fn backtrack<'g>(
    graph: &'g CurrencyGraph,
    labels: &Labels<'g>,
    from: &'g Currency,
    to: &'g Currency,
) -> FxResult<Path> {
    let mut visited: HashSet<&Currency> = HashSet::new();
    let mut hops = Vec::new();
    let mut current = to;

    loop {
        if !visited.insert(current) {
            return Err(FxError::PathResolution {
                from: from.clone(),
                to: to.clone(),
                revisited: current.clone(),
            });
        }
        if current == from {
            break;
        }

        let next = graph
            .neighbors(current)?
            .iter()
            .reduce(|a, b| closer(labels, a, b))
            .ok_or_else(|| FxError::NoPathExists {
                from: from.clone(),
                to: to.clone(),
            })?;

        hops.push(Hop {
            from: next.currency.clone(),
            to: current.clone(),
            pair: next.pair.clone(),
        });
        current = &next.currency;
    }

    hops.reverse();
    Ok(Path::new(hops))
}

/// Unlabelled neighbours lose; on equal labels the later edge wins.
fn closer<'e>(labels: &Labels<'_>, a: &'e Edge, b: &'e Edge) -> &'e Edge {
    match (labels.get(&a.currency), labels.get(&b.currency)) {
        (None, _) => b,
        (_, None) => a,
        (Some(la), Some(lb)) if la < lb => a,
        _ => b,
    }
}
