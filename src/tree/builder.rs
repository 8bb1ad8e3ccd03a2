//! Feature tree construction
//!
//! Reassembles the parent/child hierarchy a flat GFF3 record stream
//! implies. Real-world files are irregular: parents may be defined after
//! their children, records may declare several parents, and genes often
//! omit `Parent` entirely and rely on their seqid. The builder tolerates
//! all of these and produces the same forest regardless of input order.
//!
//! The whole input is materialized before linking; streaming trees larger
//! than memory is a documented non-goal.

use crate::core::Feature;
use crate::tree::forest::{Forest, NodeId};
use log::debug;
use std::collections::HashMap;

/// Build a forest of feature trees from a finite record collection.
///
/// Two passes over an arena:
///
/// 1. Every feature is wrapped in one node per declared parent key: a
///    record with `Parent=a,b` becomes two nodes carrying equal clones of
///    the feature, one per parent edge. Records with no key become root
///    candidates. Declared `ID`s are indexed as nodes are created; when an
///    ID repeats, the last node wins.
/// 2. Each (node, parent key) pair is resolved against the index in
///    creation order, so children hang off a parent in the order their
///    records appeared. Keys matching no known ID leave the node a root.
///
/// A record whose own ID equals one of its declared parent keys is never
/// linked to itself.
///
/// Malformed records must be filtered out at the parser stage; the
/// builder itself has no error path and never mutates its input features.
pub fn build_forest<I>(features: I) -> Forest
where
    I: IntoIterator<Item = Feature>,
{
    let mut forest = Forest::default();
    // (node, declared parent key) pairs awaiting linking, in creation order
    let mut pending: Vec<(NodeId, String)> = Vec::new();
    let mut id_index: HashMap<String, NodeId> = HashMap::new();

    for feature in features {
        let parent_keys = declared_parent_keys(&feature);
        if parent_keys.is_empty() {
            let node = forest.push(feature);
            index_id(&mut id_index, &forest, node);
        } else {
            for key in parent_keys {
                let node = forest.push(feature.clone());
                index_id(&mut id_index, &forest, node);
                pending.push((node, key));
            }
        }
    }

    for (node, key) in &pending {
        match id_index.get(key.as_str()) {
            // a node must not become its own child
            Some(parent) if parent != node => forest.attach(*node, *parent),
            Some(_) => debug!("record with ID '{}' names itself as parent, kept as a root", key),
            None => debug!("no record with ID '{}', child kept as a root", key),
        }
    }

    let roots: Vec<NodeId> = (0..forest.len())
        .map(NodeId)
        .filter(|&id| forest.parent(id).is_none())
        .collect();
    forest.set_roots(roots);

    forest
}

/// The parent keys a feature declares, directly or by convention.
///
/// The `Parent` attribute wins when present. Without one, the seqid
/// stands in as the implicit parent (the common convention for genes
/// whose container is the chromosome record), unless the feature's own
/// `ID` *is* its seqid, as for the chromosome records themselves.
fn declared_parent_keys(feature: &Feature) -> Vec<String> {
    let declared = feature.parent_ids();
    if !declared.is_empty() {
        return declared.into_iter().map(String::from).collect();
    }
    if feature.id() != Some(feature.seqid.as_str()) {
        vec![feature.seqid.clone()]
    } else {
        Vec::new()
    }
}

fn index_id(index: &mut HashMap<String, NodeId>, forest: &Forest, node: NodeId) {
    if let Some(id) = forest.feature(node).id() {
        if !id.is_empty() {
            index.insert(id.to_string(), node);
        }
    }
}
