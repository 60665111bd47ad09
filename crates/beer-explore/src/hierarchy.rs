//! Treemap nodes for the Ale → Type → Style drill-down chart.

use std::collections::BTreeMap;

use beer_model::{BeerRecord, HierarchyChart, HierarchyNode, PATH_SEPARATOR};

#[derive(Debug, Default, Clone, Copy)]
struct NodeStats {
    count: usize,
    abv_sum: f64,
    abv_count: usize,
}

impl NodeStats {
    fn add(&mut self, record: &BeerRecord) {
        self.count += 1;
        if let Some(abv) = record.alcohol_by_volume {
            self.abv_sum += abv;
            self.abv_count += 1;
        }
    }

    fn mean_abv(self) -> Option<f64> {
        (self.abv_count > 0).then(|| self.abv_sum / self.abv_count as f64)
    }
}

#[derive(Debug, Default)]
struct Branch {
    stats: NodeStats,
    children: BTreeMap<String, Branch>,
}

impl Branch {
    fn insert(&mut self, labels: &[&str], record: &BeerRecord) {
        self.stats.add(record);
        if let Some((first, rest)) = labels.split_first() {
            self.children
                .entry((*first).to_string())
                .or_default()
                .insert(rest, record);
        }
    }

    fn emit(&self, parent: &str, depth: usize, nodes: &mut Vec<HierarchyNode>) {
        for (label, child) in &self.children {
            let id = if parent.is_empty() {
                label.clone()
            } else {
                format!("{parent}{PATH_SEPARATOR}{label}")
            };
            nodes.push(HierarchyNode {
                id: id.clone(),
                label: label.clone(),
                parent: parent.to_string(),
                depth,
                count: child.stats.count,
                mean_abv: child.stats.mean_abv(),
            });
            child.emit(&id, depth + 1, nodes);
        }
    }
}

/// Builds the drill-down chart over `records`.
///
/// Nodes are listed depth-first with siblings in label order. Node ids are
/// the ids the chart reports back in click payloads.
pub fn build_hierarchy<'a>(
    records: impl IntoIterator<Item = &'a BeerRecord>,
    color_scale: &str,
) -> HierarchyChart {
    let mut root = Branch::default();
    for record in records {
        root.insert(
            &[
                record.ale.as_str(),
                record.beer_type.as_str(),
                record.style.as_str(),
            ],
            record,
        );
    }
    let mut nodes = Vec::new();
    root.emit("", 1, &mut nodes);
    HierarchyChart {
        color_scale: color_scale.to_string(),
        nodes,
    }
}
