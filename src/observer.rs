use super::{Dom, NodeId, Viewport};

// Deterministic stand-in for viewport-intersection observation: a pending
// set of observed nodes, checked against the margin-adjusted viewport after
// every effective scroll change. A node that reports intersecting is removed
// from the set, so re-entering the viewport never notifies again.
#[derive(Debug)]
pub(crate) struct RevealObserver {
    threshold_permille: i64,
    bottom_margin: i64,
    pending: Vec<NodeId>,
}

impl RevealObserver {
    pub(crate) fn new(threshold_permille: i64, bottom_margin: i64) -> Self {
        Self {
            threshold_permille,
            bottom_margin,
            pending: Vec::new(),
        }
    }

    pub(crate) fn observe(&mut self, node: NodeId) {
        if !self.pending.contains(&node) {
            self.pending.push(node);
        }
    }

    pub(crate) fn take_intersecting(&mut self, dom: &Dom, viewport: Viewport) -> Vec<NodeId> {
        let lower = viewport.scroll_y + viewport.height - self.bottom_margin;
        let threshold = self.threshold_permille;
        let mut hits = Vec::new();
        self.pending.retain(|&node| {
            if intersects(dom, node, viewport.scroll_y, lower, threshold) {
                hits.push(node);
                false
            } else {
                true
            }
        });
        hits
    }
}

fn intersects(dom: &Dom, node: NodeId, upper: i64, lower: i64, threshold_permille: i64) -> bool {
    let Ok(top) = dom.offset_top(node) else {
        return false;
    };
    let height = dom.box_height(node);
    if height <= 0 {
        return top >= upper && top < lower;
    }
    let visible = (top + height).min(lower) - top.max(upper);
    visible > 0 && visible * 1000 >= threshold_permille * height
}
