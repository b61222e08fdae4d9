#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::geometry::Point;
use crate::shapes::{resolve_overlap, Geometry, OverlapResult, ShapeSnapshot};

use super::SceneCore;

pub(super) fn includes_point(scene: &SceneCore, id: u32, point: Point) -> bool {
    scene.shape(id).map(|s| s.includes_point(&point)).unwrap_or(false)
}

pub(super) fn shapes_at(scene: &SceneCore, point: Point) -> Vec<u32> {
    scene
        .entries
        .iter()
        .rev()
        .filter(|e| e.shape.includes_point(&point))
        .map(|e| e.id)
        .collect()
}

pub(super) fn overlap(scene: &mut SceneCore, a: u32, b: u32) -> Option<OverlapResult> {
    let result = {
        let sa = scene.shape(a)?;
        let sb = scene.shape(b)?;
        sa.overlap(sb)
    };

    match &result {
        OverlapResult::Unsupported(pair) => {
            scene.debugger.log(6, || format!("overlap #{} x #{}: {:?} not implemented", a, b, pair));
        }
        OverlapResult::Overlapping(points) if scene.highlight_intersections => {
            scene.highlights.extend_from_slice(points);
        }
        _ => {}
    }
    Some(result)
}

pub(super) fn overlapping_pairs(scene: &SceneCore) -> Vec<(u32, u32)> {
    let live: Vec<(u32, Geometry)> = scene
        .entries
        .iter()
        .map(|e| (e.id, e.shape.live_geometry()))
        .collect();
    let live: &[(u32, Geometry)] = &live;
    let n = live.len();

    let pairs_from = move |i: usize| {
        let (id_a, ref ga) = live[i];
        live[i + 1..]
            .iter()
            .filter(move |(_, gb)| resolve_overlap(ga, gb).overlaps())
            .map(move |(id_b, _)| (id_a, *id_b))
    };

    #[cfg(feature = "parallel")]
    let pairs: Vec<(u32, u32)> = (0..n).into_par_iter().flat_map_iter(pairs_from).collect();

    #[cfg(not(feature = "parallel"))]
    let pairs: Vec<(u32, u32)> = (0..n).flat_map(pairs_from).collect();

    pairs
}

pub(super) fn scene_json(scene: &SceneCore) -> String {
    let snapshots: Vec<ShapeSnapshot> = scene.entries.iter().map(|e| e.shape.snapshot(e.id)).collect();
    serde_json::to_string(&snapshots).unwrap_or_else(|_| "[]".to_string())
}
