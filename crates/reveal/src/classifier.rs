use mapreveal_common::{BlockCoord, FeatureKind};
use mapreveal_kernel::FeatureAccess;

/// Whether the block at `coord` can be exposed without opening a path to the
/// underworld.
///
/// Unreadable feature data counts as unsafe. Any local feature other than
/// [`FeatureKind::Other`] (tubes, temples) is unsafe, as is an underworld
/// global feature.
pub fn is_safe<F: FeatureAccess + ?Sized>(features: &F, coord: BlockCoord) -> bool {
    let Some(found) = features.read_features(coord) else {
        return false;
    };
    if found.local.is_some_and(|kind| kind != FeatureKind::Other) {
        return false;
    }
    if found.global == Some(FeatureKind::Underworld) {
        return false;
    }
    true
}
