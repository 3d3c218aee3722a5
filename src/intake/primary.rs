//! Primary asset selection

use super::classify::AssetType;
use super::project::ClassifiedAsset;
use super::rules::IntakeRules;

/// Flag exactly one asset of a group as primary and return its index.
///
/// Priority: first `MasterAudio`, then first file with an audio extension
/// of any type, then the first file. Every other asset is cleared.
pub fn select_primary(assets: &mut [ClassifiedAsset], rules: &IntakeRules) -> Option<usize> {
    let selected = assets
        .iter()
        .position(|a| a.asset_type == AssetType::MasterAudio)
        .or_else(|| assets.iter().position(|a| rules.is_audio_extension(&a.extension)))
        .or_else(|| (!assets.is_empty()).then_some(0));

    for (index, asset) in assets.iter_mut().enumerate() {
        asset.is_primary = selected == Some(index);
    }

    selected
}
